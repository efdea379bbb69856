//! The certificate record store: create, read, update, delete and search over
//! the persisted collection, plus document rendering entry points.
//!
//! The whole collection is serialized as one ordered JSON array under a single
//! storage key; every operation reads, modifies and rewrites that blob. The
//! runtime is single-threaded from the store's perspective, so the
//! read-modify-write needs no locking.

use std::sync::Arc;

use icqa_providers::{
    common_models::certificate::{
        Certificate, CertificateData, CertificateFilter, CertificateId, CertificatePatch,
        StatusFilter,
    },
    layout::{self, Canvas, LayoutConfig},
    record_storage::RecordStorage,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::model::LayoutPreset;
use crate::service::error::CertificateServiceError;

pub struct CertificateService {
    storage: Arc<dyn RecordStorage>,
    collection_key: String,
    verifying_body: String,
}

impl CertificateService {
    pub fn new(
        storage: Arc<dyn RecordStorage>,
        collection_key: String,
        verifying_body: String,
    ) -> Self {
        Self {
            storage,
            collection_key,
            verifying_body,
        }
    }

    /// Returns the collection in natural order (most-recently-created first),
    /// narrowed by the optional filter.
    pub fn get_all(
        &self,
        filter: Option<&CertificateFilter>,
    ) -> Result<Vec<Certificate>, CertificateServiceError> {
        let mut certificates = self.load_collection()?;

        if let Some(filter) = filter {
            if let Some(query) = filter.query.as_deref().filter(|query| !query.is_empty()) {
                let query = query.to_lowercase();
                certificates.retain(|certificate| {
                    certificate.name.to_lowercase().contains(&query)
                        || certificate.icqa_number.to_lowercase().contains(&query)
                        || certificate.qualification_type.to_lowercase().contains(&query)
                });
            }

            if let StatusFilter::Only(status) = &filter.status {
                certificates.retain(|certificate| certificate.status == *status);
            }
        }

        Ok(certificates)
    }

    pub fn get_by_id(
        &self,
        id: &CertificateId,
    ) -> Result<Option<Certificate>, CertificateServiceError> {
        Ok(self
            .load_collection()?
            .into_iter()
            .find(|certificate| certificate.id == *id))
    }

    /// Public lookup key: ICQA number plus holder name, trimmed and
    /// case-folded. Returns the first structural match.
    pub fn get_by_number_and_name(
        &self,
        icqa_number: &str,
        name: &str,
    ) -> Result<Option<Certificate>, CertificateServiceError> {
        let icqa_number = icqa_number.trim().to_uppercase();
        let name = name.trim().to_uppercase();

        Ok(self.load_collection()?.into_iter().find(|certificate| {
            certificate.icqa_number.trim().to_uppercase() == icqa_number
                && certificate.name.trim().to_uppercase() == name
        }))
    }

    /// Validates, assigns id and timestamps, prepends to the collection and
    /// persists. Validation failure leaves the store untouched.
    pub fn create(&self, data: CertificateData) -> Result<Certificate, CertificateServiceError> {
        validate(&data)?;

        let mut certificates = self.load_collection()?;
        let certificate =
            Certificate::from_data(Uuid::new_v4().into(), data, OffsetDateTime::now_utc());

        certificates.insert(0, certificate.clone());
        self.store_collection(&certificates)?;

        tracing::debug!(id = %certificate.id, icqa_number = %certificate.icqa_number, "certificate created");
        Ok(certificate)
    }

    /// Merges the patch over the existing record and bumps `updatedAt`.
    /// Signals `NotFound` for an unknown id, leaving the store unmodified.
    pub fn update(
        &self,
        id: &CertificateId,
        patch: CertificatePatch,
    ) -> Result<Certificate, CertificateServiceError> {
        let mut certificates = self.load_collection()?;

        let existing = certificates
            .iter_mut()
            .find(|certificate| certificate.id == *id)
            .ok_or(CertificateServiceError::NotFound(*id))?;

        patch.apply_to(existing);
        existing.updated_at = OffsetDateTime::now_utc();
        let updated = existing.clone();

        self.store_collection(&certificates)?;

        tracing::debug!(id = %updated.id, "certificate updated");
        Ok(updated)
    }

    /// Removes the record if present; a missing id is a silent no-op.
    pub fn delete(&self, id: &CertificateId) -> Result<(), CertificateServiceError> {
        let mut certificates = self.load_collection()?;
        let before = certificates.len();

        certificates.retain(|certificate| certificate.id != *id);
        if certificates.len() == before {
            return Ok(());
        }

        self.store_collection(&certificates)?;

        tracing::debug!(%id, "certificate deleted");
        Ok(())
    }

    /// First-run population: writes `records` (in the given order) only when
    /// the collection blob is absent. Returns the number of records seeded.
    pub fn seed_if_missing(
        &self,
        records: Vec<CertificateData>,
    ) -> Result<usize, CertificateServiceError> {
        if self
            .storage
            .get_value_by_key(&self.collection_key)?
            .is_some()
        {
            return Ok(0);
        }

        let now = OffsetDateTime::now_utc();
        let certificates: Vec<Certificate> = records
            .into_iter()
            .map(|data| Certificate::from_data(Uuid::new_v4().into(), data, now))
            .collect();

        self.store_collection(&certificates)?;

        tracing::info!(count = certificates.len(), "certificate collection seeded");
        Ok(certificates.len())
    }

    /// Renders the certificate document at full resolution; preview surfaces
    /// apply [`Canvas::scaled`], print surfaces use the canvas as-is.
    pub fn render_document(
        &self,
        id: &CertificateId,
        preset: &LayoutPreset,
    ) -> Result<Canvas, CertificateServiceError> {
        let certificate = self
            .get_by_id(id)?
            .ok_or(CertificateServiceError::NotFound(*id))?;

        let config = LayoutConfig::preset(&preset.to_string(), &self.verifying_body)
            .ok_or(CertificateServiceError::MissingPreset(preset.to_string()))?;

        Ok(layout::render(&certificate, &config))
    }

    fn load_collection(&self) -> Result<Vec<Certificate>, CertificateServiceError> {
        match self.storage.get_value_by_key(&self.collection_key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn store_collection(&self, certificates: &[Certificate]) -> Result<(), CertificateServiceError> {
        let raw = serde_json::to_string(certificates)?;
        self.storage.insert_value(&self.collection_key, &raw)?;
        Ok(())
    }
}

fn validate(data: &CertificateData) -> Result<(), CertificateServiceError> {
    if data.icqa_number.trim().is_empty() {
        return Err(CertificateServiceError::Validation(
            "icqaNumber is required".to_string(),
        ));
    }
    if data.name.trim().is_empty() {
        return Err(CertificateServiceError::Validation(
            "name is required".to_string(),
        ));
    }
    Ok(())
}
