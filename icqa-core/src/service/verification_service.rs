//! Public verification gate.
//!
//! A lookup by ICQA number and holder name succeeds only when the matched
//! certificate is not effectively expired: the stored status AND the
//! expiration date both have to clear, not just the status field.

use std::sync::Arc;

use icqa_providers::common_models::certificate::Certificate;
use time::{Date, OffsetDateTime};

use crate::service::certificate_service::CertificateService;
use crate::service::error::CertificateServiceError;

pub struct VerificationService {
    certificates: Arc<CertificateService>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VerificationOutcome {
    /// The certificate is valid and may be shown to the requester.
    Verified(Certificate),
    /// A record matched, but it is revoked, expired or past its expiration
    /// date. The record is returned for staff-facing diagnostics only.
    Lapsed(Certificate),
    NotFound,
}

impl VerificationService {
    pub fn new(certificates: Arc<CertificateService>) -> Self {
        Self { certificates }
    }

    pub fn verify(
        &self,
        icqa_number: &str,
        name: &str,
    ) -> Result<VerificationOutcome, CertificateServiceError> {
        self.verify_on(icqa_number, name, OffsetDateTime::now_utc().date())
    }

    /// Verification against an explicit reference day.
    pub fn verify_on(
        &self,
        icqa_number: &str,
        name: &str,
        today: Date,
    ) -> Result<VerificationOutcome, CertificateServiceError> {
        let Some(certificate) = self
            .certificates
            .get_by_number_and_name(icqa_number, name)?
        else {
            return Ok(VerificationOutcome::NotFound);
        };

        if certificate.is_effectively_expired_on(today) {
            tracing::debug!(id = %certificate.id, "verification rejected, certificate lapsed");
            return Ok(VerificationOutcome::Lapsed(certificate));
        }

        Ok(VerificationOutcome::Verified(certificate))
    }
}
