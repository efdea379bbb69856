//! `struct`s and `enum`s describing certificate records and their mutations.

use serde::{Deserialize, Serialize};
use strum::Display;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::macros::{impl_display, impl_from};
use crate::date_format;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CertificateId(Uuid);
impl_display!(CertificateId);
impl_from!(CertificateId; Uuid);

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateStatus {
    #[default]
    #[strum(serialize = "ACTIVE")]
    Active,
    #[strum(serialize = "EXPIRED")]
    Expired,
    #[strum(serialize = "REVOKED")]
    Revoked,
}

/// A stored certificate record.
///
/// Dates carry the canonical display representation (`MMM DD, YYYY`); an empty
/// `expiration_date` means the qualification does not expire. `photo_url` holds
/// either an external reference or an inline data URL, empty when no photo was
/// provided. The serialized field names match the persisted collection blob.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: CertificateId,
    pub icqa_number: String,
    pub name: String,
    pub dob: String,
    pub ncqa_number: String,
    pub qualification_type: String,
    pub issue_date: String,
    pub edu_dept: String,
    pub issuing_office: String,
    pub issuing_country: String,
    pub expiration_date: String,
    pub photo_url: String,
    pub status: CertificateStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Certificate {
    pub fn from_data(id: CertificateId, data: CertificateData, now: OffsetDateTime) -> Self {
        Self {
            id,
            icqa_number: data.icqa_number,
            name: data.name,
            dob: data.dob,
            ncqa_number: data.ncqa_number,
            qualification_type: data.qualification_type,
            issue_date: data.issue_date,
            edu_dept: data.edu_dept,
            issuing_office: data.issuing_office,
            issuing_country: data.issuing_country,
            expiration_date: data.expiration_date,
            photo_url: data.photo_url,
            status: data.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// A certificate is effectively expired when its stored status says so, or
    /// when its expiration date lies strictly before the reference day. An
    /// unparseable expiration date counts as not expired.
    pub fn is_effectively_expired_on(&self, today: Date) -> bool {
        matches!(
            self.status,
            CertificateStatus::Expired | CertificateStatus::Revoked
        ) || date_format::is_expired_on(&self.expiration_date, today)
    }
}

/// Input for creating a certificate; the store assigns id and timestamps.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CertificateData {
    pub icqa_number: String,
    pub name: String,
    pub dob: String,
    pub ncqa_number: String,
    pub qualification_type: String,
    pub issue_date: String,
    pub edu_dept: String,
    pub issuing_office: String,
    pub issuing_country: String,
    pub expiration_date: String,
    pub photo_url: String,
    pub status: CertificateStatus,
}

/// Typed partial update; only the fields listed here can be patched.
#[derive(Debug, Clone, Default)]
pub struct CertificatePatch {
    pub icqa_number: Option<String>,
    pub name: Option<String>,
    pub dob: Option<String>,
    pub ncqa_number: Option<String>,
    pub qualification_type: Option<String>,
    pub issue_date: Option<String>,
    pub edu_dept: Option<String>,
    pub issuing_office: Option<String>,
    pub issuing_country: Option<String>,
    pub expiration_date: Option<String>,
    pub photo_url: Option<String>,
    pub status: Option<CertificateStatus>,
}

impl CertificatePatch {
    /// Merges the present fields over an existing record. Timestamps are the
    /// store's concern and stay untouched here.
    pub fn apply_to(self, certificate: &mut Certificate) {
        if let Some(value) = self.icqa_number {
            certificate.icqa_number = value;
        }
        if let Some(value) = self.name {
            certificate.name = value;
        }
        if let Some(value) = self.dob {
            certificate.dob = value;
        }
        if let Some(value) = self.ncqa_number {
            certificate.ncqa_number = value;
        }
        if let Some(value) = self.qualification_type {
            certificate.qualification_type = value;
        }
        if let Some(value) = self.issue_date {
            certificate.issue_date = value;
        }
        if let Some(value) = self.edu_dept {
            certificate.edu_dept = value;
        }
        if let Some(value) = self.issuing_office {
            certificate.issuing_office = value;
        }
        if let Some(value) = self.issuing_country {
            certificate.issuing_country = value;
        }
        if let Some(value) = self.expiration_date {
            certificate.expiration_date = value;
        }
        if let Some(value) = self.photo_url {
            certificate.photo_url = value;
        }
        if let Some(value) = self.status {
            certificate.status = value;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CertificateFilter {
    /// Case-insensitive substring matched against name, ICQA number or
    /// qualification type. Empty or absent means no text filtering.
    pub query: Option<String>,
    pub status: StatusFilter,
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CertificateStatus),
}
