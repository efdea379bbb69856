use icqa_providers::{
    common_models::certificate::CertificateId, record_storage::RecordStorageError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateServiceError {
    #[error("Certificate not found: `{0}`")]
    NotFound(CertificateId),
    #[error("Validation error: `{0}`")]
    Validation(String),
    #[error("Missing layout preset `{0}`")]
    MissingPreset(String),
    #[error("Record storage error: `{0}`")]
    Storage(#[from] RecordStorageError),
    #[error("JSON error: `{0}`")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SessionServiceError {
    #[error("Record storage error: `{0}`")]
    Storage(#[from] RecordStorageError),
    #[error("JSON error: `{0}`")]
    Json(#[from] serde_json::Error),
}
