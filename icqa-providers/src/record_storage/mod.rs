//! Keyed text-blob storage backing the registry.
//!
//! The whole certificate collection lives under one key and the session
//! identity under another; callers read, modify and rewrite a blob per
//! operation. Execution is single-threaded from the store's perspective, so
//! implementations provide no cross-process coordination: two independent
//! processes sharing a [`imp::file::FileStorage`] directory race last-write-wins.

use thiserror::Error;

pub mod imp;

#[derive(Debug, Error)]
pub enum RecordStorageError {
    #[error("Get by key error: `{0}`")]
    GetError(String),
    #[error("Insert error: `{0}`")]
    InsertError(String),
    #[error("Remove error: `{0}`")]
    RemoveError(String),
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait RecordStorage: Send + Sync {
    fn get_value_by_key(&self, key: &str) -> Result<Option<String>, RecordStorageError>;

    /// Inserts or replaces the value under `key`; immediately durable.
    fn insert_value(&self, key: &str, value: &str) -> Result<(), RecordStorageError>;

    /// Removes the value under `key`; absent keys are not an error.
    fn remove_value(&self, key: &str) -> Result<(), RecordStorageError>;
}
