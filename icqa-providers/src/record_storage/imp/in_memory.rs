use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::record_storage::{RecordStorage, RecordStorageError};

pub struct InMemoryStorage {
    storage: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStorage {
    pub fn new(storage: HashMap<String, String>) -> Self {
        Self {
            storage: Arc::new(Mutex::new(storage)),
        }
    }
}

impl RecordStorage for InMemoryStorage {
    fn get_value_by_key(&self, key: &str) -> Result<Option<String>, RecordStorageError> {
        let hash_map_handle = self
            .storage
            .lock()
            .map_err(|e| RecordStorageError::GetError(e.to_string()))?;

        Ok(hash_map_handle.get(key).map(|value| value.to_owned()))
    }

    fn insert_value(&self, key: &str, value: &str) -> Result<(), RecordStorageError> {
        let mut hash_map_handle = self
            .storage
            .lock()
            .map_err(|e| RecordStorageError::InsertError(e.to_string()))?;

        hash_map_handle.insert(key.to_owned(), value.to_owned());

        Ok(())
    }

    fn remove_value(&self, key: &str) -> Result<(), RecordStorageError> {
        let mut hash_map_handle = self
            .storage
            .lock()
            .map_err(|e| RecordStorageError::RemoveError(e.to_string()))?;

        hash_map_handle.remove(key);

        Ok(())
    }
}
