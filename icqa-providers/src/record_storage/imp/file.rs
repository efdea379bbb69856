use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::record_storage::{RecordStorage, RecordStorageError};

/// One file per key under a root directory, the local-storage analogue for
/// processes. Writes go straight to the keyed file; durability is immediate.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl RecordStorage for FileStorage {
    fn get_value_by_key(&self, key: &str) -> Result<Option<String>, RecordStorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(RecordStorageError::GetError(error.to_string())),
        }
    }

    fn insert_value(&self, key: &str, value: &str) -> Result<(), RecordStorageError> {
        ensure_root(&self.root).map_err(|e| RecordStorageError::InsertError(e.to_string()))?;
        fs::write(self.path_for(key), value)
            .map_err(|e| RecordStorageError::InsertError(e.to_string()))?;

        tracing::debug!(key, "record blob written");
        Ok(())
    }

    fn remove_value(&self, key: &str) -> Result<(), RecordStorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(RecordStorageError::RemoveError(error.to_string())),
        }
    }
}

fn ensure_root(root: &Path) -> io::Result<()> {
    if root.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(root)
}
