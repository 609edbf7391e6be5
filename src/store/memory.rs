//! In-memory blob store for tests and ephemeral sessions.

use crate::error::StorageError;
use crate::store::{BlobHandle, BlobStore};
use parking_lot::RwLock;
use std::collections::HashMap;

/// HashMap-backed [`BlobStore`]
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    rows: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently stored
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        self.rows.read().contains_key(key)
    }
}

impl BlobStore for MemoryBlobStore {
    fn create_or_open(&self, key: &[u8]) -> Result<(BlobHandle, bool), StorageError> {
        let mut rows = self.rows.write();
        let created = !rows.contains_key(key);
        if created {
            rows.insert(key.to_vec(), Vec::new());
        }
        Ok((BlobHandle::new(key), created))
    }

    fn lookup(&self, key: &[u8]) -> Result<Option<BlobHandle>, StorageError> {
        Ok(self
            .rows
            .read()
            .contains_key(key)
            .then(|| BlobHandle::new(key)))
    }

    fn read(&self, handle: &BlobHandle) -> Result<Vec<u8>, StorageError> {
        self.rows
            .read()
            .get(handle.key())
            .cloned()
            .ok_or_else(|| StorageError::MissingHandle(String::from_utf8_lossy(handle.key()).into_owned()))
    }

    fn write(&self, handle: &BlobHandle, value: &[u8]) -> Result<(), StorageError> {
        self.rows.write().insert(handle.key().to_vec(), value.to_vec());
        Ok(())
    }

    fn rename_key(&self, handle: &mut BlobHandle, new_key: &[u8]) -> Result<(), StorageError> {
        let mut rows = self.rows.write();
        let value = rows.remove(handle.key()).ok_or_else(|| {
            StorageError::MissingHandle(String::from_utf8_lossy(handle.key()).into_owned())
        })?;
        rows.insert(new_key.to_vec(), value);
        *handle = BlobHandle::new(new_key);
        Ok(())
    }

    fn delete(&self, handle: BlobHandle) -> Result<(), StorageError> {
        self.rows.write().remove(handle.key());
        Ok(())
    }
}
