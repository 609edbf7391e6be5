//! Sled-backed blob store.

use crate::error::StorageError;
use crate::store::{BlobHandle, BlobStore};
use std::path::Path;

/// [`BlobStore`] over a single sled tree
#[derive(Clone)]
pub struct SledBlobStore {
    tree: sled::Tree,
}

impl SledBlobStore {
    /// Open (or create) a database at `path` and use the named tree.
    pub fn open(path: &Path, tree: &str) -> Result<Self, StorageError> {
        std::fs::create_dir_all(path)?;
        let db = sled::open(path)?;
        Self::from_db(&db, tree)
    }

    pub fn from_db(db: &sled::Db, tree: &str) -> Result<Self, StorageError> {
        Ok(Self {
            tree: db.open_tree(tree)?,
        })
    }

    pub fn from_tree(tree: sled::Tree) -> Self {
        Self { tree }
    }

    pub fn flush(&self) -> Result<(), StorageError> {
        self.tree.flush()?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    fn missing(handle: &BlobHandle) -> StorageError {
        StorageError::MissingHandle(String::from_utf8_lossy(handle.key()).into_owned())
    }
}

impl BlobStore for SledBlobStore {
    fn create_or_open(&self, key: &[u8]) -> Result<(BlobHandle, bool), StorageError> {
        let empty: &[u8] = &[];
        let created = self
            .tree
            .compare_and_swap(key, None::<&[u8]>, Some(empty))?
            .is_ok();
        Ok((BlobHandle::new(key), created))
    }

    fn lookup(&self, key: &[u8]) -> Result<Option<BlobHandle>, StorageError> {
        Ok(self
            .tree
            .contains_key(key)?
            .then(|| BlobHandle::new(key)))
    }

    fn read(&self, handle: &BlobHandle) -> Result<Vec<u8>, StorageError> {
        self.tree
            .get(handle.key())?
            .map(|v| v.to_vec())
            .ok_or_else(|| Self::missing(handle))
    }

    fn write(&self, handle: &BlobHandle, value: &[u8]) -> Result<(), StorageError> {
        self.tree.insert(handle.key(), value)?;
        Ok(())
    }

    fn rename_key(&self, handle: &mut BlobHandle, new_key: &[u8]) -> Result<(), StorageError> {
        let value = self
            .tree
            .get(handle.key())?
            .ok_or_else(|| Self::missing(handle))?;

        let mut batch = sled::Batch::default();
        batch.insert(new_key, value);
        batch.remove(handle.key());
        self.tree.apply_batch(batch)?;

        *handle = BlobHandle::new(new_key);
        Ok(())
    }

    fn delete(&self, handle: BlobHandle) -> Result<(), StorageError> {
        self.tree.remove(handle.key())?;
        Ok(())
    }
}
