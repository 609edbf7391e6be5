//! Blob Store
//!
//! Keyed blob persistence that tag rows live in. The identity layer only
//! needs create-or-open, read, write, key rename and delete; durability and
//! atomicity belong to the backend.

pub mod memory;
pub mod persistence;
pub mod tags;

use crate::error::StorageError;

pub use memory::MemoryBlobStore;
pub use persistence::SledBlobStore;
pub use tags::TagStore;

/// Handle to an open row, addressed by its current key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobHandle {
    key: Vec<u8>,
}

impl BlobHandle {
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }
}

/// Keyed blob persistence primitive
pub trait BlobStore {
    /// Open the row at `key`, creating an empty one if absent.
    ///
    /// Returns the handle and whether the row was created by this call.
    fn create_or_open(&self, key: &[u8]) -> Result<(BlobHandle, bool), StorageError>;

    /// Open the row at `key` without creating it.
    fn lookup(&self, key: &[u8]) -> Result<Option<BlobHandle>, StorageError>;

    fn read(&self, handle: &BlobHandle) -> Result<Vec<u8>, StorageError>;

    fn write(&self, handle: &BlobHandle, value: &[u8]) -> Result<(), StorageError>;

    /// Move the row to `new_key`, keeping its value. Replaces any row already at `new_key`.
    fn rename_key(&self, handle: &mut BlobHandle, new_key: &[u8]) -> Result<(), StorageError>;

    fn delete(&self, handle: BlobHandle) -> Result<(), StorageError>;
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn create_or_open(&self, key: &[u8]) -> Result<(BlobHandle, bool), StorageError> {
        (**self).create_or_open(key)
    }

    fn lookup(&self, key: &[u8]) -> Result<Option<BlobHandle>, StorageError> {
        (**self).lookup(key)
    }

    fn read(&self, handle: &BlobHandle) -> Result<Vec<u8>, StorageError> {
        (**self).read(handle)
    }

    fn write(&self, handle: &BlobHandle, value: &[u8]) -> Result<(), StorageError> {
        (**self).write(handle, value)
    }

    fn rename_key(&self, handle: &mut BlobHandle, new_key: &[u8]) -> Result<(), StorageError> {
        (**self).rename_key(handle, new_key)
    }

    fn delete(&self, handle: BlobHandle) -> Result<(), StorageError> {
        (**self).delete(handle)
    }
}
