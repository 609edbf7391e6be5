//! Tag Store
//!
//! One random tag per (namespace, name). Rows are created lazily on first
//! identity request, migrated on rename, and deleted on remove.

use crate::config::StorageConfig;
use crate::error::{IdentityError, StorageError};
use crate::store::{BlobHandle, BlobStore, SledBlobStore};
use crate::types::{Tag, TagNamespace};
use std::path::Path;
use tracing::{debug, warn};

/// Row key prefix for a namespace. Prefixes are distinct so equal names never collide.
pub fn namespace_prefix(namespace: TagNamespace) -> &'static str {
    match namespace {
        TagNamespace::Struct => "$strucid.struc.",
        TagNamespace::LocalType => "$strucid.local.",
    }
}

/// Full row key for `name` in `namespace`.
pub fn row_key(namespace: TagNamespace, name: &str) -> Vec<u8> {
    let prefix = namespace_prefix(namespace);
    let mut key = Vec::with_capacity(prefix.len() + name.len());
    key.extend_from_slice(prefix.as_bytes());
    key.extend_from_slice(name.as_bytes());
    key
}

/// Persistent (namespace, name) -> Tag association
pub struct TagStore<S> {
    blobs: S,
}

impl<S: BlobStore> TagStore<S> {
    pub fn new(blobs: S) -> Self {
        Self { blobs }
    }

    /// Underlying blob store
    pub fn blobs(&self) -> &S {
        &self.blobs
    }

    /// Read the tag for `name` without creating a row.
    pub fn get(&self, namespace: TagNamespace, name: &str) -> Result<Option<Tag>, StorageError> {
        match self.blobs.lookup(&row_key(namespace, name))? {
            Some(handle) => Ok(Some(Tag::from_bytes(&self.blobs.read(&handle)?))),
            None => Ok(None),
        }
    }

    /// Return the tag for `name`, generating and persisting a fresh one if absent.
    pub fn get_or_create(&self, namespace: TagNamespace, name: &str) -> Result<Tag, StorageError> {
        Ok(self.open_row(namespace, name)?.1)
    }

    /// Unconditionally set the tag for `name`.
    ///
    /// Writing the empty tag drops the row, so the next identity request
    /// generates a fresh tag.
    pub fn write(&self, namespace: TagNamespace, name: &str, tag: &Tag) -> Result<(), StorageError> {
        if tag.is_empty() {
            self.remove(namespace, name)?;
            return Ok(());
        }
        let (handle, _) = self.blobs.create_or_open(&row_key(namespace, name))?;
        self.blobs.write(&handle, tag.as_bytes())?;
        debug!(?namespace, name, %tag, "Tag written");
        Ok(())
    }

    /// Migrate the row for `old` to `new`, keeping its tag bytes.
    ///
    /// A row is fabricated for `old` first if none exists.
    pub fn rename(&self, namespace: TagNamespace, old: &str, new: &str) -> Result<(), StorageError> {
        let (mut handle, tag) = self.open_row(namespace, old)?;
        if old == new {
            return Ok(());
        }
        let new_key = row_key(namespace, new);
        if self.blobs.lookup(&new_key)?.is_some() {
            warn!(?namespace, old, new, "Rename target already has a tag, replacing it");
        }
        self.blobs.rename_key(&mut handle, &new_key)?;
        debug!(?namespace, old, new, %tag, "Tag renamed");
        Ok(())
    }

    /// Delete the row for `name`, returning the tag it held (empty if none).
    pub fn remove(&self, namespace: TagNamespace, name: &str) -> Result<Tag, StorageError> {
        let Some(handle) = self.blobs.lookup(&row_key(namespace, name))? else {
            return Ok(Tag::EMPTY);
        };
        let tag = Tag::from_bytes(&self.blobs.read(&handle)?);
        self.blobs.delete(handle)?;
        debug!(?namespace, name, %tag, "Tag removed");
        Ok(tag)
    }

    fn open_row(&self, namespace: TagNamespace, name: &str) -> Result<(BlobHandle, Tag), StorageError> {
        let (handle, created) = self.blobs.create_or_open(&row_key(namespace, name))?;
        if !created {
            let tag = Tag::from_bytes(&self.blobs.read(&handle)?);
            if !tag.is_empty() {
                return Ok((handle, tag));
            }
        }

        let tag = Tag::random();
        self.blobs.write(&handle, tag.as_bytes())?;
        debug!(?namespace, name, %tag, "Tag created");
        Ok((handle, tag))
    }
}

impl TagStore<SledBlobStore> {
    /// Open the sled-backed tag store described by `config`.
    pub fn open(config: &StorageConfig, workspace_root: &Path) -> Result<Self, IdentityError> {
        let path = config.resolve_path(workspace_root)?;
        let blobs = SledBlobStore::open(&path, &config.tree)?;
        Ok(Self::new(blobs))
    }
}
