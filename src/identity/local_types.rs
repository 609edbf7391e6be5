//! Local type identities
//!
//! Local types share the struct routine under their own namespace. Ordinals
//! naming an enumeration or a materialized structure are out of scope here:
//! those identities are owned elsewhere.

use crate::error::IdentityError;
use crate::identity::{EntityIdentity, KindDescriptor};
use crate::introspection::{StructState, TypeSystem};
use crate::store::{BlobStore, TagStore};
use crate::types::{ObjectId, Tag};
use crate::version::{AttributeVisitor, VersionRecord};

pub struct LocalTypeIdentity<'a, S> {
    entity: EntityIdentity<'a, S>,
}

impl<'a, S: BlobStore> LocalTypeIdentity<'a, S> {
    pub fn new(tags: &'a TagStore<S>) -> Self {
        Self {
            entity: EntityIdentity::new(tags, KindDescriptor::LOCAL_TYPE),
        }
    }

    pub fn identity_for(&self, name: &str) -> Result<(Tag, ObjectId), IdentityError> {
        self.entity.identity_for(name)
    }

    pub fn id(&self, name: &str) -> Result<ObjectId, IdentityError> {
        self.entity.id(name)
    }

    pub fn tag(&self, name: &str) -> Result<Tag, IdentityError> {
        self.entity.tag(name)
    }

    /// Rename, writing the current tag back at `old` before the migration.
    pub fn rename(&self, old: &str, new: &str) -> Result<(), IdentityError> {
        if old.is_empty() {
            return Ok(());
        }
        let tag = self.tag(old)?;
        self.rename_with_tag(old, &tag, new)
    }

    /// Rename, adopting `tag` at `old` before the migration.
    pub fn rename_with_tag(&self, old: &str, tag: &Tag, new: &str) -> Result<(), IdentityError> {
        if old.is_empty() {
            return Ok(());
        }
        self.entity.set_tag(old, tag)?;
        self.entity.rename(old, new)
    }

    pub fn remove(&self, name: &str) -> Result<Tag, IdentityError> {
        self.entity.remove(name)
    }

    pub fn set_tag(&self, name: &str, tag: &Tag) -> Result<(), IdentityError> {
        self.entity.set_tag(name, tag)
    }

    pub fn export_tag(&self, sink: &mut dyn AttributeVisitor, name: &str) -> Result<Tag, IdentityError> {
        self.entity.export_tag(sink, name)
    }

    pub fn import_tag(&self, record: &dyn VersionRecord) -> Result<Tag, IdentityError> {
        self.entity.import_tag(record)
    }

    /// Whether the local type at `ordinal` gets its identity from this namespace.
    pub fn identify(&self, types: &dyn TypeSystem, ordinal: u32) -> bool {
        resolve_identifiable(types, ordinal).is_some()
    }

    /// Tag and id of the local type at `ordinal`, `None` when not identifiable.
    pub fn identity_for_ordinal(
        &self,
        types: &dyn TypeSystem,
        ordinal: u32,
    ) -> Result<Option<(Tag, ObjectId)>, IdentityError> {
        match resolve_identifiable(types, ordinal) {
            Some(name) => Ok(Some(self.identity_for(&name)?)),
            None => Ok(None),
        }
    }

    /// Id of the local type at `ordinal`, or [`ObjectId::NONE`].
    pub fn hash_ordinal(&self, types: &dyn TypeSystem, ordinal: u32) -> Result<ObjectId, IdentityError> {
        Ok(self
            .identity_for_ordinal(types, ordinal)?
            .map(|(_, id)| id)
            .unwrap_or(ObjectId::NONE))
    }
}

/// Name of the local type at `ordinal` if it is neither an enum nor a materialized struct.
fn resolve_identifiable(types: &dyn TypeSystem, ordinal: u32) -> Option<String> {
    let name = types.local_type_name(ordinal)?;
    if types.has_enum(&name) {
        return None;
    }
    match types.find_struct(&name) {
        Some(StructState::Materialized) => None,
        Some(StructState::Ghost) | None => Some(name),
    }
}
