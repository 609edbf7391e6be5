//! Structure identities, addressed by name or by database struct id.

use crate::error::IdentityError;
use crate::identity::{EntityIdentity, KindDescriptor};
use crate::introspection::TypeSystem;
use crate::store::{BlobStore, TagStore};
use crate::types::{ObjectId, Tag};
use crate::version::{AttributeVisitor, VersionRecord};
use tracing::debug;

pub struct StructIdentity<'a, S> {
    entity: EntityIdentity<'a, S>,
}

impl<'a, S: BlobStore> StructIdentity<'a, S> {
    pub fn new(tags: &'a TagStore<S>) -> Self {
        Self {
            entity: EntityIdentity::new(tags, KindDescriptor::STRUCT),
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

    pub fn rename(&self, old: &str, new: &str) -> Result<(), IdentityError> {
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

    /// Identity of the structure with database id `struct_id`.
    ///
    /// `None` when the id does not resolve to a name.
    pub fn identity_for_struct_id(
        &self,
        types: &dyn TypeSystem,
        struct_id: u64,
    ) -> Result<Option<(Tag, ObjectId)>, IdentityError> {
        match types.struct_name(struct_id) {
            Some(name) => Ok(Some(self.identity_for(&name)?)),
            None => {
                debug!(struct_id, "Struct id does not resolve to a name");
                Ok(None)
            }
        }
    }

    /// Id of the structure with database id `struct_id`, or [`ObjectId::NONE`].
    pub fn hash_struct_id(&self, types: &dyn TypeSystem, struct_id: u64) -> Result<ObjectId, IdentityError> {
        Ok(self
            .identity_for_struct_id(types, struct_id)?
            .map(|(_, id)| id)
            .unwrap_or(ObjectId::NONE))
    }

    /// Tag of the structure with database id `struct_id`, or the empty tag.
    pub fn tag_for_struct_id(&self, types: &dyn TypeSystem, struct_id: u64) -> Result<Tag, IdentityError> {
        Ok(self
            .identity_for_struct_id(types, struct_id)?
            .map(|(tag, _)| tag)
            .unwrap_or(Tag::EMPTY))
    }

    /// Returns whether the id resolved; nothing is written otherwise.
    pub fn set_tag_for_struct_id(
        &self,
        types: &dyn TypeSystem,
        struct_id: u64,
        tag: &Tag,
    ) -> Result<bool, IdentityError> {
        match types.struct_name(struct_id) {
            Some(name) => {
                self.set_tag(&name, tag)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn remove_struct_id(&self, types: &dyn TypeSystem, struct_id: u64) -> Result<Tag, IdentityError> {
        match types.struct_name(struct_id) {
            Some(name) => self.remove(&name),
            None => Ok(Tag::EMPTY),
        }
    }
}
