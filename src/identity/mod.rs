//! Entity Identity
//!
//! Stable ids for named structures and local types. One routine serves both
//! kinds; a [`KindDescriptor`] selects the tag namespace and hash function.
//! Member ids are derived, never stored (see [`member`]).

pub mod local_types;
pub mod member;
pub mod structs;

use crate::config::IdentityConfig;
use crate::error::IdentityError;
use crate::hasher;
use crate::store::{BlobStore, SledBlobStore, TagStore};
use crate::types::{ObjectId, Tag, TagNamespace};
use crate::version::{find_tag, AttributeVisitor, VersionRecord, TAG_ATTRIBUTE};
use std::path::Path;
use tracing::{debug, info, warn};

pub use local_types::LocalTypeIdentity;
pub use structs::StructIdentity;

/// Namespace and hash function of a tagged entity kind
#[derive(Clone, Copy)]
pub struct KindDescriptor {
    pub namespace: TagNamespace,
    pub hash: fn(&[u8]) -> ObjectId,
}

impl KindDescriptor {
    pub const STRUCT: KindDescriptor = KindDescriptor {
        namespace: TagNamespace::Struct,
        hash: hasher::hash_struct,
    };

    pub const LOCAL_TYPE: KindDescriptor = KindDescriptor {
        namespace: TagNamespace::LocalType,
        hash: hasher::hash_local_type,
    };

    pub fn of(namespace: TagNamespace) -> Self {
        match namespace {
            TagNamespace::Struct => Self::STRUCT,
            TagNamespace::LocalType => Self::LOCAL_TYPE,
        }
    }

    pub fn hash_tag(&self, tag: &Tag) -> ObjectId {
        (self.hash)(tag.as_bytes())
    }
}

impl std::fmt::Debug for KindDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KindDescriptor")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

/// Identity operations for one tagged kind
pub struct EntityIdentity<'a, S> {
    tags: &'a TagStore<S>,
    kind: KindDescriptor,
}

impl<'a, S: BlobStore> EntityIdentity<'a, S> {
    pub fn new(tags: &'a TagStore<S>, kind: KindDescriptor) -> Self {
        Self { tags, kind }
    }

    pub fn kind(&self) -> KindDescriptor {
        self.kind
    }

    /// Current tag and id of the entity named `name`, creating a tag if needed.
    pub fn identity_for(&self, name: &str) -> Result<(Tag, ObjectId), IdentityError> {
        let tag = self.tags.get_or_create(self.kind.namespace, name)?;
        Ok((tag, self.kind.hash_tag(&tag)))
    }

    pub fn id(&self, name: &str) -> Result<ObjectId, IdentityError> {
        Ok(self.identity_for(name)?.1)
    }

    pub fn tag(&self, name: &str) -> Result<Tag, IdentityError> {
        Ok(self.identity_for(name)?.0)
    }

    /// Move the tag of `old` to `new`. An empty `old` is ignored.
    pub fn rename(&self, old: &str, new: &str) -> Result<(), IdentityError> {
        if old.is_empty() {
            debug!(namespace = ?self.kind.namespace, new, "Rename without previous name ignored");
            return Ok(());
        }
        self.tags.rename(self.kind.namespace, old, new)?;
        info!(namespace = ?self.kind.namespace, old, new, "Entity renamed");
        Ok(())
    }

    /// Drop the tag row of `name`, returning the tag it held.
    pub fn remove(&self, name: &str) -> Result<Tag, IdentityError> {
        Ok(self.tags.remove(self.kind.namespace, name)?)
    }

    pub fn set_tag(&self, name: &str, tag: &Tag) -> Result<(), IdentityError> {
        Ok(self.tags.write(self.kind.namespace, name, tag)?)
    }

    /// Emit the `"tag"` attribute for `name`, creating a tag if none exists yet.
    pub fn export_tag(&self, sink: &mut dyn AttributeVisitor, name: &str) -> Result<Tag, IdentityError> {
        let tag = self.tag(name)?;
        sink.visit_attribute(TAG_ATTRIBUTE, tag.as_bytes());
        Ok(tag)
    }

    /// Adopt the tag carried by `record` under the record's name.
    ///
    /// Returns the empty tag and writes nothing when the record has no tag
    /// or carries an empty one.
    pub fn import_tag(&self, record: &dyn VersionRecord) -> Result<Tag, IdentityError> {
        let Some(tag) = find_tag(record) else {
            return Ok(Tag::EMPTY);
        };
        if !tag.is_well_formed() {
            warn!(
                namespace = ?self.kind.namespace,
                name = record.username(),
                %tag,
                "Adopting malformed tag"
            );
        }
        self.set_tag(record.username(), &tag)?;
        debug!(namespace = ?self.kind.namespace, name = record.username(), %tag, "Tag imported");
        Ok(tag)
    }
}

/// Entry point bundling a tag store with per-kind identity views
pub struct Identities<S> {
    tags: TagStore<S>,
}

impl<S: BlobStore> Identities<S> {
    pub fn new(tags: TagStore<S>) -> Self {
        Self { tags }
    }

    pub fn tags(&self) -> &TagStore<S> {
        &self.tags
    }

    pub fn structs(&self) -> StructIdentity<'_, S> {
        StructIdentity::new(&self.tags)
    }

    pub fn local_types(&self) -> LocalTypeIdentity<'_, S> {
        LocalTypeIdentity::new(&self.tags)
    }

    /// Identity view for `namespace`
    pub fn entity(&self, namespace: TagNamespace) -> EntityIdentity<'_, S> {
        EntityIdentity::new(&self.tags, KindDescriptor::of(namespace))
    }
}

impl Identities<SledBlobStore> {
    /// Open the persistent tag store described by `config`.
    pub fn open(config: &IdentityConfig, workspace_root: &Path) -> Result<Self, IdentityError> {
        Ok(Self::new(TagStore::open(&config.storage, workspace_root)?))
    }
}
