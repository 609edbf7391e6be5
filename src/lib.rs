//! Strucid: rename-resilient structural identities
//!
//! Assigns stable object ids to structures, structure members and local types
//! in a collaborative analysis database. Identity is anchored on a random
//! per-name tag rather than on the mutable display name, so renames keep ids
//! and replicas converge by exchanging tags. During reconciliation the
//! [`drift::DriftFilter`] remaps stale ids and cascades them onto members.

pub mod config;
pub mod drift;
pub mod error;
pub mod hasher;
pub mod identity;
pub mod introspection;
pub mod logging;
pub mod store;
pub mod types;
pub mod version;

pub use drift::{filter_pass, make_filter, DriftFilter, DriftStats, IdentityFilter};
pub use error::{IdentityError, StorageError};
pub use identity::{EntityIdentity, Identities, KindDescriptor, LocalTypeIdentity, StructIdentity};
pub use store::{BlobStore, MemoryBlobStore, SledBlobStore, TagStore};
pub use types::{ObjectId, ObjectKind, Tag, TagNamespace};
pub use version::{AttributeVisitor, Version, VersionRecord};
