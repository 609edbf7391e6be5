//! Core types for structural identity tracking.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Capacity of a printable tag, in bytes.
pub const TAG_LEN: usize = 16;

/// Number of random bytes behind a freshly generated tag.
pub const TAG_ENTROPY: usize = TAG_LEN / 2;

/// Tag: persistent random salt anchoring an entity's identity
///
/// Stored in its printable form (uppercase hex of [`TAG_ENTROPY`] random bytes).
/// `len` is explicit; an empty tag has `len == 0`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    data: [u8; TAG_LEN],
    len: usize,
}

impl Tag {
    /// The empty tag, returned when no row or attribute existed.
    pub const EMPTY: Tag = Tag {
        data: [0u8; TAG_LEN],
        len: 0,
    };

    /// Build a tag from printable bytes, truncating to [`TAG_LEN`].
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes.len().min(TAG_LEN);
        let mut data = [0u8; TAG_LEN];
        data[..len].copy_from_slice(&bytes[..len]);
        Tag { data, len }
    }

    /// Encode raw entropy as an uppercase hex tag.
    pub fn from_entropy(entropy: &[u8; TAG_ENTROPY]) -> Self {
        Self::from_bytes(hex::encode_upper(entropy).as_bytes())
    }

    /// Generate a fresh uniformly random tag.
    pub fn random() -> Self {
        let mut entropy = [0u8; TAG_ENTROPY];
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut entropy);
        Self::from_entropy(&entropy)
    }

    /// Printable bytes of the tag.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Printable form, lossily converted if the tag was adopted from non-UTF8 input.
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the tag looks like one this crate generates.
    pub fn is_well_formed(&self) -> bool {
        self.len == TAG_LEN && self.as_bytes().iter().all(u8::is_ascii_hexdigit)
    }
}

impl Default for Tag {
    fn default() -> Self {
        Tag::EMPTY
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({:?})", self.as_string())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

/// ObjectId: deterministic numeric identifier of a versioned object
///
/// Zero is reserved for "no identity currently available".
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// Sentinel for unresolvable lookups.
    pub const NONE: ObjectId = ObjectId(0);

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({:#018x})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}", self.0)
    }
}

impl From<u64> for ObjectId {
    fn from(value: u64) -> Self {
        ObjectId(value)
    }
}

/// Kind of a versioned object as carried on version records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Binary,
    Segment,
    SegmentChunk,
    Function,
    StackFrame,
    StackFrameMember,
    ReferenceInfo,
    Struct,
    StructMember,
    Enum,
    EnumMember,
    BasicBlock,
    Data,
    Code,
    LocalType,
}

impl ObjectKind {
    /// Tag namespace owning this kind, if it carries a stored tag.
    pub fn namespace(&self) -> Option<TagNamespace> {
        match self {
            ObjectKind::Struct => Some(TagNamespace::Struct),
            ObjectKind::LocalType => Some(TagNamespace::LocalType),
            _ => None,
        }
    }
}

/// Tag namespace: entity kinds that persist their own tag
///
/// Struct members have no namespace; their identity derives from the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagNamespace {
    Struct,
    LocalType,
}
