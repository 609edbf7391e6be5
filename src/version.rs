//! Version Records
//!
//! Read-only view of the versioned objects that cross the synchronization
//! boundary, plus the attribute sink used when exporting them. Only the
//! `"tag"` attribute is interpreted here.

use crate::types::{ObjectId, ObjectKind, Tag};
use serde::{Deserialize, Serialize};

/// Attribute key carrying an entity's tag.
pub const TAG_ATTRIBUTE: &str = "tag";

/// Walk control returned by attribute callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Continue,
    Stop,
}

/// A versioned object observed during export/import or reconciliation
pub trait VersionRecord {
    fn id(&self) -> ObjectId;
    fn parent_id(&self) -> ObjectId;
    fn kind(&self) -> ObjectKind;
    fn address(&self) -> u64;
    /// Display name chosen by the analyst
    fn username(&self) -> &str;
    /// Visit every attribute in order until the callback returns [`Walk::Stop`].
    fn walk_attributes(&self, visit: &mut dyn FnMut(&str, &[u8]) -> Walk);
}

/// Sink receiving attributes of an outgoing record
pub trait AttributeVisitor {
    fn visit_attribute(&mut self, key: &str, value: &[u8]);
}

impl AttributeVisitor for Vec<(String, Vec<u8>)> {
    fn visit_attribute(&mut self, key: &str, value: &[u8]) {
        self.push((key.to_string(), value.to_vec()));
    }
}

/// Extract the `"tag"` attribute from a record, if carried.
///
/// The last occurrence wins when a record carries the key more than once.
/// An empty value counts as no tag.
pub fn find_tag(record: &(impl VersionRecord + ?Sized)) -> Option<Tag> {
    let mut found = None;
    record.walk_attributes(&mut |key, value| {
        if key == TAG_ATTRIBUTE {
            found = Some(Tag::from_bytes(value));
        }
        Walk::Continue
    });
    found.filter(|tag| !tag.is_empty())
}

/// Owned version record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub id: ObjectId,
    #[serde(default)]
    pub parent_id: ObjectId,
    pub kind: ObjectKind,
    #[serde(default)]
    pub address: u64,
    pub username: String,
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
}

impl Version {
    pub fn new(kind: ObjectKind, id: ObjectId, username: impl Into<String>) -> Self {
        Self {
            id,
            parent_id: ObjectId::NONE,
            kind,
            address: 0,
            username: username.into(),
            attributes: Vec::new(),
        }
    }

    /// Member record under `parent` at `address`
    pub fn member(id: ObjectId, parent_id: ObjectId, address: u64, username: impl Into<String>) -> Self {
        Self {
            parent_id,
            address,
            ..Self::new(ObjectKind::StructMember, id, username)
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_tag(self, tag: &Tag) -> Self {
        self.with_attribute(TAG_ATTRIBUTE, tag.as_string())
    }
}

impl VersionRecord for Version {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn parent_id(&self) -> ObjectId {
        self.parent_id
    }

    fn kind(&self) -> ObjectKind {
        self.kind
    }

    fn address(&self) -> u64 {
        self.address
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn walk_attributes(&self, visit: &mut dyn FnMut(&str, &[u8]) -> Walk) {
        for (key, value) in &self.attributes {
            if visit(key, value.as_bytes()) == Walk::Stop {
                break;
            }
        }
    }
}

impl AttributeVisitor for Version {
    fn visit_attribute(&mut self, key: &str, value: &[u8]) {
        self.attributes
            .push((key.to_string(), String::from_utf8_lossy(value).into_owned()));
    }
}
