//! Identity hashing
//!
//! Deterministic BLAKE3-derived identifiers. Each kind hashes under its own
//! domain prefix so a struct and a local type with the same tag never share
//! an id. Output is the first eight digest bytes, little-endian.

use crate::types::{ObjectId, Tag};
use blake3::Hasher;

const STRUCT_DOMAIN: &[u8] = b"strucid/struc\0";
const LOCAL_TYPE_DOMAIN: &[u8] = b"strucid/local_type\0";
const MEMBER_DOMAIN: &[u8] = b"strucid/struc_member\0";

fn finish(hasher: &Hasher) -> ObjectId {
    let digest = hasher.finalize();
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest.as_bytes()[..8]);
    match u64::from_le_bytes(head) {
        // zero is the "no identity" sentinel
        0 => ObjectId(1),
        value => ObjectId(value),
    }
}

fn hash_with(domain: &[u8], value: &[u8]) -> ObjectId {
    let mut hasher = Hasher::new();
    hasher.update(domain);
    hasher.update(value);
    finish(&hasher)
}

/// Identifier of a structure from the printable form of its tag
pub fn hash_struct(tag: &[u8]) -> ObjectId {
    hash_with(STRUCT_DOMAIN, tag)
}

/// Identifier of a local type from the printable form of its tag
pub fn hash_local_type(tag: &[u8]) -> ObjectId {
    hash_with(LOCAL_TYPE_DOMAIN, tag)
}

/// Identifier of a structure member from its parent's id and its offset
pub fn hash_member(parent: ObjectId, address: u64) -> ObjectId {
    let mut hasher = Hasher::new();
    hasher.update(MEMBER_DOMAIN);
    hasher.update(&parent.0.to_le_bytes());
    hasher.update(&address.to_le_bytes());
    finish(&hasher)
}

pub fn hash_struct_tag(tag: &Tag) -> ObjectId {
    hash_struct(tag.as_bytes())
}

pub fn hash_local_type_tag(tag: &Tag) -> ObjectId {
    hash_local_type(tag.as_bytes())
}
