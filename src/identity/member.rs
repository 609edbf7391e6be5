//! Structure member identities
//!
//! Members own no tag. Their id is a pure function of the parent's current id
//! and the member's offset, so a parent rename or remap carries them along.

use crate::hasher;
use crate::types::ObjectId;

/// Id of the member at `address` inside the structure `parent`.
pub fn hash_member(parent: ObjectId, address: u64) -> ObjectId {
    hasher::hash_member(parent, address)
}

/// Ids of every member offset in `addresses` under `parent`.
pub fn hash_members(parent: ObjectId, addresses: impl IntoIterator<Item = u64>) -> Vec<ObjectId> {
    addresses
        .into_iter()
        .map(|address| hash_member(parent, address))
        .collect()
}
