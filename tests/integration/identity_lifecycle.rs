use crate::integration::support::{memory_identities, FakeTypes};
use strucid::introspection::StructState;
use strucid::{hasher, ObjectId, Tag};

#[test]
fn identity_is_idempotent() {
    let ids = memory_identities();
    let first = ids.structs().identity_for("Packet").unwrap();
    let second = ids.structs().identity_for("Packet").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.1, hasher::hash_struct_tag(&first.0));
}

#[test]
fn rename_preserves_identity_and_frees_old_name() {
    let ids = memory_identities();
    let structs = ids.structs();
    let (tag, id) = structs.identity_for("Packet").unwrap();

    structs.rename("Packet", "PacketV2").unwrap();
    assert_eq!(structs.identity_for("PacketV2").unwrap(), (tag, id));

    let (fresh_tag, fresh_id) = structs.identity_for("Packet").unwrap();
    assert_ne!(fresh_tag, tag);
    assert_ne!(fresh_id, id);
}

#[test]
fn chained_renames_keep_identity() {
    let ids = memory_identities();
    let locals = ids.local_types();
    let (_, id) = locals.identity_for("a_t").unwrap();
    locals.rename("a_t", "b_t").unwrap();
    locals.rename("b_t", "c_t").unwrap();
    assert_eq!(locals.id("c_t").unwrap(), id);
    assert_eq!(ids.tags().blobs().len(), 1);
}

#[test]
fn remove_returns_tag_then_recreates() {
    let ids = memory_identities();
    let structs = ids.structs();
    let (tag, id) = structs.identity_for("Packet").unwrap();

    assert_eq!(structs.remove("Packet").unwrap(), tag);
    assert_eq!(structs.remove("Packet").unwrap(), Tag::EMPTY);
    assert_ne!(structs.id("Packet").unwrap(), id);
}

#[test]
fn struct_and_local_type_namespaces_are_isolated() {
    let ids = memory_identities();
    let (struct_tag, struct_id) = ids.structs().identity_for("Shared").unwrap();
    let (local_tag, local_id) = ids.local_types().identity_for("Shared").unwrap();
    assert_ne!(struct_tag, local_tag);
    assert_ne!(struct_id, local_id);

    ids.structs().remove("Shared").unwrap();
    assert_eq!(ids.local_types().identity_for("Shared").unwrap(), (local_tag, local_id));
}

#[test]
fn same_tag_hashes_differently_per_kind() {
    let ids = memory_identities();
    let tag = Tag::from_bytes(b"A1B2C3D4E5F60708");
    ids.structs().set_tag("Packet", &tag).unwrap();
    ids.local_types().set_tag("Packet", &tag).unwrap();
    assert_ne!(ids.structs().id("Packet").unwrap(), ids.local_types().id("Packet").unwrap());
}

#[test]
fn local_type_ordinals_respect_scope() {
    let ids = memory_identities();
    let types = FakeTypes::default()
        .with_local(1, "size_t")
        .with_local(2, "COLOR")
        .with_local(3, "Packet")
        .with_local(4, "Pending")
        .with_enum("COLOR")
        .with_struct(0x100, "Packet", StructState::Materialized)
        .with_struct(0x200, "Pending", StructState::Ghost);
    let locals = ids.local_types();

    assert!(locals.identify(&types, 1));
    assert!(!locals.identify(&types, 2));
    assert!(!locals.identify(&types, 3));
    assert!(locals.identify(&types, 4));

    assert_eq!(locals.hash_ordinal(&types, 3).unwrap(), ObjectId::NONE);
    assert_eq!(locals.hash_ordinal(&types, 4).unwrap(), locals.id("Pending").unwrap());
    assert_eq!(locals.hash_ordinal(&types, 77).unwrap(), ObjectId::NONE);
}

#[test]
fn struct_id_resolution() {
    let ids = memory_identities();
    let types = FakeTypes::default().with_struct(0x100, "Packet", StructState::Materialized);
    let structs = ids.structs();

    let id = structs.hash_struct_id(&types, 0x100).unwrap();
    assert_eq!(id, structs.id("Packet").unwrap());
    assert_eq!(structs.hash_struct_id(&types, 0x999).unwrap(), ObjectId::NONE);
}
