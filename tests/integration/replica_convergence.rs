use crate::integration::support::memory_identities;
use strucid::version::TAG_ATTRIBUTE;
use strucid::{hasher, ObjectId, ObjectKind, Tag, Version};

#[test]
fn export_then_import_under_new_name_converges() {
    let exporter = memory_identities();
    let mut record = Version::new(ObjectKind::Struct, ObjectId::NONE, "Packet");
    let tag = exporter.structs().export_tag(&mut record, "Packet").unwrap();
    record.id = exporter.structs().id("Packet").unwrap();

    let importer = memory_identities();
    let mut renamed = record.clone();
    renamed.username = "NetPacket".to_string();
    assert_eq!(importer.structs().import_tag(&renamed).unwrap(), tag);

    assert_eq!(importer.structs().id("NetPacket").unwrap(), hasher::hash_struct_tag(&tag));
    assert_eq!(importer.structs().id("NetPacket").unwrap(), record.id);
}

#[test]
fn import_overwrites_local_tag() {
    let ids = memory_identities();
    let (local_tag, _) = ids.local_types().identity_for("size_t").unwrap();

    let remote = Tag::from_bytes(b"0011223344556677");
    let record = Version::new(ObjectKind::LocalType, ObjectId(1), "size_t").with_tag(&remote);
    ids.local_types().import_tag(&record).unwrap();

    let (tag, id) = ids.local_types().identity_for("size_t").unwrap();
    assert_ne!(tag, local_tag);
    assert_eq!(tag, remote);
    assert_eq!(id, hasher::hash_local_type(b"0011223344556677"));
}

#[test]
fn export_creates_identity_for_unseen_name() {
    let ids = memory_identities();
    let mut attributes: Vec<(String, Vec<u8>)> = Vec::new();
    let tag = ids.structs().export_tag(&mut attributes, "Never").unwrap();

    assert_eq!(attributes, vec![(TAG_ATTRIBUTE.to_string(), tag.as_bytes().to_vec())]);
    assert_eq!(ids.structs().tag("Never").unwrap(), tag);
}

#[test]
fn import_without_tag_is_noop() {
    let ids = memory_identities();
    let record = Version::new(ObjectKind::LocalType, ObjectId(1), "size_t").with_attribute("comment", "x");
    assert_eq!(ids.local_types().import_tag(&record).unwrap(), Tag::EMPTY);
    assert!(ids.tags().blobs().is_empty());
}

#[test]
fn two_replicas_renaming_independently_keep_identity() {
    let a = memory_identities();
    let b = memory_identities();

    let mut record = Version::new(ObjectKind::Struct, ObjectId::NONE, "Header");
    a.structs().export_tag(&mut record, "Header").unwrap();
    b.structs().import_tag(&record).unwrap();

    a.structs().rename("Header", "HeaderA").unwrap();
    b.structs().rename("Header", "HeaderB").unwrap();
    assert_eq!(a.structs().id("HeaderA").unwrap(), b.structs().id("HeaderB").unwrap());
}
