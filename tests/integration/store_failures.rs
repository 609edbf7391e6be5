use crate::integration::support::failing_identities;
use strucid::{IdentityError, ObjectId, ObjectKind, Tag, Version};

fn is_storage_error<T: std::fmt::Debug>(result: Result<T, IdentityError>) -> bool {
    matches!(result, Err(IdentityError::StorageError(_)))
}

#[test]
fn test_identity_for_propagates_write_failure() {
    let ids = failing_identities();
    ids.tags().blobs().fail_writes(true);
    assert!(is_storage_error(ids.structs().identity_for("Packet")));
    assert!(is_storage_error(ids.local_types().identity_for("size_t")));
}

#[test]
fn test_identity_for_propagates_read_failure() {
    let ids = failing_identities();
    ids.structs().identity_for("Packet").unwrap();
    ids.tags().blobs().fail_reads(true);
    assert!(is_storage_error(ids.structs().identity_for("Packet")));
}

#[test]
fn test_rename_propagates_rename_failure() {
    let ids = failing_identities();
    let structs = ids.structs();
    let tag = structs.tag("A").unwrap();
    ids.local_types().tag("T").unwrap();

    ids.tags().blobs().fail_renames(true);
    assert!(is_storage_error(structs.rename("A", "B")));
    assert!(is_storage_error(ids.local_types().rename("T", "U")));

    ids.tags().blobs().fail_renames(false);
    assert_eq!(structs.tag("A").unwrap(), tag);
}

#[test]
fn test_remove_propagates_read_failure() {
    let ids = failing_identities();
    let tag = ids.structs().tag("A").unwrap();

    ids.tags().blobs().fail_reads(true);
    assert!(is_storage_error(ids.structs().remove("A")));

    ids.tags().blobs().fail_reads(false);
    assert_eq!(ids.structs().tag("A").unwrap(), tag);
}

#[test]
fn test_import_propagates_write_failure() {
    let ids = failing_identities();
    let record = Version::new(ObjectKind::Struct, ObjectId(1), "Packet")
        .with_tag(&Tag::from_bytes(b"A1B2C3D4E5F60708"));

    ids.tags().blobs().fail_writes(true);
    assert!(is_storage_error(ids.structs().import_tag(&record)));
}

#[test]
fn test_export_failure_emits_nothing() {
    let ids = failing_identities();
    ids.structs().tag("Known").unwrap();

    ids.tags().blobs().fail_reads(true);
    let mut sink: Vec<(String, Vec<u8>)> = Vec::new();
    assert!(is_storage_error(ids.structs().export_tag(&mut sink, "Known")));
    assert!(sink.is_empty());

    ids.tags().blobs().fail_reads(false);
    ids.tags().blobs().fail_writes(true);
    assert!(is_storage_error(ids.structs().export_tag(&mut sink, "Fresh")));
    assert!(sink.is_empty());
}
