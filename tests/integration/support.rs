use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use strucid::introspection::{StructState, TypeSystem};
use strucid::store::BlobHandle;
use strucid::{BlobStore, Identities, MemoryBlobStore, StorageError, TagStore};

pub fn memory_identities() -> Identities<MemoryBlobStore> {
    Identities::new(TagStore::new(MemoryBlobStore::new()))
}

/// Scriptable host type system
#[derive(Default)]
pub struct FakeTypes {
    pub locals: HashMap<u32, String>,
    pub structs: HashMap<u64, (String, StructState)>,
    pub enums: Vec<String>,
}

impl FakeTypes {
    pub fn with_local(mut self, ordinal: u32, name: &str) -> Self {
        self.locals.insert(ordinal, name.to_string());
        self
    }

    pub fn with_struct(mut self, id: u64, name: &str, state: StructState) -> Self {
        self.structs.insert(id, (name.to_string(), state));
        self
    }

    pub fn with_enum(mut self, name: &str) -> Self {
        self.enums.push(name.to_string());
        self
    }
}

impl TypeSystem for FakeTypes {
    fn local_type_name(&self, ordinal: u32) -> Option<String> {
        self.locals.get(&ordinal).cloned()
    }

    fn struct_name(&self, struct_id: u64) -> Option<String> {
        self.structs.get(&struct_id).map(|(name, _)| name.clone())
    }

    fn has_enum(&self, name: &str) -> bool {
        self.enums.iter().any(|e| e == name)
    }

    fn find_struct(&self, name: &str) -> Option<StructState> {
        self.structs
            .values()
            .find(|(n, _)| n == name)
            .map(|(_, state)| *state)
    }
}

/// In-memory blob store with switchable failures
#[derive(Default)]
pub struct FailingBlobStore {
    inner: MemoryBlobStore,
    reads: AtomicBool,
    writes: AtomicBool,
    renames: AtomicBool,
}

impl FailingBlobStore {
    pub fn fail_reads(&self, on: bool) {
        self.reads.store(on, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, on: bool) {
        self.writes.store(on, Ordering::SeqCst);
    }

    pub fn fail_renames(&self, on: bool) {
        self.renames.store(on, Ordering::SeqCst);
    }

    fn check(flag: &AtomicBool, op: &str) -> Result<(), StorageError> {
        if flag.load(Ordering::SeqCst) {
            return Err(StorageError::IoError(io::Error::new(
                io::ErrorKind::Other,
                format!("{} failed", op),
            )));
        }
        Ok(())
    }
}

impl BlobStore for FailingBlobStore {
    fn create_or_open(&self, key: &[u8]) -> Result<(BlobHandle, bool), StorageError> {
        self.inner.create_or_open(key)
    }

    fn lookup(&self, key: &[u8]) -> Result<Option<BlobHandle>, StorageError> {
        self.inner.lookup(key)
    }

    fn read(&self, handle: &BlobHandle) -> Result<Vec<u8>, StorageError> {
        Self::check(&self.reads, "read")?;
        self.inner.read(handle)
    }

    fn write(&self, handle: &BlobHandle, value: &[u8]) -> Result<(), StorageError> {
        Self::check(&self.writes, "write")?;
        self.inner.write(handle, value)
    }

    fn rename_key(&self, handle: &mut BlobHandle, new_key: &[u8]) -> Result<(), StorageError> {
        Self::check(&self.renames, "rename")?;
        self.inner.rename_key(handle, new_key)
    }

    fn delete(&self, handle: BlobHandle) -> Result<(), StorageError> {
        self.inner.delete(handle)
    }
}

pub fn failing_identities() -> Identities<FailingBlobStore> {
    Identities::new(TagStore::new(FailingBlobStore::default()))
}
