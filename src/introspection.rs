//! Type system introspection
//!
//! The host database resolves ordinals and struct ids to names and knows
//! which names denote enumerations or materialized structures.

/// Materialization state of a structure found by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructState {
    /// Forward-declared placeholder
    Ghost,
    Materialized,
}

/// Host type system queried by the identity layer
pub trait TypeSystem {
    /// Canonical printable name of the local type at `ordinal`.
    fn local_type_name(&self, ordinal: u32) -> Option<String>;

    /// Name of the structure with database id `struct_id`.
    fn struct_name(&self, struct_id: u64) -> Option<String>;

    /// Whether an enumeration named `name` exists.
    fn has_enum(&self, name: &str) -> bool;

    /// Structure named `name`, if one exists.
    fn find_struct(&self, name: &str) -> Option<StructState>;
}

impl<T: TypeSystem + ?Sized> TypeSystem for &T {
    fn local_type_name(&self, ordinal: u32) -> Option<String> {
        (**self).local_type_name(ordinal)
    }

    fn struct_name(&self, struct_id: u64) -> Option<String> {
        (**self).struct_name(struct_id)
    }

    fn has_enum(&self, name: &str) -> bool {
        (**self).has_enum(name)
    }

    fn find_struct(&self, name: &str) -> Option<StructState> {
        (**self).find_struct(name)
    }
}
