//! Integration tests for structural identity tracking

mod config_loading;
mod identity_lifecycle;
mod replica_convergence;
mod store_failures;
mod support;
