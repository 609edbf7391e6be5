//! Configuration
//!
//! Layered settings for the tag store, logging and drift passes.
//! Precedence: built-in defaults (lowest) -> workspace file -> environment (highest).

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;
pub mod workspace;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

pub use facade::ConfigLoader;
pub use workspace::storage_paths::StorageConfig;

/// Drift pass settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftConfig {
    /// Cache the id rehashed for each name inside a pass
    #[serde(default = "default_cache_ids")]
    pub cache_ids: bool,
}

fn default_cache_ids() -> bool {
    true
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            cache_ids: default_cache_ids(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub drift: DriftConfig,
}
