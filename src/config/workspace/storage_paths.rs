//! StorageConfig and resolve_path for the tag store.

use crate::config::paths::xdg_root;
use crate::error::IdentityError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_tree() -> String {
    "tags".to_string()
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Tag database directory (relative to workspace root); None uses the platform data dir
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Sled tree holding tag rows
    #[serde(default = "default_tree")]
    pub tree: String,
}

impl StorageConfig {
    /// Resolve the tag database directory.
    pub fn resolve_path(&self, workspace_root: &Path) -> Result<PathBuf, IdentityError> {
        match &self.path {
            Some(path) => Ok(workspace_root.join(path)),
            None => Ok(xdg_root::workspace_data_dir(workspace_root)?.join("tags")),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            tree: default_tree(),
        }
    }
}
