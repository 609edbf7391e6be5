//! Platform data directories for workspace-scoped storage.

use crate::error::IdentityError;
use std::path::{Path, PathBuf};

/// Platform data directory for strucid
pub fn data_home() -> Result<PathBuf, IdentityError> {
    let project_dirs = directories::ProjectDirs::from("", "strucid", "strucid").ok_or_else(|| {
        IdentityError::ConfigError("Could not determine platform data directory".to_string())
    })?;
    Ok(project_dirs.data_dir().to_path_buf())
}

/// Get the data directory for a specific workspace
///
/// The canonical workspace path is mirrored under [`data_home`], so
/// `/home/user/db` maps to `<data_home>/home/user/db/`.
pub fn workspace_data_dir(workspace_root: &Path) -> Result<PathBuf, IdentityError> {
    let canonical = workspace_root.canonicalize().map_err(|e| {
        IdentityError::ConfigError(format!("Failed to canonicalize workspace path: {}", e))
    })?;

    let mut data_dir = data_home()?;
    for component in canonical.components() {
        if let std::path::Component::Normal(name) = component {
            data_dir = data_dir.join(name);
        }
    }
    Ok(data_dir)
}
