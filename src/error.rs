//! Error types for tag storage and identity operations.

use thiserror::Error;

/// Errors raised by the blob persistence layer
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Storage backend error: {0}")]
    Backend(#[from] sled::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Row disappeared under open handle: {0}")]
    MissingHandle(String),
}

/// Errors raised by identity operations
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for IdentityError {
    fn from(err: config::ConfigError) -> Self {
        IdentityError::ConfigError(err.to_string())
    }
}
