//! Custom error types for the common library
//!
//! This module defines the storage error type shared by every store that
//! persists through the key-value layer.

use thiserror::Error;

/// Custom error type for key-value storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Error occurred while reading or writing the backing files
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be encoded or decoded
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The key cannot be mapped onto the backend
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Type alias for Result with StorageError
pub type StorageResult<T> = Result<T, StorageError>;
