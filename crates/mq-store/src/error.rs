//! Error types for the storage layer.

use std::path::PathBuf;

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while saving or loading stored state.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file could not be read or written.
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The stored data exists but cannot be parsed.
    #[error("corrupt store file: {path}: {source}")]
    Corrupt {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The data could not be serialized for writing.
    #[error("failed to encode store data: {0}")]
    Encode(#[source] serde_json::Error),
}
