//! Error types for the unified API.

use studyhall_core::CodecError;
use studyhall_perms::PermsError;
use studyhall_store::StoreError;
use studyhall_types::TypeError;
use thiserror::Error;

/// Errors from any studyhall layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Codec contract or identifier error.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Domain value validation or transform error.
    #[error("value error: {0}")]
    Type(#[from] TypeError),

    /// Permission key error.
    #[error("permission error: {0}")]
    Perms(#[from] PermsError),

    /// Storage adapter error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Configuration is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A blocking task was cancelled before it finished.
    #[error("background task failed: {0}")]
    TaskFailed(String),
}

/// Result type for the unified API.
pub type Result<T> = std::result::Result<T, Error>;
