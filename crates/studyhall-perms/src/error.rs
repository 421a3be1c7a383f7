//! Error types for the permissions module.

use studyhall_core::CodecError;
use studyhall_types::TypeError;
use thiserror::Error;

/// Errors that can occur while parsing permission keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermsError {
    /// Input is not of the form `<AccessLevel> <NodeType>`.
    #[error("invalid operation: {input:?}")]
    InvalidOperation { input: String },

    /// One half of the operation is not a known label.
    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result type for permission operations.
pub type Result<T> = std::result::Result<T, PermsError>;
