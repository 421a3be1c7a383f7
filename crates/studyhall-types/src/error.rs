//! Error types for domain value validation and transforms.

use studyhall_core::CodecError;
use thiserror::Error;

/// Errors raised while building, validating, or transforming domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Conversion, status, or label error from the codec layer.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Input did not match the type's pattern.
    #[error("{type_name} does not match the required pattern: {input:?}")]
    NoMatch {
        type_name: &'static str,
        input: String,
    },

    #[error("username must be between 1 and 39 characters, got {len}")]
    InvalidUsernameLength { len: usize },

    #[error("username may not begin or end with a hyphen, or contain consecutive hyphens")]
    InvalidUsernameHyphens,

    #[error("username may only contain alphanumeric characters and hyphens")]
    InvalidUsernameCharacters,

    #[error("name must be at most 39 characters, got {len}")]
    InvalidWordNameLength { len: usize },

    #[error("name may only contain alphanumeric characters and hyphens")]
    InvalidWordNameCharacters,

    #[error("name must be between 1 and 39 characters, got {len}")]
    InvalidWordsNameLength { len: usize },

    #[error("name may only contain alphanumeric characters, hyphens, and underscores")]
    InvalidWordsNameCharacters,

    #[error("invalid color: {input:?}")]
    InvalidColor { input: String },

    /// A markdown reference number did not fit the numeric range.
    #[error("invalid reference number: {input:?}")]
    InvalidReferenceNumber { input: String },

    #[error("password must not be empty")]
    PasswordEmpty,

    #[error("password must be at most 72 bytes, got {len}")]
    PasswordTooLong { len: usize },

    #[error("password is too weak: score {score}, need {min_score}")]
    PasswordTooWeak { score: u8, min_score: u8 },

    /// Strength can only be scored before the plaintext is discarded.
    #[error("password plaintext is unavailable")]
    PasswordPlaintextUnavailable,

    #[error("password does not match")]
    PasswordMismatch,

    #[error("bcrypt cost {cost} out of range [4, 31]")]
    InvalidBcryptCost { cost: u32 },

    /// Stored hash could not be interpreted.
    #[error("invalid password hash: {0}")]
    InvalidHash(String),

    #[error("compression failed: {0}")]
    CompressionFailed(String),

    #[error("decompression failed: {0}")]
    DecompressionFailed(String),

    #[error("decompressed body exceeds {max} bytes")]
    BodyTooLarge { max: usize },
}

/// Result type for domain value operations.
pub type Result<T> = std::result::Result<T, TypeError>;
