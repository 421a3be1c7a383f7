//! Error types for studyhall core.

use thiserror::Error;

/// Errors raised by the codec contract and the identifier scheme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Attempted to encode, read, or assign a value that was never set.
    #[error("cannot encode status undefined {type_name}")]
    Undefined { type_name: &'static str },

    /// The source value has a shape this type cannot be built from.
    #[error("cannot convert {value} to {type_name}")]
    CannotConvert {
        value: String,
        type_name: &'static str,
    },

    /// The destination slot cannot hold this value.
    #[error("cannot assign {type_name} to {target}")]
    CannotAssign {
        type_name: &'static str,
        target: &'static str,
    },

    /// Wire bytes were expected to be UTF-8 text.
    #[error("invalid UTF-8 in {type_name} text")]
    InvalidUtf8 { type_name: &'static str },

    /// A closed label set did not contain the input.
    #[error("invalid {type_name}: {input:?}")]
    UnknownLabel {
        type_name: &'static str,
        input: String,
    },

    /// An object identifier could not be decoded.
    #[error("invalid OID")]
    InvalidOid,

    /// `Oid::new` was called without an object type.
    #[error("OID object type must not be empty")]
    EmptyObjectType,

    /// The object type name does not fit the three-digit length prefix.
    #[error("OID object type length {len} exceeds maximum 999")]
    ObjectTypeTooLong { len: usize },

    /// A short id string was not a well-formed XID.
    #[error("invalid short id: {0:?}")]
    InvalidShortId(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CodecError>;
