//! The codec contract every domain value implements.
//!
//! A payload type implements [`Serializable`] once; the tri-state wrapper
//! [`Status`](crate::Status) then provides the uniform `set`/`get`/`assign_to`/
//! `decode_*`/`encode_*`/`scan`/`value` surface on top of it.

use std::fmt;

use crate::error::CodecError;

/// A value as a SQL driver hands it over or accepts it.
///
/// Mirrors the storage classes a driver can produce for a column.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl DriverValue {
    /// Check if this is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }

    /// Name of the storage class, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Integer(_) => "integer",
            DriverValue::Real(_) => "real",
            DriverValue::Text(_) => "text",
            DriverValue::Blob(_) => "blob",
        }
    }
}

impl fmt::Display for DriverValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverValue::Null => write!(f, "NULL"),
            DriverValue::Integer(v) => write!(f, "{}", v),
            DriverValue::Real(v) => write!(f, "{}", v),
            DriverValue::Text(s) => write!(f, "{:?}", s),
            DriverValue::Blob(b) => write!(f, "<{} byte blob>", b.len()),
        }
    }
}

impl From<&str> for DriverValue {
    fn from(s: &str) -> Self {
        DriverValue::Text(s.to_string())
    }
}

impl From<String> for DriverValue {
    fn from(s: String) -> Self {
        DriverValue::Text(s)
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(b: Vec<u8>) -> Self {
        DriverValue::Blob(b)
    }
}

impl From<i64> for DriverValue {
    fn from(v: i64) -> Self {
        DriverValue::Integer(v)
    }
}

/// View of a payload handed to an [`AssignTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignable<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
    /// Text rendered on demand, for compound payloads.
    Owned(String),
}

/// A plain destination slot that `Status::assign_to` can fill.
pub trait AssignTarget {
    /// Name of the destination type, for diagnostics.
    fn target_name(&self) -> &'static str;

    /// Copy a present payload into the slot.
    fn assign(&mut self, value: Assignable<'_>, type_name: &'static str) -> Result<(), CodecError>;

    /// Record an explicit NULL. Slots that cannot represent absence refuse.
    fn assign_null(&mut self, type_name: &'static str) -> Result<(), CodecError> {
        Err(CodecError::CannotAssign {
            type_name,
            target: self.target_name(),
        })
    }
}

impl AssignTarget for String {
    fn target_name(&self) -> &'static str {
        "String"
    }

    fn assign(&mut self, value: Assignable<'_>, type_name: &'static str) -> Result<(), CodecError> {
        match value {
            Assignable::Text(s) => {
                *self = s.to_string();
                Ok(())
            }
            Assignable::Owned(s) => {
                *self = s;
                Ok(())
            }
            Assignable::Bytes(b) => {
                *self = std::str::from_utf8(b)
                    .map_err(|_| CodecError::CannotAssign {
                        type_name,
                        target: "String",
                    })?
                    .to_string();
                Ok(())
            }
        }
    }
}

impl AssignTarget for Vec<u8> {
    fn target_name(&self) -> &'static str {
        "Vec<u8>"
    }

    fn assign(&mut self, value: Assignable<'_>, _type_name: &'static str) -> Result<(), CodecError> {
        *self = match value {
            Assignable::Text(s) => s.as_bytes().to_vec(),
            Assignable::Owned(s) => s.into_bytes(),
            Assignable::Bytes(b) => b.to_vec(),
        };
        Ok(())
    }
}

impl<T: AssignTarget + Default> AssignTarget for Option<T> {
    fn target_name(&self) -> &'static str {
        "Option"
    }

    fn assign(&mut self, value: Assignable<'_>, type_name: &'static str) -> Result<(), CodecError> {
        let mut inner = T::default();
        inner.assign(value, type_name)?;
        *self = Some(inner);
        Ok(())
    }

    fn assign_null(&mut self, _type_name: &'static str) -> Result<(), CodecError> {
        *self = None;
        Ok(())
    }
}

/// Wire capability of a domain payload.
///
/// Text and binary forms are the two encodings a SQL driver may request.
/// Binary defaults to text; only types with a distinct raw form override it.
pub trait Serializable: Sized {
    /// Type name used in error messages.
    const TYPE_NAME: &'static str;

    /// Error type of this payload's validation and transforms.
    type Error: From<CodecError> + std::error::Error;

    /// Build from raw application input, performing full semantic validation.
    fn from_input(raw: &str) -> Result<Self, Self::Error>;

    /// Build from raw application bytes. Defaults to UTF-8 then [`from_input`](Self::from_input).
    fn from_input_bytes(raw: &[u8]) -> Result<Self, Self::Error> {
        let s = decode_utf8(raw, Self::TYPE_NAME)?;
        Self::from_input(s)
    }

    /// Build from trusted wire text.
    fn decode_text(src: &[u8]) -> Result<Self, Self::Error>;

    /// Append the wire text to `buf`.
    fn encode_text(&self, buf: &mut Vec<u8>) -> Result<(), Self::Error>;

    /// Build from trusted wire binary.
    fn decode_binary(src: &[u8]) -> Result<Self, Self::Error> {
        Self::decode_text(src)
    }

    /// Append the wire binary to `buf`.
    fn encode_binary(&self, buf: &mut Vec<u8>) -> Result<(), Self::Error> {
        self.encode_text(buf)
    }

    /// The payload as seen by `assign_to`.
    fn assignable(&self) -> Assignable<'_>;

    /// The payload as handed to a generic driver.
    ///
    /// Text when the wire text is UTF-8, otherwise a blob.
    fn to_driver(&self) -> Result<DriverValue, Self::Error> {
        let mut buf = Vec::new();
        self.encode_text(&mut buf)?;
        Ok(match String::from_utf8(buf) {
            Ok(s) => DriverValue::Text(s),
            Err(e) => DriverValue::Blob(e.into_bytes()),
        })
    }
}

/// Interpret wire bytes as UTF-8 text.
pub fn decode_utf8<'a>(src: &'a [u8], type_name: &'static str) -> Result<&'a str, CodecError> {
    std::str::from_utf8(src).map_err(|_| CodecError::InvalidUtf8 { type_name })
}
