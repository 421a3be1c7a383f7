//! Object identifiers: type-tagged, opaque, base64 ids.
//!
//! An OID is used as primary key, public node id, and cross-reference token.
//! Its external form is `base64(NNN || Type || Short)` where `NNN` is the
//! zero-padded byte length of `Type` and `Short` is an [`Xid`].

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{decode_utf8, Assignable, Serializable};
use crate::error::{CodecError, Result};
use crate::xid::Xid;

/// Width of the decimal length prefix.
const LEN_PREFIX: usize = 3;

/// Longest object type name the prefix can describe.
pub const MAX_TYPE_LEN: usize = 999;

/// A parsed or freshly generated object identifier.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    short: String,
    kind: String,
    encoded: String,
}

impl Oid {
    /// Generate a new identifier for an object of the given type.
    pub fn new(kind: &str) -> Result<Self> {
        Self::from_parts(kind, &Xid::new().encode())
    }

    /// Build an identifier around an existing short id.
    pub fn from_parts(kind: &str, short: &str) -> Result<Self> {
        if kind.is_empty() {
            return Err(CodecError::EmptyObjectType);
        }
        if short.is_empty() {
            return Err(CodecError::InvalidOid);
        }

        let kind = normalize_kind(kind);
        if kind.len() > MAX_TYPE_LEN {
            return Err(CodecError::ObjectTypeTooLong { len: kind.len() });
        }

        let composed = format!("{:03}{}{}", kind.len(), kind, short);
        Ok(Self {
            short: short.to_string(),
            encoded: STANDARD.encode(composed),
            kind,
        })
    }

    /// Parse the external base64 form.
    ///
    /// Every failure is reported as [`CodecError::InvalidOid`].
    pub fn parse(id: &str) -> Result<Self> {
        let raw = STANDARD.decode(id).map_err(|_| CodecError::InvalidOid)?;
        if raw.len() < LEN_PREFIX {
            return Err(CodecError::InvalidOid);
        }

        let (prefix, rest) = raw.split_at(LEN_PREFIX);
        if !prefix.iter().all(u8::is_ascii_digit) {
            return Err(CodecError::InvalidOid);
        }
        let n = prefix
            .iter()
            .fold(0usize, |acc, d| acc * 10 + (d - b'0') as usize);
        if n == 0 || n >= rest.len() {
            return Err(CodecError::InvalidOid);
        }

        let (kind, short) = rest.split_at(n);
        let kind = std::str::from_utf8(kind).map_err(|_| CodecError::InvalidOid)?;
        let short = std::str::from_utf8(short).map_err(|_| CodecError::InvalidOid)?;

        Ok(Self {
            short: short.to_string(),
            kind: kind.to_string(),
            encoded: id.to_string(),
        })
    }

    /// The unique short id.
    pub fn short(&self) -> &str {
        &self.short
    }

    /// The title-cased object type, e.g. `"Lesson"`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The external base64 form.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    /// Check whether this identifies an object of the given type.
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == normalize_kind(kind)
    }
}

/// Upper-case the first character, lower-case the rest.
fn normalize_kind(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({}:{})", self.kind, self.short)
    }
}

impl FromStr for Oid {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for Oid {
    fn as_ref(&self) -> &str {
        &self.encoded
    }
}

impl Serialize for Oid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encoded)
    }
}

impl<'de> Deserialize<'de> for Oid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Oid::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Serializable for Oid {
    const TYPE_NAME: &'static str = "OID";
    type Error = CodecError;

    fn from_input(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }

    fn decode_text(src: &[u8]) -> Result<Self> {
        Self::parse(decode_utf8(src, Self::TYPE_NAME)?)
    }

    fn encode_text(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.extend_from_slice(self.encoded.as_bytes());
        Ok(())
    }

    fn assignable(&self) -> Assignable<'_> {
        Assignable::Text(&self.encoded)
    }
}

crate::impl_source_value!(Oid);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;
    use proptest::prelude::*;

    #[test]
    fn test_new_normalizes_kind() {
        let oid = Oid::new("lESSON").unwrap();
        assert_eq!(oid.kind(), "Lesson");
        assert_eq!(oid.short().len(), crate::xid::ENCODED_LEN);
        assert!(oid.is_kind("lesson"));
    }

    #[test]
    fn test_new_rejects_empty_kind() {
        assert_eq!(Oid::new("").unwrap_err(), CodecError::EmptyObjectType);
    }

    #[test]
    fn test_new_rejects_long_kind() {
        let kind = "a".repeat(1000);
        assert_eq!(
            Oid::new(&kind).unwrap_err(),
            CodecError::ObjectTypeTooLong { len: 1000 }
        );
        assert!(Oid::new(&"a".repeat(999)).is_ok());
    }

    #[test]
    fn test_known_layout() {
        let oid = Oid::from_parts("user", "9m4e2mr0ui3e8a215n4g").unwrap();
        assert_eq!(oid.as_str(), STANDARD.encode("004User9m4e2mr0ui3e8a215n4g"));

        let parsed = Oid::parse(oid.as_str()).unwrap();
        assert_eq!(parsed.kind(), "User");
        assert_eq!(parsed.short(), "9m4e2mr0ui3e8a215n4g");
        assert_eq!(parsed, oid);
    }

    #[test]
    fn test_parse_rejects_invalid() {
        for bad in ["", "not base64!", "MDA=", "MDAwVXNlcg==", "OTk5VXNlcg==", "YWJjVXNlcg=="] {
            assert_eq!(Oid::parse(bad).unwrap_err(), CodecError::InvalidOid, "{:?}", bad);
        }
    }

    #[test]
    fn test_serde_as_string() {
        let oid = Oid::from_parts("Study", "9m4e2mr0ui3e8a215n4g").unwrap();
        let json = serde_json::to_string(&oid).unwrap();
        assert_eq!(json, format!("\"{}\"", oid.as_str()));

        let back: Oid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, oid);
        assert!(serde_json::from_str::<Oid>("\"@@\"").is_err());
    }

    #[test]
    fn test_codec_roundtrip() {
        let value = Status::Present(Oid::new("Course").unwrap());
        let text = value.encode_text(Vec::new()).unwrap().unwrap();
        assert_eq!(Status::<Oid>::from_text(Some(&text[..])).unwrap(), value);

        let mut scanned: Status<Oid> = Status::default();
        scanned.scan(&value.value().unwrap()).unwrap();
        assert_eq!(scanned, value);
    }

    proptest! {
        #[test]
        fn prop_parse_inverts_new(kind in "[a-zA-Z][a-zA-Z_]{0,40}") {
            let oid = Oid::new(&kind).unwrap();
            let parsed = Oid::parse(oid.as_str()).unwrap();
            prop_assert_eq!(parsed.kind(), normalize_kind(&kind));
            prop_assert_eq!(parsed.short(), oid.short());
        }

        #[test]
        fn prop_parse_never_panics(input in ".{0,64}") {
            let _ = Oid::parse(&input);
        }
    }
}
