//! Permission operation keys.
//!
//! The text form is `<AccessLevel> <NodeType>`, split on the first space only.
//! JSON uses the same string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use studyhall_core::{decode_utf8, Assignable, Serializable};
use studyhall_types::{AccessLevel, NodeType};

use crate::error::{PermsError, Result};

/// An access level applied to a node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Operation {
    pub access_level: AccessLevel,
    pub node_type: NodeType,
}

impl Operation {
    pub fn new(access_level: AccessLevel, node_type: NodeType) -> Self {
        Self {
            access_level,
            node_type,
        }
    }

    /// Parse `"<AccessLevel> <NodeType>"`. Both halves are case-insensitive.
    pub fn parse(s: &str) -> Result<Self> {
        let mut parts = s.splitn(2, ' ');
        let (access, node) = match (parts.next(), parts.next()) {
            (Some(access), Some(node)) => (access, node),
            _ => {
                return Err(PermsError::InvalidOperation {
                    input: s.to_string(),
                })
            }
        };

        Ok(Self {
            access_level: AccessLevel::parse(access)?,
            node_type: NodeType::parse(node)?,
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.access_level, self.node_type)
    }
}

impl FromStr for Operation {
    type Err = PermsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Operation::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Serializable for Operation {
    const TYPE_NAME: &'static str = "Operation";
    type Error = PermsError;

    fn from_input(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }

    fn decode_text(src: &[u8]) -> Result<Self> {
        Self::parse(decode_utf8(src, Self::TYPE_NAME)?)
    }

    fn encode_text(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.extend_from_slice(self.access_level.as_str().as_bytes());
        buf.push(b' ');
        buf.extend_from_slice(self.node_type.as_str().as_bytes());
        Ok(())
    }

    fn assignable(&self) -> Assignable<'_> {
        Assignable::Owned(self.to_string())
    }
}

studyhall_core::impl_source_value!(Operation);
