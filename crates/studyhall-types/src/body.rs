//! Long-form text stored compressed.
//!
//! In memory a `Body` is plain text. On the wire (both text and binary forms)
//! it is a zstd frame. A stored frame that fails to decompress is an error,
//! never garbled text.

use std::fmt;
use std::io::Read;

use studyhall_core::{Assignable, CodecError, DriverValue, Serializable};

use crate::error::{Result, TypeError};

/// zstd level used when writing.
pub const COMPRESSION_LEVEL: i32 = 3;

/// Largest decompressed body accepted from storage (16 MiB).
pub const MAX_BODY_SIZE: usize = 16 * 1024 * 1024;

/// Plain text that is compressed on write and decompressed on read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Body(String);

impl Body {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Compress the text.
    pub fn compress(&self) -> Result<Vec<u8>> {
        zstd::encode_all(self.0.as_bytes(), COMPRESSION_LEVEL)
            .map_err(|e| TypeError::CompressionFailed(e.to_string()))
    }

    /// Decompress stored bytes back into text.
    pub fn decompress(compressed: &[u8]) -> Result<Self> {
        Self::decompress_limited(compressed, MAX_BODY_SIZE)
    }

    /// Decompress, refusing output larger than `max` bytes.
    pub fn decompress_limited(compressed: &[u8], max: usize) -> Result<Self> {
        let decoder = zstd::Decoder::new(compressed)
            .map_err(|e| TypeError::DecompressionFailed(e.to_string()))?;

        let mut raw = Vec::new();
        decoder
            .take(max as u64 + 1)
            .read_to_end(&mut raw)
            .map_err(|e| TypeError::DecompressionFailed(e.to_string()))?;
        if raw.len() > max {
            return Err(TypeError::BodyTooLarge { max });
        }

        let text = String::from_utf8(raw).map_err(|_| CodecError::InvalidUtf8 {
            type_name: Self::TYPE_NAME,
        })?;
        Ok(Self(text))
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serializable for Body {
    const TYPE_NAME: &'static str = "Body";
    type Error = TypeError;

    fn from_input(raw: &str) -> Result<Self> {
        Ok(Self(raw.to_string()))
    }

    fn decode_text(src: &[u8]) -> Result<Self> {
        Self::decompress(src)
    }

    fn encode_text(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.extend_from_slice(&self.compress()?);
        Ok(())
    }

    fn assignable(&self) -> Assignable<'_> {
        Assignable::Text(&self.0)
    }

    fn to_driver(&self) -> Result<DriverValue> {
        Ok(DriverValue::Blob(self.compress()?))
    }
}

studyhall_core::impl_source_value!(Body);
