//! Short, sortable, globally unique ids.
//!
//! Layout (12 bytes): 4-byte big-endian unix seconds, 3-byte machine id,
//! 2-byte process id, 3-byte big-endian counter. Rendered as 20 characters of
//! lowercase base32hex, so string order matches creation order.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use lazy_static::lazy_static;

use crate::error::CodecError;

/// Length of the encoded form.
pub const ENCODED_LEN: usize = 20;

const RAW_LEN: usize = 12;
const ALPHABET: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

lazy_static! {
    static ref MACHINE_ID: [u8; 3] = rand::random();
    static ref COUNTER: AtomicU32 = AtomicU32::new(rand::random());
}

/// A 12-byte XID.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Xid([u8; RAW_LEN]);

impl Xid {
    /// Generate a new id stamped with the current time.
    ///
    /// Safe to call from any thread; the counter is shared and atomic.
    pub fn new() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0);
        Self::with_time(secs)
    }

    /// Generate a new id stamped with the given unix seconds.
    pub fn with_time(secs: u32) -> Self {
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
        let pid = std::process::id() as u16;

        let mut raw = [0u8; RAW_LEN];
        raw[0..4].copy_from_slice(&secs.to_be_bytes());
        raw[4..7].copy_from_slice(&*MACHINE_ID);
        raw[7..9].copy_from_slice(&pid.to_be_bytes());
        raw[9..12].copy_from_slice(&counter.to_be_bytes()[1..]);
        Self(raw)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; RAW_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; RAW_LEN] {
        &self.0
    }

    /// Creation time in unix seconds.
    pub fn time(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    pub fn machine(&self) -> [u8; 3] {
        [self.0[4], self.0[5], self.0[6]]
    }

    pub fn pid(&self) -> u16 {
        u16::from_be_bytes([self.0[7], self.0[8]])
    }

    pub fn counter(&self) -> u32 {
        u32::from_be_bytes([0, self.0[9], self.0[10], self.0[11]])
    }

    /// Encode as 20 base32hex characters.
    pub fn encode(&self) -> String {
        let mut result = String::with_capacity(ENCODED_LEN);
        let mut buffer: u64 = 0;
        let mut bits_in_buffer = 0;

        for &byte in &self.0 {
            buffer = (buffer << 8) | (byte as u64);
            bits_in_buffer += 8;

            while bits_in_buffer >= 5 {
                bits_in_buffer -= 5;
                let index = ((buffer >> bits_in_buffer) & 0x1f) as usize;
                result.push(ALPHABET[index] as char);
            }
        }

        if bits_in_buffer > 0 {
            let index = ((buffer << (5 - bits_in_buffer)) & 0x1f) as usize;
            result.push(ALPHABET[index] as char);
        }

        result
    }

    /// Decode from the 20-character form.
    pub fn decode(s: &str) -> Result<Self, CodecError> {
        let invalid = || CodecError::InvalidShortId(s.to_string());
        if s.len() != ENCODED_LEN {
            return Err(invalid());
        }

        let mut raw = [0u8; RAW_LEN];
        let mut filled = 0;
        let mut buffer: u64 = 0;
        let mut bits_in_buffer = 0;

        for c in s.bytes() {
            let value = match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'v' => c - b'a' + 10,
                _ => return Err(invalid()),
            };
            buffer = (buffer << 5) | value as u64;
            bits_in_buffer += 5;

            if bits_in_buffer >= 8 {
                bits_in_buffer -= 8;
                if filled < RAW_LEN {
                    raw[filled] = (buffer >> bits_in_buffer) as u8;
                    filled += 1;
                }
            }
        }

        // Trailing padding bits must be zero, otherwise two strings would
        // decode to the same id.
        if filled != RAW_LEN || buffer & ((1 << bits_in_buffer) - 1) != 0 {
            return Err(invalid());
        }

        Ok(Self(raw))
    }
}

impl Default for Xid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Xid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for Xid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Xid({})", self.encode())
    }
}

impl FromStr for Xid {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
