//! Salted password hashes.
//!
//! A `Password` holds a bcrypt hash and, when freshly created, the plaintext
//! it was made from so that strength can be scored before the plaintext is
//! dropped. Only the hash reaches the wire.
//!
//! Wire format differs between the two forms: text is `\x` followed by the
//! lowercase hex of the hash, binary is the raw hash bytes.

use std::fmt;

use studyhall_core::{Assignable, CodecError, Serializable};

use crate::error::{Result, TypeError};

/// bcrypt cost used by [`Password::new`].
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

/// bcrypt only reads this many bytes of input; longer plaintexts are refused
/// rather than silently truncated.
pub const MAX_PLAINTEXT_LEN: usize = 72;

const HEX_PREFIX: &[u8] = b"\\x";

/// A bcrypt password hash.
#[derive(Clone)]
pub struct Password {
    hash: Vec<u8>,
    plaintext: Option<String>,
}

impl Password {
    /// Hash `plaintext` at the default cost.
    ///
    /// # Panics
    ///
    /// Panics if the bcrypt primitive itself fails.
    pub fn new(plaintext: &str) -> Result<Self> {
        Self::with_cost(plaintext, DEFAULT_COST)
    }

    /// Hash `plaintext` at the given cost.
    ///
    /// # Panics
    ///
    /// Panics if the bcrypt primitive itself fails. Input problems (empty or
    /// over-long password, cost out of range) are returned as errors before
    /// hashing.
    pub fn with_cost(plaintext: &str, cost: u32) -> Result<Self> {
        validate_plaintext(plaintext)?;
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(TypeError::InvalidBcryptCost { cost });
        }

        let hash = bcrypt::hash(plaintext, cost)
            .unwrap_or_else(|e| panic!("bcrypt hashing failed: {}", e));

        Ok(Self {
            hash: hash.into_bytes(),
            plaintext: Some(plaintext.to_string()),
        })
    }

    /// Wrap an existing hash. The plaintext is unknown.
    pub fn from_hash(hash: impl Into<Vec<u8>>) -> Self {
        Self {
            hash: hash.into(),
            plaintext: None,
        }
    }

    /// The raw hash bytes.
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    /// Whether the plaintext is still held (it is not after a wire round-trip).
    pub fn has_plaintext(&self) -> bool {
        self.plaintext.is_some()
    }

    /// Score the plaintext and reject it below `min_score` (0 to 4).
    ///
    /// Returns the score on success.
    pub fn check_strength(&self, min_score: u8) -> Result<u8> {
        self.check_strength_with(min_score, &[])
    }

    /// Like [`check_strength`](Self::check_strength), penalising passwords built
    /// from user-specific words such as the username or email.
    pub fn check_strength_with(&self, min_score: u8, user_inputs: &[&str]) -> Result<u8> {
        let plaintext = self
            .plaintext
            .as_deref()
            .ok_or(TypeError::PasswordPlaintextUnavailable)?;
        check_plaintext_strength(plaintext, min_score, user_inputs)
    }

    /// Check a candidate against the hash in constant time.
    ///
    /// Candidates longer than [`MAX_PLAINTEXT_LEN`] never match, since no
    /// stored hash can have been made from one.
    pub fn compare_to_password(&self, candidate: &str) -> Result<()> {
        let hash = std::str::from_utf8(&self.hash)
            .map_err(|_| TypeError::InvalidHash("hash is not UTF-8".into()))?;
        if candidate.len() > MAX_PLAINTEXT_LEN {
            return Err(TypeError::PasswordMismatch);
        }

        match bcrypt::verify(candidate, hash) {
            Ok(true) => Ok(()),
            Ok(false) => Err(TypeError::PasswordMismatch),
            Err(e) => Err(TypeError::InvalidHash(e.to_string())),
        }
    }
}

/// Score a plaintext before any hashing, rejecting it below `min_score`.
///
/// Returns the score on success.
pub fn check_plaintext_strength(
    plaintext: &str,
    min_score: u8,
    user_inputs: &[&str],
) -> Result<u8> {
    validate_plaintext(plaintext)?;

    let score = zxcvbn::zxcvbn(plaintext, user_inputs)
        .map(|entropy| entropy.score())
        .unwrap_or(0);

    if score < min_score {
        tracing::debug!(score, min_score, "password rejected as too weak");
        return Err(TypeError::PasswordTooWeak { score, min_score });
    }
    Ok(score)
}

fn validate_plaintext(plaintext: &str) -> Result<()> {
    if plaintext.is_empty() {
        return Err(TypeError::PasswordEmpty);
    }
    if plaintext.len() > MAX_PLAINTEXT_LEN {
        return Err(TypeError::PasswordTooLong {
            len: plaintext.len(),
        });
    }
    Ok(())
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("hash_len", &self.hash.len())
            .field("plaintext", &self.plaintext.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Serializable for Password {
    const TYPE_NAME: &'static str = "Password";
    type Error = TypeError;

    fn from_input(raw: &str) -> Result<Self> {
        Self::new(raw)
    }

    fn decode_text(src: &[u8]) -> Result<Self> {
        let hex_digits = src.strip_prefix(HEX_PREFIX).ok_or_else(|| CodecError::CannotConvert {
            value: "text without \\x prefix".into(),
            type_name: Self::TYPE_NAME,
        })?;
        let hash = hex::decode(hex_digits).map_err(|e| TypeError::InvalidHash(e.to_string()))?;
        Ok(Self::from_hash(hash))
    }

    fn encode_text(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.extend_from_slice(HEX_PREFIX);
        buf.extend_from_slice(hex::encode(&self.hash).as_bytes());
        Ok(())
    }

    fn decode_binary(src: &[u8]) -> Result<Self> {
        Ok(Self::from_hash(src))
    }

    fn encode_binary(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.extend_from_slice(&self.hash);
        Ok(())
    }

    fn assignable(&self) -> Assignable<'_> {
        Assignable::Bytes(&self.hash)
    }
}

studyhall_core::impl_source_value!(Password);

#[cfg(test)]
mod tests {
    use super::*;
    use studyhall_core::{DriverValue, Status};

    fn quick(plaintext: &str) -> Password {
        Password::with_cost(plaintext, MIN_COST).unwrap()
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Password::new("").unwrap_err(), TypeError::PasswordEmpty);
    }

    #[test]
    fn test_cost_out_of_range() {
        assert_eq!(
            Password::with_cost("secret", 3).unwrap_err(),
            TypeError::InvalidBcryptCost { cost: 3 }
        );
        assert!(Password::with_cost("secret", 32).is_err());
    }

    #[test]
    fn test_default_cost_hash() {
        let pw = Password::new("correct horse battery staple").unwrap();
        assert!(pw.hash().starts_with(b"$2"));
        assert!(std::str::from_utf8(pw.hash()).unwrap().contains("$12$"));
    }

    #[test]
    fn test_compare() {
        let pw = quick("hunter2-but-longer");
        assert!(pw.compare_to_password("hunter2-but-longer").is_ok());
        assert_eq!(
            pw.compare_to_password("hunter3-but-longer").unwrap_err(),
            TypeError::PasswordMismatch
        );
    }

    #[test]
    fn test_plaintext_length_limit() {
        let at_limit = "a".repeat(MAX_PLAINTEXT_LEN);
        let pw = quick(&at_limit);
        assert!(pw.compare_to_password(&at_limit).is_ok());

        let over = format!("{}right", at_limit);
        assert_eq!(
            Password::with_cost(&over, MIN_COST).unwrap_err(),
            TypeError::PasswordTooLong { len: 77 }
        );

        // A candidate sharing the first 72 bytes must not match.
        assert_eq!(
            pw.compare_to_password(&format!("{}WRONG", at_limit)).unwrap_err(),
            TypeError::PasswordMismatch
        );
    }

    #[test]
    fn test_plaintext_strength_before_hashing() {
        assert!(check_plaintext_strength("Tr0ub4dour&3-horse-staple-battery", 3, &[]).is_ok());
        assert!(matches!(
            check_plaintext_strength("password", 3, &[]).unwrap_err(),
            TypeError::PasswordTooWeak { .. }
        ));
        assert_eq!(
            check_plaintext_strength("", 0, &[]).unwrap_err(),
            TypeError::PasswordEmpty
        );
    }

    #[test]
    fn test_hashes_are_salted() {
        assert_ne!(quick("same").hash(), quick("same").hash());
    }

    #[test]
    fn test_strength() {
        assert!(quick("Tr0ub4dour&3-horse-staple-battery").check_strength(3).is_ok());
        assert!(matches!(
            quick("password").check_strength(3).unwrap_err(),
            TypeError::PasswordTooWeak { min_score: 3, .. }
        ));
    }

    #[test]
    fn test_strength_penalises_user_inputs() {
        let pw = quick("marisolmarisol");
        let plain = pw.check_strength(0).unwrap();
        let with_user = pw.check_strength_with(0, &["marisol"]).unwrap();
        assert!(with_user <= plain);
    }

    #[test]
    fn test_strength_needs_plaintext() {
        let pw = Password::from_hash(quick("whatever").hash().to_vec());
        assert_eq!(
            pw.check_strength(0).unwrap_err(),
            TypeError::PasswordPlaintextUnavailable
        );
    }

    #[test]
    fn test_text_wire_is_prefixed_hex() {
        let pw = Password::from_hash(b"\x01\xab".to_vec());
        let mut buf = Vec::new();
        pw.encode_text(&mut buf).unwrap();
        assert_eq!(buf, b"\\x01ab");
        assert_eq!(Password::decode_text(&buf).unwrap(), pw);

        assert!(Password::decode_text(b"01ab").is_err());
        assert!(Password::decode_text(b"\\xzz").is_err());
    }

    #[test]
    fn test_binary_wire_is_raw() {
        let pw = quick("binary-wire");
        let mut buf = Vec::new();
        pw.encode_binary(&mut buf).unwrap();
        assert_eq!(buf, pw.hash());

        let back = Password::decode_binary(&buf).unwrap();
        assert_eq!(back, pw);
        assert!(!back.has_plaintext());
        assert!(back.compare_to_password("binary-wire").is_ok());
    }

    #[test]
    fn test_scan_value_roundtrip() {
        let value = Status::Present(quick("scan-me"));
        let driver = value.value().unwrap();
        assert!(matches!(&driver, DriverValue::Text(s) if s.starts_with("\\x")));

        let mut back: Status<Password> = Status::default();
        back.scan(&driver).unwrap();
        assert_eq!(back, value);

        let mut raw = Vec::new();
        back.assign_to(&mut raw).unwrap();
        assert_eq!(raw, value.present().unwrap().hash());
    }

    #[test]
    fn test_debug_redacts() {
        let pw = quick("do-not-print");
        let debug = format!("{:?}", pw);
        assert!(!debug.contains("do-not-print"));
        assert!(debug.contains("<redacted>"));
    }
}
