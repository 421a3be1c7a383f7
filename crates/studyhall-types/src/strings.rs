//! Validated and sanitized string values.
//!
//! Two families live here and must not be confused:
//!
//! - Rejecting types (`Email`, `Username`, `WordName`, `WordsName`, `Color`)
//!   refuse input that does not match their pattern.
//! - Sanitizing types (`Filename`, `UrlSafeName`) never fail; they rewrite
//!   offending characters to `-` before storing.
//!
//! Wire decoding trusts stored text and does not re-validate.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use studyhall_core::{decode_utf8, Assignable, Serializable};

use crate::error::{Result, TypeError};

/// Maximum length of user-chosen names.
pub const MAX_NAME_LEN: usize = 39;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .expect("email pattern");
    static ref ALNUM_HYPHEN: Regex = Regex::new(r"^[a-zA-Z0-9-]+$").expect("name pattern");
    static ref HYPHENATED: Regex =
        Regex::new(r"^[a-zA-Z0-9]+(?:-[a-zA-Z0-9]+)*$").expect("username pattern");
    static ref ALNUM_HYPHEN_UNDERSCORE: Regex =
        Regex::new(r"^[a-zA-Z0-9_-]+$").expect("words name pattern");
    static ref COLOR: Regex = Regex::new(r"^#?[0-9a-fA-F]{3,8}$").expect("color pattern");
    static ref FILENAME_UNSAFE: Regex = Regex::new(r"[^a-zA-Z0-9_.-]").expect("filename pattern");
    static ref URL_UNSAFE: Regex = Regex::new(r"[^a-zA-Z0-9_.~-]").expect("url pattern");
}

/// Implements the common string plumbing: accessors, display, and the codec
/// contract, with `$validate` as the `Set` path.
macro_rules! string_value {
    ($name:ident, $validate:expr) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = TypeError;

            fn from_str(s: &str) -> Result<Self> {
                <Self as Serializable>::from_input(s)
            }
        }

        impl Serializable for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            type Error = TypeError;

            fn from_input(raw: &str) -> Result<Self> {
                ($validate)(raw)
            }

            fn decode_text(src: &[u8]) -> Result<Self> {
                Ok($name(decode_utf8(src, Self::TYPE_NAME)?.to_string()))
            }

            fn encode_text(&self, buf: &mut Vec<u8>) -> Result<()> {
                buf.extend_from_slice(self.0.as_bytes());
                Ok(())
            }

            fn assignable(&self) -> Assignable<'_> {
                Assignable::Text(&self.0)
            }
        }

        studyhall_core::impl_source_value!($name);
    };
}

/// An email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(s: &str) -> Result<Self> {
        if !EMAIL.is_match(s) {
            return Err(TypeError::NoMatch {
                type_name: "Email",
                input: s.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

string_value!(Email, Email::new);

/// A login name: alphanumerics separated by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(s: &str) -> Result<Self> {
        let len = s.chars().count();
        if len == 0 || len > MAX_NAME_LEN {
            return Err(TypeError::InvalidUsernameLength { len });
        }
        if !ALNUM_HYPHEN.is_match(s) {
            return Err(TypeError::InvalidUsernameCharacters);
        }
        if !HYPHENATED.is_match(s) {
            return Err(TypeError::InvalidUsernameHyphens);
        }
        Ok(Self(s.to_string()))
    }
}

string_value!(Username, Username::new);

/// A single-word name: alphanumerics and hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordName(String);

impl WordName {
    pub fn new(s: &str) -> Result<Self> {
        let len = s.chars().count();
        if len > MAX_NAME_LEN {
            return Err(TypeError::InvalidWordNameLength { len });
        }
        if !ALNUM_HYPHEN.is_match(s) {
            return Err(TypeError::InvalidWordNameCharacters);
        }
        Ok(Self(s.to_string()))
    }
}

string_value!(WordName, WordName::new);

/// A multi-word name joined by hyphens or underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordsName(String);

impl WordsName {
    pub fn new(s: &str) -> Result<Self> {
        let len = s.chars().count();
        if len == 0 || len > MAX_NAME_LEN {
            return Err(TypeError::InvalidWordsNameLength { len });
        }
        if !ALNUM_HYPHEN_UNDERSCORE.is_match(s) {
            return Err(TypeError::InvalidWordsNameCharacters);
        }
        Ok(Self(s.to_string()))
    }
}

string_value!(WordsName, WordsName::new);

/// A hex color such as `#fff` or `0366d6`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn new(s: &str) -> Result<Self> {
        if !COLOR.is_match(s) {
            return Err(TypeError::InvalidColor {
                input: s.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

string_value!(Color, Color::new);

/// A file name. Characters outside `[a-zA-Z0-9_.-]` become `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Filename(String);

impl Filename {
    pub fn new(s: &str) -> Self {
        Self(FILENAME_UNSAFE.replace_all(s, "-").into_owned())
    }
}

string_value!(Filename, |raw| Ok(Filename::new(raw)));

/// A name safe to embed in a URL path. Characters outside the unreserved set become `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlSafeName(String);

impl UrlSafeName {
    pub fn new(s: &str) -> Self {
        Self(URL_UNSAFE.replace_all(s, "-").into_owned())
    }
}

string_value!(UrlSafeName, |raw| Ok(UrlSafeName::new(raw)));
