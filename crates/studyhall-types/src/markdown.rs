//! Markdown text with reference extraction and rendering.
//!
//! Three kinds of references are recognised, each starting a word (at the
//! start of the text or after whitespace):
//!
//! - `@username` mentions
//! - `#123` references within the same study
//! - `owner/name#123` references into another study

use std::fmt;

use lazy_static::lazy_static;
use pulldown_cmark::{html, Event, Parser, TagEnd};
use regex::Regex;
use studyhall_core::{decode_utf8, Assignable, Serializable};

use crate::error::{Result, TypeError};

// Patterns are ASCII-only: a digit group is always `[0-9]+` and word
// boundaries ignore non-ASCII letters.
lazy_static! {
    static ref AT_REF: Regex = Regex::new(r"(?-u:(?:^|\s)@([[:alnum:]][[:alnum:]-]*)\b)")
        .expect("at-ref pattern");
    static ref NUMBER_REF: Regex =
        Regex::new(r"(?-u:(?:^|\s)#([0-9]+)\b)").expect("number-ref pattern");
    static ref CROSS_STUDY_REF: Regex =
        Regex::new(r"(?-u:(?:^|\s)([[:alnum:]][[:alnum:]-]*)/([[:alnum:]_-]+)#([0-9]+)\b)")
            .expect("cross-study-ref pattern");
}

/// A reference to a numbered object in another study.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CrossStudyRef {
    pub owner: String,
    pub name: String,
    pub number: i32,
}

/// Raw markdown source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Markdown(String);

impl Markdown {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All `@username` mentions, in order of appearance.
    pub fn at_refs(&self) -> Vec<String> {
        AT_REF
            .captures_iter(&self.0)
            .map(|c| c[1].to_string())
            .collect()
    }

    /// All `#123` references, in order of appearance.
    pub fn number_refs(&self) -> Result<Vec<i32>> {
        NUMBER_REF
            .captures_iter(&self.0)
            .map(|c| parse_number(&c[1]))
            .collect()
    }

    /// All `owner/name#123` references, in order of appearance.
    pub fn cross_study_refs(&self) -> Result<Vec<CrossStudyRef>> {
        CROSS_STUDY_REF
            .captures_iter(&self.0)
            .map(|c| {
                Ok(CrossStudyRef {
                    owner: c[1].to_string(),
                    name: c[2].to_string(),
                    number: parse_number(&c[3])?,
                })
            })
            .collect()
    }

    /// Render to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(self.0.len() * 3 / 2);
        html::push_html(&mut out, Parser::new(&self.0));
        out
    }

    /// Render to plain text, one line per block.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        for event in Parser::new(&self.0) {
            match event {
                Event::Text(t) | Event::Code(t) => out.push_str(&t),
                Event::SoftBreak => out.push(' '),
                Event::HardBreak => out.push('\n'),
                Event::End(
                    TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::CodeBlock,
                ) => {
                    if !out.ends_with('\n') {
                        out.push('\n');
                    }
                }
                _ => {}
            }
        }
        out.trim_end().to_string()
    }
}

fn parse_number(digits: &str) -> Result<i32> {
    digits
        .parse()
        .map_err(|_| TypeError::InvalidReferenceNumber {
            input: digits.to_string(),
        })
}

impl fmt::Display for Markdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Markdown {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Serializable for Markdown {
    const TYPE_NAME: &'static str = "Markdown";
    type Error = TypeError;

    fn from_input(raw: &str) -> Result<Self> {
        Ok(Self(raw.to_string()))
    }

    fn decode_text(src: &[u8]) -> Result<Self> {
        Ok(Self(decode_utf8(src, Self::TYPE_NAME)?.to_string()))
    }

    fn encode_text(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.extend_from_slice(self.0.as_bytes());
        Ok(())
    }

    fn assignable(&self) -> Assignable<'_> {
        Assignable::Text(&self.0)
    }
}

studyhall_core::impl_source_value!(Markdown);
