//! # Studyhall Types
//!
//! Domain value types built on the codec contract from `studyhall-core`.
//! Each type implements [`Serializable`](studyhall_core::Serializable), so it
//! can be wrapped in [`Status`](studyhall_core::Status) and exchanged with a
//! SQL driver.
//!
//! ## Families
//!
//! - [`enums`] - Closed label sets (access levels, node types, event actions, ...)
//! - [`strings`] - Validated names and sanitized file/URL names
//! - [`Markdown`] - Source text with reference extraction and rendering
//! - [`Body`] - Text stored zstd-compressed
//! - [`Password`] - bcrypt hash with strength scoring

pub mod body;
pub mod enums;
pub mod error;
pub mod markdown;
pub mod password;
pub mod strings;

pub use body::Body;
pub use enums::{
    AccessLevel, AppleableType, CommentableType, CourseStatus, EmailType, EnrollableType,
    EnrollmentStatus, EventAction, EventType, LabelableType, MentionableType, NodeType,
    NotificationReason, NotificationSubject, ReferenceableType, TopicableType,
};
pub use error::{Result, TypeError};
pub use markdown::{CrossStudyRef, Markdown};
pub use password::Password;
pub use strings::{Color, Email, Filename, UrlSafeName, Username, WordName, WordsName, MAX_NAME_LEN};
