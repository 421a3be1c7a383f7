//! # Studyhall Permissions
//!
//! Permission keys. An [`Operation`] pairs an access level with a node type
//! (`"Read User"`, `"Update Lesson"`) and is used as an opaque grant key by the
//! policy layer, which lives outside this crate.
//!
//! ## Usage
//!
//! ```rust
//! use studyhall_perms::Operation;
//! use studyhall_types::{AccessLevel, NodeType};
//!
//! let op: Operation = "Read User".parse().unwrap();
//! assert_eq!(op, Operation::new(AccessLevel::Read, NodeType::User));
//! assert_eq!(op.to_string(), "Read User");
//! ```

pub mod error;
pub mod operation;

pub use error::{PermsError, Result};
pub use operation::Operation;
