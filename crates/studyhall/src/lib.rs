//! # Studyhall
//!
//! The unified API for studyhall's domain value codecs.
//!
//! ## Overview
//!
//! Every persisted field of the application (ids, names, enumerations,
//! markdown, passwords) is a codec value: a payload wrapped in a tri-state
//! [`Status`] that knows how to validate input, encode to and decode from the
//! SQL wire formats, and exchange values with a driver.
//!
//! - **Core**: `Status`, the `Serializable` contract, `Oid`/`Xid`
//! - **Types**: enumerations, validated strings, `Markdown`, `Body`, `Password`
//! - **Perms**: `Operation` permission keys
//! - **Store**: rusqlite `ToSql`/`FromSql` through `Column<T>`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studyhall::{CodecConfig, PasswordHasher, Status, Username};
//!
//! async fn example() {
//!     let mut login: Status<Username> = Status::default();
//!     login.set("ada-lovelace").unwrap();
//!
//!     let hasher = PasswordHasher::new(CodecConfig::default()).unwrap();
//!     let password = hasher
//!         .hash_new("analytical engine notes 1843", &["ada-lovelace"])
//!         .await
//!         .unwrap();
//!     hasher.verify(&password, "analytical engine notes 1843").await.unwrap();
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `studyhall::core` - Status model, codec contract, identifiers
//! - `studyhall::types` - Domain value types
//! - `studyhall::perms` - Permission keys
//! - `studyhall::store` - SQLite adapter

pub mod config;
pub mod error;
pub mod hasher;

// Re-export component crates
pub use studyhall_core as core;
pub use studyhall_perms as perms;
pub use studyhall_store as store;
pub use studyhall_types as types;

// Re-export main types for convenience
pub use config::CodecConfig;
pub use error::{Error, Result};
pub use hasher::PasswordHasher;

pub use studyhall_core::{DriverValue, Oid, Serializable, Status, Xid};
pub use studyhall_perms::Operation;
pub use studyhall_store::Column;
pub use studyhall_types::{
    AccessLevel, Body, Color, Email, Filename, Markdown, NodeType, Password, UrlSafeName,
    Username, WordName, WordsName,
};
