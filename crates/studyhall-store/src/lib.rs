//! # Studyhall Store
//!
//! SQLite adapter for codec values. [`Column`] wraps a
//! [`Status`](studyhall_core::Status) and implements rusqlite's `ToSql` and
//! `FromSql` in terms of `Status::value` and `Status::scan`, so any
//! [`Serializable`](studyhall_core::Serializable) payload can be bound as a
//! parameter or read from a row.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rusqlite::Connection;
//! use studyhall_core::{Oid, Status};
//! use studyhall_store::{Column, RowExt};
//!
//! let conn = Connection::open_in_memory().unwrap();
//! conn.execute("CREATE TABLE node (id)", []).unwrap();
//!
//! let id = Column::from(Status::Present(Oid::new("user").unwrap()));
//! conn.execute("INSERT INTO node (id) VALUES (?1)", [&id]).unwrap();
//!
//! let back: Status<Oid> = conn
//!     .query_row("SELECT id FROM node", [], |row| row.get_status(0))
//!     .unwrap();
//! assert_eq!(back, id.0);
//! ```
//!
//! Storage classes map directly: NULL is `Status::Null`, TEXT and BLOB go
//! through the payload's text decoder, INTEGER and REAL are rejected.

pub mod column;
pub mod error;

pub use column::{Column, RowExt};
pub use error::{Result, StoreError};
