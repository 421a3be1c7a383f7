//! # Studyhall Core
//!
//! Pure primitives for studyhall's domain values: the tri-state status model,
//! the codec contract, and object identifiers.
//!
//! This crate contains no I/O. Database drivers plug in through the
//! [`Serializable`] capability and the [`DriverValue`] shape.
//!
//! ## Key Types
//!
//! - [`Status`] - `Undefined`, `Null`, or `Present(T)` wrapper carrying the codec operations
//! - [`Serializable`] - Wire capability implemented by every payload type
//! - [`DriverValue`] - The lowest-common-denominator value a SQL driver exchanges
//! - [`Oid`] - Type-tagged base64 object identifier
//! - [`Xid`] - Sortable, globally unique short id
//!
//! ## Wire Formats
//!
//! Each payload defines its text form; binary equals text unless the type
//! overrides it. `Status::encode_text` returns `Ok(None)` for NULL and an error
//! for a value that was never set.

pub mod codec;
pub mod error;
pub mod oid;
pub mod status;
pub mod xid;

pub use codec::{decode_utf8, AssignTarget, Assignable, DriverValue, Serializable};
pub use error::{CodecError, Result};
pub use oid::Oid;
pub use status::{Source, Status};
pub use xid::Xid;
