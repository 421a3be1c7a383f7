//! # Studyhall Testkit
//!
//! Testing utilities for studyhall codec values.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Fixed wire encodings that must never change, since
//!   they are what existing databases hold
//! - **Generators**: Proptest strategies for valid domain values
//! - **Fixtures**: A scratch SQLite table for driver round-trips
//!
//! ## Golden Vectors
//!
//! ```rust
//! use studyhall_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, got) in verify_all_vectors() {
//!     assert!(ok, "{}: {}", name, got);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use studyhall_testkit::generators::{markdown_from_params, ReferenceParams};
//!
//! proptest! {
//!     #[test]
//!     fn mentions_are_extracted(params: ReferenceParams) {
//!         let md = markdown_from_params(&params);
//!         prop_assert_eq!(md.at_refs(), params.mentions.clone());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use studyhall_core::Status;
//! use studyhall_testkit::fixtures::ValueTable;
//! use studyhall_types::Color;
//!
//! let table = ValueTable::in_memory().unwrap();
//! table.put("accent", &Status::Present(Color::new("#0366d6").unwrap())).unwrap();
//! let back: Status<Color> = table.get("accent").unwrap();
//! assert!(back.is_present());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::ValueTable;
pub use generators::{markdown_from_params, ReferenceParams};
pub use vectors::{oid_vectors, password_vectors, verify_all_vectors, xid_vectors};
