//! # formwork-core — Foundational Types for Form State
//!
//! This crate defines the data model shared by every other formwork crate.
//! It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Records are explicit maps.** A [`Record`] is an ordered mapping from
//!    field name to JSON value. Fields are inserted, removed, and merged through
//!    named operations; there is no "assign anything anywhere" access.
//!
//! 2. **Error maps never hold empty lists.** [`ErrorMap`] removes a field's
//!    entry the moment its message list would become empty. Absence of a key is
//!    the only way to say "this field has no errors".
//!
//! 3. **Dirty state is computed, never stored.** [`dirty`] exposes pure
//!    functions of `(record, snapshot)`. Nothing in the stack caches the answer.
//!
//! 4. **Equality is structural and bounded.** [`equality::values_equal`] walks
//!    the JSON value universe (null, bool, number, string, array, object) and
//!    nothing else. A missing key and a key holding `null` are different.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `formwork-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod dirty;
pub mod equality;
pub mod error;
pub mod error_map;
pub mod record;

// Re-export primary types for ergonomic imports.
pub use config::{FormConfig, ValidationMode};
pub use dirty::{dirty_fields, is_dirty, is_field_dirty};
pub use equality::{records_equal, values_equal};
pub use error::RecordError;
pub use error_map::{ErrorMap, FORM_ERROR_KEY};
pub use record::Record;
