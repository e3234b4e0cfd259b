//! # Error Types
//!
//! Errors raised by the foundational types. Validation failures are never
//! errors at this level; they are data carried in an [`ErrorMap`](crate::ErrorMap).

use thiserror::Error;

/// Error converting external data into a [`Record`](crate::Record).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Records are JSON objects; any other value kind is rejected.
    #[error("a record must be a JSON object, found {found}")]
    NotAnObject {
        /// Kind of the value that was supplied.
        found: &'static str,
    },
}
