//! # Form Errors
//!
//! Faults raised by the form state engine. Only programmer errors land here:
//! a schema that cannot back a form, or an operation naming a field the
//! schema does not declare. Validation failures are never faults; they are
//! entries in the form's error map.

use formwork_schema::SchemaError;
use thiserror::Error;

/// Error raised by [`FormState`](crate::FormState) operations.
#[derive(Error, Debug)]
pub enum FormError {
    /// The schema cannot back a form.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A schema-dependent operation named an undeclared field.
    #[error("field '{field}' is not declared in the form schema")]
    UnknownField {
        /// The undeclared field name.
        field: String,
    },

    /// The validated value does not deserialize into the requested type.
    #[error("validated value does not decode into the requested type: {0}")]
    Decode(#[from] serde_json::Error),
}
