//! # Schema Errors
//!
//! Errors raised while building or resolving schemas. A record failing its
//! schema is not an error here; that outcome is reported as
//! [`Violations`](crate::Violations).

use thiserror::Error;

/// Error building, loading, or resolving a schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema is neither a field map nor a derivation wrapping one.
    #[error("schema does not resolve to a field map: found {found} after unwrapping {depth} derivation layer(s)")]
    NotFieldMap {
        /// Kind of the schema where resolution stopped.
        found: &'static str,
        /// Number of derivation layers unwrapped before stopping.
        depth: usize,
    },

    /// A field's JSON Schema document could not be compiled.
    #[error("invalid JSON Schema: {reason}")]
    Compile {
        /// Reason reported by the schema compiler.
        reason: String,
    },

    /// A schema definition document could not be parsed.
    #[error("schema definition error for '{source_name}': {reason}")]
    Definition {
        /// File path or other name of the definition source.
        source_name: String,
        /// Reason the definition was rejected.
        reason: String,
    },

    /// IO error reading a definition file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
