//! # formwork-schema — Form Schemas
//!
//! Defines the schemas forms are validated against and how they are resolved
//! to a field map.
//!
//! ## Schema Shapes (`schema`)
//!
//! [`Schema`] is a closed enum of field maps ([`FieldMapSchema`]), derivation
//! wrappers ([`DerivedSchema`]), and single-value schemas ([`FieldSchema`]).
//! Per-field constraints are JSON Schema documents compiled by the
//! `jsonschema` crate.
//!
//! ## Resolution (`resolve`)
//!
//! [`resolve`] unwraps any number of derivation layers to reach the field map
//! that per-field operations need.
//!
//! ## Definitions
//!
//! Field maps deserialize from YAML or JSON definition documents
//! ([`FieldMapSchema::load`]). Derivation effects are Rust closures and are
//! added in code.
//!
//! ## Crate Policy
//!
//! - Depends only on `formwork-core` internally.
//! - Validation failures are data ([`Violations`]), never errors.
//!   [`SchemaError`] is reserved for schemas that cannot be built or resolved.

pub mod derived;
pub mod error;
pub mod field;
pub mod object;
pub mod resolve;
pub mod schema;
pub mod violation;

pub use derived::{CheckFn, DerivedSchema, Effect, MapFn, RefineFn};
pub use error::SchemaError;
pub use field::{FieldDefinition, FieldSchema, DEFAULT_REQUIRED_MESSAGE, REQUIRED_KEYWORD};
pub use object::FieldMapSchema;
pub use resolve::{derivation_depth, resolve};
pub use schema::Schema;
pub use violation::{Violation, Violations, REFINE_SCHEMA_PATH};
