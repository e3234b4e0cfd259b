//! # formwork-state — Form State Engine
//!
//! Orchestrates schema resolution, validation, and dirty tracking behind a
//! single stateful type, [`FormState`].
//!
//! ## Components
//!
//! - **Form** (`form.rs`): owns the record, its initial snapshot, the error
//!   map, and the configuration. Every mutation goes through its methods.
//!
//! - **Engine** (`engine.rs`): whole-record validation that rebuilds the
//!   error map, and single-field validation that patches one entry.
//!
//! - **Interaction** (`interaction.rs`): the validation-mode state machine
//!   deciding whether a change or blur event validates a field.
//!
//! ## Concurrency
//!
//! Every operation is synchronous and runs to completion. `FormState` does no
//! locking; mutation takes `&mut self`, so sharing across threads requires the
//! caller's own synchronization.

pub mod engine;
pub mod error;
pub mod form;
pub mod interaction;

pub use error::FormError;
pub use form::{FormState, FormStateBuilder};
pub use interaction::Interaction;

// Re-export the types callers need to build and inspect a form.
pub use formwork_core::{ErrorMap, FormConfig, Record, ValidationMode};
pub use formwork_schema::{FieldMapSchema, FieldSchema, Schema, Violation};
