//! # formwork-cli — Command-Line Interface
//!
//! Provides the `formwork` binary for working with form definitions and
//! record files outside an application.
//!
//! ## Subcommands
//!
//! - `formwork check` — Validate a record file against a field-map
//!   definition and print the validated value or the error map.
//! - `formwork dirty` — List the fields that differ between an initial and a
//!   current record file.
//!
//! ```bash
//! formwork check --schema signup.yaml --data submission.json
//! formwork dirty --initial saved.json --current draft.yaml --exit-code
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in the `*Args` structs; each subcommand has a
//!   `run_*` handler returning the process exit code.
//! - Handlers delegate to the library crates. Rendering is separated from
//!   execution so output can be tested without a process.

pub mod check;
pub mod dirty;
pub mod input;

pub use input::load_record;
