//! # Check Subcommand
//!
//! Validates a record file against a field-map definition file, the same way
//! a form validates on submit.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use formwork_core::{ErrorMap, FormConfig, Record, FORM_ERROR_KEY};
use formwork_schema::FieldMapSchema;
use formwork_state::FormState;
use serde_json::Value;

use crate::input::load_record;

/// Arguments for the `formwork check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Field-map definition file (YAML or JSON).
    #[arg(long, value_name = "FILE")]
    pub schema: PathBuf,

    /// Record file to validate (YAML or JSON).
    #[arg(long, value_name = "FILE")]
    pub data: PathBuf,

    /// Print the result as JSON instead of a text report.
    #[arg(long)]
    pub json: bool,
}

/// Result of validating one record.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// The record passed; holds the validated value.
    Valid(Value),
    /// The record failed; holds the error map of the run.
    Invalid(ErrorMap),
}

impl CheckOutcome {
    /// Exit code for this outcome: 0 when valid, 1 when invalid.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Valid(_) => 0,
            Self::Invalid(_) => 1,
        }
    }

    /// Render the outcome for the terminal.
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            let rendered = match self {
                Self::Valid(value) => serde_json::to_string_pretty(value)?,
                Self::Invalid(errors) => serde_json::to_string_pretty(errors)?,
            };
            return Ok(rendered);
        }

        let mut out = String::new();
        match self {
            Self::Valid(value) => {
                writeln!(out, "OK: record is valid")?;
                write!(out, "{}", serde_json::to_string_pretty(value)?)?;
            }
            Self::Invalid(errors) => {
                writeln!(out, "FAIL: {} field(s) with errors", errors.len())?;
                for (field, messages) in errors.iter() {
                    let label = if field == FORM_ERROR_KEY { "(form)" } else { field };
                    for message in messages {
                        writeln!(out, "  {label}: {message}")?;
                    }
                }
            }
        }
        Ok(out.trim_end().to_string())
    }
}

/// Validate `record` against `fields` with whole-record validation.
pub fn check_record(fields: FieldMapSchema, record: Record) -> Result<CheckOutcome> {
    let mut form = FormState::new(fields, record, FormConfig::default())
        .context("failed to build form state")?;

    let outcome = match form.validate() {
        Some(value) => CheckOutcome::Valid(value),
        None => CheckOutcome::Invalid(form.errors().clone()),
    };
    Ok(outcome)
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when the record is valid, 1 when it is not.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let fields = FieldMapSchema::load(&args.schema)
        .with_context(|| format!("failed to load schema {}", args.schema.display()))?;
    let record = load_record(&args.data)?;

    tracing::info!(
        schema = %args.schema.display(),
        data = %args.data.display(),
        fields = fields.len(),
        "checking record"
    );

    let outcome = check_record(fields, record)?;
    println!("{}", outcome.render(args.json)?);
    Ok(outcome.exit_code())
}
