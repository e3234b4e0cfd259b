//! # Dirty Subcommand
//!
//! Compares a current record file against an initial one and lists the
//! fields whose values differ.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use formwork_core::{dirty_fields, Record};
use serde::Serialize;

use crate::input::load_record;

/// Arguments for the `formwork dirty` subcommand.
#[derive(Args, Debug)]
pub struct DirtyArgs {
    /// Record file holding the initial values.
    #[arg(long, value_name = "FILE")]
    pub initial: PathBuf,

    /// Record file holding the current values.
    #[arg(long, value_name = "FILE")]
    pub current: PathBuf,

    /// Print the result as JSON instead of one field per line.
    #[arg(long)]
    pub json: bool,

    /// Exit with status 1 when any field is dirty.
    #[arg(long)]
    pub exit_code: bool,
}

/// Fields that differ between two records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirtyReport {
    pub is_dirty: bool,
    pub fields: Vec<String>,
}

impl DirtyReport {
    /// Compare `current` against `initial`.
    pub fn compare(initial: &Record, current: &Record) -> Self {
        let fields = dirty_fields(current, initial);
        Self {
            is_dirty: !fields.is_empty(),
            fields,
        }
    }

    /// Render the report for the terminal.
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            return Ok(serde_json::to_string_pretty(self)?);
        }
        if self.is_dirty {
            Ok(self.fields.join("\n"))
        } else {
            Ok("clean".to_string())
        }
    }
}

/// Execute the dirty subcommand.
///
/// Returns exit code 0, or 1 when `--exit-code` is set and a field is dirty.
pub fn run_dirty(args: &DirtyArgs) -> Result<u8> {
    let initial = load_record(&args.initial)?;
    let current = load_record(&args.current)?;

    let report = DirtyReport::compare(&initial, &current);
    tracing::info!(dirty = report.fields.len(), "compared records");

    println!("{}", report.render(args.json)?);
    Ok(u8::from(args.exit_code && report.is_dirty))
}
