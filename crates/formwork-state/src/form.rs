//! # Form State
//!
//! [`FormState`] owns a form's current record, its initial snapshot, its
//! error map, and its configuration, and is the only way to change them.
//!
//! ## Lifecycle
//!
//! ```text
//! build ──▶ set_value / handle_change / handle_blur  (mode-gated field validation)
//!   │            │
//!   │            ├──▶ validate / validate_field       (explicit validation)
//!   │            ├──▶ set_initial_values              (rebase snapshot + data)
//!   │            └──▶ clear / reset                   (drop or restore data)
//!   └─ fails if the schema does not resolve to a field map
//! ```
//!
//! ## Invariants
//!
//! - The resolved field map is fixed for the lifetime of the instance.
//! - The snapshot is an independent copy; only `set_initial_values` changes it.
//! - Dirty state is recomputed from `(data, snapshot)` on every query.
//!
//! Callers that want computed values (e.g. "can submit") wrap a `FormState`
//! in their own type and delegate; there is no subclassing hook.

use formwork_core::{dirty, ErrorMap, FormConfig, Record, ValidationMode};
use formwork_schema::{resolve, FieldMapSchema, Schema};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::engine;
use crate::error::FormError;
use crate::interaction::Interaction;

// ─── Form State ──────────────────────────────────────────────────────

/// Schema-driven form state.
#[derive(Debug, Clone)]
pub struct FormState {
    schema: Schema,
    fields: FieldMapSchema,
    data: Record,
    initial: Record,
    errors: ErrorMap,
    config: FormConfig,
}

impl FormState {
    /// Build a form from a schema, initial values, and configuration.
    ///
    /// # Errors
    ///
    /// Returns `FormError::Schema` if the schema does not resolve to a field
    /// map.
    pub fn new(
        schema: impl Into<Schema>,
        initial: Record,
        config: FormConfig,
    ) -> Result<Self, FormError> {
        let schema = schema.into();
        let fields = resolve(&schema)?.clone();
        tracing::debug!(
            fields = fields.len(),
            initial_fields = initial.len(),
            mode = %config.validation_mode,
            "form state created"
        );

        Ok(Self {
            schema,
            fields,
            initial: initial.clone(),
            data: initial,
            errors: ErrorMap::new(),
            config,
        })
    }

    /// Start building a form with default configuration and no initial data.
    pub fn builder(schema: impl Into<Schema>) -> FormStateBuilder {
        FormStateBuilder {
            schema: schema.into(),
            initial: Record::new(),
            config: FormConfig::default(),
        }
    }

    // ─── Validation ──────────────────────────────────────────────────

    /// Validate the whole record against the full schema.
    ///
    /// Returns the validated, possibly transformed value, or `None` if the
    /// record is invalid. The error map is replaced either way.
    pub fn validate(&mut self) -> Option<Value> {
        engine::validate_all(&self.schema, &self.data, &mut self.errors)
    }

    /// Validate the whole record and decode the result into `T`.
    ///
    /// # Errors
    ///
    /// Returns `FormError::Decode` if the validated value does not
    /// deserialize into `T`. An invalid record is `Ok(None)`.
    pub fn validate_into<T: DeserializeOwned>(&mut self) -> Result<Option<T>, FormError> {
        let decoded = self.validate().map(serde_json::from_value).transpose()?;
        Ok(decoded)
    }

    /// Validate one field against its own sub-schema, patching only that
    /// field's errors.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnknownField` if the field is not declared.
    pub fn validate_field(&mut self, field: &str) -> Result<(), FormError> {
        engine::validate_field(&self.fields, &self.data, field, &mut self.errors)?;
        Ok(())
    }

    // ─── Mutation ────────────────────────────────────────────────────

    /// Write a field value, then run the change-event path.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnknownField` if the field is not declared; the
    /// record is left untouched in that case.
    pub fn set_value(&mut self, field: &str, value: impl Into<Value>) -> Result<(), FormError> {
        self.ensure_declared(field)?;
        self.data.insert(field, value.into());
        self.handle_change(field)
    }

    /// Merge values into both the record and the snapshot, rebasing the
    /// dirty baseline for those fields. Does not validate.
    pub fn set_initial_values(&mut self, values: Record) {
        tracing::debug!(fields = values.len(), "rebasing initial values");
        self.initial.merge(&values);
        self.data.merge(&values);
    }

    /// Remove every field from the record and clear all errors. The snapshot
    /// is untouched.
    pub fn clear(&mut self) {
        self.data.clear();
        self.errors.clear();
    }

    /// Restore the record from the snapshot and clear all errors.
    pub fn reset(&mut self) {
        self.data.clear();
        self.data.merge(&self.initial);
        self.errors.clear();
    }

    /// Append a message to a field's errors.
    pub fn set_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(field, message);
    }

    /// Remove every error.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    // ─── Interaction Events ──────────────────────────────────────────

    /// Report a blur on a field. Validates it when the mode is `OnBlur`.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnknownField` if the field is not declared.
    pub fn handle_blur(&mut self, field: &str) -> Result<(), FormError> {
        self.handle(Interaction::Blur, field)
    }

    /// Report a change on a field. Validates it when the mode is `OnChange`.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnknownField` if the field is not declared.
    pub fn handle_change(&mut self, field: &str) -> Result<(), FormError> {
        self.handle(Interaction::Change, field)
    }

    fn handle(&mut self, event: Interaction, field: &str) -> Result<(), FormError> {
        self.ensure_declared(field)?;
        if event.triggers_validation(self.config.validation_mode) {
            tracing::trace!(field, %event, "interaction triggers field validation");
            self.validate_field(field)?;
        }
        Ok(())
    }

    fn ensure_declared(&self, field: &str) -> Result<(), FormError> {
        if self.fields.contains(field) {
            Ok(())
        } else {
            tracing::warn!(field, "operation on undeclared field rejected");
            Err(FormError::UnknownField {
                field: field.to_string(),
            })
        }
    }

    // ─── Queries ─────────────────────────────────────────────────────

    /// Whether the record differs from the snapshot.
    pub fn is_dirty(&self) -> bool {
        dirty::is_dirty(&self.data, &self.initial)
    }

    /// Whether one field differs from its snapshot value.
    pub fn is_field_dirty(&self, field: &str) -> bool {
        dirty::is_field_dirty(&self.data, &self.initial, field)
    }

    /// Sorted names of every dirty field.
    pub fn dirty_fields(&self) -> Vec<String> {
        dirty::dirty_fields(&self.data, &self.initial)
    }

    /// Whether the error map is empty. This reflects the last validation
    /// runs and manual errors; it does not validate.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The current record.
    pub fn data(&self) -> &Record {
        &self.data
    }

    /// Current value of a field.
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// The dirty-tracking baseline.
    pub fn initial_values(&self) -> &Record {
        &self.initial
    }

    /// The current error map.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Errors of one field, if any.
    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field)
    }

    /// The configuration fixed at construction.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// The validation mode fixed at construction.
    pub fn validation_mode(&self) -> ValidationMode {
        self.config.validation_mode
    }

    /// The full schema the form validates against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The field map the schema resolved to.
    pub fn fields(&self) -> &FieldMapSchema {
        &self.fields
    }
}

// ─── Builder ─────────────────────────────────────────────────────────

/// Builder for [`FormState`] with optional initial data and configuration.
#[derive(Debug, Clone)]
pub struct FormStateBuilder {
    schema: Schema,
    initial: Record,
    config: FormConfig,
}

impl FormStateBuilder {
    /// Use `values` as the initial record.
    pub fn initial_values(mut self, values: Record) -> Self {
        self.initial = values;
        self
    }

    /// Add one initial field value.
    pub fn initial_value(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.initial.insert(field, value.into());
        self
    }

    /// Replace the configuration.
    pub fn config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the validation mode.
    pub fn validation_mode(mut self, mode: ValidationMode) -> Self {
        self.config = self.config.with_validation_mode(mode);
        self
    }

    /// Build the form.
    ///
    /// # Errors
    ///
    /// Returns `FormError::Schema` if the schema does not resolve to a field
    /// map.
    pub fn build(self) -> Result<FormState, FormError> {
        FormState::new(self.schema, self.initial, self.config)
    }
}
