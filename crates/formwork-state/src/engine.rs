//! # Validation Engine
//!
//! Runs schemas against a record and folds the outcome into an [`ErrorMap`].
//!
//! The two entry points treat the error map asymmetrically:
//!
//! - [`validate_all`] runs the full, possibly derived schema and rebuilds the
//!   whole map from scratch. Stale entries from earlier runs never survive.
//! - [`validate_field`] runs one field's own sub-schema in isolation and
//!   patches only that field's entry. Refinements, checks, and transforms on
//!   derived layers are not consulted.
//!
//! Neither function touches the record.

use formwork_core::{ErrorMap, Record};
use formwork_schema::{FieldMapSchema, Schema};
use serde_json::{Map, Value};

use crate::error::FormError;

/// Validate the whole record against the original schema.
///
/// Returns the validated (possibly transformed) value on success and clears
/// `errors`. On failure, replaces `errors` with the failures of this run and
/// returns `None`.
pub fn validate_all(schema: &Schema, record: &Record, errors: &mut ErrorMap) -> Option<Value> {
    match schema.validate(&record.to_value()) {
        Ok(output) => {
            errors.clear();
            tracing::debug!("record validation passed");
            Some(output)
        }
        Err(violations) => {
            *errors = violations.to_error_map();
            tracing::debug!(
                violations = violations.len(),
                fields = errors.len(),
                "record validation failed"
            );
            None
        }
    }
}

/// Validate one field in isolation against its declared sub-schema.
///
/// Only `errors[field]` is touched: removed on success, replaced with this
/// run's messages on failure. Returns whether the field is valid.
///
/// # Errors
///
/// Returns `FormError::UnknownField` if `field` is not declared in `fields`.
pub fn validate_field(
    fields: &FieldMapSchema,
    record: &Record,
    field: &str,
    errors: &mut ErrorMap,
) -> Result<bool, FormError> {
    let single = fields.pick(field).ok_or_else(|| FormError::UnknownField {
        field: field.to_string(),
    })?;

    let mut isolated = Map::new();
    if let Some(value) = record.get(field) {
        isolated.insert(field.to_string(), value.clone());
    }

    match single.validate(&Value::Object(isolated)) {
        Ok(_) => {
            errors.remove(field);
            tracing::debug!(field, "field validation passed");
            Ok(true)
        }
        Err(violations) => {
            let messages: Vec<String> = violations.into_iter().map(|v| v.message).collect();
            tracing::debug!(field, messages = messages.len(), "field validation failed");
            errors.replace(field, messages);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_schema::FieldSchema;
    use serde_json::json;

    fn fields() -> FieldMapSchema {
        FieldMapSchema::new()
            .field(
                "a",
                FieldSchema::new(json!({"type": "integer", "minimum": 0}))
                    .unwrap()
                    .with_message("minimum", "a must be positive"),
            )
            .field(
                "b",
                FieldSchema::new(json!({"type": "integer", "minimum": 0}))
                    .unwrap()
                    .with_message("minimum", "b must be positive"),
            )
    }

    fn record(value: Value) -> Record {
        Record::try_from(value).unwrap()
    }

    #[test]
    fn field_validation_patches_only_its_field() {
        let mut errors = ErrorMap::from_entries([("a", "x"), ("b", "y")]);
        let valid = validate_field(&fields(), &record(json!({"a": 1, "b": -1})), "a", &mut errors).unwrap();
        assert!(valid);
        assert_eq!(errors, ErrorMap::from_entries([("b", "y")]));
    }

    #[test]
    fn field_validation_replaces_its_messages() {
        let mut errors = ErrorMap::from_entries([("a", "stale"), ("b", "y")]);
        let valid = validate_field(&fields(), &record(json!({"a": -5})), "a", &mut errors).unwrap();
        assert!(!valid);
        assert_eq!(errors.get("a"), Some(&["a must be positive".to_string()][..]));
        assert_eq!(errors.first("b"), Some("y"));
    }

    #[test]
    fn field_validation_ignores_other_fields() {
        let mut errors = ErrorMap::new();
        // "b" is missing and would fail a whole-record run.
        let valid = validate_field(&fields(), &record(json!({"a": 3})), "a", &mut errors).unwrap();
        assert!(valid);
        assert!(errors.is_empty());
    }

    #[test]
    fn unknown_field_is_a_fault() {
        let mut errors = ErrorMap::from_entries([("a", "x")]);
        let err = validate_field(&fields(), &Record::new(), "c", &mut errors).unwrap_err();
        assert!(matches!(err, FormError::UnknownField { ref field } if field == "c"));
        assert_eq!(errors.first("a"), Some("x"));
    }

    #[test]
    fn record_validation_replaces_everything() {
        let schema = Schema::from(fields());
        let mut errors = ErrorMap::from_entries([("a", "x"), ("stale", "old")]);

        assert!(validate_all(&schema, &record(json!({"a": -1, "b": -1})), &mut errors).is_none());
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(errors.get("a").map(<[String]>::len), Some(1));

        let out = validate_all(&schema, &record(json!({"a": 1, "b": 2})), &mut errors);
        assert_eq!(out, Some(json!({"a": 1, "b": 2})));
        assert!(errors.is_empty());
    }

    #[test]
    fn record_validation_applies_derived_layers() {
        let schema = Schema::from(fields())
            .refine_at(["b"], |v| v["b"].as_i64() > v["a"].as_i64(), "b must exceed a")
            .transform(|mut v| {
                v["sum"] = json!(v["a"].as_i64().unwrap_or(0) + v["b"].as_i64().unwrap_or(0));
                v
            });
        let mut errors = ErrorMap::new();

        assert!(validate_all(&schema, &record(json!({"a": 5, "b": 1})), &mut errors).is_none());
        assert_eq!(errors.first("b"), Some("b must exceed a"));

        let out = validate_all(&schema, &record(json!({"a": 1, "b": 5})), &mut errors).unwrap();
        assert_eq!(out["sum"], json!(6));
        assert!(errors.is_empty());
    }
}
