//! # Field-Map Schemas
//!
//! A [`FieldMapSchema`] enumerates the declared fields of a record, each with
//! its own [`FieldSchema`]. It is the schema shape every form resolves to.
//!
//! Validation checks every declared field independently, so a record with
//! several bad fields reports all of them in one pass. On success the output
//! keeps only declared fields; undeclared keys are stripped.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::field::FieldSchema;
use crate::violation::{Violation, Violations};

/// Schema enumerating named fields and their sub-schemas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldMapSchema {
    fields: BTreeMap<String, FieldSchema>,
}

impl FieldMapSchema {
    /// Create a field map with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field, replacing any earlier declaration of the same name.
    pub fn field(mut self, name: impl Into<String>, schema: FieldSchema) -> Self {
        self.fields.insert(name.into(), schema);
        self
    }

    /// Sub-schema of a declared field.
    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.get(name)
    }

    /// Whether a field is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Declared field names, sorted.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// A field map containing only `name` and its sub-schema.
    ///
    /// Returns `None` if `name` is not declared.
    pub fn pick(&self, name: &str) -> Option<FieldMapSchema> {
        let schema = self.fields.get(name)?;
        Some(Self::new().field(name, schema.clone()))
    }

    /// Validate a record value.
    ///
    /// Non-object values fail with a single root violation. On success the
    /// returned object holds the declared fields that were present.
    pub fn validate(&self, value: &Value) -> Result<Value, Violations> {
        let Value::Object(record) = value else {
            return Err(Violations::new(vec![Violation {
                instance_path: String::new(),
                schema_path: "/type".to_string(),
                message: format!("{value} is not of type \"object\""),
            }]));
        };

        let violations: Vec<Violation> = self
            .fields
            .iter()
            .flat_map(|(name, field)| field.check_field(name, record.get(name)))
            .collect();

        if !violations.is_empty() {
            return Err(Violations::new(violations));
        }

        let output: Map<String, Value> = self
            .fields
            .keys()
            .filter_map(|name| record.get(name).map(|v| (name.clone(), v.clone())))
            .collect();
        Ok(Value::Object(output))
    }

    /// Parse a field-map definition from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Definition` if the text is not a valid definition
    /// or any field's JSON Schema fails to compile.
    pub fn from_yaml_str(source_name: &str, text: &str) -> Result<Self, SchemaError> {
        serde_yaml::from_str(text).map_err(|e| SchemaError::Definition {
            source_name: source_name.to_string(),
            reason: format!("invalid YAML definition: {e}"),
        })
    }

    /// Parse a field-map definition from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Definition` if the text is not a valid definition
    /// or any field's JSON Schema fails to compile.
    pub fn from_json_str(source_name: &str, text: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(text).map_err(|e| SchemaError::Definition {
            source_name: source_name.to_string(),
            reason: format!("invalid JSON definition: {e}"),
        })
    }

    /// Load a field-map definition from a file.
    ///
    /// The format follows the extension: `.yaml`/`.yml` for YAML, anything
    /// else is parsed as JSON.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Io` if the file cannot be read and
    /// `SchemaError::Definition` if its contents are rejected.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let content = std::fs::read_to_string(path)?;
        let source_name = path.display().to_string();

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let schema = match ext {
            "yaml" | "yml" => Self::from_yaml_str(&source_name, &content)?,
            _ => Self::from_json_str(&source_name, &content)?,
        };

        tracing::debug!(path = %source_name, fields = schema.len(), "loaded field-map definition");
        Ok(schema)
    }
}
