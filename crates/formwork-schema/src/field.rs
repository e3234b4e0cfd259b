//! # Field Schemas
//!
//! A [`FieldSchema`] constrains the value of one field. The constraint itself
//! is a JSON Schema document (Draft 2020-12) compiled once by the `jsonschema`
//! crate; the field schema adds two form-specific notions on top:
//!
//! - **Presence.** A field is required unless marked optional. A missing
//!   required field fails with keyword `required`.
//! - **Messages.** Per-keyword message overrides replace the library's
//!   message for that keyword, e.g. `minLength` → "Name must be at least 3
//!   characters".

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SchemaError;
use crate::violation::{keyword, Violation, Violations};

/// Keyword reported when a required field is missing.
pub const REQUIRED_KEYWORD: &str = "required";

/// Message used for a missing required field without an override.
pub const DEFAULT_REQUIRED_MESSAGE: &str = "Required";

/// Compiled constraint on a single field value.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "FieldDefinition", into = "FieldDefinition")]
pub struct FieldSchema {
    definition: Value,
    optional: bool,
    messages: BTreeMap<String, String>,
    validator: Arc<Validator>,
}

/// Serialized shape of a [`FieldSchema`], as written in definition files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDefinition {
    /// JSON Schema document constraining the value.
    pub schema: Value,
    /// Whether a missing value passes.
    #[serde(default)]
    pub optional: bool,
    /// Message overrides by keyword.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub messages: BTreeMap<String, String>,
}

impl FieldSchema {
    /// Compile a JSON Schema document into a required field schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Compile` if the document is not a valid schema.
    pub fn new(definition: Value) -> Result<Self, SchemaError> {
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        opts.should_validate_formats(true);

        let validator = opts.build(&definition).map_err(|e| SchemaError::Compile {
            reason: e.to_string(),
        })?;

        Ok(Self {
            definition,
            optional: false,
            messages: BTreeMap::new(),
            validator: Arc::new(validator),
        })
    }

    /// Mark the field optional: a missing value passes.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Override the message reported when `keyword` fails.
    pub fn with_message(mut self, keyword: impl Into<String>, message: impl Into<String>) -> Self {
        self.messages.insert(keyword.into(), message.into());
        self
    }

    /// Whether a missing value passes.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// The JSON Schema document this field was compiled from.
    pub fn definition(&self) -> &Value {
        &self.definition
    }

    /// Message overrides by keyword.
    pub fn messages(&self) -> &BTreeMap<String, String> {
        &self.messages
    }

    /// Validate a present value. Violation paths are relative to the value.
    pub fn check(&self, value: &Value) -> Vec<Violation> {
        self.validator
            .iter_errors(value)
            .map(|e| {
                let schema_path = e.schema_path.to_string();
                let message = self
                    .messages
                    .get(keyword(&schema_path))
                    .cloned()
                    .unwrap_or_else(|| e.to_string());
                Violation {
                    instance_path: e.instance_path.to_string(),
                    schema_path,
                    message,
                }
            })
            .collect()
    }

    /// Validate a possibly-absent value stored under `field`. Violation
    /// paths are relative to the enclosing record.
    pub fn check_field(&self, field: &str, value: Option<&Value>) -> Vec<Violation> {
        match value {
            Some(value) => self
                .check(value)
                .into_iter()
                .map(|v| v.nested_under(field))
                .collect(),
            None if self.optional => Vec::new(),
            None => vec![Violation {
                instance_path: String::new(),
                schema_path: format!("/{REQUIRED_KEYWORD}"),
                message: self.required_message(),
            }
            .nested_under(field)],
        }
    }

    /// Validate a standalone value, returning it unchanged on success.
    pub fn validate(&self, value: &Value) -> Result<Value, Violations> {
        let violations = self.check(value);
        if violations.is_empty() {
            Ok(value.clone())
        } else {
            Err(Violations::new(violations))
        }
    }

    fn required_message(&self) -> String {
        self.messages
            .get(REQUIRED_KEYWORD)
            .cloned()
            .unwrap_or_else(|| DEFAULT_REQUIRED_MESSAGE.to_string())
    }
}

impl fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("definition", &self.definition)
            .field("optional", &self.optional)
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}

impl TryFrom<FieldDefinition> for FieldSchema {
    type Error = SchemaError;

    fn try_from(def: FieldDefinition) -> Result<Self, Self::Error> {
        let mut field = Self::new(def.schema)?;
        field.optional = def.optional;
        field.messages = def.messages;
        Ok(field)
    }
}

impl From<FieldSchema> for FieldDefinition {
    fn from(field: FieldSchema) -> Self {
        Self {
            schema: field.definition,
            optional: field.optional,
            messages: field.messages,
        }
    }
}
