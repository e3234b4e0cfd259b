//! # Schemas
//!
//! [`Schema`] is the closed set of schema shapes the engine understands:
//!
//! - `Object` — a [`FieldMapSchema`] enumerating named fields.
//! - `Derived` — a [`DerivedSchema`] wrapping one inner schema with an effect.
//! - `Field` — a [`FieldSchema`] constraining a single value.
//!
//! Builder methods (`refine`, `check`, `preprocess`, `transform`) wrap the
//! receiver in a new derived layer, so any schema can be decorated:
//!
//! ```ignore
//! let schema = Schema::from(fields)
//!     .refine(|v| !v["name"].as_str().unwrap_or("").contains("admin"), "Reserved name")
//!     .transform(|mut v| { v["fullName"] = json!("John Doe"); v });
//! ```
//!
//! Inner schemas are owned (`Box`), so a schema is always a finite tree and
//! unwrapping it terminates.

use serde_json::Value;

use crate::derived::{DerivedSchema, Effect};
use crate::field::FieldSchema;
use crate::object::FieldMapSchema;
use crate::violation::{Violation, Violations};

/// Any schema the engine can validate against.
#[derive(Debug, Clone)]
pub enum Schema {
    /// Field-map schema.
    Object(FieldMapSchema),
    /// Derivation wrapping an inner schema.
    Derived(DerivedSchema),
    /// Single-value schema.
    Field(FieldSchema),
}

impl Schema {
    /// Short name of the schema kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Object(_) => "field map",
            Self::Derived(_) => "derived schema",
            Self::Field(_) => "field schema",
        }
    }

    /// Validate a value, returning the (possibly transformed) output.
    pub fn validate(&self, value: &Value) -> Result<Value, Violations> {
        match self {
            Self::Object(fields) => fields.validate(value),
            Self::Derived(derived) => derived.validate(value),
            Self::Field(field) => field.validate(value),
        }
    }

    /// Wrap this schema with an arbitrary effect.
    pub fn derive(self, effect: Effect) -> Self {
        Self::Derived(DerivedSchema::new(self, effect))
    }

    /// Add a predicate reported at the root when it fails.
    pub fn refine<F>(self, check: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.refine_at(Vec::<String>::new(), check, message)
    }

    /// Add a predicate reported at `path` when it fails.
    pub fn refine_at<P, S, F>(self, path: P, check: F, message: impl Into<String>) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.derive(Effect::Refine {
            check: std::sync::Arc::new(check),
            message: message.into(),
            path: path.into_iter().map(Into::into).collect(),
        })
    }

    /// Add a check that may report several violations.
    pub fn check<F>(self, check: F) -> Self
    where
        F: Fn(&Value) -> Vec<Violation> + Send + Sync + 'static,
    {
        self.derive(Effect::Check(std::sync::Arc::new(check)))
    }

    /// Rewrite input values before validating them.
    pub fn preprocess<F>(self, map: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.derive(Effect::Preprocess(std::sync::Arc::new(map)))
    }

    /// Rewrite validated output values.
    pub fn transform<F>(self, map: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.derive(Effect::Transform(std::sync::Arc::new(map)))
    }
}

impl From<FieldMapSchema> for Schema {
    fn from(fields: FieldMapSchema) -> Self {
        Self::Object(fields)
    }
}

impl From<DerivedSchema> for Schema {
    fn from(derived: DerivedSchema) -> Self {
        Self::Derived(derived)
    }
}

impl From<FieldSchema> for Schema {
    fn from(field: FieldSchema) -> Self {
        Self::Field(field)
    }
}
