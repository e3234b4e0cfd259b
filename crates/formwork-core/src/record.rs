//! # Field Records
//!
//! A [`Record`] is the value set of a form: an ordered mapping from field name
//! to [`serde_json::Value`]. Records are not necessarily fully populated; a
//! field may be absent, and absence is distinct from holding `null`.
//!
//! All mutation goes through named operations (`insert`, `remove`, `merge`,
//! `clear`). The inner map is private so the owning form state is the only
//! writer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RecordError;

/// Ordered mapping from field name to current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Look up the value of a field. `None` means the field is absent.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Whether the field is present (possibly holding `null`).
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Write a field value, returning the previous value if one was present.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    /// Remove a field entirely, returning its value if it was present.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Copy every field of `other` into this record, overwriting existing
    /// values field by field. Fields not named in `other` are left alone.
    pub fn merge(&mut self, other: &Record) {
        for (field, value) in &other.0 {
            self.0.insert(field.clone(), value.clone());
        }
    }

    /// Remove every field.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns the number of present fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no field is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Present field names, in map order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate `(field, value)` pairs in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Borrow the underlying JSON map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Build the JSON object value for this record.
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// Consume the record into a JSON object value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    /// Only JSON objects convert into records.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(RecordError::NotAnObject {
                found: json_kind(&other),
            }),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Short name of a JSON value's kind, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
