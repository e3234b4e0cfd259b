//! # Per-Field Error Maps
//!
//! An [`ErrorMap`] maps a field name to the ordered list of human-readable
//! messages currently attached to it.
//!
//! ## Invariant
//!
//! No key ever maps to an empty list. Every mutator that could leave a list
//! empty removes the key instead, and deserialization drops empty entries.
//! Absence of a key means the field is valid or has not been validated yet.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key under which failures not attributable to a single field are stored.
///
/// A record-level check that reports no path (for example a cross-field
/// refinement without an explicit target) lands here.
pub const FORM_ERROR_KEY: &str = "";

/// Mapping from field name to an ordered, non-empty list of messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Vec<String>>")]
pub struct ErrorMap(BTreeMap<String, Vec<String>>);

impl ErrorMap {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Build a map from an ordered sequence of `(field, message)` pairs.
    ///
    /// Messages for the same field keep their relative order.
    pub fn from_entries<I, F, M>(entries: I) -> Self
    where
        I: IntoIterator<Item = (F, M)>,
        F: Into<String>,
        M: Into<String>,
    {
        let mut map = Self::new();
        for (field, message) in entries {
            map.push(field, message);
        }
        map
    }

    /// Messages for a field, or `None` if the field has no errors.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// First message for a field, if any.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Messages stored under [`FORM_ERROR_KEY`].
    pub fn form_errors(&self) -> Option<&[String]> {
        self.get(FORM_ERROR_KEY)
    }

    /// Whether the field currently has at least one message.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Append a message to a field, creating its list if absent.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Replace a field's messages. An empty list removes the field.
    pub fn replace(&mut self, field: impl Into<String>, messages: Vec<String>) {
        let field = field.into();
        if messages.is_empty() {
            self.0.remove(&field);
        } else {
            self.0.insert(field, messages);
        }
    }

    /// Remove a field's messages, returning them if present.
    pub fn remove(&mut self, field: &str) -> Option<Vec<String>> {
        self.0.remove(field)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of fields with errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no field has errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names with errors, in map order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate `(field, messages)` pairs in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl From<BTreeMap<String, Vec<String>>> for ErrorMap {
    fn from(mut map: BTreeMap<String, Vec<String>>) -> Self {
        map.retain(|_, messages| !messages.is_empty());
        Self(map)
    }
}
