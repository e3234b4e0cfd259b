//! # Derived Schemas
//!
//! A [`DerivedSchema`] wraps exactly one inner [`Schema`] and adds one
//! [`Effect`]. Wrapping a derived schema in another derived schema stacks
//! effects; the outermost effect runs last.
//!
//! ## Effects
//!
//! - `Preprocess` rewrites the input before the inner schema sees it.
//! - `Refine` runs a predicate over the inner schema's output and reports one
//!   message at a fixed path when the predicate fails.
//! - `Check` runs a function over the inner output that may report any
//!   number of violations (cross-field rules).
//! - `Transform` rewrites the inner output on success.
//!
//! Refine, Check, and Transform only run when the inner schema succeeded.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::schema::Schema;
use crate::violation::{Violation, Violations};

/// Predicate over a validated value.
pub type RefineFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Record-level check reporting zero or more violations.
pub type CheckFn = Arc<dyn Fn(&Value) -> Vec<Violation> + Send + Sync>;

/// Value rewrite applied before or after validation.
pub type MapFn = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// The single effect a derived schema adds to its inner schema.
#[derive(Clone)]
pub enum Effect {
    /// Rewrite the input before inner validation.
    Preprocess(MapFn),
    /// Reject the inner output when the predicate returns false.
    Refine {
        /// Predicate that must hold.
        check: RefineFn,
        /// Message reported on failure.
        message: String,
        /// Path segments the failure is reported at; empty means the root.
        path: Vec<String>,
    },
    /// Report any violations the function returns for the inner output.
    Check(CheckFn),
    /// Rewrite the inner output.
    Transform(MapFn),
}

impl Effect {
    /// Short name of the effect kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Preprocess(_) => "preprocess",
            Self::Refine { .. } => "refine",
            Self::Check(_) => "check",
            Self::Transform(_) => "transform",
        }
    }
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Refine { message, path, .. } => f
                .debug_struct("Refine")
                .field("message", message)
                .field("path", path)
                .finish_non_exhaustive(),
            other => f.write_str(other.kind()),
        }
    }
}

/// A schema wrapping one inner schema with one effect.
#[derive(Debug, Clone)]
pub struct DerivedSchema {
    inner: Box<Schema>,
    effect: Effect,
}

impl DerivedSchema {
    /// Wrap `inner` with `effect`.
    pub fn new(inner: Schema, effect: Effect) -> Self {
        Self {
            inner: Box::new(inner),
            effect,
        }
    }

    /// The wrapped schema.
    pub fn inner(&self) -> &Schema {
        &self.inner
    }

    /// The effect this layer adds.
    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    /// Validate through the inner schema, then apply the effect.
    pub fn validate(&self, value: &Value) -> Result<Value, Violations> {
        match &self.effect {
            Effect::Preprocess(map) => self.inner.validate(&map(value.clone())),
            Effect::Refine {
                check,
                message,
                path,
            } => {
                let output = self.inner.validate(value)?;
                if check(&output) {
                    Ok(output)
                } else {
                    Err(Violations::new(vec![Violation::at(path, message.clone())]))
                }
            }
            Effect::Check(check) => {
                let output = self.inner.validate(value)?;
                let violations = check(&output);
                if violations.is_empty() {
                    Ok(output)
                } else {
                    Err(Violations::new(violations))
                }
            }
            Effect::Transform(map) => self.inner.validate(value).map(|output| map(output)),
        }
    }
}
