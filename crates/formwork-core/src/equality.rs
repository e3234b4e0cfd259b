//! # Structural Equality
//!
//! Deep, by-value comparison over the value universe a form record can hold:
//! null, booleans, numbers, strings, ordered sequences, and string-keyed maps.
//!
//! ## Rules
//!
//! 1. `null`, `bool`, `string` — equal iff same kind and same value.
//! 2. `number` — integers compare exactly; when either side is a float the
//!    comparison is numeric, so `25` and `25.0` are equal.
//! 3. `array` — same length and element-wise equal, in order.
//! 4. `object` — same key set and equal values under every key. A key that is
//!    missing on one side is never equal to a key holding `null` on the other.
//!
//! Values are owned trees, so the recursion is bounded by nesting depth and
//! cannot cycle.

use serde_json::{Map, Number, Value};

use crate::record::Record;

/// Deep structural equality of two values.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => maps_equal(xs, ys),
        _ => false,
    }
}

/// Equality of two possibly-absent values. Absent equals only absent.
pub fn optional_values_equal(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => values_equal(x, y),
        _ => false,
    }
}

/// Deep structural equality of two records.
pub fn records_equal(a: &Record, b: &Record) -> bool {
    maps_equal(a.as_map(), b.as_map())
}

fn maps_equal(xs: &Map<String, Value>, ys: &Map<String, Value>) -> bool {
    xs.len() == ys.len()
        && xs
            .iter()
            .all(|(key, x)| ys.get(key).is_some_and(|y| values_equal(x, y)))
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    if x.is_f64() || y.is_f64() {
        return match (x.as_f64(), y.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
    }
    // One negative integer and one integer beyond i64::MAX.
    false
}
