//! # Dirty Tracking
//!
//! Pure queries comparing a live record against its initial snapshot. Nothing
//! here stores state: the answer is recomputed from `(record, snapshot)` on
//! every call, so it can never go stale or depend on earlier values.

use std::collections::BTreeSet;

use crate::equality::{optional_values_equal, records_equal};
use crate::record::Record;

/// Whether the record differs structurally from the snapshot.
pub fn is_dirty(record: &Record, snapshot: &Record) -> bool {
    !records_equal(record, snapshot)
}

/// Whether one field differs between the record and the snapshot.
///
/// A field present on one side and absent on the other is dirty, whatever
/// the present value is.
pub fn is_field_dirty(record: &Record, snapshot: &Record, field: &str) -> bool {
    !optional_values_equal(record.get(field), snapshot.get(field))
}

/// Sorted names of every field that is dirty, across both sides.
pub fn dirty_fields(record: &Record, snapshot: &Record) -> Vec<String> {
    let names: BTreeSet<&str> = record.fields().chain(snapshot.fields()).collect();
    names
        .into_iter()
        .filter(|field| is_field_dirty(record, snapshot, field))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(value: Value) -> Record {
        Record::try_from(value).unwrap()
    }

    #[test]
    fn identical_records_are_clean() {
        let snapshot = record(json!({"name": "John", "tags": ["x"]}));
        assert!(!is_dirty(&snapshot.clone(), &snapshot));
        assert!(dirty_fields(&snapshot.clone(), &snapshot).is_empty());
    }

    #[test]
    fn changed_field_is_dirty_and_others_are_not() {
        let snapshot = record(json!({"name": "John", "age": 25}));
        let current = record(json!({"name": "Jane", "age": 25}));
        assert!(is_dirty(&current, &snapshot));
        assert!(is_field_dirty(&current, &snapshot, "name"));
        assert!(!is_field_dirty(&current, &snapshot, "age"));
    }

    #[test]
    fn added_null_field_is_dirty() {
        let snapshot = record(json!({"name": "John"}));
        let current = record(json!({"name": "John", "nickname": null}));
        assert!(is_dirty(&current, &snapshot));
        assert!(is_field_dirty(&current, &snapshot, "nickname"));
    }

    #[test]
    fn removed_field_is_dirty() {
        let snapshot = record(json!({"name": "John", "active": false}));
        let current = record(json!({"name": "John"}));
        assert!(is_field_dirty(&current, &snapshot, "active"));
        assert_eq!(dirty_fields(&current, &snapshot), vec!["active".to_string()]);
    }

    #[test]
    fn field_absent_on_both_sides_is_clean() {
        let snapshot = record(json!({}));
        assert!(!is_field_dirty(&Record::new(), &snapshot, "ghost"));
    }

    #[test]
    fn nested_change_is_detected() {
        let snapshot = record(json!({"address": {"city": "Oslo", "lines": ["a"]}}));
        let current = record(json!({"address": {"city": "Oslo", "lines": ["a", "b"]}}));
        assert!(is_field_dirty(&current, &snapshot, "address"));
    }
}
