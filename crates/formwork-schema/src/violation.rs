//! # Violations
//!
//! A [`Violation`] is one failure reported by schema validation: where in the
//! record it happened (a JSON Pointer into the instance), which schema rule
//! triggered it, and a human-readable message. Validation never raises these
//! as errors; callers receive them as data and bucket them per field.

use std::fmt;

use formwork_core::{ErrorMap, FORM_ERROR_KEY};

/// Schema path used for failures of a refinement or record-level check.
pub const REFINE_SCHEMA_PATH: &str = "/refine";

/// A single validation failure with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer path to the violating value in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the failure.
    pub schema_path: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl Violation {
    /// A violation of a refinement or check targeting the given path
    /// segments. An empty path targets the record as a whole.
    pub fn at<I, S>(path: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            instance_path: pointer(path),
            schema_path: REFINE_SCHEMA_PATH.to_string(),
            message: message.into(),
        }
    }

    /// The top-level field this violation belongs to.
    ///
    /// Only the first path segment counts, so a failure at `/address/city`
    /// belongs to `address`. Root-level failures belong to
    /// [`FORM_ERROR_KEY`].
    pub fn field(&self) -> String {
        first_segment(&self.instance_path).unwrap_or_else(|| FORM_ERROR_KEY.to_string())
    }

    /// The schema keyword that failed (last segment of the schema path),
    /// e.g. `minLength`, `format`, `required`, `refine`.
    pub fn keyword(&self) -> &str {
        keyword(&self.schema_path)
    }

    /// Prefix both paths with a field, turning a value-relative violation
    /// into a record-relative one.
    pub(crate) fn nested_under(mut self, field: &str) -> Self {
        let segment = escape_segment(field);
        self.instance_path = format!("/{segment}{}", self.instance_path);
        self.schema_path = format!("/properties/{segment}{}", self.schema_path);
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Ordered collection of validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Wrap an ordered list of violations.
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }

    /// Messages in order, paired with the top-level field each belongs to.
    pub fn by_field(&self) -> impl Iterator<Item = (String, &str)> {
        self.violations
            .iter()
            .map(|v| (v.field(), v.message.as_str()))
    }

    /// Build a fresh error map bucketing every message under its field.
    pub fn to_error_map(&self) -> ErrorMap {
        ErrorMap::from_entries(self.by_field())
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(violations: Vec<Violation>) -> Self {
        Self::new(violations)
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Build a JSON Pointer from path segments.
pub(crate) fn pointer<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .map(|s| format!("/{}", escape_segment(s.as_ref())))
        .collect()
}

/// Escape a JSON Pointer reference token (RFC 6901).
pub(crate) fn escape_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

fn unescape_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

fn first_segment(path: &str) -> Option<String> {
    let rest = path.strip_prefix('/')?;
    let head = rest.split('/').next().unwrap_or(rest);
    Some(unescape_segment(head))
}

pub(crate) fn keyword(schema_path: &str) -> &str {
    schema_path.rsplit('/').next().unwrap_or(schema_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(instance_path: &str, schema_path: &str, message: &str) -> Violation {
        Violation {
            instance_path: instance_path.to_string(),
            schema_path: schema_path.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn nested_paths_bucket_to_top_level_field() {
        let v = violation("/address/city", "/properties/address/properties/city/minLength", "short");
        assert_eq!(v.field(), "address");
        assert_eq!(v.keyword(), "minLength");
    }

    #[test]
    fn root_violations_bucket_to_form_key() {
        let v = Violation::at(Vec::<String>::new(), "passwords differ");
        assert_eq!(v.instance_path, "");
        assert_eq!(v.field(), FORM_ERROR_KEY);
        assert_eq!(v.keyword(), "refine");
    }

    #[test]
    fn escaped_segments_round_trip() {
        let v = Violation::at(["a/b~c", "0"], "bad");
        assert_eq!(v.instance_path, "/a~1b~0c/0");
        assert_eq!(v.field(), "a/b~c");
    }

    #[test]
    fn nesting_prefixes_both_paths() {
        let v = violation("/0", "/items/minimum", "too small").nested_under("scores");
        assert_eq!(v.instance_path, "/scores/0");
        assert_eq!(v.schema_path, "/properties/scores/items/minimum");
    }

    #[test]
    fn error_map_keeps_message_order_per_field() {
        let violations = Violations::new(vec![
            violation("/name", "/properties/name/minLength", "first"),
            violation("/age", "/properties/age/minimum", "second"),
            violation("/name", "/refine", "third"),
        ]);
        let errors = violations.to_error_map();
        assert_eq!(
            errors.get("name"),
            Some(&["first".to_string(), "third".to_string()][..])
        );
        assert_eq!(errors.first("age"), Some("second"));
    }

    #[test]
    fn display_format() {
        let violations = Violations::new(vec![
            violation("/name", "/properties/name/minLength", "too short"),
            violation("", "/refine", "mismatch"),
        ]);
        let display = violations.to_string();
        assert!(display.contains("/name: too short"));
        assert!(display.contains("(root): mismatch"));
    }
}
