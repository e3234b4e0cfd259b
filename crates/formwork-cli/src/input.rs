//! # Record Files
//!
//! Loads records from JSON or YAML files. The format is chosen by extension:
//! `.yaml` and `.yml` are YAML, everything else is JSON.

use std::path::Path;

use anyhow::{Context, Result};
use formwork_core::Record;
use serde_json::Value;

/// Load a record from a JSON or YAML file.
///
/// The document must be a mapping at the top level.
pub fn load_record(path: &Path) -> Result<Record> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read record file {}", path.display()))?;

    let value: Value = if is_yaml(path) {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?
    };

    let record = Record::try_from(value)
        .with_context(|| format!("invalid record file {}", path.display()))?;
    tracing::debug!(path = %path.display(), fields = record.len(), "loaded record");
    Ok(record)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_json_record() {
        let file = write_temp(".json", r#"{"name": "Jane", "age": 25}"#);
        let record = load_record(file.path()).unwrap();
        assert_eq!(record.get("age"), Some(&json!(25)));
    }

    #[test]
    fn loads_yaml_record() {
        let file = write_temp(".yml", "name: Jane\ntags: [a, b]\nnickname: null\n");
        let record = load_record(file.path()).unwrap();
        assert_eq!(record.get("tags"), Some(&json!(["a", "b"])));
        assert_eq!(record.get("nickname"), Some(&Value::Null));
    }

    #[test]
    fn rejects_non_mapping_document() {
        let file = write_temp(".json", "[1, 2, 3]");
        let err = load_record(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("must be a JSON object"));
    }

    #[test]
    fn reports_missing_file() {
        let err = load_record(Path::new("/nonexistent/record.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read record file"));
    }

    #[test]
    fn yaml_detection_by_extension() {
        assert!(is_yaml(Path::new("a.yaml")));
        assert!(is_yaml(Path::new("dir/a.yml")));
        assert!(!is_yaml(Path::new("a.json")));
        assert!(!is_yaml(Path::new("a")));
    }
}
