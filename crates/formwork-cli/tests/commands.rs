//! Integration test: the check and dirty subcommands over files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use formwork_cli::check::{check_record, run_check, CheckArgs, CheckOutcome};
use formwork_cli::dirty::{run_dirty, DirtyArgs, DirtyReport};
use formwork_cli::load_record;
use formwork_schema::FieldMapSchema;
use serde_json::json;

const SIGNUP: &str = r#"
fields:
  name:
    schema: { type: string, minLength: 3 }
    messages:
      minLength: Name is too short
  email:
    schema: { type: string, format: email }
  newsletter:
    schema: { type: boolean }
    optional: true
"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_check_valid_yaml_record() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "signup.yaml", SIGNUP);
    let data = write(dir.path(), "data.yaml", "name: Jane\nemail: jane@example.com\n");

    let fields = FieldMapSchema::load(&schema).unwrap();
    let outcome = check_record(fields, load_record(&data).unwrap()).unwrap();
    assert_eq!(
        outcome,
        CheckOutcome::Valid(json!({"name": "Jane", "email": "jane@example.com"}))
    );
}

#[test]
fn test_check_invalid_json_record() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "signup.yaml", SIGNUP);
    let data = write(
        dir.path(),
        "data.json",
        r#"{"name": "Jo", "email": "nope", "newsletter": "yes"}"#,
    );

    let fields = FieldMapSchema::load(&schema).unwrap();
    let outcome = check_record(fields, load_record(&data).unwrap()).unwrap();
    let CheckOutcome::Invalid(errors) = outcome else {
        panic!("expected the record to fail");
    };
    assert_eq!(errors.first("name"), Some("Name is too short"));
    assert!(errors.contains("email"));
    assert!(errors.contains("newsletter"));
}

#[test]
fn test_run_check_exit_codes() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "signup.yaml", SIGNUP);
    let good = write(dir.path(), "good.json", r#"{"name": "Jane", "email": "j@x.io"}"#);
    let bad = write(dir.path(), "bad.json", r#"{"name": "Jane"}"#);

    let args = |data: PathBuf| CheckArgs {
        schema: schema.clone(),
        data,
        json: true,
    };
    assert_eq!(run_check(&args(good)).unwrap(), 0);
    assert_eq!(run_check(&args(bad)).unwrap(), 1);
}

#[test]
fn test_run_check_fails_on_bad_definition() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(dir.path(), "broken.yaml", "fields:\n  name:\n    schema: { type: 12 }\n");
    let data = write(dir.path(), "data.json", "{}");

    let args = CheckArgs {
        schema,
        data,
        json: false,
    };
    let err = run_check(&args).unwrap_err();
    assert!(format!("{err:#}").contains("failed to load schema"));
}

#[test]
fn test_dirty_between_files() {
    let dir = tempfile::tempdir().unwrap();
    let initial = write(dir.path(), "initial.json", r#"{"name": "Jane", "tags": ["a"]}"#);
    let current = write(dir.path(), "current.yaml", "name: Jane\ntags: [a, b]\n");

    let report = DirtyReport::compare(
        &load_record(&initial).unwrap(),
        &load_record(&current).unwrap(),
    );
    assert_eq!(report.fields, vec!["tags"]);

    let args = |exit_code: bool| DirtyArgs {
        initial: initial.clone(),
        current: current.clone(),
        json: false,
        exit_code,
    };
    assert_eq!(run_dirty(&args(false)).unwrap(), 0);
    assert_eq!(run_dirty(&args(true)).unwrap(), 1);
}
