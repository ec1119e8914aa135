use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{NameError, ProjectError};

/// A validated project name.
///
/// `original` is the trimmed user input and feeds the upper-snake token;
/// `sanitized` always matches `^[A-Za-z][A-Za-z0-9-]{1,49}$`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProjectName {
    original: String,
    sanitized: String,
}

impl ProjectName {
    /// Validate raw input and build the name pair.
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let sanitized = crate::name::validate(raw)?;
        Ok(Self {
            original: raw.trim().to_string(),
            sanitized,
        })
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn sanitized(&self) -> &str {
        &self.sanitized
    }

    /// Value substituted for the kebab-case token.
    pub fn kebab(&self) -> String {
        self.sanitized.to_lowercase()
    }
}

/// A replacement value from the placeholder file.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PlaceholderValue {
    Scalar(String),
    List(Vec<Value>),
    Mapping(Map<String, Value>),
}

impl PlaceholderValue {
    pub fn is_list(&self) -> bool {
        matches!(self, PlaceholderValue::List(_))
    }

    /// Compact JSON encoding, e.g. `["en","fr"]`.
    pub fn to_json(&self) -> String {
        match self {
            PlaceholderValue::Scalar(s) => Value::String(s.clone()).to_string(),
            PlaceholderValue::List(items) => Value::Array(items.clone()).to_string(),
            PlaceholderValue::Mapping(map) => Value::Object(map.clone()).to_string(),
        }
    }

    /// List items joined with `", "`, strings unquoted.
    pub fn joined(&self) -> Option<String> {
        match self {
            PlaceholderValue::List(items) => Some(
                items
                    .iter()
                    .map(value_as_text)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => None,
        }
    }
}

impl From<Value> for PlaceholderValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => PlaceholderValue::List(items),
            Value::Object(map) => PlaceholderValue::Mapping(map),
            other => PlaceholderValue::Scalar(value_as_text(&other)),
        }
    }
}

fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Placeholder key to replacement value, ordered by key.
pub type PlaceholderMap = BTreeMap<String, PlaceholderValue>;

#[derive(Debug)]
pub enum FileOutcome {
    Updated,
    Unchanged,
    Failed(ProjectError),
}

#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Counts for one run, derived from the per-file reports.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_modified: usize,
    pub files_failed: usize,
    pub dry_run: bool,
    pub reports: Vec<FileReport>,
}

impl RunSummary {
    pub fn record(&mut self, path: PathBuf, outcome: FileOutcome) {
        self.files_scanned += 1;
        match &outcome {
            FileOutcome::Updated => self.files_modified += 1,
            FileOutcome::Failed(_) => self.files_failed += 1,
            FileOutcome::Unchanged => {}
        }
        self.reports.push(FileReport { path, outcome });
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, FileOutcome::Failed(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_name_keeps_trimmed_original() {
        let name = ProjectName::parse("  My App!  ").unwrap();
        assert_eq!(name.original(), "My App!");
        assert_eq!(name.sanitized(), "My-App");
        assert_eq!(name.kebab(), "my-app");
    }

    #[test]
    fn test_placeholder_value_shapes() {
        assert_eq!(
            PlaceholderValue::from(json!("My Site")),
            PlaceholderValue::Scalar("My Site".to_string())
        );
        assert_eq!(
            PlaceholderValue::from(json!(42)),
            PlaceholderValue::Scalar("42".to_string())
        );
        assert!(PlaceholderValue::from(json!(["en", "fr"])).is_list());
        assert!(matches!(
            PlaceholderValue::from(json!({"a": 1})),
            PlaceholderValue::Mapping(_)
        ));
    }

    #[test]
    fn test_list_encoding_and_join() {
        let langs = PlaceholderValue::from(json!(["en", "fr"]));
        assert_eq!(langs.to_json(), r#"["en","fr"]"#);
        assert_eq!(langs.joined().as_deref(), Some("en, fr"));
        assert_eq!(PlaceholderValue::Scalar("x".into()).joined(), None);
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::default();
        summary.record(PathBuf::from("a.md"), FileOutcome::Updated);
        summary.record(PathBuf::from("b.md"), FileOutcome::Unchanged);
        summary.record(
            PathBuf::from("c.md"),
            FileOutcome::Failed(ProjectError::Configuration("boom".into())),
        );

        assert_eq!(summary.files_scanned, 3);
        assert_eq!(summary.files_modified, 1);
        assert_eq!(summary.files_failed, 1);
        assert_eq!(summary.failures().count(), 1);
    }
}
