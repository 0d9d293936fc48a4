//! Loading and flattening Semgrep scan output.
//!
//! A scan file is a JSON document whose top-level `results` key holds a
//! list of finding objects. Each finding is flattened into a flat record
//! keyed by dot-joined paths (`extra.metadata.cwe`), so the report layer
//! can address nested fields uniformly. Findings are independent; there
//! are no relationships between records.

use crate::error::{ReportError, Result};
use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// One finding flattened into dot-joined path keys with rendered values.
///
/// Insertion order follows the source document, which keeps diagnostics
/// stable across runs. Missing optional fields are simply absent keys;
/// the report layer renders those as empty cells.
pub type FlatFinding = IndexMap<String, String>;

/// Load a Semgrep JSON scan file and return its findings, flattened.
///
/// An absent or empty `results` list yields an empty vector; that case is
/// a successful no-op for the caller, not an error.
pub fn load_findings(path: &Path) -> Result<Vec<FlatFinding>> {
    let content = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    let document: Value = serde_json::from_str(&content)?;

    let Some(results) = document.get("results").and_then(Value::as_array) else {
        debug!("scan output has no results list");
        return Ok(Vec::new());
    };

    Ok(results.iter().map(flatten).collect())
}

/// Flatten a nested finding object into a dot-path keyed flat record.
pub fn flatten(finding: &Value) -> FlatFinding {
    let mut record = FlatFinding::new();
    flatten_into(finding, "", &mut record);
    record
}

fn flatten_into(value: &Value, prefix: &str, record: &mut FlatFinding) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(nested, &path, record);
            }
        }
        leaf => {
            record.insert(prefix.to_string(), render(leaf));
        }
    }
}

/// Render a leaf value as the string that lands in a report cell.
///
/// Lists are joined with `", "` rather than carried as JSON text, so a
/// multi-label field reads naturally after sanitization.
fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
