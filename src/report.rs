//! The fixed report schema and row construction.
//!
//! Every report uses the same 16 columns in the same order, regardless of
//! how fields were ordered in the scan output. A column is either backed
//! by a dot-path into the flattened finding, derived per run (repository
//! name, scan date), a fixed scanner tag, or an empty placeholder left for
//! downstream manual enrichment (CVE, URL, Solution).

use crate::error::{ReportError, Result};
use crate::findings::FlatFinding;
use crate::sanitize::clean_text;

/// Scanner tag injected into the Source column of every row.
pub const SOURCE_TAG: &str = "SAST";

/// Where a report column's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// Dot-joined path into the flattened finding
    Finding(&'static str),
    /// Input file base name
    Repository,
    /// Fixed scanner tag ("SAST")
    Source,
    /// Run date, YYYY-MM-DD
    Date,
    /// Placeholder for downstream manual enrichment
    Empty,
}

/// One column of the report schema.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub source: ColumnSource,
}

/// The fixed 16-column report schema, in output order.
pub const COLUMNS: [Column; 16] = [
    Column {
        name: "Repository",
        source: ColumnSource::Repository,
    },
    Column {
        name: "Source",
        source: ColumnSource::Source,
    },
    Column {
        name: "Vulnerability Class",
        source: ColumnSource::Finding("extra.metadata.vulnerability_class"),
    },
    Column {
        name: "Date",
        source: ColumnSource::Date,
    },
    Column {
        name: "CWE",
        source: ColumnSource::Finding("extra.metadata.cwe"),
    },
    Column {
        name: "CVE",
        source: ColumnSource::Empty,
    },
    Column {
        name: "URL",
        source: ColumnSource::Empty,
    },
    Column {
        name: "Severity",
        source: ColumnSource::Finding("extra.metadata.impact"),
    },
    Column {
        name: "Description",
        source: ColumnSource::Finding("extra.message"),
    },
    Column {
        name: "Solution",
        source: ColumnSource::Empty,
    },
    Column {
        name: "References",
        source: ColumnSource::Finding("extra.metadata.semgrep.dev.rule.url"),
    },
    Column {
        name: "File Path",
        source: ColumnSource::Finding("path"),
    },
    Column {
        name: "Lines",
        source: ColumnSource::Finding("end.line"),
    },
    Column {
        name: "Code",
        source: ColumnSource::Finding("extra.lines"),
    },
    Column {
        name: "OWASP",
        source: ColumnSource::Finding("extra.metadata.owasp"),
    },
    Column {
        name: "OWASP References",
        source: ColumnSource::Finding("extra.metadata.references"),
    },
];

/// The Code column is flattened to a single line after sanitization.
const CODE_COLUMN: &str = "Code";

/// Per-run values injected into every row.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Input file base name without extension
    pub repository: String,
    /// Run date, YYYY-MM-DD, captured once at start of run
    pub date: String,
}

/// Header row, in schema order.
pub fn header() -> Vec<&'static str> {
    COLUMNS.iter().map(|c| c.name).collect()
}

/// Verify that every finding-backed column exists somewhere in the data.
///
/// A key missing from an individual finding is fine (empty cell); a key
/// absent from every finding means the column cannot be constructed at
/// all, which is a schema mismatch.
pub fn check_schema(findings: &[FlatFinding]) -> Result<()> {
    for column in &COLUMNS {
        if let ColumnSource::Finding(key) = column.source {
            if !findings.iter().any(|f| f.contains_key(key)) {
                return Err(ReportError::schema(column.name, key));
            }
        }
    }
    Ok(())
}

/// Build one report row from a flattened finding.
pub fn build_row(finding: &FlatFinding, ctx: &RunContext) -> Vec<String> {
    COLUMNS
        .iter()
        .map(|column| match column.source {
            ColumnSource::Finding(key) => {
                let cell = clean_text(finding.get(key).map_or("", String::as_str));
                if column.name == CODE_COLUMN {
                    cell.replace('\n', " ")
                } else {
                    cell
                }
            }
            ColumnSource::Repository => ctx.repository.clone(),
            ColumnSource::Source => SOURCE_TAG.to_string(),
            ColumnSource::Date => ctx.date.clone(),
            ColumnSource::Empty => String::new(),
        })
        .collect()
}

/// Build all report rows, one per finding, in input order.
pub fn build_rows(findings: &[FlatFinding], ctx: &RunContext) -> Vec<Vec<String>> {
    findings.iter().map(|f| build_row(f, ctx)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::findings::flatten;
    use serde_json::json;

    fn test_ctx() -> RunContext {
        RunContext {
            repository: "scan-results".to_string(),
            date: "2026-08-24".to_string(),
        }
    }

    fn sample_finding() -> FlatFinding {
        flatten(&json!({
            "path": "app.py",
            "end": { "line": 42 },
            "extra": {
                "message": "SQLi risk",
                "lines": "query = f\"...\"\n",
                "metadata": {
                    "cwe": ["CWE-89"],
                    "impact": "HIGH",
                    "vulnerability_class": ["SQL Injection"],
                    "owasp": ["A01"],
                    "references": ["http://x"],
                    "semgrep": { "dev": { "rule": { "url": "http://rule" } } }
                }
            }
        }))
    }

    #[test]
    fn test_header_matches_schema_order() {
        assert_eq!(
            header(),
            vec![
                "Repository",
                "Source",
                "Vulnerability Class",
                "Date",
                "CWE",
                "CVE",
                "URL",
                "Severity",
                "Description",
                "Solution",
                "References",
                "File Path",
                "Lines",
                "Code",
                "OWASP",
                "OWASP References",
            ]
        );
    }

    #[test]
    fn test_build_row_maps_finding_fields() {
        let row = build_row(&sample_finding(), &test_ctx());

        assert_eq!(row.len(), 16);
        assert_eq!(row[0], "scan-results"); // Repository
        assert_eq!(row[1], "SAST"); // Source
        assert_eq!(row[2], "SQL Injection"); // Vulnerability Class
        assert_eq!(row[3], "2026-08-24"); // Date
        assert_eq!(row[4], "CWE-89"); // CWE, brackets/quotes stripped
        assert_eq!(row[5], ""); // CVE placeholder
        assert_eq!(row[6], ""); // URL placeholder
        assert_eq!(row[7], "HIGH"); // Severity
        assert_eq!(row[8], "SQLi risk"); // Description
        assert_eq!(row[9], ""); // Solution placeholder
        assert_eq!(row[10], "http://rule"); // References
        assert_eq!(row[11], "app.py"); // File Path
        assert_eq!(row[12], "42"); // Lines
        assert_eq!(row[14], "A01"); // OWASP
        assert_eq!(row[15], "http://x"); // OWASP References
    }

    #[test]
    fn test_code_cell_has_no_newlines() {
        let finding = flatten(&json!({
            "extra": { "lines": "line one\nline two\nline three\n" }
        }));
        let row = build_row(&finding, &test_ctx());

        let code = &row[13];
        assert!(!code.contains('\n'), "Code cell must be one line: {code:?}");
        assert_eq!(code, "line one line two line three");
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let finding = flatten(&json!({ "path": "app.py" }));
        let row = build_row(&finding, &test_ctx());

        assert_eq!(row[11], "app.py");
        assert_eq!(row[8], ""); // Description absent
        assert_eq!(row[4], ""); // CWE absent
    }

    #[test]
    fn test_check_schema_accepts_partial_findings() {
        // Keys spread across findings still satisfy the schema as long as
        // each key exists somewhere.
        let full = flatten(&json!({
            "path": "a.py",
            "end": { "line": 1 },
            "extra": {
                "message": "m",
                "lines": "x",
                "metadata": {
                    "cwe": [], "impact": "LOW", "vulnerability_class": [],
                    "owasp": [], "references": [],
                    "semgrep": { "dev": { "rule": { "url": "u" } } }
                }
            }
        }));
        let sparse = flatten(&json!({ "path": "b.py" }));

        assert!(check_schema(&[full, sparse]).is_ok());
    }

    #[test]
    fn test_check_schema_rejects_absent_column() {
        let findings = vec![
            flatten(&json!({ "check_id": "r1" })),
            flatten(&json!({ "check_id": "r2" })),
        ];

        let err = check_schema(&findings).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ReportError::Schema { .. }
        ));
    }

    #[test]
    fn test_rows_are_deterministic() {
        let findings = vec![sample_finding(), sample_finding()];
        let ctx = test_ctx();
        assert_eq!(build_rows(&findings, &ctx), build_rows(&findings, &ctx));
    }
}
