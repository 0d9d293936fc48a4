//! Conversion pipeline orchestration.
//!
//! One run is a straight load → flatten → schema check → rows → write
//! sequence over a single input file. Runs are independent; two runs with
//! the same input base name write the same output path, last writer wins.

use crate::error::Result;
use crate::findings::load_findings;
use crate::report::{build_rows, check_schema, header, RunContext};
use crate::xlsx::write_report;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Terminal state of one conversion run.
#[derive(Debug)]
pub enum ConvertOutcome {
    /// The scan reported no findings; no file was written.
    NoFindings,
    /// A report was written with this many finding rows.
    Written { path: PathBuf, findings: usize },
}

/// Convert one Semgrep JSON scan file into an XLSX report in `out_dir`.
///
/// The output file is named after the input base name. An empty or absent
/// results list is a successful no-op.
pub fn convert_file(input: &Path, out_dir: &Path) -> Result<ConvertOutcome> {
    let repository = base_name(input);
    // Captured once so every row of the report carries the same date.
    let date = Local::now().format("%Y-%m-%d").to_string();

    let findings = load_findings(input)?;
    debug!(count = findings.len(), "loaded findings");

    if findings.is_empty() {
        return Ok(ConvertOutcome::NoFindings);
    }

    check_schema(&findings)?;

    let ctx = RunContext {
        repository: repository.clone(),
        date,
    };
    let rows = build_rows(&findings, &ctx);

    let output = out_dir.join(format!("{repository}.xlsx"));
    write_report(&output, &header(), &rows)?;
    debug!(path = %output.display(), rows = rows.len(), "report written");

    Ok(ConvertOutcome::Written {
        path: output,
        findings: rows.len(),
    })
}

/// Input base name without extension; names both the Repository column
/// and the output file.
fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string())
}
