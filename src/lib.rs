//! **Convert Semgrep SAST scan results into XLSX findings reports.**
//!
//! `semgrep-report` is a single-pass ETL utility: it reads one Semgrep
//! JSON scan output, flattens each finding's nested fields into dot-path
//! keyed records, sanitizes list-serialization artifacts, maps the fields
//! onto a fixed 16-column report schema with injected constants
//! (repository name, scan date, source tag), and writes one
//! `<input-base-name>.xlsx` spreadsheet.
//!
//! ## Modules
//!
//! - [`findings`]: loads the scan document and flattens findings into
//!   [`FlatFinding`] records.
//! - [`sanitize`]: strips stray bracket/quote characters left over from
//!   list-to-string serialization.
//! - [`report`]: the fixed column schema, the required-column check, and
//!   row construction.
//! - [`xlsx`]: the spreadsheet writer.
//! - [`pipeline`]: orchestrates a full conversion run.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use semgrep_report::{convert_file, ConvertOutcome};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     match convert_file(Path::new("scan-results.json"), Path::new("."))? {
//!         ConvertOutcome::NoFindings => println!("nothing to report"),
//!         ConvertOutcome::Written { path, findings } => {
//!             println!("wrote {} rows to {}", findings, path.display());
//!         }
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod error;
pub mod findings;
pub mod pipeline;
pub mod report;
pub mod sanitize;
pub mod xlsx;

// Re-export main types for convenience
pub use error::{ReportError, Result};
pub use findings::{flatten, load_findings, FlatFinding};
pub use pipeline::{convert_file, ConvertOutcome};
pub use report::{build_row, build_rows, check_schema, header, Column, ColumnSource, RunContext, COLUMNS};
pub use sanitize::clean_text;
