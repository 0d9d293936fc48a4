//! Unified error types for semgrep-report.
//!
//! Every failure mode of a conversion run is terminal: the caller may
//! re-invoke the whole process, but nothing is retried internally and no
//! partial output is left behind.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for report conversion operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportError {
    /// Input file missing or unreadable
    #[error("Cannot read input at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON in the scan output
    #[error("Failed to parse scan output: {0}")]
    Parse(String),

    /// Expected field structure entirely absent from the scan data
    #[error("Scan data has no '{column}' column: key '{key}' is absent from every finding")]
    Schema { column: String, key: String },

    /// Spreadsheet output could not be written
    #[error("Failed to write report to {path}: {message}")]
    Write { path: PathBuf, message: String },
}

/// Convenient Result type for report conversion operations
pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a schema error for a column whose source key is missing everywhere
    pub fn schema(column: impl Into<String>, key: impl Into<String>) -> Self {
        Self::Schema {
            column: column.into(),
            key: key.into(),
        }
    }

    /// Create a write error with path context
    pub fn write(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Write {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
