//! XLSX spreadsheet output.
//!
//! Writes the report as a single flat worksheet: one header row plus one
//! row per finding, no formatting beyond the tabular layout.

use crate::error::{ReportError, Result};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Write header and data rows to an XLSX file at `path`.
pub fn write_report(path: &Path, header: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in header.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *name)
            .map_err(|e| ReportError::write(path, e.to_string()))?;
    }

    for (row, cells) in rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            worksheet
                .write_string(row as u32 + 1, col as u16, cell.as_str())
                .map_err(|e| ReportError::write(path, e.to_string()))?;
        }
    }

    workbook
        .save(path)
        .map_err(|e| ReportError::write(path, e.to_string()))?;

    Ok(())
}
