use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::html::render;
use crate::summary::ReportSummary;
use crate::{REPORT_FILE_NAME, ReportError, Result};

/// Renders `summary` and writes it to [`REPORT_FILE_NAME`] inside
/// `output_dir`, replacing any previous report. Returns the report path.
///
/// # Errors
///
/// Returns [`ReportError::Write`] if the file cannot be written.
pub fn write_report(summary: &ReportSummary, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(REPORT_FILE_NAME);

    fs::write(&path, render(summary)).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "wrote report");
    Ok(path)
}
