use std::path::{Path, PathBuf};

use shotdiff_report::ReportSummary;

use crate::Result;

pub trait ReportWriter {
    /// Writes the report into `output_dir` and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written.
    fn write_report(&self, summary: &ReportSummary, output_dir: &Path) -> Result<PathBuf>;
}
