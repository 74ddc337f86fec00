use std::path::{Path, PathBuf};

use shotdiff_report::ReportSummary;

use crate::Result;
use crate::traits::ReportWriter;

pub struct HtmlReportWriter;

impl HtmlReportWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter for HtmlReportWriter {
    fn write_report(&self, summary: &ReportSummary, output_dir: &Path) -> Result<PathBuf> {
        Ok(shotdiff_report::write_report(summary, output_dir)?)
    }
}
