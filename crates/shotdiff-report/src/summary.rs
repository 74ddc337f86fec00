use std::path::Path;

use shotdiff_core::{
    ComparisonOutcome, ComparisonResult, DimensionMismatch, OutputPaths, ScannedFile, Verdict,
};

/// Everything the report shows, detached from file system paths.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub verdict: Verdict,
    pub total_images: usize,
    pub different_count: usize,
    pub identical_count: usize,
    pub removed_count: usize,
    pub added_count: usize,
    pub differences: Vec<DifferenceEntry>,
    pub identical: Vec<String>,
    pub removed: Vec<String>,
    pub added: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceEntry {
    pub name: String,
    /// File name of the baseline copy in the output directory.
    pub baseline_image: String,
    /// File name of the candidate copy in the output directory.
    pub candidate_image: String,
    pub kind: DifferenceKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DifferenceKind {
    Pixels { percentage: f64, diff_image: String },
    Dimensions(DimensionMismatch),
}

impl ReportSummary {
    #[must_use]
    pub fn new(
        verdict: Verdict,
        results: &[ComparisonResult],
        baseline_only: &[ScannedFile],
        candidate_only: &[ScannedFile],
    ) -> Self {
        let (with_differences, without_differences): (Vec<_>, Vec<_>) =
            results.iter().partition(|r| r.has_difference());

        let differences: Vec<DifferenceEntry> = with_differences
            .into_iter()
            .filter_map(DifferenceEntry::from_result)
            .collect();
        let identical: Vec<String> = without_differences
            .into_iter()
            .map(|r| r.name.clone())
            .collect();

        Self {
            verdict,
            total_images: results.len() + baseline_only.len() + candidate_only.len(),
            different_count: differences.len(),
            identical_count: identical.len(),
            removed_count: baseline_only.len(),
            added_count: candidate_only.len(),
            differences,
            identical,
            removed: baseline_only.iter().map(|f| f.name.clone()).collect(),
            added: candidate_only.iter().map(|f| f.name.clone()).collect(),
        }
    }
}

impl DifferenceEntry {
    fn from_result(result: &ComparisonResult) -> Option<Self> {
        // Only the file names matter here, so a relative derivation is enough
        // when the result carries no paths.
        let paths = result
            .output_paths
            .clone()
            .unwrap_or_else(|| OutputPaths::derive(Path::new(""), &result.name));

        let kind = match result.outcome {
            ComparisonOutcome::Identical => return None,
            ComparisonOutcome::Different { percentage, .. } => DifferenceKind::Pixels {
                percentage,
                diff_image: file_name(&paths.diff),
            },
            ComparisonOutcome::DimensionMismatch(mismatch) => DifferenceKind::Dimensions(mismatch),
        };

        Some(Self {
            name: result.name.clone(),
            baseline_image: file_name(&paths.baseline),
            candidate_image: file_name(&paths.candidate),
            kind,
        })
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
