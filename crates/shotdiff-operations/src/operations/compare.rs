use std::path::PathBuf;

use shotdiff_core::{ComparisonResult, DirectorySummary, ScannedFile};
use shotdiff_image::CompareOptions;
use shotdiff_report::ReportSummary;
use tracing::{debug, info};

use crate::Result;
use crate::providers::{FileSystemMatcher, HtmlReportWriter, PixelComparator, PngPairLoader};
use crate::traits::{FileMatcher, PairComparator, PairLoader, ReportWriter};
use crate::verification::{VerdictResult, calculate_verdict};

pub struct CompareInput {
    pub baseline_dir: PathBuf,
    pub candidate_dir: PathBuf,
    pub output_dir: PathBuf,
    pub options: CompareOptions,
}

#[derive(Debug)]
pub struct CompareOutput {
    pub summary: DirectorySummary,
    pub verdict: VerdictResult,
    /// One result per matched pair, in matching order.
    pub results: Vec<ComparisonResult>,
    pub baseline_only: Vec<ScannedFile>,
    pub candidate_only: Vec<ScannedFile>,
    pub report_path: PathBuf,
}

pub struct CompareOperation<M, L, C, W> {
    matcher: M,
    loader: L,
    comparator: C,
    report_writer: W,
}

impl<M, L, C, W> CompareOperation<M, L, C, W>
where
    M: FileMatcher,
    L: PairLoader,
    C: PairComparator,
    W: ReportWriter,
{
    pub fn new(matcher: M, loader: L, comparator: C, report_writer: W) -> Self {
        Self {
            matcher,
            loader,
            comparator,
            report_writer,
        }
    }

    /// Runs the full pipeline and writes the report into the output directory.
    ///
    /// Pairs are processed in matching order. The first fatal error aborts the
    /// run; pairs already compared keep their derived images.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be listed, an image cannot be
    /// decoded, or a derived image or the report cannot be written.
    pub fn execute(&self, input: &CompareInput) -> Result<CompareOutput> {
        info!(
            baseline = %input.baseline_dir.display(),
            candidate = %input.candidate_dir.display(),
            "matching screenshots"
        );
        let file_match = self
            .matcher
            .match_files(&input.baseline_dir, &input.candidate_dir)?;
        debug!(
            matched = file_match.matched.len(),
            removed = file_match.baseline_only.len(),
            added = file_match.candidate_only.len(),
            "matched screenshots"
        );

        info!(pairs = file_match.matched.len(), "comparing pairs");
        let mut results = Vec::with_capacity(file_match.matched.len());
        for pair in &file_match.matched {
            let loaded = self.loader.load_pair(pair, &input.output_dir)?;
            let result = match loaded.dimension_mismatch {
                Some(mismatch) => self.comparator.record_mismatch(&loaded, mismatch)?,
                None => self.comparator.compare(&loaded, &input.options)?,
            };
            results.push(result);
        }

        let verdict = calculate_verdict(&results, &file_match.baseline_only);
        let summary = DirectorySummary::new(
            &results,
            file_match.baseline_only.len(),
            file_match.candidate_only.len(),
            verdict.verdict(),
        );

        let report = ReportSummary::new(
            verdict.verdict(),
            &results,
            &file_match.baseline_only,
            &file_match.candidate_only,
        );
        let report_path = self
            .report_writer
            .write_report(&report, &input.output_dir)?;

        info!(
            verdict = %verdict.verdict(),
            total = summary.total_images,
            with_differences = summary.with_differences,
            "comparison finished"
        );

        Ok(CompareOutput {
            summary,
            verdict,
            results,
            baseline_only: file_match.baseline_only,
            candidate_only: file_match.candidate_only,
            report_path,
        })
    }
}

/// Compares two screenshot directories with the file-system providers.
///
/// # Errors
///
/// See [`CompareOperation::execute`].
pub fn compare_directories(input: &CompareInput) -> Result<CompareOutput> {
    CompareOperation::new(
        FileSystemMatcher::new(),
        PngPairLoader::new(),
        PixelComparator::new(),
        HtmlReportWriter::new(),
    )
    .execute(input)
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use shotdiff_core::{ComparisonOutcome, Dimensions, Verdict};

    use super::*;
    use crate::OperationError;
    use crate::mocks::{MockFileMatcher, MockPairComparator, MockPairLoader, MockReportWriter};

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn input() -> CompareInput {
        CompareInput {
            baseline_dir: PathBuf::from("/mock/baseline"),
            candidate_dir: PathBuf::from("/mock/candidate"),
            output_dir: PathBuf::from("/mock/output"),
            options: CompareOptions::default(),
        }
    }

    fn white(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, WHITE)
    }

    #[test]
    fn empty_directories_pass() {
        let writer = MockReportWriter::new();
        let operation = CompareOperation::new(
            MockFileMatcher::new(),
            MockPairLoader::new(),
            MockPairComparator::new(),
            writer.clone(),
        );

        let output = operation.execute(&input()).expect("execute succeeds");

        assert_eq!(output.summary.total_images, 0);
        assert_eq!(output.summary.exit_code, 0);
        assert!(output.verdict.is_success());
        assert_eq!(output.report_path, PathBuf::from("/mock/output/index.html"));

        let written = writer.written();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].verdict, Verdict::Pass);
    }

    #[test]
    fn removed_file_fails_even_when_pairs_match() {
        let matcher = MockFileMatcher::new()
            .with_pair("same.png")
            .with_baseline_only("removed.png")
            .with_candidate_only("added.png");
        let loader = MockPairLoader::new().with_images("same.png", white(4, 4), white(4, 4));
        let operation = CompareOperation::new(
            matcher,
            loader,
            MockPairComparator::new(),
            MockReportWriter::new(),
        );

        let output = operation.execute(&input()).expect("execute succeeds");

        assert_eq!(output.summary.total_images, 3);
        assert_eq!(output.summary.with_differences, 0);
        assert_eq!(output.summary.without_differences, 1);
        assert_eq!(output.summary.removed_count, 1);
        assert_eq!(output.summary.added_count, 1);
        assert_eq!(output.summary.exit_code, 1);
        assert_eq!(output.verdict.removed, vec!["removed.png"]);
    }

    #[test]
    fn added_files_alone_pass() {
        let matcher = MockFileMatcher::new().with_candidate_only("new.png");
        let operation = CompareOperation::new(
            matcher,
            MockPairLoader::new(),
            MockPairComparator::new(),
            MockReportWriter::new(),
        );

        let output = operation.execute(&input()).expect("execute succeeds");

        assert_eq!(output.summary.added_count, 1);
        assert_eq!(output.summary.exit_code, 0);
    }

    #[test]
    fn differing_pair_fails() {
        let mut candidate = white(10, 10);
        candidate.put_pixel(3, 3, BLACK);
        let matcher = MockFileMatcher::new().with_pair("x.png");
        let loader = MockPairLoader::new().with_images("x.png", white(10, 10), candidate);
        let comparator = MockPairComparator::new();
        let operation =
            CompareOperation::new(matcher, loader, comparator.clone(), MockReportWriter::new());

        let output = operation.execute(&input()).expect("execute succeeds");

        assert_eq!(output.summary.with_differences, 1);
        assert_eq!(output.summary.exit_code, 1);
        assert!(matches!(
            output.results[0].outcome,
            ComparisonOutcome::Different { diff_pixels: 1, .. }
        ));
        assert!((output.results[0].diff_percentage() - 1.0).abs() < 1e-9);
        assert_eq!(comparator.compared(), vec!["x.png"]);
        assert!(comparator.mismatches().is_empty());
    }

    #[test]
    fn dimension_mismatch_bypasses_pixel_comparison() {
        let matcher = MockFileMatcher::new().with_pair("resized.png");
        let loader = MockPairLoader::new().with_images("resized.png", white(10, 10), white(8, 12));
        let comparator = MockPairComparator::new();
        let operation =
            CompareOperation::new(matcher, loader, comparator.clone(), MockReportWriter::new());

        let output = operation.execute(&input()).expect("execute succeeds");

        let result = &output.results[0];
        assert!((result.diff_percentage() - 100.0).abs() < f64::EPSILON);
        let mismatch = result.dimension_mismatch().expect("mismatch recorded");
        assert_eq!(mismatch.baseline, Dimensions::new(10, 10));
        assert_eq!(mismatch.candidate, Dimensions::new(8, 12));
        assert!(comparator.compared().is_empty());
        assert_eq!(comparator.mismatches(), vec!["resized.png"]);
        assert_eq!(output.summary.exit_code, 1);
    }

    #[test]
    fn pairs_are_processed_in_matching_order() {
        let matcher = MockFileMatcher::new()
            .with_pair("a.png")
            .with_pair("B.png")
            .with_pair("c.png");
        let loader = MockPairLoader::new()
            .with_images("a.png", white(1, 1), white(1, 1))
            .with_images("B.png", white(1, 1), white(1, 1))
            .with_images("c.png", white(1, 1), white(1, 1));
        let comparator = MockPairComparator::new();
        let operation =
            CompareOperation::new(matcher, loader, comparator.clone(), MockReportWriter::new());

        let output = operation.execute(&input()).expect("execute succeeds");

        let names: Vec<&str> = output.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "B.png", "c.png"]);
        assert_eq!(comparator.compared(), vec!["a.png", "B.png", "c.png"]);
    }

    #[test]
    fn decode_failure_aborts_without_report() {
        let matcher = MockFileMatcher::new()
            .with_pair("broken.png")
            .with_pair("later.png");
        let loader = MockPairLoader::new()
            .with_corrupt("broken.png")
            .with_images("later.png", white(1, 1), white(1, 1));
        let comparator = MockPairComparator::new();
        let writer = MockReportWriter::new();
        let operation = CompareOperation::new(matcher, loader, comparator.clone(), writer.clone());

        let result = operation.execute(&input());

        assert!(matches!(result, Err(OperationError::Image(_))));
        assert!(comparator.compared().is_empty());
        assert!(writer.written().is_empty());
    }

    #[test]
    fn matcher_failure_propagates() {
        let operation = CompareOperation::new(
            MockFileMatcher::failing(),
            MockPairLoader::new(),
            MockPairComparator::new(),
            MockReportWriter::new(),
        );

        let result = operation.execute(&input());

        assert!(matches!(result, Err(OperationError::Scan(_))));
    }

    #[test]
    fn report_receives_full_partition() {
        let matcher = MockFileMatcher::new()
            .with_pair("same.png")
            .with_baseline_only("gone.png")
            .with_candidate_only("new.png");
        let loader = MockPairLoader::new().with_images("same.png", white(2, 2), white(2, 2));
        let writer = MockReportWriter::new();
        let operation = CompareOperation::new(
            matcher,
            loader,
            MockPairComparator::new(),
            writer.clone(),
        );

        operation.execute(&input()).expect("execute succeeds");

        let written = writer.written();
        let report = &written[0];
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.identical, vec!["same.png"]);
        assert_eq!(report.removed, vec!["gone.png"]);
        assert_eq!(report.added, vec!["new.png"]);
    }
}
