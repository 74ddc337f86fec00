use std::fmt::Write;

use shotdiff_core::{ComparisonOutcome, ComparisonResult, ScannedFile};
use shotdiff_operations::operations::{CompareInput, CompareOutput};

use super::OutputFormatter;
use crate::error::Result;

pub(crate) struct PlainTextFormatter;

impl PlainTextFormatter {
    fn format_paths(output: &mut String, input: &CompareInput) {
        let _ = writeln!(output, "Baseline:  {}", input.baseline_dir.display());
        let _ = writeln!(output, "Candidate: {}", input.candidate_dir.display());
        let _ = writeln!(output, "Output:    {}", input.output_dir.display());
    }

    fn format_counts(output: &mut String, result: &CompareOutput) {
        let summary = &result.summary;
        let _ = writeln!(output, "\nTotal images: {}", summary.total_images);
        let _ = writeln!(output, "With differences: {}", summary.with_differences);
        let _ = writeln!(output, "Identical: {}", summary.without_differences);
        let _ = writeln!(output, "Removed: {}", summary.removed_count);
        let _ = writeln!(output, "Added: {}", summary.added_count);
    }

    fn format_differences(output: &mut String, results: &[ComparisonResult]) {
        let differing: Vec<_> = results.iter().filter(|r| r.has_difference()).collect();
        if differing.is_empty() {
            return;
        }

        output.push_str("\nDifferences:\n");
        for result in differing {
            match &result.outcome {
                ComparisonOutcome::Different { percentage, .. } => {
                    let _ = writeln!(output, "  {}: {percentage:.2}%", result.name);
                }
                ComparisonOutcome::DimensionMismatch(mismatch) => {
                    let _ = writeln!(
                        output,
                        "  {}: dimension mismatch (baseline {}, candidate {})",
                        result.name, mismatch.baseline, mismatch.candidate
                    );
                }
                ComparisonOutcome::Identical => {}
            }
        }
    }

    fn format_file_list(output: &mut String, title: &str, files: &[ScannedFile]) {
        if !files.is_empty() {
            let _ = writeln!(output, "\n{title}:");
            for file in files {
                let _ = writeln!(output, "  {}", file.name);
            }
        }
    }
}

impl OutputFormatter for PlainTextFormatter {
    fn format(&self, input: &CompareInput, result: &CompareOutput) -> Result<String> {
        let mut output = String::new();

        Self::format_paths(&mut output, input);
        Self::format_counts(&mut output, result);
        Self::format_differences(&mut output, &result.results);
        Self::format_file_list(&mut output, "Removed", &result.baseline_only);
        Self::format_file_list(&mut output, "Added", &result.candidate_only);

        let _ = writeln!(output, "\nReport: {}", result.report_path.display());
        let _ = writeln!(output, "{}", result.verdict.verdict());

        Ok(output)
    }
}
