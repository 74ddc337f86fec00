use std::path::Path;

use serde::Serialize;
use shotdiff_core::{DirectorySummary, Verdict};
use shotdiff_operations::operations::{CompareInput, CompareOutput};

use super::OutputFormatter;
use crate::error::Result;

pub(crate) struct JsonFormatter;

#[derive(Serialize)]
struct JsonSummary<'a> {
    verdict: Verdict,
    #[serde(flatten)]
    summary: &'a DirectorySummary,
    report: &'a Path,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, _input: &CompareInput, output: &CompareOutput) -> Result<String> {
        let json = JsonSummary {
            verdict: output.verdict.verdict(),
            summary: &output.summary,
            report: &output.report_path,
        };
        let mut rendered = serde_json::to_string_pretty(&json)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use shotdiff_core::ComparisonResult;
    use shotdiff_operations::verification::calculate_verdict;

    use super::*;
    use crate::output::formatter::tests::sample_input;

    #[test]
    fn serializes_summary_fields() {
        let results = vec![ComparisonResult::identical("same.png")];
        let verdict = calculate_verdict(&results, &[]);
        let output = CompareOutput {
            summary: DirectorySummary::new(&results, 0, 2, verdict.verdict()),
            verdict,
            results,
            baseline_only: Vec::new(),
            candidate_only: Vec::new(),
            report_path: PathBuf::from("/out/index.html"),
        };

        let rendered = JsonFormatter
            .format(&sample_input(), &output)
            .expect("serialization succeeds");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");

        assert_eq!(value["verdict"], "pass");
        assert_eq!(value["total_images"], 3);
        assert_eq!(value["without_differences"], 1);
        assert_eq!(value["added_count"], 2);
        assert_eq!(value["exit_code"], 0);
        assert_eq!(value["report"], "/out/index.html");
    }
}
