use shotdiff_core::{ComparisonResult, ScannedFile};

/// Inputs to the verdict. Candidate-only files never affect it.
pub struct VerdictContext<'a> {
    pub results: &'a [ComparisonResult],
    pub baseline_only: &'a [ScannedFile],
}
