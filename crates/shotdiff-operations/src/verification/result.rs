use shotdiff_core::Verdict;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerdictResult {
    /// Matched pairs that differ, including dimension mismatches.
    pub differing: Vec<String>,
    /// Baseline screenshots missing from the candidate directory.
    pub removed: Vec<String>,
}

impl VerdictResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.differing.is_empty() && self.removed.is_empty()
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if self.is_success() {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}
