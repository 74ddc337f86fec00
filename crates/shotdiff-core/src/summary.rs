use std::fmt;

use serde::Serialize;

use crate::outcome::ComparisonResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Pass => 0,
            Self::Fail => 1,
        }
    }

    #[must_use]
    pub fn is_pass(self) -> bool {
        self == Self::Pass
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pass => "PASSED",
            Self::Fail => "FAILED",
        };
        write!(f, "{s}")
    }
}

/// Aggregate counts for one comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectorySummary {
    pub total_images: usize,
    pub with_differences: usize,
    pub without_differences: usize,
    pub removed_count: usize,
    pub added_count: usize,
    pub exit_code: u8,
}

impl DirectorySummary {
    #[must_use]
    pub fn new(
        results: &[ComparisonResult],
        removed_count: usize,
        added_count: usize,
        verdict: Verdict,
    ) -> Self {
        let with_differences = results.iter().filter(|r| r.has_difference()).count();

        Self {
            total_images: results.len() + removed_count + added_count,
            with_differences,
            without_differences: results.len() - with_differences,
            removed_count,
            added_count,
            exit_code: verdict.exit_code(),
        }
    }
}
