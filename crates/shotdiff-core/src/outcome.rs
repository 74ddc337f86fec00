use serde::Serialize;

use crate::types::{Dimensions, OutputPaths};

/// Both sides' sizes for a pair that cannot be compared pixel by pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionMismatch {
    pub baseline: Dimensions,
    pub candidate: Dimensions,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComparisonOutcome {
    Identical,
    Different { diff_pixels: u64, percentage: f64 },
    DimensionMismatch(DimensionMismatch),
}

impl ComparisonOutcome {
    #[must_use]
    pub fn has_difference(&self) -> bool {
        !matches!(self, Self::Identical)
    }

    /// Share of differing pixels in `[0, 100]`. A dimension mismatch always
    /// counts as fully different.
    #[must_use]
    pub fn diff_percentage(&self) -> f64 {
        match self {
            Self::Identical => 0.0,
            Self::Different { percentage, .. } => *percentage,
            Self::DimensionMismatch(_) => 100.0,
        }
    }
}

/// Result of comparing one matched pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub name: String,
    pub outcome: ComparisonOutcome,
    /// Derived images written for this pair; `None` when nothing was written.
    pub output_paths: Option<OutputPaths>,
}

impl ComparisonResult {
    #[must_use]
    pub fn identical(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: ComparisonOutcome::Identical,
            output_paths: None,
        }
    }

    #[must_use]
    pub fn has_difference(&self) -> bool {
        self.outcome.has_difference()
    }

    #[must_use]
    pub fn diff_percentage(&self) -> f64 {
        self.outcome.diff_percentage()
    }

    #[must_use]
    pub fn dimension_mismatch(&self) -> Option<&DimensionMismatch> {
        match &self.outcome {
            ComparisonOutcome::DimensionMismatch(mismatch) => Some(mismatch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_has_no_difference() {
        let result = ComparisonResult::identical("same.png");

        assert!(!result.has_difference());
        assert!(result.diff_percentage().abs() < f64::EPSILON);
        assert!(result.output_paths.is_none());
    }

    #[test]
    fn different_reports_its_percentage() {
        let outcome = ComparisonOutcome::Different {
            diff_pixels: 7,
            percentage: 7.0,
        };

        assert!(outcome.has_difference());
        assert!((outcome.diff_percentage() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dimension_mismatch_is_fully_different() {
        let outcome = ComparisonOutcome::DimensionMismatch(DimensionMismatch {
            baseline: Dimensions::new(10, 10),
            candidate: Dimensions::new(20, 10),
        });

        assert!(outcome.has_difference());
        assert!((outcome.diff_percentage() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dimension_mismatch_accessor_only_matches_mismatches() {
        let mismatch = DimensionMismatch {
            baseline: Dimensions::new(1, 2),
            candidate: Dimensions::new(3, 4),
        };
        let result = ComparisonResult {
            name: "a.png".to_string(),
            outcome: ComparisonOutcome::DimensionMismatch(mismatch),
            output_paths: None,
        };

        assert_eq!(result.dimension_mismatch(), Some(&mismatch));
        assert!(ComparisonResult::identical("b.png").dimension_mismatch().is_none());
    }
}
