mod outcome;
mod summary;
pub mod types;

pub use outcome::{ComparisonOutcome, ComparisonResult, DimensionMismatch};
pub use summary::{DirectorySummary, Verdict};
pub use types::*;

/// Suffix of the re-encoded baseline image written for a differing pair.
pub const BASELINE_SUFFIX: &str = "-baseline";
/// Suffix of the re-encoded candidate image written for a differing pair.
pub const CANDIDATE_SUFFIX: &str = "-candidate";
/// Suffix of the difference mask written for a differing pair.
pub const DIFF_SUFFIX: &str = "-diff";
/// Extension (compared case-insensitively) of files eligible for comparison.
pub const IMAGE_EXTENSION: &str = "png";
