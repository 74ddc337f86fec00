use shotdiff_core::{ComparisonResult, DimensionMismatch};
use shotdiff_image::{CompareOptions, LoadedImagePair};

use crate::Result;

pub trait PairComparator {
    /// Compares an equally sized pair, persisting derived images when the
    /// pair differs.
    ///
    /// # Errors
    ///
    /// Returns an error if a derived image cannot be written.
    fn compare(
        &self,
        pair: &LoadedImagePair,
        options: &CompareOptions,
    ) -> Result<ComparisonResult>;

    /// Records a pair whose sizes differ as fully different.
    ///
    /// # Errors
    ///
    /// Returns an error if the baseline or candidate copy cannot be written.
    fn record_mismatch(
        &self,
        pair: &LoadedImagePair,
        mismatch: DimensionMismatch,
    ) -> Result<ComparisonResult>;
}
