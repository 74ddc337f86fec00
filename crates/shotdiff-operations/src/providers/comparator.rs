use shotdiff_core::{ComparisonResult, DimensionMismatch};
use shotdiff_image::{CompareOptions, LoadedImagePair};

use crate::Result;
use crate::traits::PairComparator;

pub struct PixelComparator;

impl PixelComparator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PixelComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl PairComparator for PixelComparator {
    fn compare(&self, pair: &LoadedImagePair, options: &CompareOptions) -> Result<ComparisonResult> {
        Ok(shotdiff_image::compare_pair(pair, options)?)
    }

    fn record_mismatch(
        &self,
        pair: &LoadedImagePair,
        mismatch: DimensionMismatch,
    ) -> Result<ComparisonResult> {
        Ok(shotdiff_image::record_dimension_mismatch(pair, mismatch)?)
    }
}
