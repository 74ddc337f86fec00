use std::path::Path;

use shotdiff_core::MatchedPair;
use shotdiff_image::LoadedImagePair;

use crate::Result;
use crate::traits::PairLoader;

pub struct PngPairLoader;

impl PngPairLoader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PngPairLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PairLoader for PngPairLoader {
    fn load_pair(&self, pair: &MatchedPair, output_dir: &Path) -> Result<LoadedImagePair> {
        Ok(shotdiff_image::load_pair(pair, output_dir)?)
    }
}
