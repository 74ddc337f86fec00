use std::path::Path;

use shotdiff_core::MatchedPair;
use shotdiff_image::LoadedImagePair;

use crate::Result;

pub trait PairLoader {
    /// # Errors
    ///
    /// Returns an error if either image of the pair cannot be decoded.
    fn load_pair(&self, pair: &MatchedPair, output_dir: &Path) -> Result<LoadedImagePair>;
}
