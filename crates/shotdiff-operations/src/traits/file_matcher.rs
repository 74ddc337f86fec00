use std::path::Path;

use shotdiff_core::FileMatch;

use crate::Result;

pub trait FileMatcher {
    /// # Errors
    ///
    /// Returns an error if either directory cannot be listed.
    fn match_files(&self, baseline_dir: &Path, candidate_dir: &Path) -> Result<FileMatch>;
}
