use std::path::Path;

use shotdiff_core::FileMatch;

use crate::Result;
use crate::traits::FileMatcher;

pub struct FileSystemMatcher;

impl FileSystemMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FileMatcher for FileSystemMatcher {
    fn match_files(&self, baseline_dir: &Path, candidate_dir: &Path) -> Result<FileMatch> {
        Ok(shotdiff_scan::match_files(baseline_dir, candidate_dir)?)
    }
}
