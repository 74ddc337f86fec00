use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use image::RgbaImage;
use shotdiff_core::{
    ComparisonOutcome, ComparisonResult, DimensionMismatch, Dimensions, FileMatch, ImageSide,
    MatchedPair, OutputPaths, ScannedFile,
};
use shotdiff_image::{CompareOptions, ImageError, LoadedImagePair, compare_pixels};
use shotdiff_report::{REPORT_FILE_NAME, ReportSummary};
use shotdiff_scan::ScanError;

use crate::Result;
use crate::traits::{FileMatcher, PairComparator, PairLoader, ReportWriter};

pub struct MockFileMatcher {
    file_match: FileMatch,
    fail: bool,
}

impl MockFileMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            file_match: FileMatch::default(),
            fail: false,
        }
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            file_match: FileMatch::default(),
            fail: true,
        }
    }

    #[must_use]
    pub fn with_pair(mut self, name: &str) -> Self {
        self.file_match.matched.push(MatchedPair {
            name: name.to_string(),
            baseline_path: PathBuf::from("/mock/baseline").join(name),
            candidate_path: PathBuf::from("/mock/candidate").join(name),
        });
        self
    }

    #[must_use]
    pub fn with_baseline_only(mut self, name: &str) -> Self {
        self.file_match
            .baseline_only
            .push(ScannedFile::new(name, PathBuf::from("/mock/baseline").join(name)));
        self
    }

    #[must_use]
    pub fn with_candidate_only(mut self, name: &str) -> Self {
        self.file_match
            .candidate_only
            .push(ScannedFile::new(name, PathBuf::from("/mock/candidate").join(name)));
        self
    }
}

impl Default for MockFileMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FileMatcher for MockFileMatcher {
    fn match_files(&self, baseline_dir: &Path, _candidate_dir: &Path) -> Result<FileMatch> {
        if self.fail {
            return Err(ScanError::DirectoryAccess {
                path: baseline_dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "mock directory missing"),
            }
            .into());
        }
        Ok(self.file_match.clone())
    }
}

enum MockImages {
    Decoded(RgbaImage, RgbaImage),
    Corrupt,
}

pub struct MockPairLoader {
    images: HashMap<String, MockImages>,
}

impl MockPairLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            images: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_images(mut self, name: &str, baseline: RgbaImage, candidate: RgbaImage) -> Self {
        self.images
            .insert(name.to_string(), MockImages::Decoded(baseline, candidate));
        self
    }

    #[must_use]
    pub fn with_corrupt(mut self, name: &str) -> Self {
        self.images.insert(name.to_string(), MockImages::Corrupt);
        self
    }
}

impl Default for MockPairLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PairLoader for MockPairLoader {
    fn load_pair(&self, pair: &MatchedPair, output_dir: &Path) -> Result<LoadedImagePair> {
        let Some(MockImages::Decoded(baseline, candidate)) = self.images.get(&pair.name) else {
            return Err(ImageError::Decode {
                side: ImageSide::Baseline,
                path: pair.baseline_path.clone(),
                source: image::ImageError::IoError(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "mock corrupt image",
                )),
            }
            .into());
        };

        let baseline_dims = Dimensions::from(baseline.dimensions());
        let candidate_dims = Dimensions::from(candidate.dimensions());
        let dimension_mismatch = (baseline_dims != candidate_dims).then_some(DimensionMismatch {
            baseline: baseline_dims,
            candidate: candidate_dims,
        });

        Ok(LoadedImagePair {
            name: pair.name.clone(),
            width: baseline_dims.width,
            height: baseline_dims.height,
            baseline: baseline.clone(),
            candidate: candidate.clone(),
            dimension_mismatch,
            output_paths: OutputPaths::derive(output_dir, &pair.name),
        })
    }
}

/// Runs the real pixel comparison but never touches the file system.
#[derive(Clone, Default)]
pub struct MockPairComparator {
    compared: Arc<Mutex<Vec<String>>>,
    mismatches: Arc<Mutex<Vec<String>>>,
}

impl MockPairComparator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn compared(&self) -> Vec<String> {
        self.compared.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn mismatches(&self) -> Vec<String> {
        self.mismatches.lock().expect("lock poisoned").clone()
    }
}

impl PairComparator for MockPairComparator {
    fn compare(&self, pair: &LoadedImagePair, options: &CompareOptions) -> Result<ComparisonResult> {
        self.compared
            .lock()
            .expect("lock poisoned")
            .push(pair.name.clone());

        let comparison = compare_pixels(pair, options);
        if !comparison.has_difference() {
            return Ok(ComparisonResult::identical(&pair.name));
        }
        Ok(ComparisonResult {
            name: pair.name.clone(),
            outcome: ComparisonOutcome::Different {
                diff_pixels: comparison.diff_pixels,
                percentage: comparison.percentage,
            },
            output_paths: Some(pair.output_paths.clone()),
        })
    }

    fn record_mismatch(
        &self,
        pair: &LoadedImagePair,
        mismatch: DimensionMismatch,
    ) -> Result<ComparisonResult> {
        self.mismatches
            .lock()
            .expect("lock poisoned")
            .push(pair.name.clone());

        Ok(ComparisonResult {
            name: pair.name.clone(),
            outcome: ComparisonOutcome::DimensionMismatch(mismatch),
            output_paths: Some(pair.output_paths.clone()),
        })
    }
}

#[derive(Clone, Default)]
pub struct MockReportWriter {
    written: Arc<Mutex<Vec<ReportSummary>>>,
}

impl MockReportWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn written(&self) -> Vec<ReportSummary> {
        self.written.lock().expect("lock poisoned").clone()
    }
}

impl ReportWriter for MockReportWriter {
    fn write_report(&self, summary: &ReportSummary, output_dir: &Path) -> Result<PathBuf> {
        self.written
            .lock()
            .expect("lock poisoned")
            .push(summary.clone());
        Ok(output_dir.join(REPORT_FILE_NAME))
    }
}
