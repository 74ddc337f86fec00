use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{BASELINE_SUFFIX, CANDIDATE_SUFFIX, DIFF_SUFFIX};

/// An eligible image found while scanning a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub name: String,
    pub path: PathBuf,
}

impl ScannedFile {
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// A file name present in both the baseline and the candidate directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPair {
    pub name: String,
    pub baseline_path: PathBuf,
    pub candidate_path: PathBuf,
}

/// Partition of two scanned directories by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMatch {
    pub matched: Vec<MatchedPair>,
    pub baseline_only: Vec<ScannedFile>,
    pub candidate_only: Vec<ScannedFile>,
}

impl FileMatch {
    #[must_use]
    pub fn total(&self) -> usize {
        self.matched.len() + self.baseline_only.len() + self.candidate_only.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Which directory of a pair an image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSide {
    Baseline,
    Candidate,
}

impl fmt::Display for ImageSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Baseline => "baseline",
            Self::Candidate => "candidate",
        };
        write!(f, "{s}")
    }
}

/// Locations of the derived images written for a differing pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub baseline: PathBuf,
    pub candidate: PathBuf,
    pub diff: PathBuf,
}

impl OutputPaths {
    /// Derives `<stem>-baseline.<ext>`, `<stem>-candidate.<ext>` and
    /// `<stem>-diff.<ext>` inside `output_dir`, keeping the original
    /// extension's spelling.
    #[must_use]
    pub fn derive(output_dir: &Path, name: &str) -> Self {
        let path = Path::new(name);
        let stem = path
            .file_stem()
            .map_or_else(|| name.to_string(), |s| s.to_string_lossy().into_owned());
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        let derived = |suffix: &str| output_dir.join(format!("{stem}{suffix}{extension}"));

        Self {
            baseline: derived(BASELINE_SUFFIX),
            candidate: derived(CANDIDATE_SUFFIX),
            diff: derived(DIFF_SUFFIX),
        }
    }
}
