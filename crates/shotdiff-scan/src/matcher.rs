use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use shotdiff_core::{FileMatch, IMAGE_EXTENSION, MatchedPair, ScannedFile};
use tracing::debug;

use crate::ordering::compare_names;
use crate::{Result, ScanError};

fn has_image_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(IMAGE_EXTENSION))
}

/// Lists the regular image files directly inside `dir`, sorted by name.
///
/// Sub-directories, symlinks, entries with non UTF-8 names and entries whose
/// metadata cannot be read are skipped.
///
/// # Errors
///
/// Returns [`ScanError::DirectoryAccess`] if `dir` cannot be listed.
pub fn scan_directory(dir: &Path) -> Result<Vec<ScannedFile>> {
    let entries = fs::read_dir(dir).map_err(|source| ScanError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let Ok(entry) = entry else {
            continue;
        };
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !has_image_extension(&name) {
            continue;
        }
        // file_type() does not follow symlinks
        if entry.file_type().is_ok_and(|ft| ft.is_file()) {
            let path = entry.path();
            files.push(ScannedFile { name, path });
        }
    }

    files.sort_by(|a, b| compare_names(&a.name, &b.name));
    debug!(dir = %dir.display(), count = files.len(), "scanned directory");

    Ok(files)
}

/// Scans both directories and partitions the file names into pairs present
/// on both sides, baseline-only files and candidate-only files.
///
/// Matching is case-sensitive. `matched` and `baseline_only` follow the
/// baseline order, `candidate_only` follows the candidate order.
///
/// # Errors
///
/// Returns [`ScanError::DirectoryAccess`] if either directory cannot be listed.
pub fn match_files(baseline_dir: &Path, candidate_dir: &Path) -> Result<FileMatch> {
    let baseline_files = scan_directory(baseline_dir)?;
    let candidate_files = scan_directory(candidate_dir)?;

    let candidate_paths: HashMap<&str, &PathBuf> = candidate_files
        .iter()
        .map(|f| (f.name.as_str(), &f.path))
        .collect();
    let baseline_names: HashSet<&str> = baseline_files.iter().map(|f| f.name.as_str()).collect();

    let mut result = FileMatch::default();

    for file in &baseline_files {
        match candidate_paths.get(file.name.as_str()) {
            Some(candidate_path) => result.matched.push(MatchedPair {
                name: file.name.clone(),
                baseline_path: file.path.clone(),
                candidate_path: (*candidate_path).clone(),
            }),
            None => result.baseline_only.push(file.clone()),
        }
    }

    result.candidate_only = candidate_files
        .iter()
        .filter(|f| !baseline_names.contains(f.name.as_str()))
        .cloned()
        .collect();

    debug!(
        matched = result.matched.len(),
        baseline_only = result.baseline_only.len(),
        candidate_only = result.candidate_only.len(),
        "matched screenshot directories"
    );

    Ok(result)
}
