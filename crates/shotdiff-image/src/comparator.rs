use image::RgbaImage;
use shotdiff_core::{ComparisonOutcome, ComparisonResult, DimensionMismatch};
use tracing::debug;

use crate::loader::LoadedImagePair;
use crate::options::CompareOptions;
use crate::pixels::diff_pixels;
use crate::writer::write_png;
use crate::Result;

/// Outcome of running the pixel comparison over an equally sized pair.
#[derive(Debug, Clone)]
pub struct PixelComparison {
    pub diff_pixels: u64,
    /// Share of differing pixels in `[0, 100]`; `0` for an empty image.
    pub percentage: f64,
    pub mask: RgbaImage,
}

impl PixelComparison {
    #[must_use]
    pub fn has_difference(&self) -> bool {
        self.diff_pixels > 0
    }
}

/// Compares the pixels of a pair without touching the file system.
///
/// The pair must not carry a dimension mismatch.
#[must_use]
pub fn compare_pixels(pair: &LoadedImagePair, options: &CompareOptions) -> PixelComparison {
    debug_assert!(pair.dimension_mismatch.is_none());

    let mut mask = RgbaImage::new(pair.width, pair.height);
    let diff_pixels = diff_pixels(
        pair.baseline_pixels(),
        pair.candidate_pixels(),
        &mut mask,
        pair.width as usize,
        pair.height as usize,
        options,
    );

    let total_pixels = pair.dimensions().area();
    let percentage = if total_pixels > 0 {
        diff_pixels as f64 / total_pixels as f64 * 100.0
    } else {
        0.0
    };

    PixelComparison {
        diff_pixels,
        percentage,
        mask,
    }
}

/// Compares a pair and, when any pixel differs, writes the difference mask
/// and re-encoded copies of both images next to each other in the output
/// directory. Identical pairs write nothing.
///
/// A pair with a dimension mismatch is recorded as fully different instead,
/// see [`record_dimension_mismatch`].
///
/// # Errors
///
/// Returns [`crate::ImageError::Write`] if a derived image cannot be written.
pub fn compare_pair(pair: &LoadedImagePair, options: &CompareOptions) -> Result<ComparisonResult> {
    if let Some(mismatch) = pair.dimension_mismatch {
        return record_dimension_mismatch(pair, mismatch);
    }

    let comparison = compare_pixels(pair, options);

    if !comparison.has_difference() {
        debug!(name = %pair.name, "images are identical");
        return Ok(ComparisonResult::identical(&pair.name));
    }

    let paths = &pair.output_paths;
    write_png(&paths.diff, &comparison.mask)?;
    write_png(&paths.baseline, &pair.baseline)?;
    write_png(&paths.candidate, &pair.candidate)?;

    debug!(
        name = %pair.name,
        diff_pixels = comparison.diff_pixels,
        percentage = comparison.percentage,
        "images differ"
    );

    Ok(ComparisonResult {
        name: pair.name.clone(),
        outcome: ComparisonOutcome::Different {
            diff_pixels: comparison.diff_pixels,
            percentage: comparison.percentage,
        },
        output_paths: Some(pair.output_paths.clone()),
    })
}

/// Records a size mismatch as a fully different result and writes both
/// images so they can be viewed side by side. No mask is written.
///
/// # Errors
///
/// Returns [`crate::ImageError::Write`] if a copy cannot be written.
pub fn record_dimension_mismatch(
    pair: &LoadedImagePair,
    mismatch: DimensionMismatch,
) -> Result<ComparisonResult> {
    let paths = &pair.output_paths;
    write_png(&paths.baseline, &pair.baseline)?;
    write_png(&paths.candidate, &pair.candidate)?;

    debug!(
        name = %pair.name,
        baseline = %mismatch.baseline,
        candidate = %mismatch.candidate,
        "image dimensions differ"
    );

    Ok(ComparisonResult {
        name: pair.name.clone(),
        outcome: ComparisonOutcome::DimensionMismatch(mismatch),
        output_paths: Some(pair.output_paths.clone()),
    })
}
