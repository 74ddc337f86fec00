use std::path::Path;

use image::{ImageFormat, ImageReader, RgbaImage};
use shotdiff_core::{DimensionMismatch, Dimensions, ImageSide, MatchedPair, OutputPaths};
use tracing::debug;

use crate::{ImageError, Result};

/// A matched pair decoded into 8-bit RGBA buffers.
#[derive(Debug, Clone)]
pub struct LoadedImagePair {
    pub name: String,
    /// Width of the baseline image.
    pub width: u32,
    /// Height of the baseline image.
    pub height: u32,
    pub baseline: RgbaImage,
    pub candidate: RgbaImage,
    /// Set when the two images differ in size; pixel comparison is undefined
    /// for such pairs.
    pub dimension_mismatch: Option<DimensionMismatch>,
    pub output_paths: OutputPaths,
}

impl LoadedImagePair {
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    #[must_use]
    pub fn baseline_pixels(&self) -> &[u8] {
        self.baseline.as_raw()
    }

    #[must_use]
    pub fn candidate_pixels(&self) -> &[u8] {
        self.candidate.as_raw()
    }
}

/// Decodes the PNG at `path` into an RGBA buffer.
///
/// # Errors
///
/// Returns [`ImageError::Decode`] naming `side` if the file cannot be opened
/// or is not a valid PNG.
pub fn decode_png(path: &Path, side: ImageSide) -> Result<RgbaImage> {
    let decode_error = |source| ImageError::Decode {
        side,
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ImageReader::open(path)
        .map_err(|e| decode_error(image::ImageError::IoError(e)))?;
    reader.set_format(ImageFormat::Png);

    let image = reader.decode().map_err(decode_error)?;
    Ok(image.into_rgba8())
}

/// Decodes both sides of `pair`. A size difference is recorded rather than
/// reported as an error. `output_dir` is only used to derive where images
/// for this pair would be written.
///
/// # Errors
///
/// Returns [`ImageError::Decode`] if either image cannot be decoded.
pub fn load_pair(pair: &MatchedPair, output_dir: &Path) -> Result<LoadedImagePair> {
    let baseline = decode_png(&pair.baseline_path, ImageSide::Baseline)?;
    let candidate = decode_png(&pair.candidate_path, ImageSide::Candidate)?;

    let baseline_dims = Dimensions::from(baseline.dimensions());
    let candidate_dims = Dimensions::from(candidate.dimensions());

    let dimension_mismatch = (baseline_dims != candidate_dims).then_some(DimensionMismatch {
        baseline: baseline_dims,
        candidate: candidate_dims,
    });

    debug!(
        name = %pair.name,
        dimensions = %baseline_dims,
        mismatch = dimension_mismatch.is_some(),
        "loaded image pair"
    );

    Ok(LoadedImagePair {
        name: pair.name.clone(),
        width: baseline_dims.width,
        height: baseline_dims.height,
        baseline,
        candidate,
        dimension_mismatch,
        output_paths: OutputPaths::derive(output_dir, &pair.name),
    })
}
