use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::{ImageError, Result};

/// Encodes `image` as PNG at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`ImageError::Write`] if encoding or writing fails.
pub fn write_png(path: &Path, image: &RgbaImage) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| ImageError::Write {
            path: path.to_path_buf(),
            source,
        })
}
