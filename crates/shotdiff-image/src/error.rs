use std::path::PathBuf;

use shotdiff_core::ImageSide;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to decode {side} image '{path}'")]
    Decode {
        side: ImageSide,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write image '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
