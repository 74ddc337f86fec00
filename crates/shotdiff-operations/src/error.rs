use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Scan(#[from] shotdiff_scan::ScanError),

    #[error(transparent)]
    Image(#[from] shotdiff_image::ImageError),

    #[error(transparent)]
    Report(#[from] shotdiff_report::ReportError),

    #[error("failed to read config file '{path}'")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("threshold must be between 0 and 1, got {0}")]
    InvalidThreshold(f64),

    #[error("diff alpha must be between 0 and 1, got {0}")]
    InvalidAlpha(f64),
}

pub type Result<T> = std::result::Result<T, OperationError>;
