use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{role} directory '{path}' does not exist or is not a directory")]
    InvalidDirectory { role: &'static str, path: PathBuf },

    #[error("output path '{0}' exists but is not a directory")]
    OutputNotDirectory(PathBuf),

    #[error("failed to create output directory '{path}'")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("comparison failed")]
    Operation(#[from] shotdiff_operations::OperationError),

    #[error("failed to serialize summary")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
