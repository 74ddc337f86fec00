mod error;
mod matcher;
mod ordering;

pub use error::ScanError;
pub use matcher::{match_files, scan_directory};
pub use ordering::compare_names;

pub type Result<T> = std::result::Result<T, ScanError>;
