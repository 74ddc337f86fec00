mod error;
mod html;
mod summary;
mod writer;

pub const REPORT_FILE_NAME: &str = "index.html";

pub use error::ReportError;
pub use html::render;
pub use summary::{DifferenceEntry, DifferenceKind, ReportSummary};
pub use writer::write_report;

pub type Result<T> = std::result::Result<T, ReportError>;
