mod comparator;
mod loader;
mod matcher;
mod report;

pub use comparator::PixelComparator;
pub use loader::PngPairLoader;
pub use matcher::FileSystemMatcher;
pub use report::HtmlReportWriter;
