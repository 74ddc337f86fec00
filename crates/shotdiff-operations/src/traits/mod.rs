mod file_matcher;
mod pair_comparator;
mod pair_loader;
mod report_writer;

pub use file_matcher::FileMatcher;
pub use pair_comparator::PairComparator;
pub use pair_loader::PairLoader;
pub use report_writer::ReportWriter;
