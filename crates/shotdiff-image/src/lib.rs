mod comparator;
mod error;
mod loader;
mod options;
mod pixels;
mod writer;

pub use comparator::{PixelComparison, compare_pair, compare_pixels, record_dimension_mismatch};
pub use error::ImageError;
pub use loader::{LoadedImagePair, decode_png, load_pair};
pub use options::{CompareOptions, DEFAULT_DIFF_ALPHA, DEFAULT_THRESHOLD, Rgb};
pub use writer::write_png;

pub type Result<T> = std::result::Result<T, ImageError>;
