mod context;
mod engine;
mod result;
pub mod rules;

pub use context::VerdictContext;
pub use engine::{VerdictEngine, calculate_verdict};
pub use result::VerdictResult;
