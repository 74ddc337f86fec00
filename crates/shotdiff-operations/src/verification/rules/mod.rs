mod differences;
mod removed;

pub use differences::DifferenceRule;
pub use removed::RemovedFilesRule;

use super::{VerdictContext, VerdictResult};

pub trait VerdictRule {
    fn check(&self, context: &VerdictContext<'_>, result: &mut VerdictResult);
}
