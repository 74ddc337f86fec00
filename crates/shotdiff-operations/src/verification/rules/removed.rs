use super::{VerdictContext, VerdictResult, VerdictRule};

pub struct RemovedFilesRule;

impl VerdictRule for RemovedFilesRule {
    fn check(&self, context: &VerdictContext<'_>, result: &mut VerdictResult) {
        result.removed = context
            .baseline_only
            .iter()
            .map(|f| f.name.clone())
            .collect();
    }
}
