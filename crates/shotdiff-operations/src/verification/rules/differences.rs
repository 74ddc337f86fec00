use super::{VerdictContext, VerdictResult, VerdictRule};

pub struct DifferenceRule;

impl VerdictRule for DifferenceRule {
    fn check(&self, context: &VerdictContext<'_>, result: &mut VerdictResult) {
        result.differing = context
            .results
            .iter()
            .filter(|r| r.has_difference())
            .map(|r| r.name.clone())
            .collect();
    }
}
