use shotdiff_core::{ComparisonResult, ScannedFile};

use super::rules::{DifferenceRule, RemovedFilesRule, VerdictRule};
use super::{VerdictContext, VerdictResult};

pub struct VerdictEngine<'a> {
    rules: Vec<&'a dyn VerdictRule>,
}

impl<'a> VerdictEngine<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: &'a dyn VerdictRule) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn evaluate(&self, context: &VerdictContext<'_>) -> VerdictResult {
        let mut result = VerdictResult::default();

        for rule in &self.rules {
            rule.check(context, &mut result);
        }

        result
    }
}

impl Default for VerdictEngine<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the standard rules: any differing pair or any removed baseline
/// screenshot fails the run.
#[must_use]
pub fn calculate_verdict(
    results: &[ComparisonResult],
    baseline_only: &[ScannedFile],
) -> VerdictResult {
    let difference_rule = DifferenceRule;
    let removed_rule = RemovedFilesRule;

    let mut engine = VerdictEngine::new();
    engine.add_rule(&difference_rule);
    engine.add_rule(&removed_rule);

    engine.evaluate(&VerdictContext {
        results,
        baseline_only,
    })
}
