//! Branching variable selection.

use crate::model::ProblemInstance;

/// Branching variable selection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BranchRule {
    /// Lowest-index fractional variable.
    #[default]
    FirstFractional,

    /// Fractional variable closest to 0.5, to shrink the expected subtree.
    MostFractional,
}

/// A chosen split.
#[derive(Debug, Clone, Copy)]
pub struct BranchDecision {
    /// Variable to branch on.
    pub var: usize,

    /// Its fractional relaxation value.
    pub value: f64,

    /// Fractionality of the value (distance to the nearest integer).
    pub score: f64,
}

/// Branching variable selector.
#[derive(Debug, Clone, Copy)]
pub struct BranchSelector {
    rule: BranchRule,
}

impl BranchSelector {
    /// Create a selector for the given rule.
    pub fn new(rule: BranchRule) -> Self {
        Self { rule }
    }

    /// Select a branching variable from a fractional relaxation solution.
    ///
    /// Returns None if every integer-required variable is within `tol` of an
    /// integer; callers classify such nodes as integral before branching.
    pub fn select(
        &self,
        x: &[f64],
        instance: &ProblemInstance,
        tol: f64,
    ) -> Option<BranchDecision> {
        let fractional = instance.fractional_vars(x, tol);

        let chosen = match self.rule {
            BranchRule::FirstFractional => fractional.first().copied(),
            BranchRule::MostFractional => fractional
                .iter()
                .max_by(|(_, _, f1), (_, _, f2)| f1.total_cmp(f2))
                .copied(),
        };

        chosen.map(|(var, value, score)| BranchDecision { var, value, score })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> ProblemInstance {
        ProblemInstance::new(3, 10, 10, 2, vec![6, 5, 4], vec![5, 4, 3], vec![2, 2, 2]).unwrap()
    }

    #[test]
    fn test_first_fractional_takes_lowest_index() {
        let inst = tiny();
        let selector = BranchSelector::new(BranchRule::FirstFractional);

        // x1 and x2 fractional; index 1 comes first.
        let x = [1.0, 0.3, 0.5, 2.0];
        let d = selector.select(&x, &inst, 1e-6).unwrap();
        assert_eq!(d.var, 1);
        assert_eq!(d.value, 0.3);
    }

    #[test]
    fn test_most_fractional_takes_closest_to_half() {
        let inst = tiny();
        let selector = BranchSelector::new(BranchRule::MostFractional);

        // Fractionalities: 0.1, 0.3, 0.45 -> index 2 wins.
        let x = [0.9, 0.7, 0.45, 2.0];
        let d = selector.select(&x, &inst, 1e-6).unwrap();
        assert_eq!(d.var, 2);
        assert!((d.score - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_integral_input_selects_nothing() {
        let inst = tiny();
        for rule in [BranchRule::FirstFractional, BranchRule::MostFractional] {
            let selector = BranchSelector::new(rule);
            // Auxiliary variable is fractional but never a candidate.
            assert!(selector.select(&[1.0, 0.0, 1.0, 2.5], &inst, 1e-6).is_none());
        }
    }

    #[test]
    fn test_tolerance_boundary() {
        let inst = tiny();
        let selector = BranchSelector::new(BranchRule::FirstFractional);
        let tol = 0.125;

        // Distance exactly at the tolerance: integral, nothing to select.
        assert!(selector.select(&[0.875, 0.0, 0.0, 0.0], &inst, tol).is_none());

        // Just beyond: fractional.
        let d = selector.select(&[0.8125, 0.0, 0.0, 0.0], &inst, tol).unwrap();
        assert_eq!(d.var, 0);
    }
}
