//! Heuristic bound-cut injection.
//!
//! At every fractional node the injector forces each fractional variable
//! below its floor in the **shared** relaxation model. The cuts persist for
//! every later solve on every branch; nothing retracts them on backtracking,
//! so an integer point that needs `x_i = ceil(x_i)` in a sibling subtree can
//! be cut off. This is a deliberate speed-for-optimality trade of the
//! heuristic variant, not a valid cutting-plane derivation.

use crate::error::SolveResult;
use crate::model::ProblemInstance;
use crate::oracle::{BoundCut, RelaxationOracle};

/// Injects `x_i <= floor(x_i)` cuts into the shared oracle model.
#[derive(Debug, Default)]
pub struct CutInjector {
    cuts_added: u64,
}

impl CutInjector {
    /// Create an injector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one cut per fractional integer-required variable of `x`.
    ///
    /// Returns the number of cuts added.
    pub fn inject(
        &mut self,
        oracle: &mut dyn RelaxationOracle,
        x: &[f64],
        instance: &ProblemInstance,
        tol: f64,
    ) -> SolveResult<usize> {
        let mut added = 0;
        for (var, value, _) in instance.fractional_vars(x, tol) {
            oracle.add_cut(&BoundCut {
                var,
                upper: value.floor(),
            })?;
            added += 1;
        }
        self.cuts_added += added as u64;
        Ok(added)
    }

    /// Total cuts added over the run.
    pub fn cuts_added(&self) -> u64 {
        self.cuts_added
    }
}
