//! Solution and outcome types.

use crate::search::SearchState;

/// An integer-feasible assignment found during the search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Values of all decision variables (projects plus the auxiliary `z`).
    pub assignment: Vec<f64>,

    /// Objective value of the assignment.
    pub objective: f64,

    /// Tree depth at which the assignment was found.
    pub depth: usize,
}

/// Counters gathered over a search run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Nodes popped from the frontier and solved (root included).
    pub nodes_explored: u64,

    /// Fractional nodes discarded by the bound test.
    pub nodes_pruned: u64,

    /// Bound cuts injected into the shared relaxation model.
    pub cuts_added: u64,

    /// Number of times the incumbent improved.
    pub incumbent_updates: u64,

    /// Wall-clock time of the run in milliseconds.
    pub solve_time_ms: u64,
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Terminal state the search reached.
    pub state: SearchState,

    /// Every integer-feasible solution recorded, in discovery order.
    pub solutions: Vec<Solution>,

    /// Index into `solutions` of the best one found.
    pub best_index: usize,

    /// Run counters.
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// The best solution found, if any.
    pub fn best(&self) -> Option<&Solution> {
        self.solutions.get(self.best_index)
    }

    /// Number of solutions recorded.
    pub fn count(&self) -> usize {
        self.solutions.len()
    }
}
