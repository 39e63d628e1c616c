//! Configuration settings for the search engine.

/// Objective direction of the underlying problem.
///
/// Capital budgeting maximizes total performance; the engine itself is
/// direction-agnostic and mirrors every bound test for minimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sense {
    /// Maximize the objective.
    #[default]
    Maximize,

    /// Minimize the objective.
    Minimize,
}

impl Sense {
    /// True if `candidate` is a strictly better objective than `current`.
    pub fn improves(&self, candidate: f64, current: f64) -> bool {
        match self {
            Sense::Maximize => candidate > current,
            Sense::Minimize => candidate < current,
        }
    }

    /// Worst possible objective value for this direction.
    pub fn worst(&self) -> f64 {
        match self {
            Sense::Maximize => f64::NEG_INFINITY,
            Sense::Minimize => f64::INFINITY,
        }
    }
}

/// Which search algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchVariant {
    /// Exhaustive search with per-depth bound tracking.
    ///
    /// Branches on the first fractional variable, reuses the parent's simplex
    /// basis as a warm start, closes tree levels as their node census reaches
    /// zero, and stops early once the incumbent meets the closed global bound.
    /// Proves optimality.
    #[default]
    Leveled,

    /// Incumbent-driven search with heuristic bound cuts.
    ///
    /// Branches on the most fractional variable and injects `x_i <= floor(x_i)`
    /// constraints into the shared relaxation model at every fractional node.
    /// The cuts are never retracted when the search backtracks, so they can
    /// remove integer points reachable only through a sibling subtree: this
    /// variant trades the optimality guarantee for a smaller tree.
    HeuristicCuts,
}

/// Search engine settings.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Algorithm variant to run.
    pub variant: SearchVariant,

    /// Objective direction.
    pub sense: Sense,

    /// Integer feasibility tolerance.
    /// A value is integral if |x - round(x)| <= int_feas_tol (inclusive).
    pub int_feas_tol: f64,

    /// Tolerance for bound comparisons: pruning and the optimality proof.
    pub bound_tol: f64,

    /// Print progress information.
    pub verbose: bool,

    /// Log frequency (log every N explored nodes when verbose).
    pub log_freq: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            variant: SearchVariant::default(),
            sense: Sense::default(),
            int_feas_tol: 1e-6,
            bound_tol: 1e-6,
            verbose: false,
            log_freq: 100,
        }
    }
}

impl SearchSettings {
    /// Settings for the given variant.
    pub fn for_variant(variant: SearchVariant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    /// Set the objective direction.
    pub fn with_sense(mut self, sense: Sense) -> Self {
        self.sense = sense;
        self
    }

    /// Set the integer feasibility tolerance.
    pub fn with_int_feas_tol(mut self, tol: f64) -> Self {
        self.int_feas_tol = tol;
        self
    }

    /// Enable progress logging on every node.
    pub fn verbose() -> Self {
        let mut s = Self::default();
        s.verbose = true;
        s.log_freq = 1;
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sense_improves() {
        assert!(Sense::Maximize.improves(2.0, 1.0));
        assert!(!Sense::Maximize.improves(1.0, 1.0));
        assert!(Sense::Minimize.improves(1.0, 2.0));
        assert!(!Sense::Minimize.improves(2.0, 2.0));
    }

    #[test]
    fn test_defaults() {
        let s = SearchSettings::default();
        assert_eq!(s.variant, SearchVariant::Leveled);
        assert_eq!(s.sense, Sense::Maximize);
        assert_eq!(s.int_feas_tol, 1e-6);
    }
}
