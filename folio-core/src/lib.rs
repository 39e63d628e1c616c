//! folio-core: branch-and-bound engine for 0/1 project selection.
//!
//! Solves the capital-budgeting problem: pick a subset of N candidate
//! projects maximizing total performance under a capital budget, a staffing
//! budget, and a maximum project count. The engine explores the
//! integer-restricted feasible region with a depth-first, left-biased
//! branch-and-bound search; the continuous relaxations are solved by an
//! external [`RelaxationOracle`] that this crate drives but does not
//! implement.
//!
//! Two variants are provided (see [`SearchVariant`]):
//!
//! - **Leveled**: first-fractional branching, warm-started child solves, and
//!   per-depth bound tracking that closes tree levels as their node census
//!   empties. Stops early with a proven optimum once the incumbent meets the
//!   closed global bound.
//! - **HeuristicCuts**: most-fractional branching plus permanent
//!   `x_i <= floor(x_i)` cuts on the shared relaxation model. Faster, but
//!   the cuts are not valid cutting planes and the optimality guarantee is
//!   lost.
//!
//! # Example
//!
//! ```ignore
//! use folio_core::{solve, ProblemInstance, SearchSettings};
//!
//! let instance = ProblemInstance::from_dat_file("problem_1.dat")?;
//! let mut oracle = /* implementation of RelaxationOracle */;
//!
//! let outcome = solve(&instance, &mut oracle, &SearchSettings::default())?;
//! if let Some(best) = outcome.best() {
//!     println!("objective {} at depth {}", best.objective, best.depth);
//! }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod model;
pub mod oracle;
pub mod search;
pub mod settings;

pub use error::{SolveError, SolveResult};
pub use model::{
    generate_instance, GeneratorConfig, ProblemInstance, SearchOutcome, SearchStats, Solution,
};
pub use oracle::{BoundCut, Relaxation, RelaxationOracle, RelaxationStatus, WarmStartBasis};
pub use search::{SearchState, SearchTree};
pub use settings::{SearchSettings, SearchVariant, Sense};

/// Solve an instance with the given oracle and settings.
///
/// Runs one search to a terminal state and returns the recorded solutions,
/// the index of the best one, and run statistics.
pub fn solve(
    instance: &ProblemInstance,
    oracle: &mut dyn RelaxationOracle,
    settings: &SearchSettings,
) -> SolveResult<SearchOutcome> {
    SearchTree::new(instance, settings.clone()).run(oracle)
}
