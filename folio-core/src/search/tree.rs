//! Branch-and-bound tree driver.

use std::time::Instant;

use super::{BoundTracker, BranchRule, BranchSelector, CutInjector, Frontier, Node};
use crate::error::SolveResult;
use crate::model::{ProblemInstance, SearchOutcome, SearchStats, Solution};
use crate::oracle::{RelaxationOracle, RelaxationStatus};
use crate::settings::{SearchSettings, SearchVariant, Sense};

/// State machine of a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Not yet started.
    Init,

    /// Solving the root relaxation.
    SolvingRoot,

    /// Exploring the tree below a fractional root.
    Exploring,

    /// Terminal: the incumbent met the global bound and is proven optimal.
    FoundOptimal,

    /// Terminal: the frontier emptied; the best incumbent (if any) stands.
    Exhausted,

    /// Terminal: the root relaxation is infeasible; no solutions exist.
    InfeasibleRoot,
}

/// Mutable search state, owned by the tree and threaded through the run.
#[derive(Debug)]
pub struct SearchContext {
    /// Nodes popped and solved, root included.
    pub nodes_explored: u64,

    /// Fractional nodes discarded by the bound test.
    pub nodes_pruned: u64,

    /// Incumbent improvements.
    pub incumbent_updates: u64,

    /// Objective of the best integer solution so far (worst value of the
    /// sense until one is found).
    pub incumbent_objective: f64,

    /// Index into `solutions` of the incumbent.
    pub best_index: usize,

    /// Every integer solution recorded, in discovery order.
    pub solutions: Vec<Solution>,
}

impl SearchContext {
    fn new(sense: Sense) -> Self {
        Self {
            nodes_explored: 0,
            nodes_pruned: 0,
            incumbent_updates: 0,
            incumbent_objective: sense.worst(),
            best_index: 0,
            solutions: Vec::new(),
        }
    }

    /// Whether any integer solution has been recorded.
    pub fn has_incumbent(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// Record an integer solution; returns true if it improved the incumbent.
    fn record_solution(
        &mut self,
        sense: Sense,
        assignment: Vec<f64>,
        objective: f64,
        depth: usize,
    ) -> bool {
        self.solutions.push(Solution {
            assignment,
            objective,
            depth,
        });

        if sense.improves(objective, self.incumbent_objective) {
            self.incumbent_objective = objective;
            self.best_index = self.solutions.len() - 1;
            self.incumbent_updates += 1;
            true
        } else {
            false
        }
    }
}

/// Branch-and-bound driver.
///
/// Owns the frontier, the branching policy, and the per-variant bound
/// bookkeeping; drives the relaxation oracle one node at a time.
pub struct SearchTree<'a> {
    instance: &'a ProblemInstance,
    settings: SearchSettings,
    selector: BranchSelector,
    frontier: Frontier,
    tracker: Option<BoundTracker>,
    injector: Option<CutInjector>,
    state: SearchState,
    ctx: SearchContext,
}

impl<'a> SearchTree<'a> {
    /// Create a tree for one instance solve.
    pub fn new(instance: &'a ProblemInstance, settings: SearchSettings) -> Self {
        let (rule, tracker, injector) = match settings.variant {
            SearchVariant::Leveled => (
                BranchRule::FirstFractional,
                Some(BoundTracker::new(settings.sense, instance.num_vars())),
                None,
            ),
            SearchVariant::HeuristicCuts => {
                (BranchRule::MostFractional, None, Some(CutInjector::new()))
            }
        };

        Self {
            instance,
            ctx: SearchContext::new(settings.sense),
            settings,
            selector: BranchSelector::new(rule),
            frontier: Frontier::new(),
            tracker,
            injector,
            state: SearchState::Init,
        }
    }

    /// Current state of the run.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Run the search to a terminal state.
    ///
    /// Repeatedly pops a node, applies its box to the shared oracle model,
    /// re-optimizes, and classifies the result: integral solutions are
    /// recorded, dominated fractional nodes are pruned, and the rest are
    /// split into exactly two children.
    pub fn run(mut self, oracle: &mut dyn RelaxationOracle) -> SolveResult<SearchOutcome> {
        let start = Instant::now();
        let tol = self.settings.int_feas_tol;

        self.state = SearchState::SolvingRoot;
        self.frontier.push(Node::root(self.instance));

        while let Some(node) = self.frontier.pop() {
            self.ctx.nodes_explored += 1;
            if let Some(tracker) = self.tracker.as_mut() {
                tracker.node_resolved(node.depth);
            }

            let relaxation = oracle.solve(&node.lower, &node.upper, node.warm_start.as_ref())?;

            if relaxation.status == RelaxationStatus::Infeasible {
                if node.depth == 0 {
                    self.state = SearchState::InfeasibleRoot;
                    break;
                }
                log::debug!("infeasible node at depth {}", node.depth);
                if let Some(tracker) = self.tracker.as_mut() {
                    tracker.abandon_subtree(node.depth);
                }
                continue;
            }

            let objective = relaxation.objective;
            if let Some(tracker) = self.tracker.as_mut() {
                tracker.witness(node.depth, objective);
            }

            if self.instance.is_integral(&relaxation.primal, tol) {
                let improved = self.ctx.record_solution(
                    self.settings.sense,
                    relaxation.primal,
                    objective,
                    node.depth,
                );
                if improved && self.settings.verbose {
                    log::info!(
                        "New incumbent: obj={:.6e} at depth {}",
                        objective,
                        node.depth
                    );
                }
                if let Some(tracker) = self.tracker.as_ref() {
                    if tracker.proves_optimal(self.ctx.incumbent_objective, self.settings.bound_tol)
                    {
                        self.state = SearchState::FoundOptimal;
                        break;
                    }
                }
                if let Some(tracker) = self.tracker.as_mut() {
                    tracker.abandon_subtree(node.depth);
                }
                self.log_progress();
                continue;
            }

            if cut_by_bound(
                self.settings.sense,
                objective,
                self.ctx.incumbent_objective,
                self.settings.bound_tol,
            ) {
                self.ctx.nodes_pruned += 1;
                log::debug!(
                    "cut by bound at depth {}: obj={:.6e} vs incumbent={:.6e}",
                    node.depth,
                    objective,
                    self.ctx.incumbent_objective
                );
                if let Some(tracker) = self.tracker.as_mut() {
                    tracker.abandon_subtree(node.depth);
                }
                self.log_progress();
                continue;
            }

            let decision = match self.selector.select(&relaxation.primal, self.instance, tol) {
                Some(d) => d,
                None => {
                    if let Some(tracker) = self.tracker.as_mut() {
                        tracker.abandon_subtree(node.depth);
                    }
                    continue;
                }
            };

            // Heuristic variant children resolve from scratch; the leveled
            // variant seeds both with the parent's just-observed basis.
            let warm_start = match self.settings.variant {
                SearchVariant::Leveled => relaxation.basis,
                SearchVariant::HeuristicCuts => None,
            };
            let left = node.left_child(decision.var, decision.value, warm_start.clone());
            let right = node.right_child(decision.var, decision.value, warm_start);
            self.frontier.push_children(left, right);

            if let Some(injector) = self.injector.as_mut() {
                injector.inject(oracle, &relaxation.primal, self.instance, tol)?;
            }

            if node.depth == 0 {
                self.state = SearchState::Exploring;
            }
            self.log_progress();
        }

        if !matches!(
            self.state,
            SearchState::FoundOptimal | SearchState::InfeasibleRoot
        ) {
            self.state = SearchState::Exhausted;
        }

        Ok(SearchOutcome {
            state: self.state,
            best_index: self.ctx.best_index,
            solutions: self.ctx.solutions,
            stats: SearchStats {
                nodes_explored: self.ctx.nodes_explored,
                nodes_pruned: self.ctx.nodes_pruned,
                cuts_added: self.injector.as_ref().map_or(0, CutInjector::cuts_added),
                incumbent_updates: self.ctx.incumbent_updates,
                solve_time_ms: start.elapsed().as_millis() as u64,
            },
        })
    }

    fn log_progress(&self) {
        if !self.settings.verbose {
            return;
        }
        if self.ctx.nodes_explored % self.settings.log_freq != 0 {
            return;
        }

        let bound = self
            .tracker
            .as_ref()
            .map(|t| format!("{:.6e}", t.bound()))
            .unwrap_or_else(|| "-".into());
        log::info!(
            "Nodes: {} ({} open) | Incumbent: {:.6e} | Bound: {} | Solutions: {}",
            self.ctx.nodes_explored,
            self.frontier.len(),
            self.ctx.incumbent_objective,
            bound,
            self.ctx.solutions.len(),
        );
    }
}

/// Bound test for a fractional node.
///
/// Maximizing: the relaxation objective bounds every integer solution in the
/// subtree from above, so a node at or below the incumbent cannot improve it.
fn cut_by_bound(sense: Sense, objective: f64, incumbent: f64, tol: f64) -> bool {
    match sense {
        Sense::Maximize => objective < incumbent || (objective - incumbent).abs() < tol,
        Sense::Minimize => objective > incumbent || (objective - incumbent).abs() < tol,
    }
}
