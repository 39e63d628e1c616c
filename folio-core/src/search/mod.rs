//! Branch-and-bound search engine.

mod bounds;
mod branching;
mod cuts;
mod frontier;
mod node;
mod tree;

pub use bounds::BoundTracker;
pub use branching::{BranchDecision, BranchRule, BranchSelector};
pub use cuts::CutInjector;
pub use frontier::Frontier;
pub use node::{Node, NodeLabel};
pub use tree::{SearchContext, SearchState, SearchTree};
