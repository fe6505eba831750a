//! Trek Search: generic best-first search over a pluggable state space.
//!
//! This crate provides the search engine of the trek workspace. It depends
//! only on `trek_kernel`; it does NOT depend on `trek_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! trek_kernel  ←  trek_search  ←  trek_harness
//! (StateSpace)    (algorithms)     (worlds, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`]: immutable tree node with a shared back-reference to its parent
//! - [`Frontier`] / [`ClosedSet`]: open priority queue and first-wins visited map
//! - [`UniformCostSearch`], [`AStarSearch`], [`IdaStarSearch`]: the three algorithms
//! - [`SearchAlgorithm`]: common `search`/`solve` surface
//! - [`Path`]: start→goal node sequence rebuilt from a goal node
//! - [`SearchPolicy`]: cooperative expansion and restart budgets

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod astar;
mod best_first;
pub mod closed;
pub mod error;
pub mod expand;
pub mod frontier;
pub mod ida;
pub mod node;
pub mod outcome;
pub mod path;
pub mod policy;
pub mod uniform;

#[cfg(test)]
pub(crate) mod testing;

pub use algorithm::{AlgorithmKind, SearchAlgorithm};
pub use astar::AStarSearch;
pub use closed::ClosedSet;
pub use error::SearchError;
pub use frontier::Frontier;
pub use ida::IdaStarSearch;
pub use node::SearchNode;
pub use outcome::{SearchOutcome, SearchStats, TerminationReason};
pub use path::Path;
pub use policy::SearchPolicy;
pub use trek_kernel::space::StateSpace;
pub use uniform::UniformCostSearch;
