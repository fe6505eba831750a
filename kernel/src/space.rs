//! The state-space capability consumed by every search algorithm.

use std::fmt::Debug;
use std::hash::Hash;

/// A searchable domain state.
///
/// Equality and hashing must reflect the state's domain identity only (e.g. a
/// puzzle number), never how the state was reached. The cost of the edge that
/// produced a state travels with the state itself via [`StateSpace::step_cost`].
///
/// # Contract
///
/// - `children` must terminate and return a finite, deterministically ordered
///   list: same state → same children in the same order.
/// - `step_cost` is the cost of the edge into this state (0 for a start state
///   built without an edge). Uniform-cost and A* search assume it is
///   non-negative.
/// - `heuristic` is only consulted by A* and IDA*; it need not be admissible.
pub trait StateSpace: Clone + Eq + Hash + Debug {
    /// States reachable from `self` in one step, each carrying its edge cost.
    fn children(&self) -> Vec<Self>;

    /// Whether `self` satisfies the search target `goal`.
    fn is_goal(&self, goal: &Self) -> bool {
        self == goal
    }

    /// Cost of the edge that produced this state.
    fn step_cost(&self) -> f64;

    /// Estimated remaining cost from `self` to `goal`.
    fn heuristic(&self, goal: &Self) -> f64;
}
