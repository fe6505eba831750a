//! A* search: best-first on `f = g + h`.

use trek_kernel::space::StateSpace;

use crate::algorithm::SearchAlgorithm;
use crate::best_first::best_first;
use crate::error::SearchError;
use crate::outcome::SearchOutcome;
use crate::policy::SearchPolicy;

/// A* search.
///
/// `h` is evaluated once per node, against the goal fixed for the call, when
/// the node enters the frontier. Closed states are never reopened, as in
/// [`crate::UniformCostSearch`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarSearch {
    policy: SearchPolicy,
}

impl AStarSearch {
    /// A* with no budgets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
    pub fn with_policy(policy: SearchPolicy) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }
}

impl<S: StateSpace> SearchAlgorithm<S> for AStarSearch {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn search(&self, start: S, goal: &S) -> SearchOutcome<S> {
        best_first("astar", start, goal, &self.policy, |node| {
            node.g() + node.state().heuristic(goal)
        })
    }
}
