//! Uniform-cost search: best-first on accumulated path cost `g`.

use trek_kernel::space::StateSpace;

use crate::algorithm::SearchAlgorithm;
use crate::best_first::best_first;
use crate::error::SearchError;
use crate::outcome::SearchOutcome;
use crate::policy::SearchPolicy;

/// Uniform-cost search.
///
/// A closed state is never reopened, so the returned path is cheapest only if
/// the first path to close each state is no worse than any later one (true
/// for non-negative edge costs). The algorithm does not check this.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCostSearch {
    policy: SearchPolicy,
}

impl UniformCostSearch {
    /// Uniform-cost search with no budgets.
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

impl<S: StateSpace> SearchAlgorithm<S> for UniformCostSearch {
    fn name(&self) -> &'static str {
        "ucs"
    }

    fn search(&self, start: S, goal: &S) -> SearchOutcome<S> {
        best_first("ucs", start, goal, &self.policy, |node| node.g())
    }
}
