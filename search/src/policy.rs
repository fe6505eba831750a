//! Search policy: cooperative budgets checked at each extraction point.

use crate::error::SearchError;

/// Budget configuration shared by all three algorithms.
///
/// The default is unbounded on both axes, which is the plain algorithmic
/// contract: search until the goal is found or nothing is left to explore.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions (summed over IDA* iterations).
    pub max_expansions: Option<u64>,
    /// Hard cap on IDA* limit raises. Ignored by the other algorithms.
    pub max_restarts: Option<u64>,
}

impl SearchPolicy {
    /// A policy with no budgets.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_expansions: None,
            max_restarts: None,
        }
    }

    /// Validate the policy before any search step is taken.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero: no
    /// search could expand even its start node.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    pub(crate) fn expansions_exhausted(&self, expansions: u64) -> bool {
        self.max_expansions.is_some_and(|cap| expansions >= cap)
    }

    pub(crate) fn restarts_exhausted(&self, restarts: u64) -> bool {
        self.max_restarts.is_some_and(|cap| restarts >= cap)
    }
}
