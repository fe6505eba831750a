//! The common algorithm surface and runtime algorithm selection.

use std::str::FromStr;

use trek_kernel::space::StateSpace;

use crate::astar::AStarSearch;
use crate::error::SearchError;
use crate::ida::IdaStarSearch;
use crate::outcome::SearchOutcome;
use crate::path::Path;
use crate::policy::SearchPolicy;
use crate::uniform::UniformCostSearch;

/// A search algorithm over any [`StateSpace`].
///
/// Each call builds fresh frontier/closed/fringe structures, so one algorithm
/// value can be reused for any number of searches.
pub trait SearchAlgorithm<S: StateSpace> {
    /// Short display name ("ucs", "astar", "ida").
    fn name(&self) -> &'static str;

    /// Search from `start` to `goal`, reporting how the search ended.
    fn search(&self, start: S, goal: &S) -> SearchOutcome<S>;

    /// Search from `start` to `goal`; `None` if no path was found.
    fn solve(&self, start: S, goal: &S) -> Option<Path<S>> {
        self.search(start, goal).into_path()
    }
}

/// Algorithm selector for callers that pick at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    UniformCost,
    AStar,
    IdaStar,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 3] = [Self::UniformCost, Self::AStar, Self::IdaStar];

    /// The same name the built algorithm reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UniformCost => "ucs",
            Self::AStar => "astar",
            Self::IdaStar => "ida",
        }
    }

    /// Build the selected algorithm under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
    pub fn build<S: StateSpace>(
        self,
        policy: SearchPolicy,
    ) -> Result<Box<dyn SearchAlgorithm<S>>, SearchError> {
        Ok(match self {
            Self::UniformCost => Box::new(UniformCostSearch::with_policy(policy)?),
            Self::AStar => Box::new(AStarSearch::with_policy(policy)?),
            Self::IdaStar => Box::new(IdaStarSearch::with_policy(policy)?),
        })
    }
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ucs" | "uniform" | "uniform-cost" => Ok(Self::UniformCost),
            "astar" | "a*" => Ok(Self::AStar),
            "ida" | "ida*" | "idastar" => Ok(Self::IdaStar),
            _ => Err(SearchError::UnknownAlgorithm { name: s.to_string() }),
        }
    }
}
