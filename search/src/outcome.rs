//! Search outcome: goal node, termination reason, and run statistics.

use std::rc::Rc;

use crate::node::SearchNode;
use crate::path::Path;

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// An extracted node satisfied the goal test.
    GoalReached,
    /// The frontier (and, for IDA*, the fringe) emptied without a goal.
    FrontierExhausted,
    /// IDA* only: the fringe held no node above the current limit, so no
    /// raise could make progress.
    FringeStalled,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
    /// `max_restarts` budget was hit.
    RestartBudgetExceeded,
}

impl TerminationReason {
    /// Stable snake-case tag used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::FringeStalled => "fringe_stalled",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::RestartBudgetExceeded => "restart_budget_exceeded",
        }
    }
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters collected during one `search` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStats {
    /// Nodes whose successors were generated.
    pub expansions: u64,
    /// Successor nodes generated (after backtrack suppression).
    pub generated: u64,
    /// Successors dropped because their state was already closed.
    pub closed_suppressed: u64,
    /// Extracted nodes discarded because their state closed after insertion.
    pub stale_pops: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// IDA* only: successors sent to the fringe.
    pub fringe_rejections: u64,
    /// IDA* only: number of limit raises.
    pub restarts: u64,
    /// IDA* only: every limit used, initial limit first.
    pub limits: Vec<f64>,
}

impl SearchStats {
    /// Render as a JSON object with stable keys.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "closed_suppressed": self.closed_suppressed,
            "expansions": self.expansions,
            "fringe_rejections": self.fringe_rejections,
            "frontier_high_water": self.frontier_high_water,
            "generated": self.generated,
            "limits": self.limits,
            "restarts": self.restarts,
            "stale_pops": self.stale_pops,
        })
    }
}

/// Result of a `search` call.
///
/// `goal` is `Some` exactly when `termination` is
/// [`TerminationReason::GoalReached`].
#[derive(Debug)]
pub struct SearchOutcome<S> {
    pub goal: Option<Rc<SearchNode<S>>>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
}

impl<S> SearchOutcome<S> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == TerminationReason::GoalReached
    }

    /// Rebuild the start→goal path, if a goal was reached.
    #[must_use]
    pub fn path(&self) -> Option<Path<S>> {
        self.goal.as_ref().map(Path::from_goal)
    }

    #[must_use]
    pub fn into_path(self) -> Option<Path<S>> {
        self.path()
    }
}
