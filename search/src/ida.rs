//! Iterative-deepening A*: bounded best-first passes under a rising cost limit.
//!
//! # Lifecycle
//!
//! 1. **Initializing**: `limit = h(start)`; the frontier holds only the start
//!    node; closed set and fringe are empty.
//! 2. **Expanding**: pop the lowest-`f` node. A goal ends the search. Otherwise
//!    close it and route each successor: not yet closed and `f <= limit` goes
//!    to the frontier, anything else (over the limit, or already closed) goes
//!    to the fringe.
//! 3. **Limit raise**: once the frontier empties, the new limit is the lowest
//!    fringe `f` above the current limit. Frontier, closed set and fringe are
//!    rebuilt from scratch and the start node is reseeded. An empty fringe, or
//!    one with nothing above the limit, ends the search without a path.
//!
//! Only the scalar limit survives from one pass to the next, and it strictly
//! increases on every raise.

use std::rc::Rc;

use log::{debug, trace};

use trek_kernel::space::StateSpace;

use crate::algorithm::SearchAlgorithm;
use crate::closed::ClosedSet;
use crate::error::SearchError;
use crate::expand::successors;
use crate::frontier::Frontier;
use crate::node::SearchNode;
use crate::outcome::{SearchOutcome, SearchStats, TerminationReason};
use crate::policy::SearchPolicy;

/// Nodes generated during one pass but rejected by its limit.
struct Fringe<S> {
    nodes: Vec<(f64, Rc<SearchNode<S>>)>,
}

impl<S> Fringe<S> {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn push(&mut self, f: f64, node: Rc<SearchNode<S>>) {
        self.nodes.push((f, node));
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Lowest `f` strictly above `limit`, if any.
    fn next_limit(&self, limit: f64) -> Option<f64> {
        self.nodes
            .iter()
            .map(|&(f, _)| f)
            .filter(|&f| f > limit)
            .min_by(f64::total_cmp)
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}

/// Iterative-deepening A* search.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdaStarSearch {
    policy: SearchPolicy,
}

impl IdaStarSearch {
    /// IDA* with no budgets.
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

impl<S: StateSpace> SearchAlgorithm<S> for IdaStarSearch {
    fn name(&self) -> &'static str {
        "ida"
    }

    #[allow(clippy::too_many_lines)]
    fn search(&self, start: S, goal: &S) -> SearchOutcome<S> {
        let f = |node: &SearchNode<S>| node.g() + node.state().heuristic(goal);

        let mut frontier = Frontier::new();
        let mut closed = ClosedSet::new();
        let mut fringe = Fringe::new();
        let mut stats = SearchStats::default();
        let mut goal_node = None;

        let mut limit = start.heuristic(goal);
        stats.limits.push(limit);
        debug!("ida: searching from {start:?} to {goal:?} with limit {limit}");

        let root = SearchNode::root(start.clone());
        let priority = f(&root);
        frontier.push(root, priority);

        let termination = loop {
            let Some(current) = frontier.pop() else {
                if fringe.is_empty() {
                    break TerminationReason::FrontierExhausted;
                }
                let Some(next) = fringe.next_limit(limit) else {
                    break TerminationReason::FringeStalled;
                };
                if self.policy.restarts_exhausted(stats.restarts) {
                    break TerminationReason::RestartBudgetExceeded;
                }

                debug!(
                    "ida: raising limit {limit} -> {next} after {} expansions",
                    stats.expansions
                );
                limit = next;
                stats.restarts += 1;
                stats.limits.push(limit);

                fringe.clear();
                frontier.clear();
                closed.clear();
                let root = SearchNode::root(start.clone());
                let priority = f(&root);
                frontier.push(root, priority);
                continue;
            };

            if current.state().is_goal(goal) {
                goal_node = Some(current);
                break TerminationReason::GoalReached;
            }

            if closed.contains(current.state()) {
                stats.stale_pops += 1;
                continue;
            }

            if self.policy.expansions_exhausted(stats.expansions) {
                break TerminationReason::ExpansionBudgetExceeded;
            }

            closed.close(&current);
            stats.expansions += 1;
            trace!("ida: expanding {:?} (g={}, limit={limit})", current.state(), current.g());

            for child in successors(&current) {
                stats.generated += 1;
                let cost = f(&child);
                let already_closed = closed.contains(child.state());
                if !already_closed && cost <= limit {
                    frontier.push(child, cost);
                } else {
                    if already_closed {
                        stats.closed_suppressed += 1;
                    }
                    stats.fringe_rejections += 1;
                    fringe.push(cost, child);
                }
            }
        };

        stats.frontier_high_water = frontier.high_water();
        debug!(
            "ida: {termination} after {} expansions and {} restarts (cost {:?})",
            stats.expansions,
            stats.restarts,
            goal_node.as_ref().map(|n| n.g())
        );

        SearchOutcome {
            goal: goal_node,
            termination,
            stats,
        }
    }
}
