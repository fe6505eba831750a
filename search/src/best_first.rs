//! The expansion loop shared by uniform-cost and A* search.
//!
//! The two algorithms differ only in the priority `evaluate` assigns to a
//! node when it enters the frontier.

use log::{debug, trace};

use trek_kernel::space::StateSpace;

use crate::closed::ClosedSet;
use crate::expand::successors;
use crate::frontier::Frontier;
use crate::node::SearchNode;
use crate::outcome::{SearchOutcome, SearchStats, TerminationReason};
use crate::policy::SearchPolicy;

/// Run best-first search from `start` until `goal` is extracted.
///
/// Closed states are never reopened: a successor whose state is already
/// closed is dropped, whatever its cost.
pub(crate) fn best_first<S, F>(
    name: &str,
    start: S,
    goal: &S,
    policy: &SearchPolicy,
    evaluate: F,
) -> SearchOutcome<S>
where
    S: StateSpace,
    F: Fn(&SearchNode<S>) -> f64,
{
    let mut frontier = Frontier::new();
    let mut closed = ClosedSet::new();
    let mut stats = SearchStats::default();
    let mut goal_node = None;

    debug!("{name}: searching from {start:?} to {goal:?}");

    let root = SearchNode::root(start);
    let priority = evaluate(&root);
    frontier.push(root, priority);

    let termination = loop {
        let Some(current) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };

        if current.state().is_goal(goal) {
            goal_node = Some(current);
            break TerminationReason::GoalReached;
        }

        if closed.contains(current.state()) {
            stats.stale_pops += 1;
            continue;
        }

        if policy.expansions_exhausted(stats.expansions) {
            break TerminationReason::ExpansionBudgetExceeded;
        }

        closed.close(&current);
        stats.expansions += 1;
        trace!("{name}: expanding {:?} (g={})", current.state(), current.g());

        for child in successors(&current) {
            stats.generated += 1;
            if closed.contains(child.state()) {
                stats.closed_suppressed += 1;
                continue;
            }
            let priority = evaluate(&child);
            frontier.push(child, priority);
        }
    };

    stats.frontier_high_water = frontier.high_water();
    debug!(
        "{name}: {termination} after {} expansions (cost {:?})",
        stats.expansions,
        goal_node.as_ref().map(|n| n.g())
    );

    SearchOutcome {
        goal: goal_node,
        termination,
        stats,
    }
}
