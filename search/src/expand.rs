//! Successor generation shared by all three algorithms.

use std::rc::Rc;

use trek_kernel::space::StateSpace;

use crate::node::SearchNode;

/// One child node per state in `node.state().children()`, in order, except a
/// child equal to the node's own parent state.
///
/// Only the single-step-back edge is suppressed here. Longer cycles are left
/// to the closed set.
#[must_use]
pub fn successors<S: StateSpace>(node: &Rc<SearchNode<S>>) -> Vec<Rc<SearchNode<S>>> {
    let parent_state = node.parent_state();
    node.state()
        .children()
        .into_iter()
        .filter(|child| parent_state != Some(child))
        .map(|child| SearchNode::child(node, child))
        .collect()
}
