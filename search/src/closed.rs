//! Closed set: states already expanded in the current search attempt.

use std::collections::HashMap;
use std::rc::Rc;

use trek_kernel::space::StateSpace;

use crate::node::SearchNode;

/// Mapping from a state's identity to the node that first closed it.
///
/// Populated monotonically during one attempt; never reopened on a cheaper
/// path. IDA* clears it on every restart.
pub struct ClosedSet<S> {
    nodes: HashMap<S, Rc<SearchNode<S>>>,
}

impl<S: StateSpace> ClosedSet<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Close `node`'s state. First-wins: returns `false` and keeps the earlier
    /// node if the state was already closed.
    pub fn close(&mut self, node: &Rc<SearchNode<S>>) -> bool {
        if self.nodes.contains_key(node.state()) {
            return false;
        }
        self.nodes.insert(node.state().clone(), Rc::clone(node));
        true
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.nodes.contains_key(state)
    }

    /// The node that closed `state`, if any.
    #[must_use]
    pub fn get(&self, state: &S) -> Option<&Rc<SearchNode<S>>> {
        self.nodes.get(state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<S: StateSpace> Default for ClosedSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
