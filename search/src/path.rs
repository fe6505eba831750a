//! Path reconstruction: walk a goal node's parent chain back to the root.

use std::rc::Rc;

use crate::node::SearchNode;

/// An ordered start→goal sequence of nodes, both ends inclusive.
///
/// Never empty: a goal that is its own root yields a one-node path.
#[derive(Debug)]
pub struct Path<S> {
    nodes: Vec<Rc<SearchNode<S>>>,
}

impl<S> Path<S> {
    /// Rebuild the path ending at `goal`.
    ///
    /// Nodes are immutable, so the same goal node can be walked any number of
    /// times with identical results.
    #[must_use]
    pub fn from_goal(goal: &Rc<SearchNode<S>>) -> Self {
        let mut nodes = Vec::with_capacity(goal.depth() as usize + 1);
        let mut current = Some(goal);
        while let Some(node) = current {
            nodes.push(Rc::clone(node));
            current = node.parent();
        }
        nodes.reverse();
        Self { nodes }
    }

    /// The start node.
    #[must_use]
    pub fn start(&self) -> &Rc<SearchNode<S>> {
        &self.nodes[0]
    }

    /// The goal node.
    #[must_use]
    pub fn goal(&self) -> &Rc<SearchNode<S>> {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Accumulated cost of the goal node.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.goal().g()
    }

    /// Number of nodes (steps + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn nodes(&self) -> &[Rc<SearchNode<S>>] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rc<SearchNode<S>>> {
        self.nodes.iter()
    }

    /// States in start→goal order.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.nodes.iter().map(|n| n.state())
    }
}

impl<S> IntoIterator for Path<S> {
    type Item = Rc<SearchNode<S>>;
    type IntoIter = std::vec::IntoIter<Rc<SearchNode<S>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a Path<S> {
    type Item = &'a Rc<SearchNode<S>>;
    type IntoIter = std::slice::Iter<'a, Rc<SearchNode<S>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
