//! Core search node and frontier ordering key.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use trek_kernel::space::StateSpace;

/// An immutable node of the search tree.
///
/// Each node owns its state and holds a shared, read-only link to its parent.
/// Nodes are never mutated after construction, so many children can share one
/// ancestor without aliasing hazards.
///
/// Identity (`Eq`/`Hash`) is the state's identity alone: two nodes reaching
/// the same state by different paths compare equal regardless of `g`.
pub struct SearchNode<S> {
    state: S,
    parent: Option<Rc<SearchNode<S>>>,
    g: f64,
    depth: u32,
}

impl<S: StateSpace> SearchNode<S> {
    /// Create a root node. `g` is 0 whatever the state's own step cost.
    #[must_use]
    pub fn root(state: S) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            g: 0.0,
            depth: 0,
        })
    }

    /// Create a child of `parent`: `g = parent.g + state.step_cost()`.
    #[must_use]
    pub fn child(parent: &Rc<Self>, state: S) -> Rc<Self> {
        let g = parent.g + state.step_cost();
        Rc::new(Self {
            state,
            parent: Some(Rc::clone(parent)),
            g,
            depth: parent.depth + 1,
        })
    }
}

impl<S> SearchNode<S> {
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Rc<SearchNode<S>>> {
        self.parent.as_ref()
    }

    /// The parent's state, if any.
    #[must_use]
    pub fn parent_state(&self) -> Option<&S> {
        self.parent.as_deref().map(SearchNode::state)
    }

    /// Accumulated path cost from the root.
    #[must_use]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Tree depth (root = 0).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

// Unlink iteratively so long parent chains don't recurse on drop.
impl<S> Drop for SearchNode<S> {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(parent) = next {
            match Rc::try_unwrap(parent) {
                Ok(mut node) => next = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

impl<S: PartialEq> PartialEq for SearchNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq> Eq for SearchNode<S> {}

impl<S: Hash> Hash for SearchNode<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

impl<S: fmt::Debug> fmt::Debug for SearchNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchNode")
            .field("state", &self.state)
            .field("g", &self.g)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

/// The frontier ordering key: `(priority, creation_order)`.
///
/// Lower priority first; ties go to the entry inserted earliest. Priorities
/// compare with `f64::total_cmp`, so the order is total even for NaN.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub priority: f64,
    pub creation_order: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
