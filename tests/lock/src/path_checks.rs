//! Structural checks every returned path must pass.

use trek_search::{Path, StateSpace};

/// Assert that `path` runs from `start` to `goal` with a consistent cost chain
/// and no immediate backtrack.
///
/// # Panics
///
/// Panics with a description of the first violated property.
pub fn assert_valid_path<S: StateSpace>(path: &Path<S>, start: &S, goal: &S) {
    assert!(!path.is_empty(), "path is empty");
    assert_eq!(path.start().state(), start, "path does not begin at start");
    assert!(path.goal().state().is_goal(goal), "path does not end at goal");
    assert_eq!(path.start().g(), 0.0, "start g is not zero");

    for pair in path.nodes().windows(2) {
        let (parent, child) = (&pair[0], &pair[1]);
        assert!(
            child.parent().is_some_and(|p| std::rc::Rc::ptr_eq(p, parent)),
            "{:?} is not linked to {:?}",
            child.state(),
            parent.state()
        );
        assert_eq!(
            child.g(),
            parent.g() + child.state().step_cost(),
            "g chain broken at {:?}",
            child.state()
        );
    }

    for triple in path.nodes().windows(3) {
        assert_ne!(
            triple[0].state(),
            triple[2].state(),
            "immediate backtrack through {:?}",
            triple[1].state()
        );
    }

    assert_eq!(path.cost(), path.goal().g());
}
