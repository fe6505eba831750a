//! Path validity across a sweep of start values and all three algorithms.

use lock_tests::path_checks::assert_valid_path;
use trek_harness::worlds::operation::Operation;
use trek_search::{AlgorithmKind, SearchPolicy};

#[test]
fn every_algorithm_returns_valid_paths() {
    for kind in AlgorithmKind::ALL {
        let algorithm = kind
            .build::<Operation>(SearchPolicy::unbounded())
            .expect("unbounded policy is valid");
        for n in -25..=25 {
            let start = Operation::start(n);
            let goal = Operation::target_for(n).unwrap();
            let path = algorithm
                .solve(start, &goal)
                .unwrap_or_else(|| panic!("{kind} found no path for n={n}"));
            assert_valid_path(&path, &start, &goal);
        }
    }
}

#[test]
fn start_equal_to_goal_is_a_single_node() {
    for kind in AlgorithmKind::ALL {
        let algorithm = kind
            .build::<Operation>(SearchPolicy::unbounded())
            .expect("unbounded policy is valid");
        let path = algorithm
            .solve(Operation::start(0), &Operation::target_for(0).unwrap())
            .expect("0 is its own triple");
        assert_eq!(path.len(), 1, "{kind}");
        assert_eq!(path.cost(), 0.0, "{kind}");
    }
}

#[test]
fn uniform_cost_is_never_beaten() {
    let ucs = AlgorithmKind::UniformCost
        .build::<Operation>(SearchPolicy::unbounded())
        .expect("valid");
    let ida = AlgorithmKind::IdaStar
        .build::<Operation>(SearchPolicy::unbounded())
        .expect("valid");
    for n in -25..=25 {
        let goal = Operation::target_for(n).unwrap();
        let best = ucs.solve(Operation::start(n), &goal).expect("ucs path").cost();
        let found = ida.solve(Operation::start(n), &goal).expect("ida path").cost();
        assert!(found >= best, "n={n}: ida {found} < ucs {best}");
    }
}
