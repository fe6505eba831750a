//! Golden-cost lock tests for IDA* on the tripling puzzle.

use lock_tests::golden::{IDA_COSTS, SHARED_COSTS};
use lock_tests::path_checks::assert_valid_path;
use trek_harness::worlds::operation::Operation;
use trek_search::{AStarSearch, IdaStarSearch, SearchAlgorithm, UniformCostSearch};

fn solve_cost<A: SearchAlgorithm<Operation>>(algorithm: &A, n: i64) -> f64 {
    let start = Operation::start(n);
    let goal = Operation::target_for(n).unwrap();
    let path = algorithm
        .solve(start, &goal)
        .unwrap_or_else(|| panic!("{} found no path for n={n}", algorithm.name()));
    assert_valid_path(&path, &start, &goal);
    path.cost()
}

#[test]
fn ida_golden_costs() {
    let ida = IdaStarSearch::new();
    for &(n, expected) in IDA_COSTS {
        assert_eq!(solve_cost(&ida, n), expected, "n={n}");
    }
}

#[test]
fn ida_is_repeatable_on_one_instance() {
    let ida = IdaStarSearch::new();
    for &(n, expected) in IDA_COSTS.iter().take(4) {
        assert_eq!(solve_cost(&ida, n), expected, "first call n={n}");
        assert_eq!(solve_cost(&ida, n), expected, "second call n={n}");
    }
}

#[test]
fn algorithms_share_costs_on_small_inputs() {
    for &(n, expected) in SHARED_COSTS {
        assert_eq!(solve_cost(&UniformCostSearch::new(), n), expected, "ucs n={n}");
        assert_eq!(solve_cost(&AStarSearch::new(), n), expected, "astar n={n}");
        assert_eq!(solve_cost(&IdaStarSearch::new(), n), expected, "ida n={n}");
    }
}
