//! IDA* limit history lock tests.

use lock_tests::golden::IDA_LIMITS;
use trek_harness::worlds::operation::Operation;
use trek_search::{IdaStarSearch, SearchAlgorithm, SearchPolicy, TerminationReason};

#[test]
fn pinned_limit_histories() {
    let ida = IdaStarSearch::new();
    for &(n, limits) in IDA_LIMITS {
        let outcome = ida.search(Operation::start(n), &Operation::target_for(n).unwrap());
        assert!(outcome.is_goal_reached(), "n={n}");
        assert_eq!(outcome.stats.limits, limits, "n={n}");
    }
}

#[test]
fn limits_strictly_increase_and_count_restarts() {
    let ida = IdaStarSearch::new();
    for n in -60..=60 {
        let outcome = ida.search(Operation::start(n), &Operation::target_for(n).unwrap());
        let limits = &outcome.stats.limits;
        assert!(
            limits.windows(2).all(|w| w[0] < w[1]),
            "n={n}: limits not strictly increasing: {limits:?}"
        );
        assert_eq!(
            outcome.stats.restarts,
            limits.len() as u64 - 1,
            "n={n}: restarts disagree with limit history"
        );
    }
}

#[test]
fn initial_limit_is_start_heuristic() {
    let ida = IdaStarSearch::new();
    for n in [-23, -7, 1, 30] {
        let start = Operation::start(n);
        let goal = Operation::target_for(n).unwrap();
        let expected = trek_search::StateSpace::heuristic(&start, &goal);
        let outcome = ida.search(start, &goal);
        assert_eq!(outcome.stats.limits.first(), Some(&expected), "n={n}");
    }
}

#[test]
fn restart_budget_caps_history() {
    let ida = IdaStarSearch::with_policy(SearchPolicy {
        max_restarts: Some(1),
        ..SearchPolicy::default()
    })
    .expect("valid policy");
    let outcome = ida.search(Operation::start(-7), &Operation::target_for(-7).unwrap());
    assert_eq!(outcome.termination, TerminationReason::RestartBudgetExceeded);
    assert_eq!(outcome.stats.limits, vec![7.0, 9.0]);
    assert!(outcome.goal.is_none());
}
