//! Harness runner: orchestrates engine APIs to produce a run report.
//!
//! # Pipeline
//!
//! ```text
//! build_policy() → AlgorithmKind::build() → search() → build_report()
//! ```
//!
//! The runner does not implement any search logic itself.

use std::fmt::Display;

use log::debug;

use trek_search::{AlgorithmKind, StateSpace};

use crate::policy::{build_policy, PolicyConfig};
use crate::report::{build_report, ReportError, RunReport};
use crate::worlds::operation::Operation;

/// Run `algorithm` from `start` to `goal` under `config` and report the result.
///
/// A search that ends without a path is still a successful run: the report
/// carries the termination reason and an empty path.
///
/// # Errors
///
/// Returns [`ReportError::Policy`] if `config` is rejected, or
/// [`ReportError::Canon`] if the outcome cannot be canonicalised.
pub fn run_search<S: StateSpace + Display>(
    start: S,
    goal: &S,
    algorithm: AlgorithmKind,
    config: &PolicyConfig,
) -> Result<RunReport, ReportError> {
    let policy = build_policy(config)?;
    let engine = algorithm.build::<S>(policy)?;

    debug!("runner: {algorithm} from {start} to {goal} under {policy:?}");
    let outcome = engine.search(start.clone(), goal);

    let report = build_report(algorithm, &policy, &start, goal, &outcome)?;
    debug!(
        "runner: {} with cost {:?}, digest {}",
        report.termination, report.cost, report.digest
    );
    Ok(report)
}

/// [`run_search`] on the tripling puzzle: from `n` to `3n`.
///
/// # Errors
///
/// Returns [`ReportError::StartOutOfRange`] if `3n` does not fit in `i64`;
/// otherwise as [`run_search`].
pub fn run_operation(
    n: i64,
    algorithm: AlgorithmKind,
    config: &PolicyConfig,
) -> Result<RunReport, ReportError> {
    let goal = Operation::target_for(n).ok_or(ReportError::StartOutOfRange { n })?;
    run_search(Operation::start(n), &goal, algorithm, config)
}
