//! Run report: an auditable, digest-bound record of one search.
//!
//! # Layout
//!
//! ```text
//! {
//!   "algorithm":      "ida",
//!   "cost":           18 | null,
//!   "digests":        { "path": ..., "policy": ..., "stats": ... },
//!   "goal":           "90",
//!   "path":           [ { "g": 0, "state": "30" }, ... ],
//!   "policy":         { "budgets": {...}, "schema_version": "policy.v1" },
//!   "schema_version": "run_report.v1",
//!   "start":          "30",
//!   "stats":          { "expansions": ..., ... },
//!   "termination":    "goal_reached"
//! }
//! ```
//!
//! The report is serialised with [`canonical_json_bytes`], which accepts
//! integers only. Counters are integers already. Costs (`g`, `cost`) and IDA*
//! limits are written as integers when integral and otherwise as the exact
//! decimal string of the `f64` (`"1.5"`). The report digest is
//! `canonical_hash(RunReport, bytes)`; each sub-digest hashes the canonical
//! bytes of its own block under its own domain.

use std::fmt::Display;

use trek_kernel::proof::canon::{canonical_json_bytes, CanonError};
use trek_kernel::proof::hash::{canonical_hash, ContentHash};
use trek_kernel::proof::hash_domain::HashDomain;
use trek_search::error::SearchError;
use trek_search::{AlgorithmKind, SearchOutcome, SearchPolicy, SearchStats, TerminationReason};

use crate::policy::{policy_digest, policy_to_json};

const SCHEMA_VERSION: &str = "run_report.v1";

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

/// Error building a run report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    /// The policy config was rejected before the search started.
    #[error("policy rejected: {0}")]
    Policy(#[from] SearchError),
    /// A block could not be canonicalised.
    #[error("report canonicalisation failed: {0}")]
    Canon(#[from] CanonError),
    /// A cost or limit was NaN or infinite.
    #[error("non-finite cost in report: {value}")]
    NonFiniteCost { value: String },
    /// The puzzle target `3n` does not fit in `i64`.
    #[error("start {n} is out of range: 3n overflows i64")]
    StartOutOfRange { n: i64 },
}

/// One state on the reported path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStep {
    /// `Display` rendering of the state.
    pub state: String,
    /// Accumulated cost at this state.
    pub g: f64,
}

/// The report of a single run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub algorithm: AlgorithmKind,
    pub policy: SearchPolicy,
    pub start: String,
    pub goal: String,
    pub termination: TerminationReason,
    pub stats: SearchStats,
    /// Empty unless the goal was reached.
    pub path: Vec<PathStep>,
    pub cost: Option<f64>,
    /// Canonical JSON bytes of the full report.
    pub bytes: Vec<u8>,
    /// `canonical_hash(RunReport, bytes)`.
    pub digest: ContentHash,
}

impl RunReport {
    /// Number of moves on the path (states minus one), if a path was found.
    #[must_use]
    pub fn moves(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// Assemble a [`RunReport`] from a finished search.
///
/// # Errors
///
/// Returns [`ReportError::NonFiniteCost`] if a cost or limit is NaN or
/// infinite, or [`ReportError::Canon`] if a block cannot be canonicalised.
pub fn build_report<S: Display>(
    algorithm: AlgorithmKind,
    policy: &SearchPolicy,
    start: &S,
    goal: &S,
    outcome: &SearchOutcome<S>,
) -> Result<RunReport, ReportError> {
    let path: Vec<PathStep> = outcome
        .path()
        .map(|p| {
            p.iter()
                .map(|node| PathStep {
                    state: node.state().to_string(),
                    g: node.g(),
                })
                .collect()
        })
        .unwrap_or_default();
    let cost = outcome.goal.as_ref().map(|node| node.g());

    let path_json = serde_json::Value::Array(
        path.iter()
            .map(|step| -> Result<serde_json::Value, ReportError> {
                Ok(serde_json::json!({ "g": cost_json(step.g)?, "state": step.state }))
            })
            .collect::<Result<_, _>>()?,
    );
    let mut stats_json = outcome.stats.to_json_value();
    stats_json["limits"] = serde_json::Value::Array(
        outcome
            .stats
            .limits
            .iter()
            .map(|&limit| cost_json(limit))
            .collect::<Result<_, _>>()?,
    );
    let cost_value = cost.map(cost_json).transpose()?;

    let path_digest =
        canonical_hash(HashDomain::SolutionPath, &canonical_json_bytes(&path_json)?);
    let stats_digest =
        canonical_hash(HashDomain::SearchStats, &canonical_json_bytes(&stats_json)?);
    let policy_hash = policy_digest(policy)?;

    let report_value = serde_json::json!({
        "algorithm": algorithm.name(),
        "cost": cost_value,
        "digests": {
            "path": path_digest.as_str(),
            "policy": policy_hash.as_str(),
            "stats": stats_digest.as_str(),
        },
        "goal": goal.to_string(),
        "path": path_json,
        "policy": policy_to_json(policy),
        "schema_version": SCHEMA_VERSION,
        "start": start.to_string(),
        "stats": stats_json,
        "termination": outcome.termination.as_str(),
    });

    let bytes = canonical_json_bytes(&report_value)?;
    let digest = canonical_hash(HashDomain::RunReport, &bytes);

    Ok(RunReport {
        algorithm,
        policy: *policy,
        start: start.to_string(),
        goal: goal.to_string(),
        termination: outcome.termination,
        stats: outcome.stats.clone(),
        path,
        cost,
        bytes,
        digest,
    })
}

/// Canonical form of a path cost or limit: an integer when integral, else the
/// shortest decimal string that round-trips to the same `f64`.
#[allow(clippy::cast_possible_truncation)]
fn cost_json(value: f64) -> Result<serde_json::Value, ReportError> {
    if !value.is_finite() {
        return Err(ReportError::NonFiniteCost {
            value: value.to_string(),
        });
    }
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_F64_INT {
        return Ok(serde_json::Value::from(value as i64));
    }
    Ok(serde_json::Value::String(value.to_string()))
}
