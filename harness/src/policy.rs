//! Policy configuration: caller-supplied overrides turned into a validated
//! [`SearchPolicy`] and echoed into every run report.
//!
//! Worlds do NOT declare policy; the runner derives it from this config alone.

use trek_kernel::proof::canon::{canonical_json_bytes, CanonError};
use trek_kernel::proof::hash::{canonical_hash, ContentHash};
use trek_kernel::proof::hash_domain::HashDomain;
use trek_search::error::SearchError;
use trek_search::SearchPolicy;

/// Budget overrides for a harness run. `None` leaves the axis unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Cap on node expansions, summed over IDA* iterations.
    pub max_expansions: Option<u64>,
    /// Cap on IDA* limit raises.
    pub max_restarts: Option<u64>,
}

/// Build a validated [`SearchPolicy`] from `config`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero. A zero
/// `max_restarts` is valid: IDA* runs its first iteration and stops there.
pub fn build_policy(config: &PolicyConfig) -> Result<SearchPolicy, SearchError> {
    let policy = SearchPolicy {
        max_expansions: config.max_expansions,
        max_restarts: config.max_restarts,
    };
    policy.validate()?;
    Ok(policy)
}

/// The policy echo embedded in reports. Unbounded axes are `null`.
#[must_use]
pub fn policy_to_json(policy: &SearchPolicy) -> serde_json::Value {
    serde_json::json!({
        "budgets": {
            "max_expansions": policy.max_expansions,
            "max_restarts": policy.max_restarts,
        },
        "schema_version": "policy.v1",
    })
}

/// `canonical_hash(PolicySnapshot, canonical_json_bytes(policy_to_json(policy)))`.
///
/// # Errors
///
/// Returns [`CanonError`] if the echo cannot be canonicalised.
pub fn policy_digest(policy: &SearchPolicy) -> Result<ContentHash, CanonError> {
    let bytes = canonical_json_bytes(&policy_to_json(policy))?;
    Ok(canonical_hash(HashDomain::PolicySnapshot, &bytes))
}
