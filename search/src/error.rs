//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, exhaustion, budget hits) are expressed via
//! [`crate::outcome::TerminationReason`] and never surface as errors.

/// Typed failure for pre-flight search validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A policy value that no search could honour.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },

    /// An algorithm name that does not match any [`crate::AlgorithmKind`].
    #[error("unknown search algorithm: {name:?} (expected one of: ucs, astar, ida)")]
    UnknownAlgorithm { name: String },
}
