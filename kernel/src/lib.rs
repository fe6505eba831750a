//! Trek Kernel: the leaf of the trek workspace.
//!
//! # API Surface
//!
//! - [`space::StateSpace`] -- the capability every searchable domain implements
//! - [`proof::canon::canonical_json_bytes`] -- deterministic JSON bytes for hashing
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content digests
//!
//! # Module Dependency Direction
//!
//! `space` and `proof` are independent. The kernel depends on nothing else in
//! the workspace; `trek_search` and `trek_harness` build on it.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod proof;
pub mod space;
