//! Proof module: canonical serialization and content hashing.
//!
//! `hash` depends on `hash_domain`; `canon` stands alone.

pub mod canon;
pub mod hash;
pub mod hash_domain;
