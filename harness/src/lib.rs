//! Trek harness: the arithmetic puzzle world and the run-report pipeline.
//!
//! The harness runs an algorithm from `trek-search` over a world and packages
//! the result as a canonical, digest-bound [`report::RunReport`].
//!
//! The harness does NOT implement search logic; it delegates to the engine.
//! Worlds provide domain data only; the harness owns orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod policy;
pub mod report;
pub mod runner;
pub mod worlds;
