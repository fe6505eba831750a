//! Shared fixtures for the lock tests: pinned golden values and path checks.

pub mod golden;
pub mod path_checks;
