//! Shared helpers for trek benchmark suites.

use std::rc::Rc;

use trek_harness::worlds::operation::Operation;
use trek_kernel::proof::canon::canonical_json_bytes;
use trek_search::{SearchNode, SearchStats};

/// A named tripling-puzzle instance.
#[derive(Debug, Clone, Copy)]
pub struct Regime {
    pub name: &'static str,
    pub n: i64,
}

impl Regime {
    #[must_use]
    pub fn start(&self) -> Operation {
        Operation::start(self.n)
    }

    /// # Panics
    ///
    /// Panics if `3n` overflows `i64`; every listed regime fits.
    #[must_use]
    pub fn goal(&self) -> Operation {
        Operation::target_for(self.n).expect("regime target fits in i64")
    }
}

/// Instances every algorithm finishes quickly.
#[must_use]
pub fn small_regimes() -> Vec<Regime> {
    vec![
        Regime { name: "pos_30", n: 30 },
        Regime { name: "neg_23", n: -23 },
        Regime { name: "neg_70", n: -70 },
    ]
}

/// Larger instances, IDA* and A* only.
#[must_use]
pub fn large_regimes() -> Vec<Regime> {
    vec![
        Regime { name: "pos_1000", n: 1000 },
        Regime { name: "pos_2200", n: 2200 },
        Regime { name: "neg_3500", n: -3500 },
    ]
}

/// A straight `+1` chain of `len` nodes starting at 0; returns the tip.
#[must_use]
pub fn increment_chain(len: usize) -> Rc<SearchNode<Operation>> {
    let mut node = SearchNode::root(Operation::start(0));
    for value in 1..len {
        let value = i64::try_from(value).unwrap_or(i64::MAX);
        node = SearchNode::child(&node, Operation { value, cost: 1 });
    }
    node
}

/// Canonical bytes of a stats block with `limits` limit entries.
///
/// # Panics
///
/// Panics if canonicalisation fails; benchmark setup failures are fatal.
#[must_use]
pub fn stats_bytes(limits: usize) -> Vec<u8> {
    let stats = SearchStats {
        expansions: 1_000,
        generated: 3_000,
        limits: (0..limits).map(|i| i as f64).collect(),
        ..SearchStats::default()
    };
    canonical_json_bytes(&stats.to_json_value()).expect("canon")
}
