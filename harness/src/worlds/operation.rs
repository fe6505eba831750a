//! Operation: the integer-tripling puzzle.
//!
//! A state is a number plus the cost of the move that produced it. From `n`
//! the moves are `n + 1` (cost 1), `n - 1` (cost 2) and `n * 2` (cost 3); the
//! puzzle asks for the cheapest route from `n` to `3n`.

use std::fmt;
use std::hash::{Hash, Hasher};

use trek_search::StateSpace;

/// Cost of the `+1` move.
pub const INCREMENT_COST: u32 = 1;
/// Cost of the `-1` move.
pub const DECREMENT_COST: u32 = 2;
/// Cost of the `*2` move.
pub const DOUBLE_COST: u32 = 3;

/// A puzzle state. Identity is `value` only; `cost` is the price of the move
/// that produced it.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub value: i64,
    pub cost: u32,
}

impl Operation {
    /// A start state: no move produced it.
    #[must_use]
    pub const fn start(value: i64) -> Self {
        Self { value, cost: 0 }
    }

    /// The goal for start `n`: `3n`, or `None` if `3n` does not fit in `i64`.
    #[must_use]
    pub const fn target_for(value: i64) -> Option<Self> {
        match value.checked_mul(3) {
            Some(target) => Some(Self::start(target)),
            None => None,
        }
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Operation {}

impl Hash for Operation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl StateSpace for Operation {
    /// Moves whose result would overflow `i64` are dropped.
    fn children(&self) -> Vec<Self> {
        [
            (self.value.checked_add(1), INCREMENT_COST),
            (self.value.checked_sub(1), DECREMENT_COST),
            (self.value.checked_mul(2), DOUBLE_COST),
        ]
        .into_iter()
        .filter_map(|(value, cost)| value.map(|value| Self { value, cost }))
        .collect()
    }

    fn step_cost(&self) -> f64 {
        f64::from(self.cost)
    }

    #[allow(clippy::cast_precision_loss)]
    fn heuristic(&self, goal: &Self) -> f64 {
        estimate(self.value, goal.value) as f64
    }
}

/// Remaining-cost estimate from `current` to `target`.
///
/// Takes the cheapest of three routes: walking there directly, reaching half
/// the target and doubling, or reaching a quarter of it and doubling twice.
/// For non-positive targets the walk is priced at the decrement cost and the
/// magnitudes are compared instead.
///
/// The quarter point is pulled down by one whenever it is not an even whole
/// number (`%` on floats keeps the dividend's sign), and every float term is
/// truncated toward zero before the minimum is taken. Integer terms saturate
/// at the ends of the `i64` range.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn estimate(current: i64, target: i64) -> i64 {
    let half = target as f64 / 2.0;
    let mut quarter = half / 2.0;
    if quarter % 2.0 != 0.0 {
        quarter -= 1.0;
    }

    let (direct, via_half, via_quarter) = if target > 0 {
        let c = current as f64;
        (
            target.saturating_sub(current).saturating_abs(),
            ((half.floor() - c).abs() as i64).saturating_add(3),
            ((c - quarter.floor()) * 2.0 + 6.0).abs() as i64,
        )
    } else {
        let current = current.saturating_abs();
        let target = target.saturating_abs();
        let c = current as f64;
        (
            target.saturating_sub(current).saturating_abs().saturating_mul(2),
            ((half.floor().abs() - c).abs() as i64)
                .saturating_mul(2)
                .saturating_add(3),
            ((c - quarter.ceil().abs()).abs() as i64).saturating_add(6),
        )
    };

    direct.min(via_half).min(via_quarter)
}
