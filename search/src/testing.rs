//! Small state spaces shared by the engine's unit tests.

use std::hash::{Hash, Hasher};

use crate::StateSpace;

/// Directed edges `(from, to, cost)`.
///
/// Shortest 0→3 route is 0-1-2-3 (cost 3). 2-4-5-2 is a cycle longer than one
/// step, so only the closed set can catch it. Vertex 6 is isolated.
const EDGES: &[(u8, u8, u32)] = &[
    (0, 1, 1),
    (0, 2, 4),
    (1, 0, 1),
    (1, 2, 1),
    (1, 3, 5),
    (2, 1, 1),
    (2, 3, 1),
    (2, 4, 2),
    (4, 5, 1),
    (5, 2, 1),
];

/// Admissible distances to vertex 3.
const DISTANCE_TO_3: [u32; 7] = [3, 2, 1, 0, 2, 2, 0];

/// A vertex of the fixed test graph; identity is `id` only.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Vertex {
    pub id: u8,
    pub cost: u32,
}

impl Vertex {
    pub(crate) fn at(id: u8) -> Self {
        Self { id, cost: 0 }
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl StateSpace for Vertex {
    fn children(&self) -> Vec<Self> {
        EDGES
            .iter()
            .filter(|&&(from, _, _)| from == self.id)
            .map(|&(_, id, cost)| Self { id, cost })
            .collect()
    }

    fn step_cost(&self) -> f64 {
        f64::from(self.cost)
    }

    fn heuristic(&self, goal: &Self) -> f64 {
        if goal.id == 3 {
            f64::from(DISTANCE_TO_3[usize::from(self.id)])
        } else {
            0.0
        }
    }
}

/// Upper bound of the [`Line`] world.
pub(crate) const LINE_MAX: i32 = 8;

/// Integers `0..=LINE_MAX` joined by unit steps in both directions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Line {
    pub value: i32,
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Line {}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl StateSpace for Line {
    fn children(&self) -> Vec<Self> {
        [self.value + 1, self.value - 1]
            .into_iter()
            .filter(|v| (0..=LINE_MAX).contains(v))
            .map(|value| Self { value })
            .collect()
    }

    fn step_cost(&self) -> f64 {
        1.0
    }

    fn heuristic(&self, goal: &Self) -> f64 {
        f64::from((goal.value - self.value).abs())
    }
}
