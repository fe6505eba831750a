//! Pinned values for the tripling puzzle (`n` → `3n`).
//!
//! Changing any entry here changes observable behaviour; the lock tests exist
//! to make that a deliberate act.

/// IDA* path cost from `n` to `3n`.
pub const IDA_COSTS: &[(i64, f64)] = &[
    (30, 18.0),
    (-70, 24.0),
    (2200, 1103.0),
    (0, 0.0),
    (54, 30.0),
    (-6, 8.0),
    (-2000, 506.0),
    (1000, 503.0),
    (-7, 9.0),
    (-23, 13.0),
    (-3500, 881.0),
];

/// Every IDA* limit used from `n` to `3n`, initial limit first.
pub const IDA_LIMITS: &[(i64, &[f64])] = &[
    (1, &[2.0]),
    (5, &[5.0, 6.0]),
    (10, &[8.0]),
    (30, &[18.0]),
    (-6, &[7.0, 9.0]),
    (-7, &[7.0, 9.0, 10.0]),
    (-23, &[11.0, 13.0, 14.0]),
    (-70, &[23.0, 25.0]),
];

/// Path cost shared by uniform-cost search, A* and IDA* for small `n`.
pub const SHARED_COSTS: &[(i64, f64)] = &[
    (0, 0.0),
    (1, 2.0),
    (2, 4.0),
    (5, 6.0),
    (-3, 7.0),
    (-6, 8.0),
    (10, 8.0),
    (30, 18.0),
    (-70, 24.0),
    (54, 30.0),
    (-7, 9.0),
    (-23, 13.0),
];
