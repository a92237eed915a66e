//! Box fixtures for bounds-engine tests
//!
//! Deterministic and seeded generators for feasible boxes, points and
//! directions, shared by the boxfeas unit and integration tests. Everything
//! here is reproducible: randomized fixtures take an explicit seed and use
//! `StdRng`, so a failing test replays exactly.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform box: every variable gets the same `(lower, upper)` pair.
pub fn uniform_bounds(n: usize, lower: f64, upper: f64) -> (Array1<f64>, Array1<f64>) {
    (Array1::from_elem(n, lower), Array1::from_elem(n, upper))
}

/// Seeded random box with finite sides: lower in [-10, 0), width in (0, 10].
pub fn random_box(n: usize, seed: u64) -> (Array1<f64>, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut lower = Array1::zeros(n);
    let mut upper = Array1::zeros(n);
    for i in 0..n {
        let lo: f64 = rng.random_range(-10.0..0.0);
        let width: f64 = rng.random_range(1e-6..10.0);
        lower[i] = lo;
        upper[i] = lo + width;
    }
    (lower, upper)
}

/// Seeded random box where each side is independently dropped to infinity
/// with probability 1/4, exercising the none/lower-only/upper-only/both
/// bound configurations in one fixture.
pub fn random_open_box(n: usize, seed: u64) -> (Array1<f64>, Array1<f64>) {
    let (mut lower, mut upper) = random_box(n, seed);
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    for i in 0..n {
        if rng.random::<f64>() < 0.25 {
            lower[i] = f64::NEG_INFINITY;
        }
        if rng.random::<f64>() < 0.25 {
            upper[i] = f64::INFINITY;
        }
    }
    (lower, upper)
}

/// Seeded point inside the box: finite pairs are interpolated, half-open
/// variables step away from their finite side, fully open variables draw
/// from [-3, 3].
pub fn random_point_in(lower: &Array1<f64>, upper: &Array1<f64>, seed: u64) -> Array1<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = lower.len();
    let mut x = Array1::zeros(n);
    for i in 0..n {
        let lo = lower[i];
        let hi = upper[i];
        x[i] = match (lo.is_finite(), hi.is_finite()) {
            (true, true) => {
                let t: f64 = rng.random_range(0.0..1.0);
                lo + t * (hi - lo)
            }
            (true, false) => lo + rng.random_range(0.0..3.0),
            (false, true) => hi - rng.random_range(0.0..3.0),
            (false, false) => rng.random_range(-3.0..3.0),
        };
    }
    x
}

/// Seeded direction with entries in [-1, 1]; roughly one entry in eight is
/// an exact zero so the p == 0 branches get exercised.
pub fn random_direction(n: usize, seed: u64) -> Array1<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut d = Array1::zeros(n);
    for i in 0..n {
        d[i] = if rng.random_range(0..8) == 0 {
            0.0
        } else {
            rng.random_range(-1.0..1.0)
        };
    }
    d
}
