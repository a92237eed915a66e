//! Opt-in rayon execution for the element-wise kernels.
//!
//! The per-element loops in projection and step limiting have no cross-index
//! dependency, so they split cleanly across a thread pool. The free-set
//! selection does not (each kept index is appended in order) and has no
//! parallel form here. Results match the serial kernels; the step-limit
//! reduction is a min/max pair and does not depend on evaluation order.

use ndarray::{Array1, Zip};
use rayon::prelude::*;

use crate::bound::resolve_and_validate;
use crate::error::BoundsError;
use crate::fast_min_max::fastclamp;
use crate::project_direction::projected_component;
use crate::{Bound, Orientation};

/// When to leave the serial path. Small arrays are dominated by fork/join
/// overhead, so parallel execution only kicks in at `min_len` elements.
#[derive(Debug, Clone, Copy)]
pub struct ParallelConfig {
    /// Master switch; `false` always runs the serial loop
    pub enabled: bool,
    /// Minimum number of elements before the pool is used
    pub min_len: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_len: 4096,
        }
    }
}

impl ParallelConfig {
    /// A configuration that never leaves the serial path.
    pub const fn serial() -> Self {
        Self {
            enabled: false,
            min_len: usize::MAX,
        }
    }

    #[inline]
    fn use_parallel(&self, n: usize) -> bool {
        self.enabled && n >= self.min_len
    }
}

/// Threshold-dispatched form of [`crate::project`].
pub fn project(
    cfg: &ParallelConfig,
    dst: &mut Array1<f64>,
    src: &Array1<f64>,
    lower: &Bound,
    upper: &Bound,
) -> Result<(), BoundsError> {
    let n = src.len();
    if dst.len() != n {
        return Err(BoundsError::ShapeMismatch {
            expected: n,
            found: dst.len(),
        });
    }
    let (lo, hi) = resolve_and_validate(lower, upper, n)?;

    if cfg.use_parallel(n) {
        Zip::indexed(dst.view_mut())
            .and(src.view())
            .par_for_each(|i, out, &v| *out = fastclamp(v, lo.at(i), hi.at(i)));
    } else {
        for i in 0..n {
            dst[i] = fastclamp(src[i], lo.at(i), hi.at(i));
        }
    }
    Ok(())
}

/// Threshold-dispatched form of [`crate::project_direction`].
pub fn project_direction(
    cfg: &ParallelConfig,
    dst: &mut Array1<f64>,
    x: &Array1<f64>,
    lower: &Bound,
    upper: &Bound,
    orientation: Orientation,
    d: &Array1<f64>,
) -> Result<(), BoundsError> {
    let n = x.len();
    if d.len() != n {
        return Err(BoundsError::ShapeMismatch {
            expected: n,
            found: d.len(),
        });
    }
    if dst.len() != n {
        return Err(BoundsError::ShapeMismatch {
            expected: n,
            found: dst.len(),
        });
    }
    let (lo, hi) = resolve_and_validate(lower, upper, n)?;
    let sign = orientation.sign();

    if cfg.use_parallel(n) {
        Zip::indexed(dst.view_mut())
            .and(x.view())
            .and(d.view())
            .par_for_each(|i, out, &xi, &di| {
                *out = projected_component(xi, di, sign, lo.at(i), hi.at(i));
            });
    } else {
        for i in 0..n {
            dst[i] = projected_component(x[i], d[i], sign, lo.at(i), hi.at(i));
        }
    }
    Ok(())
}

/// Threshold-dispatched form of [`crate::step_limits`]. The fold merges
/// per-chunk `(smin, smax, escapes)` triples; min/max are associative and
/// commutative, so the split does not change the result.
pub fn step_limits(
    cfg: &ParallelConfig,
    x: &Array1<f64>,
    lower: &Bound,
    upper: &Bound,
    orientation: Orientation,
    d: &Array1<f64>,
) -> Result<(f64, f64), BoundsError> {
    let n = x.len();
    if d.len() != n {
        return Err(BoundsError::ShapeMismatch {
            expected: n,
            found: d.len(),
        });
    }
    if !cfg.use_parallel(n) {
        return crate::step_limits(x, lower, upper, orientation, d);
    }
    let (lo, hi) = resolve_and_validate(lower, upper, n)?;
    let sign = orientation.sign();

    let identity = || (f64::INFINITY, 0.0_f64, false);
    let (smin, smax, escapes) = (0..n)
        .into_par_iter()
        .fold(identity, |(mut smin, mut smax, mut escapes), i| {
            let p = sign * d[i];
            if p > 0.0 {
                let u = hi.at(i);
                if u.is_finite() {
                    let a = (u - x[i]) / p;
                    if a > 0.0 && a < smin {
                        smin = a;
                    }
                    if a > smax {
                        smax = a;
                    }
                } else {
                    escapes = true;
                }
            } else if p < 0.0 {
                let l = lo.at(i);
                if l.is_finite() {
                    let a = (l - x[i]) / p;
                    if a > 0.0 && a < smin {
                        smin = a;
                    }
                    if a > smax {
                        smax = a;
                    }
                } else {
                    escapes = true;
                }
            }
            (smin, smax, escapes)
        })
        .reduce(identity, |a, b| {
            (a.0.min(b.0), a.1.max(b.1), a.2 || b.2)
        });

    Ok((smin, if escapes { f64::INFINITY } else { smax }))
}
