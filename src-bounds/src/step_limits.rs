use ndarray::Array1;

use crate::bound::resolve_and_validate;
use crate::error::BoundsError;
use crate::{Bound, Orientation};

/// Feasible step interval `(smin, smax)` along `sign * d` from a feasible `x`.
///
/// Per index, with `p = sign * d[i]`:
/// - `p == 0` contributes to neither limit (the variable never reaches a
///   bound along this direction);
/// - `p > 0` against a finite upper bound yields the candidate distance
///   `(hi(i) - x[i]) / p`; against an unrestricted upper side the variable
///   escapes to infinity;
/// - `p < 0` is symmetric with the lower side.
///
/// `smin` is the smallest strictly positive finite candidate, `+inf` when
/// the direction never hits a finite bound. `smax` is the largest finite
/// candidate observed (0 when there is none), forced to `+inf` as soon as
/// any variable escapes an unrestricted side. Guarantees `0 < smin`,
/// `0 <= smax`, and `smax >=` every finite per-variable distance.
///
/// # Example
/// ```
/// use boxfeas::{step_limits, Bound, Orientation};
/// use ndarray::Array1;
///
/// let x = Array1::from(vec![0.0]);
/// let d = Array1::from(vec![1.0]);
/// let (smin, smax) = step_limits(
///     &x,
///     &Bound::Scalar(-1.0),
///     &Bound::Scalar(1.0),
///     Orientation::Forward,
///     &d,
/// )
/// .unwrap();
/// assert_eq!((smin, smax), (1.0, 1.0));
/// ```
pub fn step_limits(
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
    let (lo, hi) = resolve_and_validate(lower, upper, n)?;
    let sign = orientation.sign();

    let mut smin = f64::INFINITY;
    let mut smax = 0.0_f64;
    let mut escapes = false;

    for i in 0..n {
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
    }

    if escapes {
        smax = f64::INFINITY;
    }
    Ok((smin, smax))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(x: &[f64], lo: f64, hi: f64, d: &[f64]) -> (f64, f64) {
        step_limits(
            &Array1::from(x.to_vec()),
            &Bound::Scalar(lo),
            &Bound::Scalar(hi),
            Orientation::Forward,
            &Array1::from(d.to_vec()),
        )
        .unwrap()
    }

    #[test]
    fn single_variable_hits_the_wall_at_one() {
        assert_eq!(limits(&[0.0], -1.0, 1.0, &[1.0]), (1.0, 1.0));
    }

    #[test]
    fn scaled_components_reach_their_bounds_together() {
        let x = Array1::from(vec![0.0, 0.0]);
        let lo = Array1::from(vec![-1.0, -2.0]);
        let hi = Array1::from(vec![1.0, 2.0]);
        let d = Array1::from(vec![1.0, 2.0]);
        let (smin, smax) = step_limits(
            &x,
            &Bound::PerElement(&lo),
            &Bound::PerElement(&hi),
            Orientation::Forward,
            &d,
        )
        .unwrap();
        assert_eq!((smin, smax), (1.0, 1.0));
    }

    #[test]
    fn nearest_and_farthest_bounds_differ() {
        // distances: 1.0 along +d for x0, 4.0 along -d for x1
        assert_eq!(limits(&[0.0, 0.0], -4.0, 1.0, &[1.0, -1.0]), (1.0, 4.0));
    }

    #[test]
    fn backward_orientation_flips_the_target_bound() {
        let x = Array1::from(vec![0.0]);
        let d = Array1::from(vec![1.0]);
        let (smin, smax) = step_limits(
            &x,
            &Bound::Scalar(-3.0),
            &Bound::Scalar(1.0),
            Orientation::Backward,
            &d,
        )
        .unwrap();
        // moving along -d, so the lower bound at distance 3 is the target
        assert_eq!((smin, smax), (3.0, 3.0));
    }

    #[test]
    fn escape_to_an_unrestricted_side() {
        let x = Array1::from(vec![0.0, 0.0]);
        let lo = Array1::from(vec![-1.0, -1.0]);
        let d = Array1::from(vec![1.0, 1.0]);
        let (smin, smax) = step_limits(
            &x,
            &Bound::PerElement(&lo),
            &Bound::Unbounded,
            Orientation::Forward,
            &d,
        )
        .unwrap();
        assert_eq!(smin, f64::INFINITY);
        assert_eq!(smax, f64::INFINITY);
    }

    #[test]
    fn zero_components_are_excluded_from_both_limits() {
        assert_eq!(
            limits(&[0.0, 0.0], -1.0, 1.0, &[0.0, 1.0]),
            (1.0, 1.0)
        );
    }

    #[test]
    fn all_zero_direction_yields_inf_zero() {
        // no candidate distance and no escape
        assert_eq!(limits(&[0.0, 0.0], -1.0, 1.0, &[0.0, 0.0]), (f64::INFINITY, 0.0));
    }

    #[test]
    fn at_bound_with_outward_component_smin_stays_positive() {
        // distance 0 to the tight bound is not a valid smin candidate, but
        // it is still observed by smax
        let (smin, smax) = limits(&[1.0, 0.0], -1.0, 1.0, &[1.0, 1.0]);
        assert_eq!(smin, 1.0);
        assert_eq!(smax, 1.0);
    }

    #[test]
    fn finite_escape_mix_forces_smax_to_infinity() {
        let hi = Array1::from(vec![1.0, f64::INFINITY]);
        let x = Array1::from(vec![0.0, 0.0]);
        let d = Array1::from(vec![1.0, 1.0]);
        let (smin, smax) = step_limits(
            &x,
            &Bound::Scalar(-1.0),
            &Bound::PerElement(&hi),
            Orientation::Forward,
            &d,
        )
        .unwrap();
        assert_eq!(smin, 1.0);
        assert_eq!(smax, f64::INFINITY);
    }
}
