use ndarray::Array1;

use crate::bound::resolve_and_validate;
use crate::error::BoundsError;
use crate::{Bound, Orientation};

/// Zero the direction components that would immediately leave the box.
///
/// With `p = sign * d[i]`, a component is replaced by exact `0.0` when the
/// variable sits on a finite bound and `p` points past it; every other
/// component is copied through unchanged. At a strictly interior point the
/// direction is returned as-is.
///
/// Bounds are validated eagerly (NaN bounds are `InvalidBounds`); NaN in
/// `x` or `d` is not checked.
pub fn project_direction(
    dst: &mut Array1<f64>,
    x: &Array1<f64>,
    lower: &Bound,
    upper: &Bound,
    orientation: Orientation,
    d: &Array1<f64>,
) -> Result<(), BoundsError> {
    let n = x.len();
    check_len(n, d.len())?;
    check_len(n, dst.len())?;
    let (lo, hi) = resolve_and_validate(lower, upper, n)?;
    let sign = orientation.sign();
    for i in 0..n {
        dst[i] = projected_component(x[i], d[i], sign, lo.at(i), hi.at(i));
    }
    Ok(())
}

/// In-place form of [`project_direction`].
pub fn project_direction_inplace(
    d: &mut Array1<f64>,
    x: &Array1<f64>,
    lower: &Bound,
    upper: &Bound,
    orientation: Orientation,
) -> Result<(), BoundsError> {
    let n = x.len();
    check_len(n, d.len())?;
    let (lo, hi) = resolve_and_validate(lower, upper, n)?;
    let sign = orientation.sign();
    for i in 0..n {
        d[i] = projected_component(x[i], d[i], sign, lo.at(i), hi.at(i));
    }
    Ok(())
}

/// [`project_direction`] with the orientation fixed to `Backward`: the
/// feasible descent direction from a gradient `g` is along `-g`, so an entry
/// is zeroed when `-g[i]` points past a tight bound. Kept entries are the
/// original gradient values.
///
/// # Example
/// ```
/// use boxfeas::{project_gradient, Bound};
/// use ndarray::Array1;
///
/// // At the upper bound, a negative gradient entry (pushing further up) is
/// // dropped; a positive one (pulling back inside) is kept.
/// let x = Array1::from(vec![1.0, 1.0]);
/// let g = Array1::from(vec![-3.0, 3.0]);
/// let mut gp = Array1::zeros(2);
/// project_gradient(&mut gp, &x, &Bound::Scalar(0.0), &Bound::Scalar(1.0), &g).unwrap();
/// assert_eq!(gp, Array1::from(vec![0.0, 3.0]));
/// ```
pub fn project_gradient(
    dst: &mut Array1<f64>,
    x: &Array1<f64>,
    lower: &Bound,
    upper: &Bound,
    g: &Array1<f64>,
) -> Result<(), BoundsError> {
    project_direction(dst, x, lower, upper, Orientation::Backward, g)
}

/// In-place form of [`project_gradient`].
pub fn project_gradient_inplace(
    g: &mut Array1<f64>,
    x: &Array1<f64>,
    lower: &Bound,
    upper: &Bound,
) -> Result<(), BoundsError> {
    project_direction_inplace(g, x, lower, upper, Orientation::Backward)
}

#[inline(always)]
pub(crate) fn projected_component(x: f64, d: f64, sign: f64, lo: f64, hi: f64) -> f64 {
    let p = sign * d;
    if p > 0.0 && hi.is_finite() && x == hi {
        0.0
    } else if p < 0.0 && lo.is_finite() && x == lo {
        0.0
    } else {
        d
    }
}

#[inline(always)]
fn check_len(expected: usize, found: usize) -> Result<(), BoundsError> {
    if found != expected {
        return Err(BoundsError::ShapeMismatch { expected, found });
    }
    Ok(())
}
