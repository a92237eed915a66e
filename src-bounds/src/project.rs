use ndarray::Array1;

use crate::bound::{Resolved, resolve_and_validate};
use crate::error::BoundsError;
use crate::fast_min_max::fastclamp;
use crate::Bound;

/// Project a point into the feasible box: `dst[i] = clamp(src[i], lo(i), hi(i))`.
///
/// The clamp is [`fastclamp`]: NaN entries of `src` fail both comparisons
/// and are written out unmodified. Bounds are validated (and shapes checked)
/// before `dst` is touched. With both sides unbounded this is a copy.
///
/// # Example
/// ```
/// use boxfeas::{project, Bound};
/// use ndarray::Array1;
///
/// let src = Array1::from(vec![-2.0, 0.5, 9.0]);
/// let mut dst = Array1::zeros(3);
/// project(&mut dst, &src, &Bound::Scalar(0.0), &Bound::Scalar(1.0)).unwrap();
/// assert_eq!(dst, Array1::from(vec![0.0, 0.5, 1.0]));
/// ```
pub fn project(
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

    if let (Resolved::Fill(l), Resolved::Fill(u)) = (lo, hi) {
        if l == f64::NEG_INFINITY && u == f64::INFINITY {
            dst.assign(src);
            return Ok(());
        }
    }

    for i in 0..n {
        dst[i] = fastclamp(src[i], lo.at(i), hi.at(i));
    }
    Ok(())
}

/// In-place form of [`project`], for callers that clamp their iterate where
/// it lives instead of writing to a second buffer.
pub fn project_inplace(
    x: &mut Array1<f64>,
    lower: &Bound,
    upper: &Bound,
) -> Result<(), BoundsError> {
    let n = x.len();
    let (lo, hi) = resolve_and_validate(lower, upper, n)?;
    for i in 0..n {
        x[i] = fastclamp(x[i], lo.at(i), hi.at(i));
    }
    Ok(())
}
