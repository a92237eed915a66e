use ndarray::Array1;

use crate::bound::resolve_and_validate;
use crate::error::BoundsError;
use crate::{Bound, Orientation};

/// Select the free variables directly from `(x, bounds, orientation, d)`.
///
/// The selection mirrors the zeroing rule of
/// [`project_direction`](crate::project_direction), with one deliberate
/// asymmetry: when `d[i] == 0` and only one side is bounded, the variable
/// counts as free as long as the point is not exactly at that bound. The
/// projected-direction form [`free_variables_projected`] is a strict
/// nonzero test and would call the same variable pinned. Both behaviors are
/// kept as-is; see the truth table on `may_move` below.
///
/// `sel` is cleared and refilled with ascending indices; its capacity is
/// reused, so a long-lived buffer never reallocates once it has grown to
/// the problem size. Validation runs before `sel` is touched.
pub fn free_variables(
    sel: &mut Vec<usize>,
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
    let (lo, hi) = resolve_and_validate(lower, upper, n)?;
    let sign = orientation.sign();

    sel.clear();
    for i in 0..n {
        if may_move(x[i], d[i], sign, lo.at(i), hi.at(i)) {
            sel.push(i);
        }
    }
    Ok(())
}

/// Select the free variables from an already projected direction `gp`
/// (typically the output of
/// [`project_gradient`](crate::project_gradient)): exactly the indices with
/// `gp[i] != 0.0`, ascending. Strict nonzero test, no boundary special
/// case.
///
/// # Example
/// ```
/// use boxfeas::free_variables_projected;
/// use ndarray::Array1;
///
/// let gp = Array1::from(vec![0.0, 3.0, -1.0, 0.0]);
/// let mut sel = Vec::new();
/// free_variables_projected(&mut sel, &gp);
/// assert_eq!(sel, vec![1, 2]);
/// ```
pub fn free_variables_projected(sel: &mut Vec<usize>, gp: &Array1<f64>) {
    sel.clear();
    for (i, &g) in gp.iter().enumerate() {
        if g != 0.0 {
            sel.push(i);
        }
    }
}

/// Whether one variable may still move, keyed on which sides are finite.
/// With `p = sign * d`:
///
/// | bounds      | free iff                                            |
/// |-------------|-----------------------------------------------------|
/// | none        | always                                              |
/// | lower only  | `p > 0` or `x > lo`                                 |
/// | upper only  | `p < 0` or `x < hi`                                 |
/// | both        | `d != 0` and (`p < 0` ? `x > lo` : `x < hi`)        |
///
/// The single-sided rows are where `d == 0` stays free away from the bound;
/// the both-sided row requires a nonzero component.
#[inline(always)]
pub(crate) fn may_move(x: f64, d: f64, sign: f64, lo: f64, hi: f64) -> bool {
    let p = sign * d;
    match (lo.is_finite(), hi.is_finite()) {
        (false, false) => true,
        (true, false) => p > 0.0 || x > lo,
        (false, true) => p < 0.0 || x < hi,
        (true, true) => {
            d != 0.0
                && if p < 0.0 {
                    x > lo
                } else {
                    x < hi
                }
        }
    }
}
