use ndarray::Array1;

use crate::error::BoundsError;

/// One side of a feasible box
///
/// A bound is absent, one scalar applied to every variable, or one value per
/// variable. An absent side behaves as -inf (lower) or +inf (upper).
///
/// # Example
/// ```
/// use boxfeas::Bound;
/// use ndarray::Array1;
///
/// let per = Array1::from(vec![0.0, -1.0]);
/// let lower = Bound::PerElement(&per);
/// let upper = Bound::Scalar(10.0);
/// let free = Bound::Unbounded;
/// # let _ = (lower, upper, free);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Bound<'a> {
    /// No restriction on this side
    Unbounded,
    /// One value applied to all variables
    Scalar(f64),
    /// One value per variable; length must match the point
    PerElement(&'a Array1<f64>),
}

impl<'a> Bound<'a> {
    /// Resolve to a fill-or-slice accessor, checking the length of a
    /// per-element bound against `n`.
    pub(crate) fn resolve(&self, fill: f64, n: usize) -> Result<Resolved<'a>, BoundsError> {
        match *self {
            Bound::Unbounded => Ok(Resolved::Fill(fill)),
            Bound::Scalar(v) => Ok(Resolved::Fill(v)),
            Bound::PerElement(values) => {
                if values.len() != n {
                    return Err(BoundsError::ShapeMismatch {
                        expected: n,
                        found: values.len(),
                    });
                }
                Ok(Resolved::PerElement(values))
            }
        }
    }
}

/// A bound side resolved against a known problem size. Variant dispatch
/// happens here, once per call, so the per-element loops index through a
/// branch-free accessor.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Resolved<'a> {
    Fill(f64),
    PerElement(&'a Array1<f64>),
}

impl Resolved<'_> {
    #[inline(always)]
    pub(crate) fn at(&self, i: usize) -> f64 {
        match *self {
            Resolved::Fill(v) => v,
            Resolved::PerElement(values) => values[i],
        }
    }
}

/// Resolve both sides and eagerly enforce `lower(i) <= upper(i)` everywhere.
///
/// The comparison is written `!(l <= u)` so that a NaN bound, whose
/// comparisons are all false, is caught here as `InvalidBounds` rather than
/// slipping through an ordering test. Runs before any output is produced.
pub(crate) fn resolve_and_validate<'a>(
    lower: &Bound<'a>,
    upper: &Bound<'a>,
    n: usize,
) -> Result<(Resolved<'a>, Resolved<'a>), BoundsError> {
    let lo = lower.resolve(f64::NEG_INFINITY, n)?;
    let hi = upper.resolve(f64::INFINITY, n)?;

    match (lo, hi) {
        // Two fills compare once, not n times.
        (Resolved::Fill(l), Resolved::Fill(u)) => {
            if n > 0 && !(l <= u) {
                return Err(BoundsError::InvalidBounds {
                    index: 0,
                    lower: l,
                    upper: u,
                });
            }
        }
        _ => {
            for i in 0..n {
                let l = lo.at(i);
                let u = hi.at(i);
                if !(l <= u) {
                    return Err(BoundsError::InvalidBounds {
                        index: i,
                        lower: l,
                        upper: u,
                    });
                }
            }
        }
    }

    Ok((lo, hi))
}
