/// Errors reported by the bounds engine
///
/// All variants are unrecoverable at this layer and are raised before any
/// output buffer is written.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoundsError {
    /// Some `lower(i) > upper(i)`, or a bound value is NaN. NaN comparisons
    /// are silently false, so the check tests `!(lower <= upper)` explicitly
    /// instead of relying on an ordering result.
    #[error("invalid bounds at index {index}: lower {lower} > upper {upper}")]
    InvalidBounds {
        /// First offending index
        index: usize,
        /// Lower bound at that index
        lower: f64,
        /// Upper bound at that index
        upper: f64,
    },

    /// Array arguments passed together do not share one length.
    #[error("shape mismatch: expected length {expected}, got {found}")]
    ShapeMismatch {
        /// Length of the reference argument (the point)
        expected: usize,
        /// Length of the offending argument
        found: usize,
    },

    /// A signed orientation value without a sign (zero or NaN).
    #[error("invalid orientation sign: {0} (must be a nonzero signed value)")]
    InvalidOrientation(f64),
}
