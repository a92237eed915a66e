//! Box-constraint primitives for gradient-based optimizers in pure Rust using ndarray
//!
//! This crate is the feasibility layer shared by projected-gradient style
//! solvers: it keeps iterates inside per-variable lower/upper bounds and
//! answers the questions an outer driver asks once per iteration:
//!
//! - projection of a point into the box ([`project`], [`project_inplace`])
//! - projection of a direction or gradient so that no component pushes a
//!   variable past a tight bound ([`project_direction`], [`project_gradient`])
//! - the feasible step interval along a direction ([`step_limits`])
//! - the ordered set of variables still free to move ([`free_variables`],
//!   [`free_variables_projected`])
//!
//! Bounds are given per side as [`Bound`]: absent, one scalar for all
//! variables, or one value per variable. Direction sign conventions are
//! expressed with [`Orientation`].
//!
//! All operations are stateless and synchronous. Every fallible entry point
//! validates `lower(i) <= upper(i)` (NaN bounds are rejected the same way)
//! and array shapes before writing any output. NaN in the point or the
//! direction is deliberately not checked; it flows through the arithmetic
//! unchanged. See [`fastmin`]/[`fastmax`] for the exact clamp semantics.
//!
//! Opt-in rayon execution for large problems lives in [`parallel`].

pub mod bound;
pub mod error;
pub mod fast_min_max;
pub mod free_variables;
pub mod orientation;
pub mod parallel;
pub mod project;
pub mod project_direction;
pub mod step_limits;

pub use bound::Bound;
pub use error::BoundsError;
pub use fast_min_max::{fastclamp, fastmax, fastmin};
pub use free_variables::{free_variables, free_variables_projected};
pub use orientation::Orientation;
pub use parallel::ParallelConfig;
pub use project::{project, project_inplace};
pub use project_direction::{
    project_direction, project_direction_inplace, project_gradient, project_gradient_inplace,
};
pub use step_limits::step_limits;
