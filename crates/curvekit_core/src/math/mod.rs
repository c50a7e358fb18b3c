//! Numerical algorithms over sample arrays.
//!
//! - [`solvers`]: tridiagonal (Thomas) solver
//! - [`interpolators`]: cubic, Steffen and linear interpolation, spline cache
//! - [`approximation`]: adaptive anchor selection for noisy data
//! - [`smoothing`]: window average and least-squares line
//! - [`sorting`]: joint sort of two parallel arrays
//!
//! Everything operates on slices; [`Vector`](crate::vector::Vector) exposes
//! its contents through `as_slice` and `data_for_write`.

pub mod approximation;
pub mod interpolators;
pub mod smoothing;
pub mod solvers;
pub mod sorting;

use num_traits::Float;

/// Converts an `f64` literal into `T`.
#[inline]
pub(crate) fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
