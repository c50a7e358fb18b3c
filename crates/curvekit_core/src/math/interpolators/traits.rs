//! Common interface of one-dimensional interpolants.

use crate::types::InterpolationError;
use num_traits::Float;

/// One-dimensional interpolant over a finite sample domain.
///
/// Queries outside [`domain`](Interpolator::domain) are clamped to the end
/// values; no interpolant in this crate extrapolates.
///
/// # Example
///
/// ```
/// use curvekit_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// fn midpoint<I: Interpolator<f64>>(interp: &I) -> f64 {
///     let (lo, hi) = interp.domain();
///     interp.interpolate(0.5 * (lo + hi)).unwrap()
/// }
///
/// let interp = LinearInterpolator::new(&[0.0, 2.0], &[0.0, 4.0]).unwrap();
/// assert_eq!(midpoint(&interp), 2.0);
/// ```
pub trait Interpolator<T: Float> {
    /// Interpolated value at `x`.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// First and last sample abscissae; both NaN when there are no samples.
    fn domain(&self) -> (T, T);
}
