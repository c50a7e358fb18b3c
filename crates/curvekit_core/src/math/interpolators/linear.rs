//! Piecewise linear interpolation.

use super::Interpolator;
use crate::math::sorting::joint_sort;
use crate::types::InterpolationError;
use num_traits::Float;

/// Linearly interpolates the table `(xs, ys)` at `x`.
///
/// `xs` must be sorted ascending. The bracketing interval is found by a
/// forward scan. Queries at or below `xs[0]` return `ys[0]`; queries at or
/// above `xs[n-1]` return `ys[n-1]`.
///
/// # Errors
///
/// * [`InterpolationError::LengthMismatch`] - `xs` and `ys` differ in length
/// * [`InterpolationError::InsufficientData`] - empty table
///
/// # Example
///
/// ```
/// use curvekit_core::math::interpolators::interpolate_linear;
///
/// let xs = [0.0, 1.0, 3.0];
/// let ys = [0.0, 2.0, 6.0];
/// assert_eq!(interpolate_linear(&xs, &ys, 2.0).unwrap(), 4.0);
/// assert_eq!(interpolate_linear(&xs, &ys, 10.0).unwrap(), 6.0);
/// ```
pub fn interpolate_linear<T: Float>(xs: &[T], ys: &[T], x: T) -> Result<T, InterpolationError> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
    }
    Ok(scan(xs, ys, x))
}

/// Forward-scan interpolation over a validated table.
fn scan<T: Float>(xs: &[T], ys: &[T], x: T) -> T {
    if x.is_nan() {
        return x;
    }
    if x <= xs[0] {
        return ys[0];
    }
    for j in 1..xs.len() {
        if x < xs[j] {
            let t = (x - xs[j - 1]) / (xs[j] - xs[j - 1]);
            return ys[j - 1] + t * (ys[j] - ys[j - 1]);
        }
    }
    ys[ys.len() - 1]
}

/// Piecewise linear interpolator over an owned, sorted table.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Construction
///
/// The samples are copied and jointly sorted by abscissa, so unsorted input
/// is accepted. At least 2 data points are required.
///
/// # Example
///
/// ```
/// use curvekit_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::<f64>::new(&[3.0, 0.0, 1.0], &[6.0, 0.0, 2.0]).unwrap();
/// assert_eq!(interp.domain(), (0.0, 3.0));
/// assert_eq!(interp.xs(), &[0.0, 1.0, 3.0]);
/// assert!((interp.interpolate(2.0).unwrap() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// y-values in the order of `xs`
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Builds an interpolator from possibly unsorted samples.
    ///
    /// # Returns
    ///
    /// * `Ok(LinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 data points
    /// * `Err(InterpolationError::LengthMismatch)` - Mismatched array lengths
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        let mut sorted_xs = xs.to_vec();
        let mut sorted_ys = ys.to_vec();
        joint_sort(&mut sorted_xs, &mut sorted_ys)?;

        Ok(Self {
            xs: sorted_xs,
            ys: sorted_ys,
        })
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values (in sorted x order).
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        Ok(scan(&self.xs, &self.ys, x))
    }

    fn domain(&self) -> (T, T) {
        match (self.xs.first(), self.xs.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (T::nan(), T::nan()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // interpolate_linear
    // ========================================

    #[test]
    fn test_midpoint() {
        let y = interpolate_linear(&[0.0, 2.0], &[1.0, 3.0], 1.0).unwrap();
        assert_relative_eq!(y, 2.0);
    }

    #[test]
    fn test_exact_at_knots() {
        let xs = [0.0, 1.0, 2.5, 4.0];
        let ys = [3.0, -1.0, 0.25, 8.0];
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_eq!(interpolate_linear(&xs, &ys, x).unwrap(), y);
        }
    }

    #[test]
    fn test_clamped_below_and_above() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [10.0, 20.0, 30.0];
        assert_eq!(interpolate_linear(&xs, &ys, -5.0).unwrap(), 10.0);
        assert_eq!(interpolate_linear(&xs, &ys, 99.0).unwrap(), 30.0);
    }

    #[test]
    fn test_single_point_table() {
        assert_eq!(interpolate_linear(&[2.0], &[7.0], 0.0).unwrap(), 7.0);
        assert_eq!(interpolate_linear(&[2.0], &[7.0], 5.0).unwrap(), 7.0);
    }

    #[test]
    fn test_duplicate_abscissae_take_later_sample() {
        let xs = [0.0, 1.0, 1.0, 2.0];
        let ys = [0.0, 1.0, 5.0, 5.0];
        assert_eq!(interpolate_linear(&xs, &ys, 1.0).unwrap(), 5.0);
        assert_relative_eq!(interpolate_linear(&xs, &ys, 0.5).unwrap(), 0.5);
    }

    #[test]
    fn test_nan_query() {
        assert!(interpolate_linear(&[0.0, 1.0], &[0.0, 1.0], f64::NAN)
            .unwrap()
            .is_nan());
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            interpolate_linear::<f64>(&[], &[], 0.0).unwrap_err(),
            InterpolationError::InsufficientData { got: 0, need: 1 }
        );
        assert_eq!(
            interpolate_linear(&[0.0, 1.0], &[0.0], 0.5).unwrap_err(),
            InterpolationError::LengthMismatch { xs: 2, ys: 1 }
        );
    }

    // ========================================
    // LinearInterpolator
    // ========================================

    #[test]
    fn test_new_sorts_jointly() {
        let interp = LinearInterpolator::new(&[2.0, 0.0, 1.0], &[4.0, 0.0, 2.0]).unwrap();
        assert_eq!(interp.xs(), &[0.0, 1.0, 2.0]);
        assert_eq!(interp.ys(), &[0.0, 2.0, 4.0]);
        assert_eq!(interp.len(), 3);
        assert!(!interp.is_empty());
    }

    #[test]
    fn test_new_insufficient() {
        let result = LinearInterpolator::new(&[0.0], &[0.0]);
        match result {
            Err(InterpolationError::InsufficientData { got, need }) => {
                assert_eq!(got, 1);
                assert_eq!(need, 2);
            }
            other => panic!("Expected InsufficientData, got {:?}", other),
        }
    }

    #[test]
    fn test_interpolate_through_trait() {
        let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();
        assert_relative_eq!(interp.interpolate(0.5).unwrap(), 1.0, epsilon = 1e-10);
        assert_eq!(interp.interpolate(-1.0).unwrap(), 0.0);
        assert_eq!(interp.interpolate(3.0).unwrap(), 4.0);
        assert_eq!(interp.domain(), (0.0, 2.0));
    }
}
