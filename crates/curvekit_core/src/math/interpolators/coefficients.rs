//! Per-segment cubic coefficients and their evaluation.

use super::Interpolator;
use crate::math::lit;
use crate::types::InterpolationError;
use num_traits::Float;

/// Checks sample arrays shared by every builder.
pub(crate) fn check_samples<T: Float>(
    xs: &[T],
    ys: &[T],
    need: usize,
) -> Result<(), InterpolationError> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.len() < need {
        return Err(InterpolationError::InsufficientData {
            got: xs.len(),
            need,
        });
    }
    if let Some(j) = xs.windows(2).position(|w| !(w[0] < w[1])) {
        return Err(InterpolationError::InvalidInterpolant(format!(
            "abscissae must be strictly increasing (violated at index {})",
            j + 1
        )));
    }
    Ok(())
}

/// Piecewise cubic interpolant in five parallel arrays.
///
/// For `x ∈ [x[j], x[j+1])` with `dx = x - x[j]`:
///
/// ```text
/// y(x) = y[j] + dx·(c[j] + dx·(b[j] + dx·a[j]))
/// ```
///
/// The last entry carries `a = b = 0` and the end slope in `c`.
/// Every array has one entry per sample; `x` must be strictly increasing.
///
/// # Example
///
/// ```
/// use curvekit_core::math::interpolators::{cubic_spline, Boundary};
///
/// let spline = cubic_spline(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], Boundary::Natural, Boundary::Natural)
///     .unwrap();
/// assert_eq!(spline.evaluate(1.0).unwrap(), 1.0);
/// assert_eq!(spline.evaluate(-5.0).unwrap(), 0.0); // clamped, no extrapolation
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplineCoefficients<T> {
    /// Sample abscissae
    pub x: Vec<T>,
    /// Sample ordinates
    pub y: Vec<T>,
    /// Cubic coefficients
    pub a: Vec<T>,
    /// Quadratic coefficients
    pub b: Vec<T>,
    /// Linear coefficients
    pub c: Vec<T>,
}

impl<T: Float> SplineCoefficients<T> {
    /// Constant or empty interpolant for fewer than two samples.
    pub(crate) fn degenerate(xs: &[T], ys: &[T]) -> Self {
        let zeros = vec![T::zero(); xs.len()];
        Self {
            x: xs.to_vec(),
            y: ys.to_vec(),
            a: zeros.clone(),
            b: zeros.clone(),
            c: zeros,
        }
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if there are no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Checks that the five arrays are non-empty and of equal length.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let n = self.x.len();
        if n == 0 {
            return Err(InterpolationError::InvalidInterpolant(
                "no samples".to_string(),
            ));
        }
        for (name, len) in [
            ("y", self.y.len()),
            ("a", self.a.len()),
            ("b", self.b.len()),
            ("c", self.c.len()),
        ] {
            if len != n {
                return Err(InterpolationError::InvalidInterpolant(format!(
                    "{} has {} entries, x has {}",
                    name, len, n
                )));
            }
        }
        Ok(())
    }

    /// Index `j` of the segment with `x[j] <= x < x[j+1]`.
    ///
    /// Requires `x[0] < x < x[n-1]`.
    #[inline]
    fn segment(&self, x: T) -> usize {
        self.x.partition_point(|&xi| xi <= x) - 1
    }

    /// Evaluates the interpolant at `x`.
    ///
    /// Values below `x[0]` return `y[0]`, values above `x[n-1]` return
    /// `y[n-1]`; a NaN query returns NaN.
    ///
    /// # Errors
    ///
    /// [`InterpolationError::InvalidInterpolant`] if the arrays are malformed.
    pub fn evaluate(&self, x: T) -> Result<T, InterpolationError> {
        self.validate()?;
        Ok(self.evaluate_unchecked(x))
    }

    /// Evaluates at every query point.
    pub fn evaluate_many(&self, xs: &[T]) -> Result<Vec<T>, InterpolationError> {
        self.validate()?;
        Ok(xs.iter().map(|&x| self.evaluate_unchecked(x)).collect())
    }

    fn evaluate_unchecked(&self, x: T) -> T {
        let n = self.x.len();
        if x.is_nan() {
            return x;
        }
        if x <= self.x[0] {
            return self.y[0];
        }
        if x >= self.x[n - 1] {
            return self.y[n - 1];
        }
        let j = self.segment(x);
        let dx = x - self.x[j];
        self.y[j] + dx * (self.c[j] + dx * (self.b[j] + dx * self.a[j]))
    }

    /// First derivative at `x`; zero outside the sample domain.
    pub fn slope_at(&self, x: T) -> Result<T, InterpolationError> {
        self.validate()?;
        let n = self.x.len();
        if x.is_nan() {
            return Ok(x);
        }
        if x < self.x[0] || x > self.x[n - 1] {
            return Ok(T::zero());
        }
        if x == self.x[n - 1] {
            return Ok(self.c[n - 1]);
        }
        let j = if x == self.x[0] { 0 } else { self.segment(x) };
        let dx = x - self.x[j];
        Ok(self.c[j] + dx * (lit::<T>(2.0) * self.b[j] + lit::<T>(3.0) * dx * self.a[j]))
    }
}

impl<T: Float> Interpolator<T> for SplineCoefficients<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        self.evaluate(x)
    }

    fn domain(&self) -> (T, T) {
        match (self.x.first(), self.x.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (T::nan(), T::nan()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quadratic_piece() -> SplineCoefficients<f64> {
        // y = x² on [0, 2] as a single segment plus the end entry
        SplineCoefficients {
            x: vec![0.0, 2.0],
            y: vec![0.0, 4.0],
            a: vec![0.0, 0.0],
            b: vec![1.0, 0.0],
            c: vec![0.0, 4.0],
        }
    }

    #[test]
    fn test_empty_domain_is_nan() {
        let s = SplineCoefficients::<f64>::degenerate(&[], &[]);
        assert!(s.is_empty());
        let (lo, hi) = s.domain();
        assert!(lo.is_nan() && hi.is_nan());
        assert!(matches!(
            s.evaluate(0.0),
            Err(InterpolationError::InvalidInterpolant(_))
        ));
    }

    #[test]
    fn test_single_sample_domain() {
        let s = SplineCoefficients::degenerate(&[2.0], &[5.0]);
        assert_eq!(s.domain(), (2.0, 2.0));
        assert_eq!(s.evaluate(-1.0).unwrap(), 5.0);
    }

    #[test]
    fn test_evaluate_inside() {
        let s = quadratic_piece();
        assert_relative_eq!(s.evaluate(1.5).unwrap(), 2.25);
    }

    #[test]
    fn test_evaluate_clamps() {
        let s = quadratic_piece();
        assert_eq!(s.evaluate(-1.0).unwrap(), 0.0);
        assert_eq!(s.evaluate(3.0).unwrap(), 4.0);
        assert!(s.evaluate(f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_slope_at() {
        let s = quadratic_piece();
        assert_relative_eq!(s.slope_at(1.0).unwrap(), 2.0);
        assert_relative_eq!(s.slope_at(0.0).unwrap(), 0.0);
        assert_relative_eq!(s.slope_at(2.0).unwrap(), 4.0);
        assert_eq!(s.slope_at(5.0).unwrap(), 0.0);
    }

    #[test]
    fn test_mismatched_arrays() {
        let mut s = quadratic_piece();
        s.b.pop();
        match s.evaluate(1.0).unwrap_err() {
            InterpolationError::InvalidInterpolant(msg) => assert!(msg.contains("b has 1")),
            other => panic!("Expected InvalidInterpolant, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_is_invalid() {
        let s = SplineCoefficients::<f64>::default();
        assert!(matches!(
            s.evaluate(0.0),
            Err(InterpolationError::InvalidInterpolant(_))
        ));
    }

    #[test]
    fn test_degenerate_single_sample() {
        let s = SplineCoefficients::degenerate(&[1.0], &[7.0]);
        assert_eq!(s.evaluate(0.0).unwrap(), 7.0);
        assert_eq!(s.evaluate(1.0).unwrap(), 7.0);
        assert_eq!(s.evaluate(9.0).unwrap(), 7.0);
    }

    #[test]
    fn test_evaluate_many() {
        let s = quadratic_piece();
        let ys = s.evaluate_many(&[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(ys, vec![0.0, 1.0, 4.0]);
    }

    #[test]
    fn test_domain() {
        assert_eq!(quadratic_piece().domain(), (0.0, 2.0));
    }
}
