//! Cubic spline construction with natural or clamped end conditions.

use super::coefficients::check_samples;
use super::SplineCoefficients;
use crate::math::lit;
use crate::types::InterpolationError;
use num_traits::Float;
use tracing::trace;

/// End condition of a cubic spline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary<T> {
    /// Zero second derivative at the end.
    #[default]
    Natural,
    /// Prescribed first derivative at the end.
    Clamped(T),
}

/// Builds a C² cubic spline through `(xs[i], ys[i])`.
///
/// The second derivatives are obtained from one tridiagonal sweep with the
/// requested end conditions, then converted into per-segment coefficients.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Arguments
///
/// * `xs` - Strictly increasing abscissae
/// * `ys` - Ordinates, same length as `xs`
/// * `left` - End condition at `xs[0]`
/// * `right` - End condition at `xs[n-1]`
///
/// # Returns
///
/// * `Ok(SplineCoefficients)` - One entry per sample; fewer than two samples
///   give a constant (or empty) interpolant
/// * `Err(InterpolationError::LengthMismatch)` - `xs` and `ys` differ in length
/// * `Err(InterpolationError::InvalidInterpolant)` - `xs` not strictly increasing
///
/// # Example
///
/// ```
/// use curvekit_core::math::interpolators::{cubic_spline, Boundary};
///
/// let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 8.0, 27.0];
/// let spline = cubic_spline(&xs, &ys, Boundary::Clamped(0.0), Boundary::Clamped(27.0)).unwrap();
///
/// // The clamped spline reproduces x³ exactly
/// assert!((spline.evaluate(1.5).unwrap() - 3.375).abs() < 1e-12);
/// ```
pub fn cubic_spline<T: Float>(
    xs: &[T],
    ys: &[T],
    left: Boundary<T>,
    right: Boundary<T>,
) -> Result<SplineCoefficients<T>, InterpolationError> {
    check_samples(xs, ys, 0)?;
    let n = xs.len();
    if n < 2 {
        return Ok(SplineCoefficients::degenerate(xs, ys));
    }

    let one = T::one();
    let two = lit::<T>(2.0);
    let three = lit::<T>(3.0);
    let six = lit::<T>(6.0);
    let half = lit::<T>(0.5);

    let mut y2 = vec![T::zero(); n];
    let mut u = vec![T::zero(); n];

    if let Boundary::Clamped(slope) = left {
        let h = xs[1] - xs[0];
        y2[0] = -half;
        u[0] = (three / h) * ((ys[1] - ys[0]) / h - slope);
    }

    // Forward elimination of the spline matrix
    for i in 1..n - 1 {
        let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
        let p = sig * y2[i - 1] + two;
        y2[i] = (sig - one) / p;
        let jump = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
            - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
        u[i] = (six * jump / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
    }

    let (qn, un) = match right {
        Boundary::Natural => (T::zero(), T::zero()),
        Boundary::Clamped(slope) => {
            let h = xs[n - 1] - xs[n - 2];
            (half, (three / h) * (slope - (ys[n - 1] - ys[n - 2]) / h))
        }
    };
    y2[n - 1] = (un - qn * u[n - 2]) / (qn * y2[n - 2] + one);

    // Back substitution
    for k in (0..n - 1).rev() {
        y2[k] = y2[k] * y2[k + 1] + u[k];
    }

    trace!(samples = n, "cubic spline second derivatives solved");
    Ok(from_second_derivatives(xs, ys, &y2))
}

/// Builds a natural cubic spline (zero curvature at both ends).
pub fn natural_spline<T: Float>(
    xs: &[T],
    ys: &[T],
) -> Result<SplineCoefficients<T>, InterpolationError> {
    cubic_spline(xs, ys, Boundary::Natural, Boundary::Natural)
}

/// Converts node second derivatives into per-segment coefficients.
fn from_second_derivatives<T: Float>(xs: &[T], ys: &[T], y2: &[T]) -> SplineCoefficients<T> {
    let n = xs.len();
    let two = lit::<T>(2.0);
    let six = lit::<T>(6.0);
    let half = lit::<T>(0.5);

    let mut a = Vec::with_capacity(n);
    let mut b = Vec::with_capacity(n);
    let mut c = Vec::with_capacity(n);
    for j in 0..n - 1 {
        let h = xs[j + 1] - xs[j];
        a.push((y2[j + 1] - y2[j]) / (six * h));
        b.push(y2[j] * half);
        c.push((ys[j + 1] - ys[j]) / h - h * (two * y2[j] + y2[j + 1]) / six);
    }

    let h = xs[n - 1] - xs[n - 2];
    a.push(T::zero());
    b.push(T::zero());
    c.push((ys[n - 1] - ys[n - 2]) / h + h * (y2[n - 2] + two * y2[n - 1]) / six);

    SplineCoefficients {
        x: xs.to_vec(),
        y: ys.to_vec(),
        a,
        b,
        c,
    }
}
