//! Steffen's monotonicity-preserving cubic interpolation.

use super::coefficients::check_samples;
use super::SplineCoefficients;
use crate::math::lit;
use crate::types::InterpolationError;
use num_traits::Float;

/// Builds a C¹ piecewise cubic that never overshoots its data.
///
/// Node slopes are limited so that each segment stays between its end
/// ordinates: the interpolant is monotone wherever the data are, and a local
/// extremum of the data is a flat point of the curve.
///
/// # Arguments
///
/// * `xs` - Strictly increasing abscissae
/// * `ys` - Ordinates, same length as `xs`
///
/// # Returns
///
/// * `Ok(SplineCoefficients)` - One entry per sample
/// * `Err(InterpolationError::LengthMismatch)` - `xs` and `ys` differ in length
/// * `Err(InterpolationError::InvalidInterpolant)` - `xs` not strictly increasing
///
/// # Example
///
/// ```
/// use curvekit_core::math::interpolators::steffen_spline;
///
/// let s = steffen_spline(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 1.0, 1.0]).unwrap();
/// // No overshoot above the plateau
/// assert!(s.evaluate(1.5).unwrap() <= 1.0);
/// ```
pub fn steffen_spline<T: Float>(
    xs: &[T],
    ys: &[T],
) -> Result<SplineCoefficients<T>, InterpolationError> {
    check_samples(xs, ys, 0)?;
    let n = xs.len();
    if n < 2 {
        return Ok(SplineCoefficients::degenerate(xs, ys));
    }

    let h: Vec<T> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let s: Vec<T> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();
    let slopes = node_slopes(&h, &s);

    let two = lit::<T>(2.0);
    let three = lit::<T>(3.0);

    let mut a = Vec::with_capacity(n);
    let mut b = Vec::with_capacity(n);
    let mut c = Vec::with_capacity(n);
    for i in 0..n - 1 {
        a.push((slopes[i] + slopes[i + 1] - two * s[i]) / (h[i] * h[i]));
        b.push((three * s[i] - two * slopes[i] - slopes[i + 1]) / h[i]);
        c.push(slopes[i]);
    }
    a.push(T::zero());
    b.push(T::zero());
    c.push(slopes[n - 1]);

    Ok(SplineCoefficients {
        x: xs.to_vec(),
        y: ys.to_vec(),
        a,
        b,
        c,
    })
}

/// Limited first derivatives at every node.
fn node_slopes<T: Float>(h: &[T], s: &[T]) -> Vec<T> {
    let n = h.len() + 1;
    if n == 2 {
        return vec![s[0], s[0]];
    }

    let half = lit::<T>(0.5);
    let mut slopes = Vec::with_capacity(n);

    slopes.push(end_slope(h[0], h[1], s[0], s[1]));
    for i in 1..n - 1 {
        let p = (s[i - 1] * h[i] + s[i] * h[i - 1]) / (h[i - 1] + h[i]);
        let bound = s[i - 1].abs().min(s[i].abs()).min(half * p.abs());
        slopes.push((sign(s[i - 1]) + sign(s[i])) * bound);
    }
    let m = n - 2;
    slopes.push(end_slope(h[m], h[m - 1], s[m], s[m - 1]));

    slopes
}

/// Three-point end slope, limited to keep the end segment monotone.
///
/// `h0`/`s0` belong to the end segment, `h1`/`s1` to its neighbour.
fn end_slope<T: Float>(h0: T, h1: T, s0: T, s1: T) -> T {
    let two = lit::<T>(2.0);
    let w = h0 / (h0 + h1);
    let p = s0 * (T::one() + w) - s1 * w;
    if p * s0 <= T::zero() {
        T::zero()
    } else if p.abs() > two * s0.abs() {
        two * s0
    } else {
        p
    }
}

/// Sign with `sign(0) = 0`.
#[inline]
fn sign<T: Float>(v: T) -> T {
    if v > T::zero() {
        T::one()
    } else if v < T::zero() {
        -T::one()
    } else {
        T::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dense_grid(lo: f64, hi: f64, n: usize) -> impl Iterator<Item = f64> {
        (0..=n).map(move |i| lo + (hi - lo) * i as f64 / n as f64)
    }

    #[test]
    fn test_plateau_no_overshoot() {
        let s = steffen_spline(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 1.0, 1.0]).unwrap();
        for x in dense_grid(0.0, 3.0, 300) {
            let y = s.evaluate(x).unwrap();
            assert!((0.0..=1.0 + 1e-12).contains(&y), "y({}) = {}", x, y);
        }
        // Flat from the first plateau node onwards
        assert_relative_eq!(s.evaluate(2.5).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_monotone_data_gives_monotone_curve() {
        let xs = [0.0, 0.5, 1.0, 3.0, 3.2, 5.0];
        let ys = [0.0, 0.1, 2.0, 2.1, 6.0, 6.5];
        let s = steffen_spline(&xs, &ys).unwrap();
        let mut prev = f64::NEG_INFINITY;
        for x in dense_grid(0.0, 5.0, 1000) {
            let y = s.evaluate(x).unwrap();
            assert!(y >= prev - 1e-12, "not monotone at {}", x);
            prev = y;
        }
    }

    #[test]
    fn test_segment_bounded_by_end_values() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [1.0, -2.0, 3.0, 0.0, 0.5];
        let s = steffen_spline(&xs, &ys).unwrap();
        for j in 0..xs.len() - 1 {
            let lo = ys[j].min(ys[j + 1]);
            let hi = ys[j].max(ys[j + 1]);
            for x in dense_grid(xs[j], xs[j + 1], 100) {
                let y = s.evaluate(x).unwrap();
                assert!(y >= lo - 1e-12 && y <= hi + 1e-12, "y({}) = {} outside [{}, {}]", x, y, lo, hi);
            }
        }
    }

    #[test]
    fn test_extremum_is_flat() {
        let s = steffen_spline(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        assert_eq!(s.c[1], 0.0);
    }

    #[test]
    fn test_exact_at_nodes() {
        let xs = [0.0, 0.4, 1.1, 2.0];
        let ys = [2.0, -1.0, 0.5, 0.7];
        let s = steffen_spline(&xs, &ys).unwrap();
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_eq!(s.evaluate(x).unwrap(), y);
        }
    }

    #[test]
    fn test_two_points_is_linear() {
        let s = steffen_spline(&[1.0, 3.0], &[2.0, 6.0]).unwrap();
        assert_relative_eq!(s.evaluate(2.0).unwrap(), 4.0, epsilon = 1e-12);
        assert_eq!(s.c, vec![2.0, 2.0]);
    }

    #[test]
    fn test_linear_data_reproduced() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, 3.0, 5.0, 7.0];
        let s = steffen_spline(&xs, &ys).unwrap();
        for x in [0.25, 1.5, 2.75] {
            assert_relative_eq!(s.evaluate(x).unwrap(), 1.0 + 2.0 * x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_end_slope_limits() {
        // Opposite sign to the end secant → flat
        assert_eq!(end_slope(1.0, 1.0, 1.0, 5.0), 0.0);
        // Above twice the secant → capped
        assert_eq!(end_slope(1.0, 1.0, 1.0, -5.0), 2.0);
        // Within limits → unchanged
        assert_relative_eq!(end_slope(1.0, 1.0, 1.0, 0.0), 1.5);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(3.0), 1.0);
        assert_eq!(sign(-0.1), -1.0);
        assert_eq!(sign(0.0), 0.0);
    }
}
