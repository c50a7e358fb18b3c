//! Local smoothing primitives used by the adaptive approximator.
//!
//! - [`window_average`]: Gaussian-weighted average of the samples around an index
//! - [`LinearFit`]: ordinary least-squares straight line
//!
//! All functions use generic type parameter `T: num_traits::Float` for f32/f64 support.

use crate::math::lit;
use num_traits::Float;

/// Gaussian-weighted average of `ys` centred on `index`.
///
/// # Mathematical Definition
/// ```text
/// h = window / 2
/// w(k) = exp(-2 (k / h)²),   k = -h..=h
/// avg = Σ w(k)·ys[index + k] / Σ w(k)
/// ```
///
/// Neighbours that fall outside `ys` are dropped, so the kernel is truncated
/// (and renormalised) at either end. A window below 2 returns `ys[index]`.
///
/// # Arguments
/// * `ys` - Samples
/// * `index` - Centre sample
/// * `window` - Kernel width in samples
///
/// # Returns
/// The smoothed value, or `None` if `index` is out of range
///
/// # Examples
/// ```
/// use curvekit_core::math::smoothing::window_average;
///
/// let ys = [1.0, 1.0, 4.0, 1.0, 1.0];
/// let avg = window_average(&ys, 2, 4).unwrap();
/// assert!(avg > 1.0 && avg < 4.0);
/// assert_eq!(window_average(&ys, 2, 0), Some(4.0));
/// ```
pub fn window_average<T: Float>(ys: &[T], index: usize, window: usize) -> Option<T> {
    let centre = *ys.get(index)?;
    let half = window / 2;
    if half == 0 {
        return Some(centre);
    }

    let h = lit::<T>(half as f64);
    let minus_two = lit::<T>(-2.0);
    let lo = index.saturating_sub(half);
    let hi = (index + half).min(ys.len() - 1);

    let mut weighted = T::zero();
    let mut total = T::zero();
    for (i, &y) in ys.iter().enumerate().take(hi + 1).skip(lo) {
        let k = lit::<T>(i as f64 - index as f64) / h;
        let w = (minus_two * k * k).exp();
        weighted = weighted + w * y;
        total = total + w;
    }
    Some(weighted / total)
}

/// Least-squares straight line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Gradient of the fitted line
    pub slope: T,
    /// Value of the fitted line at `x = 0`
    pub intercept: T,
}

impl<T: Float> LinearFit<T> {
    /// Fits a line through `(xs[i], ys[i])`.
    ///
    /// Uses the centred formulation, which stays accurate when the
    /// abscissae are large compared to their spread.
    ///
    /// # Returns
    /// `None` for fewer than two points, mismatched lengths, or when all
    /// abscissae coincide
    ///
    /// # Examples
    /// ```
    /// use curvekit_core::math::smoothing::LinearFit;
    ///
    /// let fit = LinearFit::<f64>::fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
    /// assert!((fit.slope - 2.0).abs() < 1e-12);
    /// assert!((fit.intercept - 1.0).abs() < 1e-12);
    /// ```
    pub fn fit(xs: &[T], ys: &[T]) -> Option<Self> {
        if xs.len() != ys.len() || xs.len() < 2 {
            return None;
        }
        let n = lit::<T>(xs.len() as f64);
        let mean_x = xs.iter().fold(T::zero(), |acc, &x| acc + x) / n;
        let mean_y = ys.iter().fold(T::zero(), |acc, &y| acc + y) / n;

        let (sxx, sxy) = xs
            .iter()
            .zip(ys.iter())
            .fold((T::zero(), T::zero()), |(sxx, sxy), (&x, &y)| {
                let dx = x - mean_x;
                (sxx + dx * dx, sxy + dx * (y - mean_y))
            });
        if sxx == T::zero() {
            return None;
        }

        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    /// Value of the line at `x`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}
