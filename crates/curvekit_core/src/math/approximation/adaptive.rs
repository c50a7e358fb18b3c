//! Residual-driven anchor selection.

use super::ApproximationConfig;
use crate::math::interpolators::{check_samples, cubic_spline, Boundary, SplineCoefficients};
use crate::math::smoothing::{window_average, LinearFit};
use crate::types::{ApproximationError, InterpolationError};
use crate::vector::Vector;
use tracing::{debug, trace};

/// Result of an adaptive approximation.
#[derive(Debug, Clone)]
pub struct Approximation {
    /// Abscissae of the selected anchors, ascending
    pub anchor_x: Vector,
    /// Smoothed ordinates at the anchors
    pub anchor_y: Vector,
    /// Clamped spline through the anchors
    pub coefficients: SplineCoefficients<f64>,
    /// The spline at every input abscissa, when requested
    pub curve: Option<Vector>,
}

impl Approximation {
    /// Number of anchors.
    pub fn anchor_count(&self) -> usize {
        self.anchor_x.len()
    }
}

/// One chosen sample: its index in the input and its smoothed ordinate.
#[derive(Debug, Clone, Copy)]
struct Anchor {
    index: usize,
    y: f64,
}

/// Reduces dense, noisy samples to a small set of spline anchors.
///
/// Starting from the first, middle and last sample, the approximator
/// repeatedly fits a clamped cubic spline through the current anchors and
/// adds the worst-fitted sample of the segment with the largest deviation,
/// until `max_anchors` is reached or no segment has samples left between its
/// anchors. Anchor ordinates are window-averaged samples; the spline's end
/// slopes come from least-squares lines over `window + 1` samples at each
/// end.
///
/// # Example
///
/// ```
/// use curvekit_core::math::approximation::{AdaptiveApproximator, ApproximationConfig};
///
/// let xs: Vec<f64> = (0..100).map(|i| i as f64 * 0.1).collect();
/// let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
///
/// let approximator = AdaptiveApproximator::new(ApproximationConfig::new(10, 3)).unwrap();
/// let result = approximator.approximate(&xs, &ys).unwrap();
///
/// assert_eq!(result.anchor_count(), 10);
/// assert!((result.coefficients.evaluate(5.0).unwrap() - 5.0f64.sin()).abs() < 0.05);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdaptiveApproximator {
    config: ApproximationConfig,
}

impl AdaptiveApproximator {
    /// Creates an approximator after validating its settings.
    ///
    /// # Errors
    ///
    /// [`ApproximationError::InvalidParameter`] if `max_anchors < 3`.
    pub fn new(config: ApproximationConfig) -> Result<Self, ApproximationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active settings.
    pub fn config(&self) -> &ApproximationConfig {
        &self.config
    }

    /// Approximates samples held in two [`Vector`]s.
    pub fn approximate_vectors(
        &self,
        xs: &Vector,
        ys: &Vector,
    ) -> Result<Approximation, ApproximationError> {
        self.approximate(xs.as_slice(), ys.as_slice())
    }

    /// Approximates `(xs[i], ys[i])`.
    ///
    /// # Errors
    ///
    /// * [`ApproximationError::LengthMismatch`] - `xs` and `ys` differ in length
    /// * [`ApproximationError::InsufficientData`] - fewer than
    ///   [`min_samples`](ApproximationConfig::min_samples) samples
    /// * [`ApproximationError::Interpolation`] - `xs` not strictly increasing
    pub fn approximate(&self, xs: &[f64], ys: &[f64]) -> Result<Approximation, ApproximationError> {
        if xs.len() != ys.len() {
            return Err(ApproximationError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        let n = xs.len();
        let need = self.config.min_samples();
        if n < need {
            return Err(ApproximationError::InsufficientData { got: n, need });
        }
        check_samples(xs, ys, need)?;

        let window = self.config.window;
        let (left, right) = end_slopes(xs, ys, window)?;
        debug!(
            samples = n,
            max_anchors = self.config.max_anchors,
            window,
            metric = %self.config.metric,
            left_slope = left,
            right_slope = right,
            "starting adaptive approximation"
        );

        let smoothed = |index: usize| Anchor {
            index,
            y: window_average(ys, index, window).unwrap_or(ys[index]),
        };
        let mut anchors = vec![smoothed(0), smoothed(n / 2), smoothed(n - 1)];

        loop {
            let anchor_x: Vec<f64> = anchors.iter().map(|a| xs[a.index]).collect();
            let anchor_y: Vec<f64> = anchors.iter().map(|a| a.y).collect();
            let spline = cubic_spline(
                &anchor_x,
                &anchor_y,
                Boundary::Clamped(left),
                Boundary::Clamped(right),
            )?;

            if anchors.len() >= self.config.max_anchors {
                return self.finish(xs, anchor_x, anchor_y, spline);
            }

            let Some((deviation, worst)) = self.worst_segment(xs, ys, &anchors, &spline)? else {
                debug!(anchors = anchors.len(), "no segment has interior samples, stopping");
                return self.finish(xs, anchor_x, anchor_y, spline);
            };

            let position = anchors.partition_point(|a| a.index < worst);
            anchors.insert(position, smoothed(worst));
            trace!(
                anchors = anchors.len(),
                sample = worst,
                deviation,
                "anchor inserted"
            );
        }
    }

    /// Deviation of the worst segment and the index of its worst sample.
    fn worst_segment(
        &self,
        xs: &[f64],
        ys: &[f64],
        anchors: &[Anchor],
        spline: &SplineCoefficients<f64>,
    ) -> Result<Option<(f64, usize)>, InterpolationError> {
        let mut best: Option<(f64, usize)> = None;
        for pair in anchors.windows(2) {
            let (first, last) = (pair[0].index + 1, pair[1].index);
            if first >= last {
                continue;
            }
            let fitted = spline.evaluate_many(&xs[first..last])?;
            let residuals: Vec<f64> = ys[first..last]
                .iter()
                .zip(fitted.iter())
                .map(|(y, f)| y - f)
                .collect();

            let mut worst = first;
            let mut worst_abs = f64::NEG_INFINITY;
            for (offset, r) in residuals.iter().enumerate() {
                if r.abs() > worst_abs {
                    worst_abs = r.abs();
                    worst = first + offset;
                }
            }

            let deviation = self.config.metric.aggregate(residuals.iter().copied());
            if best.map_or(true, |(current, _)| deviation > current) {
                best = Some((deviation, worst));
            }
        }
        Ok(best)
    }

    fn finish(
        &self,
        xs: &[f64],
        anchor_x: Vec<f64>,
        anchor_y: Vec<f64>,
        coefficients: SplineCoefficients<f64>,
    ) -> Result<Approximation, ApproximationError> {
        let curve = if self.config.evaluate_curve {
            Some(Vector::from(coefficients.evaluate_many(xs)?))
        } else {
            None
        };
        debug!(anchors = anchor_x.len(), "adaptive approximation finished");
        Ok(Approximation {
            anchor_x: Vector::from(anchor_x),
            anchor_y: Vector::from(anchor_y),
            coefficients,
            curve,
        })
    }
}

/// Least-squares slopes over `window + 1` samples at each end.
fn end_slopes(xs: &[f64], ys: &[f64], window: usize) -> Result<(f64, f64), InterpolationError> {
    let n = xs.len();
    let count = (window + 1).clamp(2, n);
    let left = LinearFit::fit(&xs[..count], &ys[..count]);
    let right = LinearFit::fit(&xs[n - count..], &ys[n - count..]);
    match (left, right) {
        (Some(l), Some(r)) => Ok((l.slope, r.slope)),
        _ => Err(InterpolationError::InvalidInterpolant(
            "end regression has no spread in x".to_string(),
        )),
    }
}
