//! Approximator configuration types.

use crate::types::ApproximationError;
use std::fmt;
use std::str::FromStr;

/// How the residuals inside one segment are aggregated into its deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SegmentMetric {
    /// `Σ r²`: every residual counts regardless of sign.
    #[default]
    SumOfSquares,
    /// `(Σ r)²`: residuals of opposite sign cancel, favouring segments that
    /// are biased to one side of the data.
    SquaredSignedSum,
}

impl SegmentMetric {
    /// Aggregates residuals into one deviation.
    pub fn aggregate<I: IntoIterator<Item = f64>>(&self, residuals: I) -> f64 {
        match self {
            SegmentMetric::SumOfSquares => residuals.into_iter().map(|r| r * r).sum(),
            SegmentMetric::SquaredSignedSum => {
                let sum: f64 = residuals.into_iter().sum();
                sum * sum
            }
        }
    }

    /// Canonical name as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentMetric::SumOfSquares => "sum_of_squares",
            SegmentMetric::SquaredSignedSum => "squared_signed_sum",
        }
    }
}

impl fmt::Display for SegmentMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentMetric {
    type Err = ApproximationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "sum_of_squares" | "squares" => Ok(SegmentMetric::SumOfSquares),
            "squared_signed_sum" | "signed" => Ok(SegmentMetric::SquaredSignedSum),
            _ => Err(ApproximationError::InvalidParameter(format!(
                "unknown segment metric '{}'",
                s
            ))),
        }
    }
}

/// Settings of the adaptive spline approximator.
///
/// # Example
///
/// ```
/// use curvekit_core::math::approximation::{ApproximationConfig, SegmentMetric};
///
/// // Use default configuration
/// let config = ApproximationConfig::default();
/// assert_eq!(config.max_anchors, 20);
/// assert_eq!(config.window, 5);
///
/// // Custom configuration
/// let custom = ApproximationConfig::new(12, 3)
///     .with_metric(SegmentMetric::SquaredSignedSum)
///     .with_curve(true);
/// assert_eq!(custom.min_samples(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ApproximationConfig {
    /// Upper bound on the number of anchors, at least 3.
    pub max_anchors: usize,

    /// Smoothing kernel width in samples.
    ///
    /// Also the number of intervals the end-slope regressions span.
    pub window: usize,

    /// Segment deviation used to pick the next anchor.
    pub metric: SegmentMetric,

    /// Whether to evaluate the final spline at every input sample.
    pub evaluate_curve: bool,
}

impl Default for ApproximationConfig {
    /// Default values:
    /// - `max_anchors`: 20
    /// - `window`: 5
    /// - `metric`: [`SegmentMetric::SumOfSquares`]
    /// - `evaluate_curve`: false
    fn default() -> Self {
        Self {
            max_anchors: 20,
            window: 5,
            metric: SegmentMetric::default(),
            evaluate_curve: false,
        }
    }
}

impl ApproximationConfig {
    /// Creates a configuration with the default metric and no dense curve.
    pub fn new(max_anchors: usize, window: usize) -> Self {
        Self {
            max_anchors,
            window,
            ..Self::default()
        }
    }

    /// Sets the segment metric.
    pub fn with_metric(mut self, metric: SegmentMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Requests the dense curve in the result.
    pub fn with_curve(mut self, evaluate_curve: bool) -> Self {
        self.evaluate_curve = evaluate_curve;
        self
    }

    /// Smallest sample count these settings accept.
    pub fn min_samples(&self) -> usize {
        (self.window + 1).max(3)
    }

    /// Rejects settings the approximator cannot run with.
    ///
    /// # Errors
    ///
    /// [`ApproximationError::InvalidParameter`] if `max_anchors < 3`.
    pub fn validate(&self) -> Result<(), ApproximationError> {
        if self.max_anchors < 3 {
            return Err(ApproximationError::InvalidParameter(format!(
                "max_anchors must be at least 3, got {}",
                self.max_anchors
            )));
        }
        Ok(())
    }
}
