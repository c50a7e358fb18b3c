//! Adaptive spline approximation of dense, noisy data.
//!
//! [`AdaptiveApproximator`] picks a bounded set of anchor samples and builds a
//! clamped cubic spline through their smoothed values. Anchors are added one
//! at a time where the current spline fits worst, as measured by the
//! configured [`SegmentMetric`].

mod adaptive;
mod config;

pub use adaptive::{AdaptiveApproximator, Approximation};
pub use config::{ApproximationConfig, SegmentMetric};
