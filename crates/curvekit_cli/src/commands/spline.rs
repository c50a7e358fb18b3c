//! Spline command implementation
//!
//! Fits a natural, clamped or Steffen spline through `x y` samples and
//! evaluates it together with its slope.

use clap::ValueEnum;
use curvekit_core::math::interpolators::{Boundary, Interpolator, SplineCache, SplineKind};
use curvekit_core::math::sorting::joint_sort_vectors;
use curvekit_core::types::InterpolationError;
use std::path::Path;
use tracing::{debug, info};

use super::{emit, parse_xy, read_text};
use crate::output::{Output, Table};
use crate::{CliError, Result};

/// Spline family selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SplineChoice {
    /// Cubic with zero second derivative at both ends
    #[default]
    Natural,
    /// Cubic with prescribed end slopes
    Clamped,
    /// Monotone cubic that never overshoots the data
    Steffen,
}

/// Parameters of one spline evaluation
#[derive(Debug, Clone, Default)]
pub struct SplineRequest {
    pub kind: SplineChoice,
    pub left_slope: Option<f64>,
    pub right_slope: Option<f64>,
    /// Explicit query points
    pub at: Vec<f64>,
    /// Number of evenly spaced query points across the domain
    pub samples: Option<usize>,
}

impl SplineRequest {
    fn spline_kind(&self) -> Result<SplineKind> {
        let has_slopes = self.left_slope.is_some() || self.right_slope.is_some();
        match self.kind {
            SplineChoice::Clamped if !has_slopes => Err(CliError::InvalidArgument(
                "clamped splines need --left-slope and/or --right-slope".to_string(),
            )),
            SplineChoice::Clamped => {
                // an end without a slope stays natural
                let boundary = |slope: Option<f64>| slope.map_or(Boundary::Natural, Boundary::Clamped);
                Ok(SplineKind::Cubic {
                    left: boundary(self.left_slope),
                    right: boundary(self.right_slope),
                })
            }
            _ if has_slopes => Err(CliError::InvalidArgument(
                "end slopes only apply to --kind clamped".to_string(),
            )),
            SplineChoice::Natural => Ok(SplineKind::NATURAL),
            SplineChoice::Steffen => Ok(SplineKind::Steffen),
        }
    }

    fn query_points(&self, knots: &[f64], (lo, hi): (f64, f64)) -> Result<Vec<f64>> {
        if !self.at.is_empty() {
            return Ok(self.at.clone());
        }
        match self.samples {
            None => Ok(knots.to_vec()),
            Some(0) => Err(CliError::InvalidArgument(
                "--samples must be positive".to_string(),
            )),
            Some(1) => Ok(vec![lo]),
            Some(n) => {
                let step = (hi - lo) / (n - 1) as f64;
                Ok((0..n).map(|i| lo + step * i as f64).collect())
            }
        }
    }
}

/// Run the spline command
pub fn run(input: &Path, request: &SplineRequest, output: &Output) -> Result<()> {
    info!("Fitting {:?} spline to {}", request.kind, input.display());
    let tables = execute(&read_text(input)?, request)?;
    emit(output, &tables)
}

pub fn execute(text: &str, request: &SplineRequest) -> Result<Vec<Table>> {
    let kind = request.spline_kind()?;
    let (mut xs, mut ys) = parse_xy(text)?;
    joint_sort_vectors(&mut xs, &mut ys)?;

    let mut cache = SplineCache::new(kind);
    let spline = cache.coefficients(&mut xs, &mut ys)?;
    if spline.is_empty() {
        return Err(InterpolationError::InsufficientData { got: 0, need: 1 }.into());
    }
    debug!(segments = spline.len().saturating_sub(1), "spline built");

    let queries = request.query_points(&spline.x, spline.domain())?;
    let values = spline.evaluate_many(&queries)?;
    let slopes = queries
        .iter()
        .map(|&x| spline.slope_at(x))
        .collect::<std::result::Result<Vec<f64>, _>>()?;

    Ok(vec![Table::new(
        "spline",
        &["x", "y", "slope"],
        vec![queries, values, slopes],
    )])
}
