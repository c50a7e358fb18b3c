//! Interp command implementation
//!
//! Piecewise-linear interpolation of `x y` samples at query points.

use curvekit_core::math::interpolators::{Interpolator, LinearInterpolator};
use std::path::Path;
use tracing::info;

use super::{emit, parse_xy, read_text};
use crate::output::{Output, Table};
use crate::{CliError, Result};

/// Run the interp command
pub fn run(input: &Path, at: &[f64], output: &Output) -> Result<()> {
    info!("Interpolating {} at {} points", input.display(), at.len());
    let tables = execute(&read_text(input)?, at)?;
    emit(output, &tables)
}

pub fn execute(text: &str, at: &[f64]) -> Result<Vec<Table>> {
    if at.is_empty() {
        return Err(CliError::InvalidArgument(
            "at least one query point is required".to_string(),
        ));
    }
    let (xs, ys) = parse_xy(text)?;
    let interpolator = LinearInterpolator::new(xs.as_slice(), ys.as_slice())?;
    let values = at
        .iter()
        .map(|&x| interpolator.interpolate(x))
        .collect::<std::result::Result<Vec<f64>, _>>()?;
    Ok(vec![Table::new("linear", &["x", "y"], vec![at.to_vec(), values])])
}
