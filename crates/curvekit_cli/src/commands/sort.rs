//! Sort command implementation
//!
//! Orders `x y` pairs by abscissa, keeping every ordinate with its abscissa.

use curvekit_core::math::sorting::joint_sort_vectors;
use std::path::Path;
use tracing::info;

use super::{emit, parse_xy, read_text};
use crate::output::{Output, Table};
use crate::Result;

/// Run the sort command
pub fn run(input: &Path, output: &Output) -> Result<()> {
    info!("Sorting {}", input.display());
    let tables = execute(&read_text(input)?)?;
    emit(output, &tables)
}

pub fn execute(text: &str) -> Result<Vec<Table>> {
    let (mut xs, mut ys) = parse_xy(text)?;
    joint_sort_vectors(&mut xs, &mut ys)?;
    info!("Sorted {} pairs", xs.len());
    Ok(vec![Table::new(
        "sorted",
        &["x", "y"],
        vec![xs.to_vec(), ys.to_vec()],
    )])
}
