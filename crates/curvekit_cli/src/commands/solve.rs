//! Solve command implementation
//!
//! Reads rows of `a b c r` and solves the tridiagonal system they describe.
//! `a` on the first row and `c` on the last row are ignored.

use curvekit_core::io::parse_columns;
use curvekit_core::math::solvers::TridiagonalSolver;
use std::path::Path;
use tracing::info;

use super::{emit, read_text};
use crate::output::{Output, Table};
use crate::{CliError, Result};

/// Run the solve command
pub fn run(input: &Path, output: &Output) -> Result<()> {
    info!("Solving tridiagonal system from {}", input.display());
    let tables = execute(&read_text(input)?)?;
    emit(output, &tables)
}

pub fn execute(text: &str) -> Result<Vec<Table>> {
    let columns = parse_columns(text, 4)?;
    let [a, b, c, r] = columns.as_slice() else {
        return Err(CliError::InvalidArgument(
            "expected four columns: a b c r".to_string(),
        ));
    };
    let mut solver = TridiagonalSolver::new();
    let u = solver.solve(a.as_slice(), b.as_slice(), c.as_slice(), r.as_slice())?;
    info!("Solved {} unknowns", u.len());
    Ok(vec![Table::new("solution", &["u"], vec![u])])
}
