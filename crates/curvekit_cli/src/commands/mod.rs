//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands split into a
//! `run` that touches the filesystem and stdout, and an `execute` that works
//! on text or bytes and returns [`Table`]s.

pub mod approximate;
pub mod convert;
pub mod interp;
pub mod solve;
pub mod sort;
pub mod spline;

use curvekit_core::io::parse_columns;
use curvekit_core::vector::Vector;
use std::path::Path;

use crate::output::{Output, Table};
use crate::{CliError, Result};

/// Reads a whole input file, reporting a missing file distinctly.
pub fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Reads a whole binary input file.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read(path)?)
}

/// Parses two-column `x y` text.
pub fn parse_xy(text: &str) -> Result<(Vector, Vector)> {
    let mut columns = parse_columns(text, 2)?.into_iter();
    match (columns.next(), columns.next()) {
        (Some(xs), Some(ys)) => Ok((xs, ys)),
        _ => Err(CliError::InvalidArgument(
            "expected two columns of data".to_string(),
        )),
    }
}

/// Writes tables to stdout.
pub fn emit(output: &Output, tables: &[Table]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    output.write(&mut handle, tables)
}
