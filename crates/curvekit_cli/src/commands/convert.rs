//! Encode and decode command implementations
//!
//! Moves numeric data between whitespace-separated text and the versioned
//! binary layout. With a column count, text rows become a row-major grid.

use curvekit_core::io::{dump, dump_grid, load, load_grid, parse_values, Grid};
use curvekit_core::vector::Vector;
use std::path::Path;
use tracing::info;

use super::{emit, read_bytes, read_text};
use crate::output::{Output, Table};
use crate::{CliError, Result};

/// Run the encode command
pub fn encode(input: &Path, destination: &Path, columns: Option<usize>) -> Result<()> {
    info!("Encoding {} into {}", input.display(), destination.display());
    let bytes = encode_text(&read_text(input)?, columns)?;
    std::fs::write(destination, &bytes)?;
    info!("Wrote {} bytes", bytes.len());
    Ok(())
}

/// Run the decode command
pub fn decode(input: &Path, grid: bool, output: &Output) -> Result<()> {
    info!("Decoding {}", input.display());
    let tables = decode_bytes(&read_bytes(input)?, grid)?;
    emit(output, &tables)
}

pub fn encode_text(text: &str, columns: Option<usize>) -> Result<Vec<u8>> {
    let values = parse_values(text)?;
    match columns {
        None => Ok(dump(&values)?),
        Some(0) => Err(CliError::InvalidArgument(
            "--columns must be positive".to_string(),
        )),
        Some(cols) => {
            if values.len() % cols != 0 {
                return Err(CliError::InvalidArgument(format!(
                    "{} values do not fill rows of {}",
                    values.len(),
                    cols
                )));
            }
            let grid = Grid::new(values.len() / cols, cols, Vector::from(values))?;
            Ok(dump_grid(&grid)?)
        }
    }
}

pub fn decode_bytes(bytes: &[u8], grid: bool) -> Result<Vec<Table>> {
    if !grid {
        let values = load(bytes)?;
        info!("Decoded {} values", values.len());
        return Ok(vec![Table::new("values", &["value"], vec![values.to_vec()])]);
    }

    let grid = load_grid(bytes)?;
    info!("Decoded {}x{} grid", grid.rows(), grid.cols());
    let columns = (0..grid.cols())
        .map(|col| {
            (0..grid.rows())
                .filter_map(|row| grid.get(row, col))
                .collect()
        })
        .collect();
    Ok(vec![Table {
        name: "grid".to_string(),
        headers: (0..grid.cols()).map(|col| format!("c{}", col)).collect(),
        columns,
    }])
}
