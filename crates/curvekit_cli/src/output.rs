//! Result rendering
//!
//! Commands produce named tables of columns; [`Output`] renders them as
//! whitespace-separated text (re-readable by the ingestion commands, since
//! header lines start with `#`) or as JSON.

use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

use crate::Result;

/// Rendering of command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One row per line, values in scientific notation
    #[default]
    Text,
    /// Pretty-printed JSON array of tables
    Json,
}

/// Named set of equally-meaningful columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub name: String,
    pub headers: Vec<String>,
    pub columns: Vec<Vec<f64>>,
}

impl Table {
    pub fn new(name: &str, headers: &[&str], columns: Vec<Vec<f64>>) -> Self {
        Self {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            columns,
        }
    }

    /// Longest column length.
    pub fn rows(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Writes tables in the configured format
#[derive(Debug, Clone, Copy)]
pub struct Output {
    format: OutputFormat,
    precision: usize,
}

impl Output {
    pub fn new(format: OutputFormat, precision: usize) -> Self {
        Self { format, precision }
    }

    pub fn write<W: Write>(&self, writer: &mut W, tables: &[Table]) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, tables)?;
                writeln!(writer)?;
            }
            OutputFormat::Text => {
                for (i, table) in tables.iter().enumerate() {
                    if tables.len() > 1 {
                        if i > 0 {
                            writeln!(writer)?;
                        }
                        writeln!(writer, "# {}", table.name)?;
                    }
                    writeln!(writer, "# {}", table.headers.join(" "))?;
                    for row in 0..table.rows() {
                        let cells: Vec<String> = table
                            .columns
                            .iter()
                            .map(|column| match column.get(row) {
                                Some(value) => self.format_value(*value),
                                None => "-".to_string(),
                            })
                            .collect();
                        writeln!(writer, "{}", cells.join(" "))?;
                    }
                }
            }
        }
        Ok(())
    }

    fn format_value(&self, value: f64) -> String {
        format!("{:.*e}", self.precision, value)
    }
}
