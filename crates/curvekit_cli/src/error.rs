//! CLI error type
//!
//! Wraps the library errors so every command returns a single [`Result`].

use curvekit_core::types::error::{
    ApproximationError, FormatError, InterpolationError, SolverError, SortError, VectorError,
};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `curvekit` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data error: {0}")]
    Format(#[from] FormatError),

    #[error("Vector error: {0}")]
    Vector(#[from] VectorError),

    #[error("Sort error: {0}")]
    Sort(#[from] SortError),

    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    #[error("Approximation error: {0}")]
    Approximation(#[from] ApproximationError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_errors_convert() {
        let err: CliError = FormatError::CorruptData("truncated".to_string()).into();
        assert!(matches!(err, CliError::Format(_)));
        assert!(err.to_string().starts_with("Data error"));

        let err: CliError = SolverError::DegenerateSystem { row: 2 }.into();
        assert!(matches!(err, CliError::Solver(_)));
    }

    #[test]
    fn test_file_not_found_display() {
        let err = CliError::FileNotFound("curve.txt".to_string());
        assert_eq!(err.to_string(), "File not found: curve.txt");
    }
}
