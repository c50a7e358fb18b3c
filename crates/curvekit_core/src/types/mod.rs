//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for vectors, solvers, interpolation,
//!   approximation, sorting and data formats
//!
//! # Re-exports
//!
//! For convenience, every error type is re-exported at this module level:
//! [`VectorError`], [`SolverError`], [`InterpolationError`],
//! [`ApproximationError`], [`SortError`], [`FormatError`].

pub mod error;

// Re-export commonly used types at module level
pub use error::{
    ApproximationError, FormatError, InterpolationError, SolverError, SortError, VectorError,
};
