//! Error types for structured error handling.
//!
//! This module provides:
//! - `VectorError`: Errors from vector indexing, growth and element-wise operations
//! - `SolverError`: Errors from the tridiagonal solver
//! - `InterpolationError`: Errors from spline construction and evaluation
//! - `ApproximationError`: Errors from the adaptive spline approximator
//! - `FormatError`: Errors from binary decoding and numeric text ingestion
//! - `SortError`: Errors from the joint sort

use thiserror::Error;

/// Vector-related errors.
///
/// Out-of-range *reads* never produce an error; they return `None`.
///
/// # Examples
/// ```
/// use curvekit_core::types::VectorError;
///
/// let err = VectorError::IndexOutOfRange { index: -5, len: 3 };
/// assert!(format!("{}", err).contains("-5"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Negative index reaching before the first element.
    #[error("Index {index} out of range for vector of length {len}")]
    IndexOutOfRange {
        /// The requested index
        index: isize,
        /// Length of the vector at the time of the write
        len: usize,
    },

    /// Two vectors expected to have equal length differ.
    #[error("Length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Length of the vector being written
        expected: usize,
        /// Length of the operand
        got: usize,
    },

    /// Storage growth could not be satisfied.
    #[error("Failed to allocate storage for {requested} values")]
    AllocationFailure {
        /// Number of values requested
        requested: usize,
    },
}

/// Tridiagonal solver errors.
///
/// # Examples
/// ```
/// use curvekit_core::types::SolverError;
///
/// let err = SolverError::DegenerateSystem { row: 2 };
/// assert!(format!("{}", err).contains("row 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Input diagonals and right-hand side differ in length.
    #[error("Length mismatch: {name} has length {got}, expected {expected}")]
    LengthMismatch {
        /// Name of the offending input
        name: &'static str,
        /// Expected length (length of the right-hand side)
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// A pivot computed during elimination is exactly zero.
    #[error("Degenerate system: zero pivot at row {row}")]
    DegenerateSystem {
        /// Row at which elimination broke down
        row: usize,
    },
}

/// Interpolation-related errors.
///
/// # Variants
/// - `InvalidInterpolant`: Coefficient arrays are malformed
/// - `LengthMismatch`: Sample arrays have different lengths
/// - `InsufficientData`: Not enough samples for the requested operation
///
/// # Examples
/// ```
/// use curvekit_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { got: 0, need: 1 };
/// assert!(format!("{}", err).contains("need at least 1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Malformed coefficient arrays.
    #[error("Invalid interpolant: {0}")]
    InvalidInterpolant(String),

    /// Sample arrays have different lengths.
    #[error("xs and ys must have same length: got {xs} and {ys}")]
    LengthMismatch {
        /// Number of x values
        xs: usize,
        /// Number of y values
        ys: usize,
    },

    /// Insufficient data points.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },
}

/// Adaptive approximation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApproximationError {
    /// Fewer samples than the smoothing window requires.
    #[error("Insufficient samples: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of samples provided
        got: usize,
        /// Minimum number of samples required
        need: usize,
    },

    /// Invalid configuration value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Sample arrays have different lengths.
    #[error("xs and ys must have same length: got {xs} and {ys}")]
    LengthMismatch {
        /// Number of x values
        xs: usize,
        /// Number of y values
        ys: usize,
    },

    /// Spline construction failed.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

/// Joint sort errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Key and value arrays differ in length.
    #[error("Cannot jointly sort arrays of length {keys} and {values}")]
    LengthMismatch {
        /// Number of keys
        keys: usize,
        /// Number of values
        values: usize,
    },

    /// Obtaining writable storage failed.
    #[error(transparent)]
    Vector(#[from] VectorError),
}

/// Binary decoding and text ingestion errors.
///
/// # Examples
/// ```
/// use curvekit_core::types::FormatError;
///
/// let err = FormatError::UnreadableValue { token: "1.2.3".to_string(), position: 4 };
/// assert_eq!(format!("{}", err), "Unreadable value '1.2.3' at token 4");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Truncated or malformed binary stream.
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    /// A numeric text token failed to parse.
    #[error("Unreadable value '{token}' at token {position}")]
    UnreadableValue {
        /// The token as it appeared in the input
        token: String,
        /// Zero-based token index within the input
        position: usize,
    },

    /// Vector too long for the 32-bit length field.
    #[error("Cannot encode {0} values: length exceeds u32::MAX")]
    TooLong(usize),

    /// Underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FormatError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            FormatError::CorruptData("unexpected end of stream".to_string())
        } else {
            FormatError::Io(err.to_string())
        }
    }
}

impl From<SortError> for InterpolationError {
    fn from(err: SortError) -> Self {
        match err {
            SortError::LengthMismatch { keys, values } => {
                InterpolationError::LengthMismatch { xs: keys, ys: values }
            }
            SortError::Vector(inner) => InterpolationError::InvalidInterpolant(inner.to_string()),
        }
    }
}
