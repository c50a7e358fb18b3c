//! Persistence and ingestion of sample data.
//!
//! - [`binary`]: versioned little-endian layout for vectors and grids
//! - [`text`]: whitespace-separated numeric text with Fortran exponent repair
//!
//! ## Example
//!
//! ```
//! use curvekit_core::io::{dump, load, parse_values};
//!
//! let values = parse_values("1.0 2.0D+00 3.0-1").unwrap();
//! let bytes = dump(&values).unwrap();
//! assert_eq!(load(&bytes).unwrap().as_slice(), &[1.0, 2.0, 0.3]);
//! ```

pub mod binary;
pub mod text;

pub use binary::{
    dump, dump_grid, load, load_grid, read_grid, read_vector, write_grid, write_vector, Grid,
    FORMAT_VERSION,
};
pub use text::{parse_columns, parse_value, parse_values, repair_exponent};
