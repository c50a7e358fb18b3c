//! Linear system solvers.
//!
//! ## Available Solvers
//!
//! - [`TridiagonalSolver`]: Thomas algorithm for tridiagonal systems, O(n)
//!
//! The spline builders in [`crate::math::interpolators`] run their own
//! specialised sweep for the spline matrix rather than assembling the
//! diagonals for this general solver.
//!
//! ## Example
//!
//! ```
//! use curvekit_core::math::solvers::solve_tridiagonal;
//!
//! let u: Vec<f64> = solve_tridiagonal(&[0.0, 1.0], &[4.0, 4.0], &[1.0, 0.0], &[5.0, 5.0]).unwrap();
//! assert!((u[0] - 1.0).abs() < 1e-12);
//! assert!((u[1] - 1.0).abs() < 1e-12);
//! ```

mod tridiagonal;

// Re-export public types at module level
pub use tridiagonal::{solve_tridiagonal, TridiagonalSolver};
