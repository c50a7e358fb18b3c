//! Thomas algorithm for tridiagonal linear systems.

use crate::types::SolverError;
use num_traits::Float;

/// Solver for `a[j]·u[j-1] + b[j]·u[j] + c[j]·u[j+1] = r[j]`.
///
/// One forward elimination pass computes the per-row decomposition factor,
/// one backward pass substitutes. `a[0]` and `c[n-1]` are ignored.
///
/// The solver keeps its scratch row between calls, so repeated solves of the
/// same size do not allocate beyond the returned solution.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use curvekit_core::math::solvers::TridiagonalSolver;
///
/// // [ 2 -1  0] [u0]   [1]
/// // [-1  2 -1] [u1] = [0]
/// // [ 0 -1  2] [u2]   [1]
/// let mut solver = TridiagonalSolver::<f64>::new();
/// let u = solver
///     .solve(&[0.0, -1.0, -1.0], &[2.0, 2.0, 2.0], &[-1.0, -1.0, 0.0], &[1.0, 0.0, 1.0])
///     .unwrap();
/// assert!(u.iter().all(|&ui| (ui - 1.0).abs() < 1e-12));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TridiagonalSolver<T: Float> {
    /// Decomposition factors from the forward pass.
    gamma: Vec<T>,
}

impl<T: Float> TridiagonalSolver<T> {
    /// Creates a solver with empty scratch space.
    pub fn new() -> Self {
        Self { gamma: Vec::new() }
    }

    /// Solves the system and returns `u`.
    ///
    /// # Errors
    ///
    /// - [`SolverError::LengthMismatch`] if `a`, `b` or `c` differ in length from `r`
    /// - [`SolverError::DegenerateSystem`] if a pivot is exactly zero
    pub fn solve(&mut self, a: &[T], b: &[T], c: &[T], r: &[T]) -> Result<Vec<T>, SolverError> {
        let mut u = vec![T::zero(); r.len()];
        self.solve_into(a, b, c, r, &mut u)?;
        Ok(u)
    }

    /// Solves the system writing the solution into `u`.
    ///
    /// `u` must have the same length as `r`. On error `u` is left in an
    /// unspecified state.
    pub fn solve_into(
        &mut self,
        a: &[T],
        b: &[T],
        c: &[T],
        r: &[T],
        u: &mut [T],
    ) -> Result<(), SolverError> {
        let n = r.len();
        for (name, len) in [("a", a.len()), ("b", b.len()), ("c", c.len()), ("u", u.len())] {
            if len != n {
                return Err(SolverError::LengthMismatch {
                    name,
                    expected: n,
                    got: len,
                });
            }
        }
        if n == 0 {
            return Ok(());
        }

        self.gamma.clear();
        self.gamma.resize(n, T::zero());

        // Forward elimination
        let mut pivot = b[0];
        if pivot == T::zero() {
            return Err(SolverError::DegenerateSystem { row: 0 });
        }
        u[0] = r[0] / pivot;
        for j in 1..n {
            self.gamma[j] = c[j - 1] / pivot;
            pivot = b[j] - a[j] * self.gamma[j];
            if pivot == T::zero() {
                return Err(SolverError::DegenerateSystem { row: j });
            }
            u[j] = (r[j] - a[j] * u[j - 1]) / pivot;
        }

        // Back substitution
        for j in (0..n - 1).rev() {
            u[j] = u[j] - self.gamma[j + 1] * u[j + 1];
        }

        Ok(())
    }
}

/// Solves a tridiagonal system with a one-off [`TridiagonalSolver`].
pub fn solve_tridiagonal<T: Float>(a: &[T], b: &[T], c: &[T], r: &[T]) -> Result<Vec<T>, SolverError> {
    TridiagonalSolver::new().solve(a, b, c, r)
}
