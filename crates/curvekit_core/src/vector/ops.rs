//! Element-wise arithmetic and reductions over [`Vector`].
//!
//! The right-hand side of every element-wise operation is an [`Operand`]:
//! either a scalar broadcast to every element or a vector of equal length.
//! The variant is resolved once per call, never per element.

use super::Vector;
use crate::types::VectorError;

/// Right-hand side of an element-wise operation.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    /// Scalar applied to every element.
    Scalar(f64),
    /// Vector combined element by element; must match the target length.
    Vector(&'a Vector),
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a> From<&'a Vector> for Operand<'a> {
    fn from(vector: &'a Vector) -> Self {
        Operand::Vector(vector)
    }
}

/// Binary operation applied element by element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `lhs + rhs`
    Add,
    /// `lhs - rhs`
    Sub,
    /// `lhs * rhs`
    Mul,
    /// `lhs / rhs` (IEEE semantics, division by zero gives ±inf or NaN)
    Div,
    /// `lhs.min(rhs)`
    Min,
    /// `lhs.max(rhs)`
    Max,
}

impl BinaryOp {
    #[inline]
    fn eval(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Min => lhs.min(rhs),
            BinaryOp::Max => lhs.max(rhs),
        }
    }
}

impl Vector {
    /// Applies `op` in place with `rhs` as the right-hand side.
    ///
    /// # Errors
    ///
    /// [`VectorError::LengthMismatch`] if `rhs` is a vector of another length.
    ///
    /// # Example
    ///
    /// ```
    /// use curvekit_core::vector::{BinaryOp, Vector};
    ///
    /// let mut v = Vector::from(vec![1.0, 2.0, 3.0]);
    /// let w = Vector::from(vec![10.0, 20.0, 30.0]);
    ///
    /// v.apply(BinaryOp::Mul, 2.0).unwrap();
    /// v.apply(BinaryOp::Add, &w).unwrap();
    /// assert_eq!(v.as_slice(), &[12.0, 24.0, 36.0]);
    /// ```
    pub fn apply<'a>(&mut self, op: BinaryOp, rhs: impl Into<Operand<'a>>) -> Result<(), VectorError> {
        match rhs.into() {
            Operand::Scalar(value) => {
                for lhs in self.data_for_write(None)? {
                    *lhs = op.eval(*lhs, value);
                }
            }
            Operand::Vector(other) => {
                if other.len() != self.len() {
                    return Err(VectorError::LengthMismatch {
                        expected: self.len(),
                        got: other.len(),
                    });
                }
                for (lhs, rhs) in self.data_for_write(None)?.iter_mut().zip(other.iter()) {
                    *lhs = op.eval(*lhs, rhs);
                }
            }
        }
        Ok(())
    }

    /// Element-wise `self += rhs`.
    pub fn add<'a>(&mut self, rhs: impl Into<Operand<'a>>) -> Result<(), VectorError> {
        self.apply(BinaryOp::Add, rhs)
    }

    /// Element-wise `self -= rhs`.
    pub fn sub<'a>(&mut self, rhs: impl Into<Operand<'a>>) -> Result<(), VectorError> {
        self.apply(BinaryOp::Sub, rhs)
    }

    /// Element-wise `self *= rhs`.
    pub fn mul<'a>(&mut self, rhs: impl Into<Operand<'a>>) -> Result<(), VectorError> {
        self.apply(BinaryOp::Mul, rhs)
    }

    /// Element-wise `self /= rhs`.
    pub fn div<'a>(&mut self, rhs: impl Into<Operand<'a>>) -> Result<(), VectorError> {
        self.apply(BinaryOp::Div, rhs)
    }

    /// Returns a new vector with `f` applied to every element.
    pub fn map<F>(&self, f: F) -> Vector
    where
        F: FnMut(f64) -> f64,
    {
        self.iter().map(f).collect()
    }

    /// Sum of the elements, `None` when empty.
    pub fn sum(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.iter().sum())
        }
    }

    /// Arithmetic mean, `None` when empty.
    pub fn mean(&self) -> Option<f64> {
        self.sum().map(|s| s / self.len() as f64)
    }

    /// Smallest element ignoring NaN, `None` when empty.
    pub fn min(&self) -> Option<f64> {
        self.iter().reduce(f64::min)
    }

    /// Largest element ignoring NaN, `None` when empty.
    pub fn max(&self) -> Option<f64> {
        self.iter().reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scalar_ops() {
        let mut v = Vector::from(vec![1.0, 2.0, 4.0]);
        v.add(1.0).unwrap();
        v.mul(2.0).unwrap();
        v.sub(2.0).unwrap();
        v.div(2.0).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 2.0, 4.0]);
        assert!(v.is_dirty());
    }

    #[test]
    fn test_vector_ops() {
        let mut v = Vector::from(vec![1.0, 5.0, 3.0]);
        let w = Vector::from(vec![2.0, 2.0, 2.0]);
        v.apply(BinaryOp::Min, &w).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 2.0, 2.0]);
        v.apply(BinaryOp::Max, &Vector::from(vec![0.0, 3.0, 0.0]))
            .unwrap();
        assert_eq!(v.as_slice(), &[1.0, 3.0, 2.0]);
    }

    #[test]
    fn test_length_mismatch() {
        let mut v = Vector::from(vec![1.0, 2.0]);
        let w = Vector::from(vec![1.0]);
        assert_eq!(
            v.add(&w).unwrap_err(),
            VectorError::LengthMismatch {
                expected: 2,
                got: 1
            }
        );
        assert_eq!(v.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_ops_respect_copy_on_write() {
        let mut v = Vector::from(vec![1.0, 2.0]);
        let snapshot = v.clone();
        v.mul(10.0).unwrap();
        assert_eq!(v.as_slice(), &[10.0, 20.0]);
        assert_eq!(snapshot.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_operand_with_slice_of_self() {
        let mut v = Vector::from(vec![1.0, 2.0, 3.0, 4.0]);
        let head = v.slice(0, 4);
        v.add(&head).unwrap();
        assert_eq!(v.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!(head.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_map() {
        let v = Vector::from(vec![1.0, 4.0, 9.0]);
        assert_eq!(v.map(f64::sqrt).as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_reductions() {
        let v = Vector::from(vec![3.0, -1.0, 4.0, 1.5]);
        assert_relative_eq!(v.sum().unwrap(), 7.5);
        assert_relative_eq!(v.mean().unwrap(), 1.875);
        assert_eq!(v.min(), Some(-1.0));
        assert_eq!(v.max(), Some(4.0));

        let empty = Vector::new();
        assert_eq!(empty.sum(), None);
        assert_eq!(empty.mean(), None);
        assert_eq!(empty.min(), None);
    }
}
