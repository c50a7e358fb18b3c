//! Raw contiguous storage backing one or more [`Vector`](super::Vector) views.
//!
//! # Memory Layout
//!
//! A buffer is a single zero-initialised allocation of `capacity` doubles.
//! Views address it through an element offset and their own logical length,
//! so the buffer itself carries no length. Every slot is initialised, which
//! lets growth expose new elements without unsafe code.

use crate::types::VectorError;

/// Smallest capacity ever allocated by growth or shrinking.
pub const MIN_CAPACITY: usize = 16;

/// Contiguous, fully initialised storage of doubles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Buffer {
    values: Vec<f64>,
}

impl Buffer {
    /// Allocates a zero-filled buffer holding `capacity` values.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::AllocationFailure`] if the allocator refuses
    /// the request.
    pub fn zeroed(capacity: usize) -> Result<Self, VectorError> {
        let mut values = Vec::new();
        values
            .try_reserve_exact(capacity)
            .map_err(|_| VectorError::AllocationFailure {
                requested: capacity,
            })?;
        values.resize(capacity, 0.0);
        Ok(Self { values })
    }

    /// Allocates a buffer of `capacity` slots whose prefix is `data`.
    ///
    /// The capacity is raised to `data.len()` if smaller; trailing slots
    /// are zero.
    pub fn from_slice(data: &[f64], capacity: usize) -> Result<Self, VectorError> {
        let capacity = capacity.max(data.len());
        let mut buffer = Self::zeroed(capacity)?;
        buffer.values[..data.len()].copy_from_slice(data);
        Ok(buffer)
    }

    /// Takes ownership of an already initialised allocation.
    #[inline]
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Grows the allocation in place to `capacity` slots, zero-filling the tail.
    ///
    /// Never shrinks.
    pub fn grow(&mut self, capacity: usize) -> Result<(), VectorError> {
        if capacity <= self.values.len() {
            return Ok(());
        }
        let additional = capacity - self.values.len();
        self.values
            .try_reserve_exact(additional)
            .map_err(|_| VectorError::AllocationFailure {
                requested: capacity,
            })?;
        self.values.resize(capacity, 0.0);
        Ok(())
    }

    /// Read access to every slot.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Write access to every slot.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Returns memory used by the allocation in bytes.
    #[inline]
    pub fn memory_usage(&self) -> usize {
        self.values.capacity() * std::mem::size_of::<f64>()
    }
}
