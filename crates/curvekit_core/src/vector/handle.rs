//! The copy-on-write [`Vector`] handle.

use std::fmt;
use std::ops::Index;
use std::rc::Rc;

use tracing::trace;

use super::buffer::{Buffer, MIN_CAPACITY};
use crate::types::VectorError;

/// Growable vector of doubles sharing its storage copy-on-write.
///
/// A `Vector` is a view (`offset`, `len`) over a reference-counted
/// [`Buffer`]. Cloning or slicing shares the buffer; the first write through
/// any view that does not own its buffer exclusively copies that view's
/// elements into a fresh allocation, so a mutation through one view is never
/// observable through another.
///
/// # Invariants
///
/// - `capacity() >= len()`
/// - `offset + len <= buffer.capacity()`
/// - a shared buffer is never written
///
/// # Examples
///
/// ```
/// use curvekit_core::vector::Vector;
///
/// let mut v = Vector::from(vec![1.0, 2.0, 3.0, 4.0]);
/// let mut tail = v.slice(2, 2);
/// tail.set(0, 30.0).unwrap();
///
/// assert_eq!(tail.as_slice(), &[30.0, 4.0]);
/// assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
///
/// assert_eq!(v.shift(), Some(1.0));
/// assert_eq!(v.get(-1), Some(4.0));
/// assert_eq!(v.get(10), None);
/// ```
pub struct Vector {
    buffer: Rc<Buffer>,
    offset: usize,
    len: usize,
    dirty: bool,
}

/// Capacity after a write at `index` into a view of `capacity` slots.
///
/// Fails with [`VectorError::AllocationFailure`] when the grown capacity
/// does not fit in `usize`.
#[inline]
fn grown_capacity(capacity: usize, index: usize) -> Result<usize, VectorError> {
    if index < capacity {
        return Ok(capacity);
    }
    (capacity / 2)
        .max(MIN_CAPACITY)
        .checked_add(index)
        .ok_or(VectorError::AllocationFailure { requested: index })
}

impl Vector {
    /// Creates an empty vector without allocating.
    pub fn new() -> Self {
        Self::from_buffer(Buffer::default(), 0)
    }

    /// Creates a zero-filled vector of `len` elements.
    ///
    /// # Errors
    ///
    /// [`VectorError::AllocationFailure`] if the storage cannot be allocated.
    pub fn with_len(len: usize) -> Result<Self, VectorError> {
        Ok(Self::from_buffer(Buffer::zeroed(len)?, len))
    }

    /// Creates a vector holding a private copy of `data`.
    pub fn from_slice(data: &[f64]) -> Result<Self, VectorError> {
        Ok(Self::from_buffer(Buffer::from_slice(data, data.len())?, data.len()))
    }

    fn from_buffer(buffer: Buffer, len: usize) -> Self {
        Self {
            buffer: Rc::new(buffer),
            offset: 0,
            len,
            dirty: false,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slots available to this view without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity() - self.offset
    }

    /// Returns true if another view references the same buffer.
    #[inline]
    pub fn is_shared(&self) -> bool {
        Rc::strong_count(&self.buffer) > 1
    }

    /// Returns true if the vector was mutated since the last [`mark_clean`](Self::mark_clean).
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears the dirty flag, typically after rebuilding a dependent cache.
    #[inline]
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Forces the dirty flag, invalidating dependent caches.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Read access to the elements; may alias storage shared with other views.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.buffer.as_slice()[self.offset..self.offset + self.len]
    }

    /// Iterates over the elements by value.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f64>> {
        self.as_slice().iter().copied()
    }

    /// Copies the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    /// Returns the element at `index`, counting from the end when negative.
    ///
    /// Out-of-range reads return `None` rather than failing.
    pub fn get(&self, index: isize) -> Option<f64> {
        let position = if index >= 0 {
            index as usize
        } else {
            self.len.checked_sub(index.unsigned_abs())?
        };
        self.as_slice().get(position).copied()
    }

    /// Writes `value` at `index`, counting from the end when negative.
    ///
    /// Writing past the end grows the vector; the gap is zero-filled.
    ///
    /// # Errors
    ///
    /// - [`VectorError::IndexOutOfRange`] for a negative index beyond `-len`
    /// - [`VectorError::AllocationFailure`] if growth fails
    pub fn set(&mut self, index: isize, value: f64) -> Result<(), VectorError> {
        let position = if index >= 0 {
            index as usize
        } else {
            self.len
                .checked_sub(index.unsigned_abs())
                .ok_or(VectorError::IndexOutOfRange {
                    index,
                    len: self.len,
                })?
        };
        self.write_at(position, value)
    }

    /// Appends `value`.
    pub fn push(&mut self, value: f64) -> Result<(), VectorError> {
        self.write_at(self.len, value)
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<f64> {
        let value = self.as_slice().last().copied()?;
        self.len -= 1;
        self.dirty = true;
        self.shrink_if_sparse();
        Some(value)
    }

    /// Removes and returns the first element in O(1).
    ///
    /// Only the view's offset moves; the buffer is never written, so a shared
    /// buffer is not copied.
    pub fn shift(&mut self) -> Option<f64> {
        let value = self.as_slice().first().copied()?;
        self.offset += 1;
        self.len -= 1;
        self.dirty = true;
        Some(value)
    }

    /// Prepends `values`, keeping their order.
    ///
    /// Reuses room freed by earlier [`shift`](Self::shift) calls when the
    /// buffer is private.
    pub fn unshift(&mut self, values: &[f64]) -> Result<(), VectorError> {
        let count = values.len();
        if count == 0 {
            return Ok(());
        }

        if !self.is_shared() && self.offset >= count {
            self.offset -= count;
            let offset = self.offset;
            Rc::make_mut(&mut self.buffer).as_mut_slice()[offset..offset + count]
                .copy_from_slice(values);
        } else {
            let new_len = self.len + count;
            let capacity = grown_capacity(self.capacity(), new_len - 1)?;
            let mut buffer = Buffer::zeroed(capacity)?;
            let slots = buffer.as_mut_slice();
            slots[..count].copy_from_slice(values);
            slots[count..new_len].copy_from_slice(self.as_slice());
            trace!(len = new_len, capacity, "reallocating vector storage for unshift");
            self.buffer = Rc::new(buffer);
            self.offset = 0;
        }

        self.len += count;
        self.dirty = true;
        Ok(())
    }

    /// Returns a view of `len` elements starting at `start`, sharing storage.
    ///
    /// The range is clamped to the vector. The slice starts clean.
    pub fn slice(&self, start: usize, len: usize) -> Vector {
        let start = start.min(self.len);
        let len = len.min(self.len - start);
        Vector {
            buffer: Rc::clone(&self.buffer),
            offset: self.offset + start,
            len,
            dirty: false,
        }
    }

    /// Sets the length to `len`, zero-filling new elements.
    pub fn resize(&mut self, len: usize) -> Result<(), VectorError> {
        if len > self.len {
            self.reserve_index(len - 1)?;
            let old_len = self.len;
            self.slots_mut()[old_len..len].fill(0.0);
            self.len = len;
        } else {
            self.len = len;
            self.shrink_if_sparse();
        }
        self.dirty = true;
        Ok(())
    }

    /// Replaces the contents with a copy of `data`.
    pub fn replace(&mut self, data: &[f64]) -> Result<(), VectorError> {
        let capacity = self.capacity();
        if self.is_shared() || data.len() > capacity {
            let capacity = match data.len() {
                0 => capacity,
                n => grown_capacity(capacity, n - 1)?,
            };
            self.buffer = Rc::new(Buffer::from_slice(data, capacity)?);
            self.offset = 0;
        } else {
            self.slots_mut()[..data.len()].copy_from_slice(data);
        }
        self.len = data.len();
        self.dirty = true;
        self.shrink_if_sparse();
        Ok(())
    }

    /// Appends a copy of `values`.
    pub fn extend_from_slice(&mut self, values: &[f64]) -> Result<(), VectorError> {
        if values.is_empty() {
            return Ok(());
        }
        let start = self.len;
        let end = start + values.len();
        self.reserve_index(end - 1)?;
        self.slots_mut()[start..end].copy_from_slice(values);
        self.len = end;
        self.dirty = true;
        Ok(())
    }

    /// Returns a new vector holding `self` followed by `other`.
    pub fn concat(&self, other: &Vector) -> Result<Vector, VectorError> {
        let len = self.len + other.len;
        let mut buffer = Buffer::zeroed(len)?;
        let slots = buffer.as_mut_slice();
        slots[..self.len].copy_from_slice(self.as_slice());
        slots[self.len..].copy_from_slice(other.as_slice());
        Ok(Self::from_buffer(buffer, len))
    }

    /// Exclusive access to the elements, optionally resizing first.
    ///
    /// Forces private ownership of the storage and marks the vector dirty.
    /// The returned borrow keeps the vector structurally frozen until it ends.
    pub fn data_for_write(&mut self, resize: Option<usize>) -> Result<&mut [f64], VectorError> {
        if let Some(len) = resize {
            self.resize(len)?;
        }
        let capacity = self.capacity();
        self.make_private(capacity)?;
        self.dirty = true;
        let len = self.len;
        Ok(&mut self.slots_mut()[..len])
    }

    /// Returns memory held by the underlying buffer in bytes.
    ///
    /// Shared buffers are counted by every view.
    pub fn memory_usage(&self) -> usize {
        self.buffer.memory_usage()
    }

    fn write_at(&mut self, position: usize, value: f64) -> Result<(), VectorError> {
        self.reserve_index(position)?;
        let len = self.len;
        let slots = self.slots_mut();
        if position > len {
            slots[len..position].fill(0.0);
        }
        slots[position] = value;
        self.len = len.max(position + 1);
        self.dirty = true;
        Ok(())
    }

    /// Ensures exclusive storage able to hold `index`.
    fn reserve_index(&mut self, index: usize) -> Result<(), VectorError> {
        let capacity = grown_capacity(self.capacity(), index)?;
        self.make_private(capacity)
    }

    /// Ensures this view owns its buffer and can address `capacity` slots.
    fn make_private(&mut self, capacity: usize) -> Result<(), VectorError> {
        if !self.is_shared() {
            if capacity <= self.capacity() {
                return Ok(());
            }
            if self.offset == 0 {
                trace!(len = self.len, capacity, "growing vector storage in place");
                return Rc::make_mut(&mut self.buffer).grow(capacity);
            }
        }
        self.reallocate(capacity)
    }

    fn reallocate(&mut self, capacity: usize) -> Result<(), VectorError> {
        let buffer = Buffer::from_slice(self.as_slice(), capacity)?;
        trace!(
            len = self.len,
            capacity = buffer.capacity(),
            shared = self.is_shared(),
            "reallocating vector storage"
        );
        self.buffer = Rc::new(buffer);
        self.offset = 0;
        Ok(())
    }

    /// Mutable slots from the view's offset to the end of the buffer.
    ///
    /// Callers must have made the buffer private first, so `make_mut` never
    /// clones here.
    fn slots_mut(&mut self) -> &mut [f64] {
        let offset = self.offset;
        &mut Rc::make_mut(&mut self.buffer).as_mut_slice()[offset..]
    }

    /// Reclaims memory once fewer than half of the slots are in use.
    fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        if self.is_shared() || capacity <= MIN_CAPACITY || self.len >= capacity / 2 {
            return;
        }
        let target = (self.len + self.len / 2).max(MIN_CAPACITY);
        // Shrinking is optional; keep the larger buffer if allocation fails.
        if let Ok(buffer) = Buffer::from_slice(self.as_slice(), target) {
            trace!(len = self.len, from = capacity, to = target, "shrinking vector storage");
            self.buffer = Rc::new(buffer);
            self.offset = 0;
        }
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Vector {
    /// Shares the buffer; the copy starts clean.
    fn clone(&self) -> Self {
        Vector {
            buffer: Rc::clone(&self.buffer),
            offset: self.offset,
            len: self.len,
            dirty: false,
        }
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("values", &self.as_slice())
            .field("capacity", &self.capacity())
            .field("shared", &self.is_shared())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.as_slice()[index]
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        let len = values.len();
        Self::from_buffer(Buffer::from_vec(values), len)
    }
}

impl From<&[f64]> for Vector {
    fn from(values: &[f64]) -> Self {
        Self::from(values.to_vec())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<f64>>())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Vector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Vector {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<f64>::deserialize(deserializer).map(Vector::from)
    }
}
