//! Growable, copy-on-write shared vector of doubles.
//!
//! [`Vector`] is the substrate every other numeric type in the crate is built
//! from. Storage lives in a reference-counted [`Buffer`]; any number of views
//! may read it, and a writer first obtains exclusive ownership, copying only
//! its own elements when the buffer is shared.
//!
//! ## Growth and shrinking
//!
//! - Writing an index `>= capacity` grows the capacity to
//!   `max(capacity / 2, MIN_CAPACITY) + index`, so repeated appends are
//!   amortised O(1).
//! - When fewer than half of a private buffer's slots are in use (and the
//!   capacity exceeds [`MIN_CAPACITY`]) the storage is reallocated smaller.
//!
//! ## Collaborator surface
//!
//! - [`Vector::as_slice`]: read access, may alias shared storage
//! - [`Vector::data_for_write`]: exclusive access, optionally resizing first
//! - [`Vector::new`], [`Vector::push`], [`Vector::resize`], [`Vector::replace`]
//!
//! ## Example
//!
//! ```
//! use curvekit_core::vector::Vector;
//!
//! let mut v = Vector::new();
//! for i in 0..20 {
//!     v.push(i as f64).unwrap();
//! }
//! let window = v.slice(5, 5);
//! assert_eq!(window.as_slice(), &[5.0, 6.0, 7.0, 8.0, 9.0]);
//!
//! while v.len() > 5 {
//!     v.pop();
//! }
//! assert!(v.capacity() >= v.len());
//! ```

mod buffer;
mod handle;
mod ops;

pub use buffer::{Buffer, MIN_CAPACITY};
pub use handle::Vector;
pub use ops::{BinaryOp, Operand};
