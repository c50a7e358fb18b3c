//! # curvekit_core: Growable Vectors and Curve Toolkit
//!
//! ## Role
//!
//! curvekit_core is the library half of the workspace, providing:
//! - A growable, copy-on-write shared vector of doubles (`vector`)
//! - Tridiagonal solving (`math::solvers`)
//! - Natural/clamped cubic, Steffen monotone and linear interpolation (`math::interpolators`)
//! - Adaptive spline approximation of noisy data (`math::approximation`)
//! - Joint sorting of parallel arrays (`math::sorting`)
//! - Binary layout and numeric text ingestion (`io`)
//! - Error types: `VectorError`, `InterpolationError`, `FormatError`, ... (`types::error`)
//!
//! ## Dependencies
//!
//! - num-traits: Generic floating-point algorithms
//! - thiserror: Error enums
//! - tracing: Diagnostics (the library never installs a subscriber)
//! - serde: Serialisation support (optional)
//!
//! ## Threading
//!
//! Vectors share storage through `Rc` and are therefore neither `Send` nor
//! `Sync`. Everything in this crate is synchronous.
//!
//! ## Usage Examples
//!
//! ```rust
//! use curvekit_core::math::interpolators::{Interpolator, SplineCache, SplineKind};
//! use curvekit_core::math::sorting::joint_sort_vectors;
//! use curvekit_core::vector::Vector;
//!
//! let mut xs = Vector::from_slice(&[2.0, 0.0, 3.0, 1.0]).unwrap();
//! let mut ys = Vector::from_slice(&[4.0, 0.0, 9.0, 1.0]).unwrap();
//! joint_sort_vectors(&mut xs, &mut ys).unwrap();
//!
//! let mut cache = SplineCache::new(SplineKind::Steffen);
//! let spline = cache.coefficients(&mut xs, &mut ys).unwrap();
//! assert_eq!(spline.domain(), (0.0, 3.0));
//! assert_eq!(spline.interpolate(2.0).unwrap(), 4.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for Vector, SplineCoefficients and configuration types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod io;
pub mod math;
pub mod types;
pub mod vector;
