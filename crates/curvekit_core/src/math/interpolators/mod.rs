//! Interpolation over one-dimensional sample tables.
//!
//! ## Available Interpolants
//!
//! - [`cubic_spline`] / [`natural_spline`]: C² cubic spline, natural or clamped ends
//! - [`steffen_spline`]: Steffen's monotone cubic, never overshoots the data
//! - [`interpolate_linear`] / [`LinearInterpolator`]: piecewise linear
//! - [`SplineCache`]: spline over two [`Vector`](crate::vector::Vector)s,
//!   rebuilt only after either is mutated
//!
//! The spline builders all produce [`SplineCoefficients`], which evaluates
//! `y[j] + dx·(c[j] + dx·(b[j] + dx·a[j]))` on the bracketing segment and
//! clamps queries outside the sample range to the end values.
//!
//! ## Core Trait
//!
//! [`Interpolator`] defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `domain() -> (T, T)`: First and last abscissa
//!
//! ## Example
//!
//! ```
//! use curvekit_core::math::interpolators::{natural_spline, steffen_spline};
//!
//! let xs = [0.0, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 1.0, 1.0];
//!
//! let natural = natural_spline(&xs, &ys).unwrap();
//! let steffen = steffen_spline(&xs, &ys).unwrap();
//!
//! // The natural spline overshoots the plateau, Steffen does not
//! assert!(natural.evaluate(1.5).unwrap() > 1.0);
//! assert!(steffen.evaluate(1.5).unwrap() <= 1.0);
//! ```

mod cache;
mod coefficients;
mod cubic_spline;
mod linear;
mod steffen;
mod traits;

// Re-export public types at module level
pub use cache::{SplineCache, SplineKind};
pub(crate) use coefficients::check_samples;
pub use coefficients::SplineCoefficients;
pub use cubic_spline::{cubic_spline, natural_spline, Boundary};
pub use linear::{interpolate_linear, LinearInterpolator};
pub use steffen::steffen_spline;
pub use traits::Interpolator;
