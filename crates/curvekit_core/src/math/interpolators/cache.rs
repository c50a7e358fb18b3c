//! Lazily rebuilt spline over a pair of [`Vector`]s.

use super::{cubic_spline, steffen_spline, Boundary, SplineCoefficients};
use crate::types::InterpolationError;
use crate::vector::Vector;
use tracing::debug;

/// Which interpolant a [`SplineCache`] builds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SplineKind {
    /// C² cubic spline with the given end conditions
    Cubic {
        /// Condition at the first sample
        left: Boundary<f64>,
        /// Condition at the last sample
        right: Boundary<f64>,
    },
    /// Steffen monotone cubic
    Steffen,
}

impl SplineKind {
    /// Natural cubic spline.
    pub const NATURAL: Self = SplineKind::Cubic {
        left: Boundary::Natural,
        right: Boundary::Natural,
    };

    /// Cubic spline with prescribed end slopes.
    pub fn clamped(left: f64, right: f64) -> Self {
        SplineKind::Cubic {
            left: Boundary::Clamped(left),
            right: Boundary::Clamped(right),
        }
    }

    /// Builds coefficients of this kind through `(xs, ys)`.
    pub fn build(&self, xs: &[f64], ys: &[f64]) -> Result<SplineCoefficients<f64>, InterpolationError> {
        match *self {
            SplineKind::Cubic { left, right } => cubic_spline(xs, ys, left, right),
            SplineKind::Steffen => steffen_spline(xs, ys),
        }
    }
}

impl Default for SplineKind {
    fn default() -> Self {
        Self::NATURAL
    }
}

/// Spline coefficients kept in step with the sample vectors they came from.
///
/// The coefficients are rebuilt only when either sample vector reports a
/// mutation through its dirty flag; building clears both flags. A cache is
/// meant to serve one `(xs, ys)` pair: handing it a different pair whose
/// flags are clean returns the stale coefficients.
///
/// # Example
///
/// ```
/// use curvekit_core::math::interpolators::{SplineCache, SplineKind};
/// use curvekit_core::vector::Vector;
///
/// let mut xs = Vector::from_slice(&[0.0, 1.0, 2.0]).unwrap();
/// let mut ys = Vector::from_slice(&[0.0, 1.0, 4.0]).unwrap();
/// let mut cache = SplineCache::new(SplineKind::Steffen);
///
/// let y = cache.evaluate(&mut xs, &mut ys, 1.0).unwrap();
/// assert_eq!(y, 1.0);
/// assert!(!xs.is_dirty());
///
/// ys.set(2, 9.0).unwrap();
/// assert_eq!(cache.evaluate(&mut xs, &mut ys, 2.0).unwrap(), 9.0);
/// assert_eq!(cache.rebuilds(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SplineCache {
    kind: SplineKind,
    coefficients: Option<SplineCoefficients<f64>>,
    rebuilds: usize,
}

impl SplineCache {
    /// Creates an empty cache.
    pub fn new(kind: SplineKind) -> Self {
        Self {
            kind,
            coefficients: None,
            rebuilds: 0,
        }
    }

    /// The interpolant kind.
    pub fn kind(&self) -> SplineKind {
        self.kind
    }

    /// Changes the kind and drops the current coefficients.
    pub fn set_kind(&mut self, kind: SplineKind) {
        if kind != self.kind {
            self.kind = kind;
            self.invalidate();
        }
    }

    /// Drops the current coefficients.
    pub fn invalidate(&mut self) {
        self.coefficients = None;
    }

    /// Whether coefficients are currently held.
    pub fn is_built(&self) -> bool {
        self.coefficients.is_some()
    }

    /// Number of builds performed so far.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    /// Current coefficients, rebuilt first if stale.
    ///
    /// On a build error the flags are left set and nothing is cached.
    pub fn coefficients(
        &mut self,
        xs: &mut Vector,
        ys: &mut Vector,
    ) -> Result<&SplineCoefficients<f64>, InterpolationError> {
        let stale = xs.is_dirty() || ys.is_dirty();
        let current = match self.coefficients.take() {
            Some(coefficients) if !stale => coefficients,
            _ => {
                let built = self.kind.build(xs.as_slice(), ys.as_slice())?;
                xs.mark_clean();
                ys.mark_clean();
                self.rebuilds += 1;
                debug!(kind = ?self.kind, samples = built.len(), "spline rebuilt");
                built
            }
        };
        Ok(self.coefficients.insert(current))
    }

    /// Evaluates the cached interpolant at `x`.
    pub fn evaluate(&mut self, xs: &mut Vector, ys: &mut Vector, x: f64) -> Result<f64, InterpolationError> {
        self.coefficients(xs, ys)?.evaluate(x)
    }
}
