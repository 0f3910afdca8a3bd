//! Curve configuration.

#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::error::Error;

/// Tension used when none is given.
pub const DEFAULT_TENSION: f64 = 0.5;

/// Samples per segment used when none is given.
pub const DEFAULT_SUBDIVISIONS: usize = 20;

/// How a cardinal spline is sampled.
///
/// Missing fields take their defaults when deserialized.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", default)
)]
pub struct CurveOptions {
    /// Scale applied to the neighbor differences that form each tangent.
    ///
    /// Zero gives straight lines between control points. Must lie in
    /// `[0, 1]`.
    pub tension: f64,
    /// Number of samples emitted per segment. Must be at least 1.
    pub subdivisions: usize,
    /// Whether the curve wraps from the last control point back to the first.
    pub closed: bool,
}

impl Default for CurveOptions {
    fn default() -> CurveOptions {
        CurveOptions {
            tension: DEFAULT_TENSION,
            subdivisions: DEFAULT_SUBDIVISIONS,
            closed: false,
        }
    }
}

impl CurveOptions {
    pub fn new() -> CurveOptions {
        CurveOptions::default()
    }

    pub fn with_tension(mut self, tension: f64) -> CurveOptions {
        self.tension = tension;
        self
    }

    pub fn with_subdivisions(mut self, subdivisions: usize) -> CurveOptions {
        self.subdivisions = subdivisions;
        self
    }

    pub fn with_closed(mut self, closed: bool) -> CurveOptions {
        self.closed = closed;
        self
    }

    /// Pull the tension into `[0, 1]`.
    ///
    /// Out-of-range tension is rejected by [`validate`](CurveOptions::validate);
    /// call this first to clamp instead. NaN becomes [`DEFAULT_TENSION`].
    pub fn clamp_tension(mut self) -> CurveOptions {
        self.tension = if self.tension.is_nan() {
            DEFAULT_TENSION
        } else {
            self.tension.max(0.0).min(1.0)
        };
        self
    }

    /// Check the options, returning the first problem found.
    pub fn validate(&self) -> Result<(), Error> {
        if self.subdivisions < 1 {
            return Err(Error::ZeroSubdivisions);
        }
        self.validate_tension()
    }

    /// Check only the tension.
    pub(crate) fn validate_tension(&self) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.tension) {
            return Err(Error::TensionOutOfRange(self.tension));
        }
        Ok(())
    }
}
