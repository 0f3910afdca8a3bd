//! Errors reported before any interpolation work starts.

use thiserror::Error;

/// An error from validating control points or curve options.
///
/// All checks run up front, so an error means no output was produced.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Fewer than two control points; there is no segment to evaluate.
    #[error("at least 2 control points are required, got {0}")]
    TooFewPoints(usize),
    /// A flat coordinate list whose length is not a multiple of two.
    #[error("flat coordinate list has odd length {0}")]
    OddCoordinateCount(usize),
    /// A flat polyline buffer that is empty or has odd length.
    #[error("polyline needs a nonzero, even number of coordinates, got {0}")]
    MalformedPolyline(usize),
    #[error("subdivisions must be at least 1")]
    ZeroSubdivisions,
    /// Tension outside `[0, 1]`, or NaN.
    #[error("tension {0} is outside [0, 1]")]
    TensionOutOfRange(f64),
}

/// The broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The control points themselves are unusable.
    InvalidInput,
    /// The curve options are unusable.
    InvalidConfiguration,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TooFewPoints(_)
            | Error::OddCoordinateCount(_)
            | Error::MalformedPolyline(_) => ErrorKind::InvalidInput,
            Error::ZeroSubdivisions | Error::TensionOutOfRange(_) => {
                ErrorKind::InvalidConfiguration
            }
        }
    }
}
