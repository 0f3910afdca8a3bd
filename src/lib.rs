//! Cardinal splines sampled to polylines.
//!
//! This crate turns an ordered list of 2D control points into a dense
//! polyline that follows a cardinal (Catmull-Rom style) spline through them.
//! Each segment between two control points is a cubic Hermite curve whose
//! tangents are taken from the neighboring points and scaled by a tension
//! parameter. Segments are sampled at a fixed number of subdivisions using a
//! precomputed basis, and the result is a single flat `x, y, x, y, ...`
//! buffer ready to hand to a path renderer.
//!
//! ```
//! use cardinal::{interpolate, CurveOptions};
//! use kurbo::Point;
//!
//! let pts = [Point::new(0., 0.), Point::new(10., 0.), Point::new(10., 10.)];
//! let opts = CurveOptions::new().with_subdivisions(4);
//! let poly = interpolate(&pts, &opts).unwrap();
//! assert_eq!(poly.coords().len(), 18);
//! assert_eq!(poly.last(), Some(Point::new(10., 10.)));
//! ```

mod basis;
mod error;
mod interpolator;
mod options;
mod points;
mod polyline;
mod segment;

pub use basis::{BasisCache, BasisEntry};
pub use error::{Error, ErrorKind};
pub use interpolator::{interpolate, output_len, Interpolator};
pub use options::{CurveOptions, DEFAULT_SUBDIVISIONS, DEFAULT_TENSION};
pub use points::{pad_points, points_from_coords};
pub use polyline::Polyline;
pub use segment::{eval_segment, eval_segments, Segment};
