//! The sampled output of a cardinal spline.

#[cfg(feature = "serde")]
use std::convert::TryFrom;

use kurbo::{BezPath, Point};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::error::Error;

/// A sampled cardinal spline, stored as a flat `x0, y0, x1, y1, ...` list.
///
/// The first pair is where drawing starts; every following pair is a line
/// to that point. The last pair is always an exact control point: the last
/// one for an open curve, the first one for a closed curve.
///
/// This can be converted to a Bézier path with [`Polyline::to_bez_path`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", try_from = "RawPolyline")
)]
pub struct Polyline {
    coords: Vec<f64>,
    closed: bool,
}

/// Unchecked serialized form of a [`Polyline`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(crate = "serde_")]
struct RawPolyline {
    coords: Vec<f64>,
    closed: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPolyline> for Polyline {
    type Error = Error;

    fn try_from(raw: RawPolyline) -> Result<Polyline, Error> {
        Polyline::from_coords(raw.coords, raw.closed)
    }
}

impl Polyline {
    pub(crate) fn new(coords: Vec<f64>, closed: bool) -> Polyline {
        debug_assert!(coords.len() >= 2 && coords.len() % 2 == 0);
        Polyline { coords, closed }
    }

    /// Wrap an existing flat buffer.
    ///
    /// The buffer must hold at least one `x, y` pair and an even number of
    /// coordinates.
    pub fn from_coords(coords: Vec<f64>, closed: bool) -> Result<Polyline, Error> {
        if coords.is_empty() || coords.len() % 2 != 0 {
            return Err(Error::MalformedPolyline(coords.len()));
        }
        Ok(Polyline { coords, closed })
    }

    /// The interleaved coordinates.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.coords
    }

    /// Number of points (half the number of coordinates).
    pub fn point_count(&self) -> usize {
        self.coords.len() / 2
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Iterate over the sampled points in path order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.coords
            .chunks_exact(2)
            .map(|xy| Point::new(xy[0], xy[1]))
    }

    pub fn first(&self) -> Option<Point> {
        self.points().next()
    }

    pub fn last(&self) -> Option<Point> {
        self.coords
            .rchunks_exact(2)
            .next()
            .map(|xy| Point::new(xy[0], xy[1]))
    }

    /// Render the polyline to a Bézier path.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        self.render_extend(&mut path);
        path
    }

    /// Render the polyline, appending a new subpath to the given path.
    ///
    /// The subpath is closed only if this polyline is.
    pub fn render_extend(&self, path: &mut BezPath) {
        let mut points = self.points();
        if let Some(p) = points.next() {
            path.move_to(p);
            for p in points {
                path.line_to(p);
            }
            if self.closed {
                path.close_path();
            }
        }
    }
}

impl From<Polyline> for Vec<f64> {
    fn from(polyline: Polyline) -> Vec<f64> {
        polyline.coords
    }
}
