//! Evaluation of single cardinal spline segments.

use kurbo::{Point, Vec2};

use crate::basis::{BasisCache, BasisEntry};

/// One cubic Hermite segment between two control points.
///
/// The tangents come from the neighbors on either side, scaled by the
/// tension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
    /// Tangent at `p1`.
    pub tangent1: Vec2,
    /// Tangent at `p2`.
    pub tangent2: Vec2,
}

impl Segment {
    /// Build a segment from a window `[prev, p1, p2, next]`.
    pub fn from_window(window: [Point; 4], tension: f64) -> Segment {
        let [prev, p1, p2, next] = window;
        Segment {
            p1,
            p2,
            tangent1: (p2 - prev) * tension,
            tangent2: (next - p1) * tension,
        }
    }

    /// The point on the segment for one basis entry.
    pub fn eval(&self, b: &BasisEntry) -> Point {
        let (p1, p2, m1, m2) = (self.p1, self.p2, self.tangent1, self.tangent2);
        Point::new(
            b.c1 * p1.x + b.c2 * p2.x + b.c3 * m1.x + b.c4 * m2.x,
            b.c1 * p1.y + b.c2 * p2.y + b.c3 * m1.y + b.c4 * m2.y,
        )
    }

    /// Returns an iterator over the samples of this segment.
    ///
    /// This yields one point per subdivision, starting at `p1` and stopping
    /// one step short of `p2`.
    pub fn samples<'a>(&'a self, basis: &'a BasisCache) -> impl Iterator<Item = Point> + 'a {
        basis.steps().iter().map(move |b| self.eval(b))
    }
}

/// Evaluate one segment, appending its samples to `out` as `x, y` pairs.
pub fn eval_segment(window: [Point; 4], tension: f64, basis: &BasisCache, out: &mut Vec<f64>) {
    let seg = Segment::from_window(window, tension);
    for p in seg.samples(basis) {
        out.push(p.x);
        out.push(p.y);
    }
}

/// Evaluate every segment between consecutive original points.
///
/// `padded` is the output of [`pad_points`](crate::pad_points), so a path of
/// `n` points yields `n - 1` segments of `basis.subdivisions()` samples each.
pub fn eval_segments(padded: &[Point], tension: f64, basis: &BasisCache, out: &mut Vec<f64>) {
    for w in padded.windows(4) {
        eval_segment([w[0], w[1], w[2], w[3]], tension, basis, out);
    }
}
