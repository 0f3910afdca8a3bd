//! Padding control points so every segment has two neighbors.

use kurbo::Point;

use crate::error::Error;

/// Pad the control points with one extra point at each end.
///
/// An open path repeats its own first and last points, which clamps the end
/// tangents. A closed path borrows the opposite end (last point in front,
/// first point behind) so tangents are continuous across the seam.
///
/// The result has `points.len() + 2` entries.
pub fn pad_points(points: &[Point], closed: bool) -> Result<Vec<Point>, Error> {
    let n = points.len();
    if n < 2 {
        return Err(Error::TooFewPoints(n));
    }
    let (head, tail) = if closed {
        (points[n - 1], points[0])
    } else {
        (points[0], points[n - 1])
    };
    let mut padded = Vec::with_capacity(n + 2);
    padded.push(head);
    padded.extend_from_slice(points);
    padded.push(tail);
    Ok(padded)
}

/// Read a flat `x0, y0, x1, y1, ...` list into points.
pub fn points_from_coords(coords: &[f64]) -> Result<Vec<Point>, Error> {
    if coords.len() % 2 != 0 {
        return Err(Error::OddCoordinateCount(coords.len()));
    }
    Ok(coords
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}
