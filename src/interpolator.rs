//! Assembling whole sampled curves.

use kurbo::Point;

use crate::basis::BasisCache;
use crate::error::Error;
use crate::options::CurveOptions;
use crate::points::{pad_points, points_from_coords};
use crate::polyline::Polyline;
use crate::segment::{eval_segment, eval_segments};

/// Samples cardinal splines with a fixed set of options.
///
/// The basis cache depends only on the subdivision count, so an
/// `Interpolator` can be kept around and reused, for instance once per frame.
/// It holds no mutable state and can be shared between threads.
#[derive(Clone, Debug)]
pub struct Interpolator {
    options: CurveOptions,
    basis: BasisCache,
}

/// The number of coordinates produced for `n` control points.
///
/// Each of the `n - 1` segments (plus the wrap segment when closed)
/// contributes `subdivisions` points, and the final control point is appended
/// once.
pub fn output_len(n: usize, subdivisions: usize, closed: bool) -> usize {
    let segments = if closed { n } else { n.saturating_sub(1) };
    2 * segments * subdivisions + 2
}

/// Sample a cardinal spline through `points`.
///
/// Shorthand for building an [`Interpolator`] and using it once.
pub fn interpolate(points: &[Point], options: &CurveOptions) -> Result<Polyline, Error> {
    Interpolator::new(*options)?.interpolate(points)
}

impl Interpolator {
    pub fn new(options: CurveOptions) -> Result<Interpolator, Error> {
        let basis = BasisCache::new(options.subdivisions)?;
        options.validate_tension()?;
        log::debug!(
            "interpolator: {} subdivisions, tension {}, closed {}",
            options.subdivisions,
            options.tension,
            options.closed
        );
        Ok(Interpolator { options, basis })
    }

    pub fn options(&self) -> &CurveOptions {
        &self.options
    }

    pub fn basis(&self) -> &BasisCache {
        &self.basis
    }

    /// Sample the curve through `points`.
    pub fn interpolate(&self, points: &[Point]) -> Result<Polyline, Error> {
        let mut out = Vec::new();
        self.interpolate_into(points, &mut out)?;
        Ok(Polyline::new(out, self.options.closed))
    }

    /// Sample the curve through a flat `x0, y0, x1, y1, ...` list.
    pub fn interpolate_coords(&self, coords: &[f64]) -> Result<Polyline, Error> {
        let points = points_from_coords(coords)?;
        self.interpolate(&points)
    }

    /// Sample the curve into `out`, replacing its contents.
    ///
    /// This lets a caller reuse one allocation across calls. On error `out`
    /// is left untouched.
    pub fn interpolate_into(&self, points: &[Point], out: &mut Vec<f64>) -> Result<(), Error> {
        let closed = self.options.closed;
        let tension = self.options.tension;
        let padded = pad_points(points, closed)?;
        let n = points.len();
        let len = output_len(n, self.basis.subdivisions(), closed);
        log::trace!("sampling {} control points into {} coordinates", n, len);

        out.clear();
        out.reserve_exact(len);
        eval_segments(&padded, tension, &self.basis, out);
        let end = if closed {
            let window = [points[n - 2], points[n - 1], points[0], points[1]];
            eval_segment(window, tension, &self.basis, out);
            points[0]
        } else {
            points[n - 1]
        };
        out.push(end.x);
        out.push(end.y);
        debug_assert_eq!(out.len(), len);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rand::distributions::{Distribution, Uniform};

    fn pts() -> Vec<Point> {
        vec![
            Point::new(0., 0.),
            Point::new(10., 0.),
            Point::new(10., 10.),
        ]
    }

    fn random_points(n: usize) -> Vec<Point> {
        let mut rng = rand::thread_rng();
        let coord = Uniform::from(-500.0..500.0);
        (0..n)
            .map(|_| Point::new(coord.sample(&mut rng), coord.sample(&mut rng)))
            .collect()
    }

    #[test]
    fn open_scenario() {
        let opts = CurveOptions::new().with_subdivisions(4);
        let poly = interpolate(&pts(), &opts).unwrap();
        let coords = poly.coords();
        assert_eq!(coords.len(), 18);
        assert!(!poly.is_closed());
        assert!(coords[0].abs() < 1e-12 && coords[1].abs() < 1e-12);
        assert_eq!(&coords[4..6], &[5., -0.625]);
        assert_eq!(&coords[12..14], &[10.625, 5.]);
        assert_eq!(&coords[16..18], &[10., 10.]);
    }

    #[test]
    fn closed_scenario() {
        let opts = CurveOptions::new().with_subdivisions(4).with_closed(true);
        let poly = interpolate(&pts(), &opts).unwrap();
        let coords = poly.coords();
        assert_eq!(coords.len(), 26);
        assert!(poly.is_closed());
        assert_eq!(&coords[24..26], &[0., 0.]);
        // The wrap segment starts at the last control point.
        assert_eq!(&coords[16..18], &[10., 10.]);
        assert_eq!(&coords[20..22], &[4.375, 5.625]);
    }

    #[test]
    fn length_formula() {
        for n in 2..8 {
            for &subdivisions in &[1usize, 2, 3, 20] {
                for &closed in &[false, true] {
                    let opts = CurveOptions::new()
                        .with_subdivisions(subdivisions)
                        .with_closed(closed);
                    let poly = interpolate(&random_points(n), &opts).unwrap();
                    let expected = if closed {
                        2 * (n * subdivisions) + 2
                    } else {
                        2 * ((n - 1) * subdivisions) + 2
                    };
                    assert_eq!(poly.coords().len(), expected);
                    assert_eq!(output_len(n, subdivisions, closed), expected);
                }
            }
        }
    }

    #[test]
    fn exact_terminal_point() {
        for &closed in &[false, true] {
            let points = random_points(9);
            let opts = CurveOptions::new().with_closed(closed).with_tension(0.8);
            let poly = interpolate(&points, &opts).unwrap();
            let expected = if closed { points[0] } else { points[8] };
            let last = poly.last().unwrap();
            assert_eq!(last.x.to_bits(), expected.x.to_bits());
            assert_eq!(last.y.to_bits(), expected.y.to_bits());
        }
    }

    #[test]
    fn one_subdivision_reproduces_points() {
        let points = random_points(6);
        let opts = CurveOptions::new().with_subdivisions(1);
        let poly = interpolate(&points, &opts).unwrap();
        let sampled: Vec<Point> = poly.points().collect();
        assert_eq!(sampled, points);

        let poly = interpolate(&points, &opts.with_closed(true)).unwrap();
        let sampled: Vec<Point> = poly.points().collect();
        assert_eq!(&sampled[..6], &points[..]);
        assert_eq!(sampled[6], points[0]);
    }

    #[test]
    fn zero_tension_is_piecewise_linear() {
        let points = random_points(5);
        let subdivisions = 10;
        let opts = CurveOptions::new()
            .with_tension(0.0)
            .with_subdivisions(subdivisions);
        let poly = interpolate(&points, &opts).unwrap();
        let sampled: Vec<Point> = poly.points().collect();
        for (seg_ix, chunk) in sampled[..sampled.len() - 1]
            .chunks(subdivisions)
            .enumerate()
        {
            let a = points[seg_ix];
            let b = points[seg_ix + 1];
            let chord = b - a;
            for p in chunk {
                let v = *p - a;
                let cross = chord.cross(v);
                assert!(cross.abs() < 1e-6 * chord.hypot2().max(1.0));
                let along = chord.dot(v) / chord.hypot2();
                assert!(along > -1e-9 && along < 1.0);
            }
        }
    }

    fn knot_gap(subdivisions: usize) -> f64 {
        let points = pts();
        let opts = CurveOptions::new().with_subdivisions(subdivisions);
        let poly = interpolate(&points, &opts).unwrap();
        let sampled: Vec<Point> = poly.points().collect();
        let last_of_first = sampled[subdivisions - 1];
        let first_of_second = sampled[subdivisions];
        assert_eq!(first_of_second, points[1]);
        (last_of_first - points[1]).hypot()
    }

    #[test]
    fn continuity_at_knots() {
        let scale = 10.0;
        let coarse = knot_gap(20);
        let fine = knot_gap(200);
        let finest = knot_gap(2000);
        assert!(fine < coarse);
        assert!(finest < fine);
        assert!(finest < 1e-2 * scale);
    }

    #[test]
    fn two_point_closed() {
        let points = [Point::new(0., 0.), Point::new(4., 0.)];
        let opts = CurveOptions::new().with_subdivisions(2).with_closed(true);
        let poly = interpolate(&points, &opts).unwrap();
        assert_eq!(poly.coords().len(), 10);
        let sampled: Vec<Point> = poly.points().collect();
        assert_eq!(sampled[2], points[1]);
        assert_eq!(sampled[4], points[0]);
    }

    #[test]
    fn invalid_input() {
        let opts = CurveOptions::default();
        let err = interpolate(&[Point::new(1., 1.)], &opts).unwrap_err();
        assert_eq!(err, Error::TooFewPoints(1));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(interpolate(&[], &opts), Err(Error::TooFewPoints(0)));
    }

    #[test]
    fn invalid_configuration() {
        let err = Interpolator::new(CurveOptions::new().with_subdivisions(0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
        let err = interpolate(&pts(), &CurveOptions::new().with_tension(2.0)).unwrap_err();
        assert_eq!(err, Error::TensionOutOfRange(2.0));
    }

    #[test]
    fn construction_reports_same_error_as_validate() {
        let both_bad = CurveOptions::new().with_subdivisions(0).with_tension(2.0);
        assert_eq!(
            Interpolator::new(both_bad).unwrap_err(),
            both_bad.validate().unwrap_err()
        );
        let bad_tension = CurveOptions::new().with_tension(-1.0);
        assert_eq!(
            Interpolator::new(bad_tension).unwrap_err(),
            Error::TensionOutOfRange(-1.0)
        );
    }

    #[test]
    fn reuse_buffer() {
        let interp = Interpolator::new(CurveOptions::new().with_subdivisions(3)).unwrap();
        let mut out = vec![1.0; 100];
        interp.interpolate_into(&pts(), &mut out).unwrap();
        assert_eq!(out, interp.interpolate(&pts()).unwrap().into_vec());

        let before = out.clone();
        assert!(interp.interpolate_into(&pts()[..1], &mut out).is_err());
        assert_eq!(out, before);
    }

    #[test]
    fn flat_coordinates() {
        let interp = Interpolator::new(CurveOptions::new().with_subdivisions(4)).unwrap();
        let from_coords = interp
            .interpolate_coords(&[0., 0., 10., 0., 10., 10.])
            .unwrap();
        assert_eq!(from_coords, interp.interpolate(&pts()).unwrap());
        assert_eq!(
            interp.interpolate_coords(&[0., 0., 10.]),
            Err(Error::OddCoordinateCount(3))
        );
        assert_eq!(
            interp.interpolate_coords(&[0., 0.]),
            Err(Error::TooFewPoints(1))
        );
    }

    #[test]
    fn shared_between_threads() {
        let interp = std::sync::Arc::new(Interpolator::new(CurveOptions::default()).unwrap());
        let expected = interp.interpolate(&pts()).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let interp = interp.clone();
                std::thread::spawn(move || interp.interpolate(&pts()).unwrap())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    }
}
