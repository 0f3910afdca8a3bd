//! A simple test program that samples a random closed cardinal spline.
//!
//! This interpolates a sequence of random points and outputs an SVG.
//! Set `RUST_LOG=trace` to see what the interpolator is doing.

use rand::distributions::{Distribution, Uniform};

use kurbo::Point;

use cardinal::{CurveOptions, Interpolator};

fn main() -> Result<(), cardinal::Error> {
    env_logger::init();
    let mut rng = rand::thread_rng();
    const N: usize = 10;
    let pts = (0..N)
        .map(|_| {
            let x = Uniform::from(0.0..500.0).sample(&mut rng);
            let y = Uniform::from(0.0..500.0).sample(&mut rng);
            Point::new(x, y)
        })
        .collect::<Vec<_>>();
    let opts = CurveOptions::new().with_closed(true);
    let interp = Interpolator::new(opts)?;
    let path = interp.interpolate(&pts)?.to_bez_path();
    println!(
        r##"<!DOCTYPE html>
    <html>
    <body>
    <svg height="500" width="500">
      <path d="{}" fill="none" stroke="#000" />"##,
        path.to_svg()
    );
    for pt in &pts {
        println!(
            r#"      <circle cx="{}" cy="{}" r="3" fill="blue" />"#,
            pt.x, pt.y
        )
    }
    println!(
        r#"    </svg>
    </body>
    </html>"#
    );
    Ok(())
}
