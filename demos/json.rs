//! Render cardinal splines described in a JSON file as an SVG.
//!
//! The file holds a list of subpaths:
//!
//! ```json
//! { "subpaths": [ { "pts": [[0, 0], [100, 0], [100, 100]], "options": { "closed": true } } ] }
//! ```

use serde_::Deserialize;

use kurbo::{BezPath, Point};

use cardinal::{interpolate, CurveOptions};

#[derive(Deserialize, Debug)]
#[serde(crate = "serde_")]
struct Path {
    subpaths: Vec<Subpath>,
}

#[derive(Deserialize, Debug)]
#[serde(crate = "serde_")]
struct Subpath {
    pts: Vec<(f64, f64)>,
    #[serde(default)]
    options: CurveOptions,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let path = std::env::args().nth(1).ok_or("needs filename")?;
    let data = std::fs::read_to_string(path)?;
    let path: Path = serde_json::from_str(&data)?;
    let mut bp = BezPath::new();
    for subpath in &path.subpaths {
        let pts: Vec<Point> = subpath.pts.iter().map(|&(x, y)| Point::new(x, y)).collect();
        interpolate(&pts, &subpath.options)?.render_extend(&mut bp);
    }
    println!(
        r##"<!DOCTYPE html>
<html>
    <body>
    <svg height="500" width="500">
      <path d="{}" fill="none" stroke="#000" />"##,
        bp.to_svg()
    );
    println!(
        r#"    </svg>
    </body>
</html>"#
    );
    Ok(())
}
