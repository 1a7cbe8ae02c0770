//! SVG rendering of an editing scene
//!
//! Draws the same layers the interactive view does: control points, the control polygon,
//! and the sampled curve as points and/or a polyline, each according to [`DisplayOptions`].
//!
//! Input coordinates are canvas coordinates with the origin at the bottom-left corner.
//! They are flipped into SVG's top-left convention on output.
//!
//! # Example
//!
//! ```rust
//! use bezier_sampler::{control_points, pt, sample_curve, DisplayOptions, SamplerConfig};
//! use bezier_sampler::modules::export::svg;
//!
//! let control = control_points!([(10, 10), (90, 10), (90, 90)]);
//! let sampling = sample_curve(&[pt!(10, 10), pt!(90, 10), pt!(90, 90)], &SamplerConfig::default()).unwrap();
//!
//! let options = DisplayOptions {
//!     draw_line_spline: true,
//!     ..DisplayOptions::default()
//! };
//! let svg_string = svg::to_svg(&control, Some(&sampling), &options, 100, 100);
//! assert!(svg_string.contains("<rect"));
//! assert!(svg_string.contains("<circle"));
//! ```

use crate::data::{ControlPoint, Point};
use crate::error::BezierResult;
use crate::modules::export::svg_path::ToSvgPath;
use crate::modules::sample::Sampling;
use crate::session::{CurveSession, DisplayOptions};
use std::path::Path as FilePath;
use svg::node::element::{Circle, Path, Rectangle};
use svg::Document;

const CONTROL_POINT_SIZE: f64 = 10.0;
const SPLINE_POINT_RADIUS: f64 = 3.5;
const CONTROL_COLOR: &str = "black";
const SELECTED_COLOR: &str = "olive";
const SPLINE_COLOR: &str = "red";

/// Build the SVG document for a scene
pub fn to_document(
    control_points: &[ControlPoint],
    sampling: Option<&Sampling>,
    options: &DisplayOptions,
    width: u32,
    height: u32,
) -> Document {
    let flip = |p: Point| Point::new(p.x, height as f64 - p.y);

    let mut document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0, 0, width, height));

    if options.draw_control_polygon && control_points.len() > 1 {
        let polygon: Vec<Point> = control_points.iter().map(|cp| flip(cp.position())).collect();
        document = document.add(polyline(&polygon, CONTROL_COLOR));
    }

    if options.draw_line_spline {
        if let Some(sampling) = sampling {
            let spline: Vec<Point> = sampling.points.iter().map(|&p| flip(p)).collect();

            if options.visualize_with_line {
                document = document.add(polyline(&spline, SPLINE_COLOR));
            }
            if options.visualize_with_points {
                for p in &spline {
                    let circle = Circle::new()
                        .set("cx", p.x)
                        .set("cy", p.y)
                        .set("r", SPLINE_POINT_RADIUS)
                        .set("fill", SPLINE_COLOR);
                    document = document.add(circle);
                }
            }
        }
    }

    if options.show_control_points {
        for cp in control_points {
            let p = flip(cp.position());
            let fill = if cp.selected {
                SELECTED_COLOR
            } else {
                CONTROL_COLOR
            };
            let square = Rectangle::new()
                .set("x", p.x - CONTROL_POINT_SIZE / 2.0)
                .set("y", p.y - CONTROL_POINT_SIZE / 2.0)
                .set("width", CONTROL_POINT_SIZE)
                .set("height", CONTROL_POINT_SIZE)
                .set("fill", fill);
            document = document.add(square);
        }
    }

    document
}

/// Export a scene to an SVG string
pub fn to_svg(
    control_points: &[ControlPoint],
    sampling: Option<&Sampling>,
    options: &DisplayOptions,
    width: u32,
    height: u32,
) -> String {
    to_document(control_points, sampling, options, width, height).to_string()
}

/// Export the current state of a session to an SVG string
pub fn session_to_svg(session: &CurveSession, width: u32, height: u32) -> String {
    to_svg(
        session.store().as_slice(),
        session.sampling(),
        session.options(),
        width,
        height,
    )
}

/// Write the current state of a session to an SVG file
pub fn save_session(
    path: &FilePath,
    session: &CurveSession,
    width: u32,
    height: u32,
) -> BezierResult<()> {
    let document = to_document(
        session.store().as_slice(),
        session.sampling(),
        session.options(),
        width,
        height,
    );
    svg::save(path, &document)?;
    log::info!("scene written to {}", path.display());
    Ok(())
}

fn polyline(points: &[Point], color: &str) -> Path {
    Path::new()
        .set("fill", "none")
        .set("stroke", color)
        .set("stroke-width", 1)
        .set("d", points.to_svg_path())
}
