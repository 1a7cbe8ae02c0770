//! Control points as JSON
//!
//! The format is an array of objects with `x` and `y` fields. Any other field is ignored,
//! so a serialized [`ControlPoint`] (which also carries `t` and `selected`) reads back fine.
//!
//! ```rust
//! use bezier_sampler::{pt, modules::parse::json};
//!
//! let points = json::parse_points(r#"[{"x": 0, "y": 0}, {"x": 100.5, "y": 20}]"#).unwrap();
//! assert_eq!(points, vec![pt!(0, 0), pt!(100.5, 20)]);
//! ```

use crate::data::{ControlPoint, Point};
use crate::error::BezierResult;
use std::path::Path;

/// Parse an array of `{"x": .., "y": ..}` objects
pub fn parse_points(json: &str) -> BezierResult<Vec<Point>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse control points, with parameters reset and nothing selected
pub fn parse_control_points(json: &str) -> BezierResult<Vec<ControlPoint>> {
    Ok(parse_points(json)?
        .into_iter()
        .map(ControlPoint::from)
        .collect())
}

pub fn load_points(path: &Path) -> BezierResult<Vec<Point>> {
    let content = std::fs::read_to_string(path)?;
    let points = parse_points(&content)?;
    log::info!("loaded {} points from {}", points.len(), path.display());
    Ok(points)
}

pub fn to_json(points: &[Point]) -> BezierResult<String> {
    Ok(serde_json::to_string(points)?)
}
