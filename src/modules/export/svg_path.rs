//! SVG path data for polylines
//!
//! Both the control polygon and the sampled approximation of the curve are polylines,
//! so they are written as a move-to followed by line-to commands.
//!
//! # Examples
//!
//! ```rust
//! use bezier_sampler::{pt, modules::export::svg_path::ToSvgPath};
//!
//! let polyline = vec![pt!(10, 20), pt!(30, 40), pt!(50, 20)];
//! assert_eq!(polyline.to_svg_path(), "M10,20 L30,40 L50,20");
//! ```

use crate::data::{ControlPoint, Point};
use crate::modules::sample::Sampling;

/// Trait for types that can be converted to SVG path data
pub trait ToSvgPath {
    /// Convert to SVG path data string
    fn to_svg_path(&self) -> String;
}

impl ToSvgPath for [Point] {
    fn to_svg_path(&self) -> String {
        let mut result = String::new();

        for (i, p) in self.iter().enumerate() {
            if i == 0 {
                result.push_str(&format!("M{},{}", p.x, p.y));
            } else {
                result.push_str(&format!(" L{},{}", p.x, p.y));
            }
        }

        result
    }
}

/// The control polygon
impl ToSvgPath for [ControlPoint] {
    fn to_svg_path(&self) -> String {
        let points: Vec<Point> = self.iter().map(ControlPoint::position).collect();
        points.to_svg_path()
    }
}

/// The sampled polyline
impl ToSvgPath for Sampling {
    fn to_svg_path(&self) -> String {
        self.points.to_svg_path()
    }
}
