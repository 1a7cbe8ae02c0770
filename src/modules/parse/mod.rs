//! Parsing module for control points
//!
//! Now supported format:
//! - JSON:
//!     in the form of `[{"x": 0.0, "y": 0.0}, {"x": 100.0, "y": 0.0}, {"x": 100.0, "y": 100.0}]`.
//!     See the `json` module for more detailed information on the JSON format.
//! - SVG path data:
//!     Parse the vertices of a polyline (`M`/`L` commands) as control points.

pub mod json;
pub mod svg_path;
