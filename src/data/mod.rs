//! Core data structures: points, control points and the single global Bezier curve.

#[macro_use]
pub mod macros;
pub mod control_point;
pub mod curve;
pub mod point;

pub use control_point::ControlPoint;
pub use curve::{BezierCurve, CurveFrame};
pub use point::{Point, SplinePoint};
