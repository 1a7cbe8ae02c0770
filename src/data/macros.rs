//! This module provides convenient macros for creating points, control points, and curves.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64)
    };
}

/// Macro for creating a vector of control points from coordinate pairs
#[macro_export]
macro_rules! control_points {
    ([$(($x:expr, $y:expr)),* $(,)?]) => {
        vec![$($crate::data::ControlPoint::new($x as f64, $y as f64)),*]
    };
}

/// Macro for creating a Bezier curve from coordinate pairs.
///
/// Evaluates to a `BezierResult<BezierCurve>`, since fewer than two points do not define a curve.
#[macro_export]
macro_rules! curve {
    ([$(($x:expr, $y:expr)),* $(,)?]) => {
        $crate::data::BezierCurve::new(vec![$($crate::pt!($x, $y)),*])
    };

    // Create from an existing vector of points
    ($points:expr) => {
        $crate::data::BezierCurve::new($points)
    };
}

#[cfg(test)]
mod tests {
    use crate::data::{ControlPoint, Point};

    #[test]
    fn test_macros() {
        assert_eq!(pt!(1, 2), Point::new(1.0, 2.0));

        let cps = control_points!([(0, 0), (10, 5)]);
        assert_eq!(cps, vec![ControlPoint::new(0.0, 0.0), ControlPoint::new(10.0, 5.0)]);

        let c = curve!([(0, 0), (100, 0), (100, 100)]).unwrap();
        assert_eq!(c.degree(), 2);

        let c = curve!(vec![pt!(0, 0), pt!(1, 1)]).unwrap();
        assert_eq!(c.degree(), 1);
    }
}
