//! A single global Bezier curve of degree `n - 1` over `n` control points.
//!
//! The curve is the Bernstein form on `[0, 1]`:
//!
//! ```text
//! r(t)   = Σ C(i, n-1) t^i (1-t)^(n-1-i) P[i]
//! r'(t)  = (n-1) Σ C(i, n-2) t^i (1-t)^(n-2-i) ΔP[i]           ΔP[i]  = P[i+1] - P[i]
//! r''(t) = (n-1)(n-2) Σ C(i, n-3) t^i (1-t)^(n-3-i) Δ²P[i]      Δ²P[i] = ΔP[i+1] - ΔP[i]
//! ```
//!
//! Each sum is evaluated with de Casteljau's repeated linear interpolation, which needs no
//! binomial coefficients and therefore works for any degree. Every intermediate value is a
//! convex combination of control points, and `t = 0` and `t = 1` reproduce the first and
//! last coefficient exactly.
//!
//! # Example
//!
//! ```rust
//! use bezier_sampler::{curve, pt};
//!
//! let curve = curve!([(0, 0), (100, 0), (100, 100)]).unwrap();
//! assert_eq!(curve.point_at(0.5), pt!(75, 25));
//! ```

use crate::constants::{CURVATURE_EPSILON, MIN_CONTROL_POINTS, SPEED_EPSILON};
use crate::data::control_point::ControlPoint;
use crate::data::point::Point;
use crate::error::{BezierError, BezierResult};

/// Position and first two derivatives of the curve at one parameter value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveFrame {
    pub position: Point,
    pub first: Point,
    pub second: Point,
}

impl CurveFrame {
    /// Magnitude of the first derivative
    pub fn speed(&self) -> f64 {
        self.first.norm()
    }

    /// Magnitude of `r'(t) x r''(t)` with both vectors embedded at z = 0
    pub fn curvature_normal_norm(&self) -> f64 {
        self.first
            .to_vector3()
            .cross(&self.second.to_vector3())
            .norm()
    }

    /// Radius of the osculating circle, `|r'|^3 / |r' x r''|`.
    ///
    /// Returns `None` where the curve is stationary or locally straight.
    pub fn curvature_radius(&self) -> Option<f64> {
        let speed = self.speed();
        if speed <= SPEED_EPSILON {
            return None;
        }
        let normal = self.curvature_normal_norm();
        if normal <= CURVATURE_EPSILON * speed * speed {
            return None;
        }
        let radius = speed.powi(3) / normal;
        radius.is_finite().then_some(radius)
    }
}

/// A Bezier curve defined by its ordered control points
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve {
    points: Vec<Point>,
    /// Forward differences of the control points, length `n - 1`
    first_differences: Vec<Point>,
    /// Second forward differences, length `n - 2` (empty for lines)
    second_differences: Vec<Point>,
}

impl BezierCurve {
    /// Create a curve from at least two control points
    pub fn new(points: Vec<Point>) -> BezierResult<Self> {
        if points.len() < MIN_CONTROL_POINTS {
            return Err(BezierError::NotEnoughControlPoints {
                found: points.len(),
            });
        }

        let first_differences: Vec<Point> = points.windows(2).map(|w| w[1] - w[0]).collect();
        let second_differences: Vec<Point> = first_differences
            .windows(2)
            .map(|w| w[1] - w[0])
            .collect();

        Ok(Self {
            points,
            first_differences,
            second_differences,
        })
    }

    /// Create a curve from the positions of the given control points
    pub fn from_control_points(control_points: &[ControlPoint]) -> BezierResult<Self> {
        Self::new(control_points.iter().map(ControlPoint::position).collect())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Degree of the curve, one less than the number of control points
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Get a point on the bezier curve at parameter t (0 <= t <= 1)
    pub fn point_at(&self, t: f64) -> Point {
        de_casteljau(&self.points, t)
    }

    /// First derivative `r'(t)`
    pub fn derivative_at(&self, t: f64) -> Point {
        let n = self.points.len() as f64;
        de_casteljau(&self.first_differences, t) * (n - 1.0)
    }

    /// Second derivative `r''(t)`; the zero vector for curves of degree below 2
    pub fn second_derivative_at(&self, t: f64) -> Point {
        if self.second_differences.is_empty() {
            return Point::default();
        }
        let n = self.points.len() as f64;
        de_casteljau(&self.second_differences, t) * ((n - 1.0) * (n - 2.0))
    }

    /// Position and both derivatives at `t` from a single de Casteljau pass.
    ///
    /// The last three intermediate points span the second derivative, the last two the
    /// first derivative.
    pub fn frame_at(&self, t: f64) -> CurveFrame {
        let degree = self.degree() as f64;
        let mut work = self.points.clone();

        de_casteljau_reduce(&mut work, t, 3);
        let second = if work.len() == 3 {
            (work[0] - work[1] * 2.0 + work[2]) * (degree * (degree - 1.0))
        } else {
            Point::default()
        };

        de_casteljau_reduce(&mut work, t, 2);
        let first = (work[1] - work[0]) * degree;

        de_casteljau_reduce(&mut work, t, 1);
        CurveFrame {
            position: work[0],
            first,
            second,
        }
    }

    /// Osculating circle radius at `t`, `None` where the curve is straight or stationary
    pub fn curvature_radius_at(&self, t: f64) -> Option<f64> {
        self.frame_at(t).curvature_radius()
    }

    /// Generate a series of evenly spaced (in parameter) points along the curve
    pub fn sample_points(&self, num_points: usize) -> Vec<Point> {
        match num_points {
            0 => Vec::new(),
            1 => vec![self.start()],
            _ => (0..num_points)
                .map(|i| {
                    let t = i as f64 / (num_points - 1) as f64;
                    self.point_at(t)
                })
                .collect(),
        }
    }
}

/// Evaluate `Σ C(i, m) t^i (1-t)^(m-i) coefficients[i]` with `m = coefficients.len() - 1`
fn de_casteljau(coefficients: &[Point], t: f64) -> Point {
    let mut work = coefficients.to_vec();
    de_casteljau_reduce(&mut work, t, 1);
    work[0]
}

/// Apply de Casteljau steps in place until `len` points remain
fn de_casteljau_reduce(work: &mut Vec<Point>, t: f64, len: usize) {
    let t1 = 1.0 - t;
    while work.len() > len {
        for i in 0..work.len() - 1 {
            work[i] = work[i] * t1 + work[i + 1] * t;
        }
        work.pop();
    }
}
