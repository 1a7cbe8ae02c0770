//! Assign a parameter value `t` to each control point
//!
//! Three schemes are supported:
//!
//! - `Uniform`: `t[i] = i / (n - 1)`
//! - `Chordal`: `t` grows in proportion to the Euclidean distance between consecutive points
//! - `Centripetal`: as `Chordal`, but each distance is raised to the power 0.5 first
//!
//! Every scheme yields a non-decreasing sequence with `t[0] = 0` and `t[n-1] = 1`.
//! A fresh accumulator is used on every call, so the result depends only on the point
//! positions and the selected scheme.
//!
//! # Example
//!
//! ```rust
//! use bezier_sampler::{pt, ParameterizationScheme};
//! use bezier_sampler::modules::parameterize::estimate_parameters;
//!
//! let points = vec![pt!(0, 0), pt!(100, 0), pt!(100, 100)];
//! let t = estimate_parameters(&points, ParameterizationScheme::Uniform).unwrap();
//! assert_eq!(t, vec![0.0, 0.5, 1.0]);
//! ```

use crate::constants::MIN_CONTROL_POINTS;
use crate::data::{ControlPoint, Point};
use crate::error::{BezierError, BezierResult};
use serde::{Deserialize, Serialize};

/// Rule for assigning parameter values to control points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterizationScheme {
    /// Evenly spaced parameters
    #[default]
    Uniform,
    /// Chord length parameterization
    Chordal,
    /// Square root of chord length parameterization
    Centripetal,
}

impl ParameterizationScheme {
    /// Exponent applied to each chord length, `None` for the uniform scheme
    fn exponent(self) -> Option<f64> {
        match self {
            Self::Uniform => None,
            Self::Chordal => Some(1.0),
            Self::Centripetal => Some(0.5),
        }
    }
}

/// Estimate the parameter value of each point under the given scheme
pub fn estimate_parameters(
    points: &[Point],
    scheme: ParameterizationScheme,
) -> BezierResult<Vec<f64>> {
    let n = points.len();
    if n < MIN_CONTROL_POINTS {
        return Err(BezierError::NotEnoughControlPoints { found: n });
    }

    let Some(exponent) = scheme.exponent() else {
        return Ok(uniform_parameters(n));
    };

    let increments: Vec<f64> = points
        .windows(2)
        .map(|w| w[1].distance(&w[0]).powf(exponent))
        .collect();
    let total: f64 = increments.iter().sum();

    // All points coincide: there is no chord length to distribute
    if !(total > 0.0 && total.is_finite()) {
        log::debug!("zero total chord length, falling back to uniform parameters");
        return Ok(uniform_parameters(n));
    }

    let mut t_values = vec![0.0; n];
    for i in 1..n - 1 {
        t_values[i] = (t_values[i - 1] + increments[i - 1] / total).min(1.0);
    }
    t_values[n - 1] = 1.0;

    Ok(t_values)
}

/// Write the parameter of each control point in place. Positions are left untouched.
pub fn assign_parameters(
    control_points: &mut [ControlPoint],
    scheme: ParameterizationScheme,
) -> BezierResult<()> {
    let positions: Vec<Point> = control_points.iter().map(ControlPoint::position).collect();
    let t_values = estimate_parameters(&positions, scheme)?;

    for (cp, t) in control_points.iter_mut().zip(t_values) {
        cp.t = t;
    }
    Ok(())
}

fn uniform_parameters(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
}
