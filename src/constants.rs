//! Design constants shared by the sampler and the session layer.

/// Maximum perpendicular distance between an emitted chord and the true curve,
/// in the same units as the control point coordinates (canvas pixels).
pub const DEFAULT_SAGITTA_TOLERANCE: f64 = 0.001;

/// Default upper bound on the number of points one sampling pass may emit.
pub const DEFAULT_MAX_SAMPLES: usize = 1000;

/// Largest parameter increment taken in a single step. Also used as the
/// fallback step when the local curvature radius is unusable.
pub const DEFAULT_MAX_PARAMETER_STEP: f64 = 0.05;

/// A curve needs a start and an end point.
pub const MIN_CONTROL_POINTS: usize = 2;

/// Half the side length of the square pick region around a control point.
pub const PICK_HALF_SIZE: f64 = 5.0;

/// Speeds below this are treated as a stationary point of the curve.
pub const SPEED_EPSILON: f64 = 1e-12;

/// Relative curvature below this (|r' x r''| / |r'|^2) is treated as straight.
pub const CURVATURE_EPSILON: f64 = 1e-12;
