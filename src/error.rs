//! Error types for curve construction, sampling and the session layer.

use thiserror::Error;

/// Errors raised by the sampling engine and its collaborators
#[derive(Debug, Error)]
pub enum BezierError {
    /// The curve is undefined: fewer than two control points were supplied
    #[error("curve undefined: at least 2 control points are required, found {found}")]
    NotEnoughControlPoints { found: usize },

    /// A sampler configuration value is out of range
    #[error("invalid sampler config: {0}")]
    InvalidConfig(String),

    /// A control point index does not exist in the store
    #[error("control point index {index} out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    /// Input data could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for BezierError {
    fn from(err: serde_json::Error) -> Self {
        BezierError::Parse(err.to_string())
    }
}

pub type BezierResult<T> = Result<T, BezierError>;
