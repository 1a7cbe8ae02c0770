//! Adaptive sampling of a Bezier curve into a polyline
//!
//! # Example
//!
//! ```rust
//! use bezier_sampler::{pt, sample_curve, SamplerConfig};
//!
//! let points = vec![pt!(0, 0), pt!(100, 0), pt!(100, 100)];
//! let sampling = sample_curve(&points, &SamplerConfig::default()).unwrap();
//!
//! assert_eq!(sampling.points[0], pt!(0, 0));
//! assert_eq!(*sampling.points.last().unwrap(), pt!(100, 100));
//! ```

pub mod config;
pub mod curvature;

pub use config::SamplerConfig;
pub use curvature::{sample_bezier, sample_curve, Sampling};
