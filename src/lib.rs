// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;
pub mod session;

// export the core data structure at crate level
pub use data::control_point::ControlPoint;
pub use data::curve::BezierCurve;
pub use data::point::{Point, SplinePoint};
pub use error::{BezierError, BezierResult};
pub use modules::parameterize::ParameterizationScheme;
pub use modules::sample::{sample_curve, SamplerConfig, Sampling};
pub use session::{ControlPointStore, CurveSession, DisplayOptions, PlotOption, PointerButton};
