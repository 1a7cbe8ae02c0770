//! Curvature adaptive sampling of a Bezier curve
//!
//! The walk starts at `t = 0` and repeatedly
//!
//! 1. emits `r(t)`,
//! 2. evaluates `r'(t)` and `r''(t)`,
//! 3. computes the osculating circle radius `ρ = |r'|^3 / |r' x r''|`,
//! 4. picks the chord whose sagitta on that circle equals the tolerance `δ`,
//!    `chord = 2 sqrt(δ (2ρ - δ))`, and converts it to a parameter step `Δt = chord / |r'|`,
//!
//! until `t >= 1`. The exact last control point is then appended, so the polyline always
//! closes on the true endpoint.
//!
//! Where `ρ` is unusable (zero speed, zero curvature, non-finite values) the step falls
//! back to `max_step`. Every step is also clamped to `max_step`, and the number of emitted
//! points never exceeds `max_samples`.

use crate::data::{BezierCurve, CurveFrame, Point, SplinePoint};
use crate::error::BezierResult;
use crate::modules::sample::config::SamplerConfig;
use serde::Serialize;

/// Result of one sampling pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sampling {
    /// Sampled points, starting at `r(0)` and ending with the exact last control point
    pub points: Vec<SplinePoint>,
    /// Curve parameter of each sampled point
    pub parameters: Vec<f64>,
    /// Number of steps that used the fallback step instead of the sagitta rule
    pub fallback_steps: usize,
    /// The walk hit `max_samples` before reaching `t = 1`
    pub truncated: bool,
}

impl Sampling {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum WalkState {
    Walking { t: f64 },
    Done,
}

/// How the next parameter step was chosen
#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Sagitta(f64),
    Fallback(f64),
}

struct CurvatureSampler<'a> {
    curve: &'a BezierCurve,
    config: &'a SamplerConfig,
}

impl<'a> CurvatureSampler<'a> {
    fn new(curve: &'a BezierCurve, config: &'a SamplerConfig) -> Self {
        Self { curve, config }
    }

    /// Parameter step that keeps the chord within `tolerance` of the osculating circle
    fn step(&self, frame: &CurveFrame) -> Step {
        let fallback = Step::Fallback(self.config.max_step);

        let Some(radius) = frame.curvature_radius() else {
            return fallback;
        };

        let tolerance = self.config.tolerance;
        let chord = if 2.0 * radius > tolerance {
            2.0 * (tolerance * (2.0 * radius - tolerance)).sqrt()
        } else {
            // The whole circle lies within the tolerance band, the diameter is the longest chord
            2.0 * radius
        };

        let dt = chord / frame.speed();
        if dt.is_finite() && dt > 0.0 {
            Step::Sagitta(dt.min(self.config.max_step))
        } else {
            fallback
        }
    }

    fn run(&self) -> Sampling {
        let capacity = self.config.max_samples;
        let mut points = Vec::new();
        let mut parameters = Vec::new();
        let mut fallback_steps = 0;
        let mut truncated = false;

        let mut state = WalkState::Walking { t: 0.0 };
        while let WalkState::Walking { t } = state {
            // keep one slot for the final control point
            if points.len() + 1 >= capacity {
                truncated = true;
                state = WalkState::Done;
                continue;
            }

            let frame = self.curve.frame_at(t);
            points.push(frame.position);
            parameters.push(t);

            let dt = match self.step(&frame) {
                Step::Sagitta(dt) => dt,
                Step::Fallback(dt) => {
                    fallback_steps += 1;
                    dt
                }
            };

            let next = t + dt;
            state = if next >= 1.0 {
                WalkState::Done
            } else {
                WalkState::Walking { t: next }
            };
        }

        points.push(self.curve.end());
        parameters.push(1.0);

        if truncated {
            log::warn!(
                "sampling truncated at {} points before reaching t = 1 (last t = {:.6})",
                capacity,
                parameters[parameters.len() - 2]
            );
        }
        log::debug!(
            "sampled degree {} curve into {} points ({} fallback steps)",
            self.curve.degree(),
            points.len(),
            fallback_steps
        );

        Sampling {
            points,
            parameters,
            fallback_steps,
            truncated,
        }
    }
}

/// Sample a curve with the curvature adaptive step rule
pub fn sample_bezier(curve: &BezierCurve, config: &SamplerConfig) -> BezierResult<Sampling> {
    config.validate()?;
    Ok(CurvatureSampler::new(curve, config).run())
}

/// Sample the Bezier curve defined by `points`.
///
/// Fails with `NotEnoughControlPoints` for fewer than two points, and with
/// `InvalidConfig` for an out of range configuration.
pub fn sample_curve(points: &[Point], config: &SamplerConfig) -> BezierResult<Sampling> {
    let curve = BezierCurve::new(points.to_vec())?;
    sample_bezier(&curve, config)
}
