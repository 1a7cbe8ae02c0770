//! Tunable parameters of the curvature sampler.

use crate::constants::{DEFAULT_MAX_PARAMETER_STEP, DEFAULT_MAX_SAMPLES, DEFAULT_SAGITTA_TOLERANCE};
use crate::error::{BezierError, BezierResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration of one sampling pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Maximum sagitta (chord-to-arc distance) per step, in coordinate units
    pub tolerance: f64,
    /// Maximum number of emitted points, including the final control point
    pub max_samples: usize,
    /// Upper bound on the parameter increment of one step.
    ///
    /// Applies to every step, not only to the fallback used where the curvature radius is
    /// undefined. A walk therefore emits at least about `1 / max_step + 1` points (21 with
    /// the default) however loose the tolerance is.
    pub max_step: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_SAGITTA_TOLERANCE,
            max_samples: DEFAULT_MAX_SAMPLES,
            max_step: DEFAULT_MAX_PARAMETER_STEP,
        }
    }
}

impl SamplerConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    pub fn with_max_step(mut self, max_step: f64) -> Self {
        self.max_step = max_step;
        self
    }

    pub fn validate(&self) -> BezierResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(BezierError::InvalidConfig(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_samples < 2 {
            return Err(BezierError::InvalidConfig(format!(
                "max_samples must be at least 2, got {}",
                self.max_samples
            )));
        }
        if !(self.max_step > 0.0 && self.max_step <= 1.0) {
            return Err(BezierError::InvalidConfig(format!(
                "max_step must be in (0, 1], got {}",
                self.max_step
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their default values.
    pub fn from_json_str(json: &str) -> BezierResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, falling back to the defaults if it is missing or invalid
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_json_str(&content) {
                Ok(config) => {
                    log::info!("sampler config loaded from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("invalid sampler config {}, using defaults: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no sampler config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save_to_file(&self, path: &Path) -> BezierResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("sampler config saved to {}", path.display());
        Ok(())
    }
}
