//! Run settings
//!
//! Loaded from a JSON file; any field left out falls back to its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_TRACE_SAMPLES;
use crate::error::PuckError;
use crate::sim::MotionParams;

/// Parameters for one trajectory run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Launch conditions and rotation rate
    pub motion: MotionParams,

    // === Bowl ===
    /// Rim radius of the paraboloid (units)
    pub rim_radius: f64,

    // === Sampling ===
    /// Seconds between trace samples
    pub time_step: f64,
    /// Last sample time (seconds)
    pub max_duration: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            motion: MotionParams::default(),

            rim_radius: 5.0,

            time_step: 0.05,
            max_duration: 20.0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json_str(json: &str) -> Result<Self, PuckError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PuckError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| PuckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json_string(&self) -> Result<String, PuckError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of samples a full-length trace would take (including t = 0).
    ///
    /// Fails for settings that do not pass [`Settings::validate`].
    pub fn sample_count(&self) -> Result<usize, PuckError> {
        self.validate()?;
        Ok((self.max_duration / self.time_step).floor() as usize + 1)
    }

    /// Reject values the closed form or the sampler cannot use
    pub fn validate(&self) -> Result<(), PuckError> {
        let omega = self.motion.omega;
        if !omega.is_finite() || omega == 0.0 {
            return Err(invalid(format!("omega must be finite and nonzero, got {omega}")));
        }
        // JSON has no encoding for inf/NaN, so these could not be saved and reloaded
        for (name, value) in [
            ("u0", self.motion.u0),
            ("v0", self.motion.v0),
            ("x0", self.motion.x0),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite, got {value}")));
            }
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(invalid(format!(
                "time_step must be finite and positive, got {}",
                self.time_step
            )));
        }
        if !self.max_duration.is_finite() || self.max_duration < 0.0 {
            return Err(invalid(format!(
                "max_duration must be finite and non-negative, got {}",
                self.max_duration
            )));
        }
        if !self.rim_radius.is_finite() || self.rim_radius < 0.0 {
            return Err(invalid(format!(
                "rim_radius must be finite and non-negative, got {}",
                self.rim_radius
            )));
        }
        if self.max_duration / self.time_step >= MAX_TRACE_SAMPLES as f64 {
            return Err(invalid(format!(
                "{}s at {}s steps exceeds {MAX_TRACE_SAMPLES} samples",
                self.max_duration, self.time_step
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> PuckError {
    PuckError::InvalidSettings(msg)
}
