//! Trajectory sampling
//!
//! Evaluates the closed-form position at fixed time steps and stops at the
//! first sample that is no longer inside the rim. Every sample is computed
//! independently from `t`; nothing is integrated or accumulated.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::edge::check_edge;
use super::motion::MotionParams;
use super::rim::{RimPolygon, circle};
use crate::error::PuckError;
use crate::settings::Settings;

/// One sampled instant of the puck's motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceSample {
    /// Sample time (seconds)
    pub t: f64,
    pub position: DVec3,
    /// Strictly inside the rim at this instant
    pub within_rim: bool,
}

/// Sampled trajectory plus the rim it was checked against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub motion: MotionParams,
    pub rim_radius: f64,
    pub rim: RimPolygon,
    pub samples: Vec<TraceSample>,
    /// Time of the first sample outside the rim, if the puck left the bowl
    pub left_rim_at: Option<f64>,
}

impl Trace {
    /// Whether the puck reached or crossed the rim within the sampled window
    pub fn left_rim(&self) -> bool {
        self.left_rim_at.is_some()
    }

    /// Highest surface point reached over the sampled window
    pub fn max_height(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|s| s.position.z)
            .fold(None, |acc, z| Some(acc.map_or(z, |m: f64| m.max(z))))
    }
}

/// Sample the trajectory described by `settings`.
///
/// The sample that first fails the rim check is kept as the last entry.
pub fn sample_trajectory(settings: &Settings) -> Result<Trace, PuckError> {
    let count = settings.sample_count()?;
    let motion = settings.motion;
    let mut samples = Vec::with_capacity(count);
    let mut left_rim_at = None;

    for k in 0..count {
        let t = k as f64 * settings.time_step;
        let position = motion.try_position_at(t)?;
        let within_rim = check_edge(position.x, position.y, settings.rim_radius);

        samples.push(TraceSample {
            t,
            position,
            within_rim,
        });

        if !within_rim {
            log::info!(
                "Puck left rim (r={}) at t={:.3}s, sample {}",
                settings.rim_radius,
                t,
                k
            );
            left_rim_at = Some(t);
            break;
        }
    }

    log::debug!(
        "Sampled {} of {} points (omega={}, dt={})",
        samples.len(),
        count,
        motion.omega,
        settings.time_step
    );

    Ok(Trace {
        motion,
        rim_radius: settings.rim_radius,
        rim: circle(settings.rim_radius),
        samples,
        left_rim_at,
    })
}
