//! Paraboloid Puck - closed-form motion of a puck in a rotating bowl
//!
//! Core modules:
//! - `sim`: Pure motion math (position, rim polygon, edge check) and the trace sampler
//! - `settings`: Data-driven run parameters loaded from JSON
//! - `error`: Crate error type

pub mod error;
pub mod settings;
pub mod sim;

pub use error::PuckError;
pub use settings::Settings;
pub use sim::{
    MotionParams, RimPolygon, Trace, TraceSample, check_edge, check_edge_point, circle, position,
    sample_trajectory, surface_height, try_position,
};

use glam::DVec2;

/// Physical and geometric constants
pub mod consts {
    /// Gravitational acceleration used by the bowl model (m/s²)
    pub const GRAVITY: f64 = 9.817;

    /// Number of segments in the rim polygon
    pub const RIM_SEGMENTS: usize = 100;
    /// Points in the rim polygon (segments + 1 closing point)
    pub const RIM_POINTS: usize = RIM_SEGMENTS + 1;

    /// Upper bound on samples a single trace may produce
    pub const MAX_TRACE_SAMPLES: usize = 1_000_000;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: DVec2) -> (f64, f64) {
    (pos.length(), pos.y.atan2(pos.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_polar_roundtrip_quarter_turn() {
        let p = polar_to_cartesian(2.0, PI / 2.0);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);

        let (r, theta) = cartesian_to_polar(p);
        assert!((r - 2.0).abs() < 1e-12);
        assert!((theta - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_rim_points_closes_polygon() {
        assert_eq!(consts::RIM_POINTS, 101);
    }
}
