//! Closed-form puck position on a rotating paraboloid
//!
//! The bowl surface is `z = (omega² / g)(x² + y²)`. In the co-rotating frame the
//! puck oscillates harmonically at `omega`, so its horizontal position is a
//! cosine/sine blend of the initial displacement and velocity.
//!
//! Known quirk: `y` is evaluated with the same expression as `x` and `v0` is
//! never read. The upstream model does this and intent is unclear, so the
//! behavior is kept as-is. Do not rely on `v0` having any effect.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::consts::GRAVITY;
use crate::error::PuckError;

/// Initial conditions and rotation rate for one puck launch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionParams {
    /// Effective rotation rate (rad/s), must be nonzero
    pub omega: f64,
    /// Initial x velocity (units/s)
    pub u0: f64,
    /// Initial y velocity (units/s); currently unused by the solution
    pub v0: f64,
    /// Initial x displacement (units)
    pub x0: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            omega: 1.0,
            u0: 4.0,
            v0: 0.0,
            x0: 1.0,
        }
    }
}

impl MotionParams {
    pub fn new(omega: f64, u0: f64, v0: f64, x0: f64) -> Self {
        Self { omega, u0, v0, x0 }
    }

    /// Position at time `t`, see [`position`]
    #[inline]
    pub fn position_at(&self, t: f64) -> DVec3 {
        position(t, self.omega, self.u0, self.v0, self.x0)
    }

    /// Checked position at time `t`, see [`try_position`]
    #[inline]
    pub fn try_position_at(&self, t: f64) -> Result<DVec3, PuckError> {
        try_position(t, self.omega, self.u0, self.v0, self.x0)
    }
}

/// Height of the paraboloid surface above (x, y) for rotation rate `omega`
#[inline]
pub fn surface_height(x: f64, y: f64, omega: f64) -> f64 {
    omega.powi(2) / GRAVITY * (x * x + y * y)
}

/// Puck position `(x, y, z)` at time `t`.
///
/// Follows IEEE-754 for `omega == 0`: `u0 / omega` becomes infinite or NaN and
/// the result carries non-finite components. Use [`try_position`] to reject a
/// zero rotation rate instead.
///
/// `v0` is accepted for signature compatibility but has no effect, and
/// `y == x` for every input (see module docs).
pub fn position(t: f64, omega: f64, u0: f64, _v0: f64, x0: f64) -> DVec3 {
    let (sin, cos) = (omega * t).sin_cos();

    let x = x0 * cos + u0 / omega * sin;
    let y = x0 * cos + u0 / omega * sin;
    let z = surface_height(x, y, omega);

    DVec3::new(x, y, z)
}

/// Like [`position`], but fails with [`PuckError::ZeroOmega`] when `omega == 0`
pub fn try_position(t: f64, omega: f64, u0: f64, v0: f64, x0: f64) -> Result<DVec3, PuckError> {
    if omega == 0.0 {
        return Err(PuckError::ZeroOmega);
    }
    Ok(position(t, omega, u0, v0, x0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_position_at_rest_start() {
        let p = position(0.0, 1.0, 0.0, 0.0, 5.0);
        assert_eq!(p.x, 5.0);
        assert_eq!(p.y, 5.0);
        assert!((p.z - 50.0 / GRAVITY).abs() < 1e-12);
        assert!((p.z - 5.0932).abs() < 1e-4);
    }

    #[test]
    fn test_position_quarter_period() {
        // theta = pi/2: displacement term vanishes, velocity term peaks
        let omega = 2.0;
        let t = PI / (2.0 * omega);
        let p = position(t, omega, 6.0, 0.0, 1.0);
        assert!((p.x - 3.0).abs() < 1e-12);
        assert!((p.y - 3.0).abs() < 1e-12);
        assert!((p.z - 4.0 / GRAVITY * 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_position_ignores_v0() {
        let a = position(1.3, 0.7, 2.0, 0.0, -1.5);
        let b = position(1.3, 0.7, 2.0, 123.0, -1.5);
        assert_eq!(a, b);
        assert_eq!(a.x, a.y);
    }

    #[test]
    fn test_position_is_periodic() {
        let params = MotionParams::new(1.5, 2.0, 0.0, 0.5);
        let period = 2.0 * PI / params.omega;
        let a = params.position_at(0.4);
        let b = params.position_at(0.4 + period);
        assert!((a - b).length() < 1e-9);
    }

    #[test]
    fn test_z_matches_surface_height() {
        let p = position(2.2, -0.9, 1.1, 0.0, 3.0);
        assert_eq!(p.z, surface_height(p.x, p.y, -0.9));
        assert!(p.z >= 0.0);
    }

    #[test]
    fn test_zero_omega_propagates_non_finite() {
        let p = position(1.0, 0.0, 1.0, 0.0, 1.0);
        assert!(!p.is_finite());

        // 0 * (1/0) is NaN even at t = 0
        let p = position(0.0, 0.0, 1.0, 0.0, 1.0);
        assert!(p.x.is_nan());
    }

    #[test]
    fn test_non_finite_launch_values_propagate() {
        let p = position(0.5, 1.0, f64::INFINITY, 0.0, 1.0);
        assert!(p.x.is_infinite() && p.z.is_infinite());

        let p = position(0.5, 1.0, 1.0, 0.0, f64::NAN);
        assert!(p.x.is_nan());
    }

    #[test]
    fn test_try_position_rejects_zero_omega() {
        assert!(matches!(
            try_position(1.0, 0.0, 1.0, 0.0, 1.0),
            Err(PuckError::ZeroOmega)
        ));
        assert!(matches!(
            MotionParams::new(-0.0, 1.0, 0.0, 1.0).try_position_at(0.0),
            Err(PuckError::ZeroOmega)
        ));
    }

    #[test]
    fn test_try_position_matches_unchecked() {
        let params = MotionParams::default();
        let checked = params.try_position_at(3.0).unwrap();
        assert_eq!(checked, params.position_at(3.0));
    }
}
