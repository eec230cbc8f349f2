//! Rim polygon for the paraboloid's circular edge
//!
//! The rim is sampled at angles `k * 2π / RIM_SEGMENTS` for `k` in
//! `1..=RIM_SEGMENTS + 1`. Sampling starts one step past angle zero and wraps a
//! full turn, so the last point overlaps the first segment and the polygon
//! closes on itself.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::consts::{RIM_POINTS, RIM_SEGMENTS};
use crate::polar_to_cartesian;

/// Sampled rim, stored as parallel coordinate columns in ascending angle order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RimPolygon {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl RimPolygon {
    /// Number of sampled points (always `RIM_POINTS` when built by [`circle`])
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Points as vectors, same order as the columns
    pub fn points(&self) -> Vec<DVec2> {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| DVec2::new(x, y))
            .collect()
    }

    /// Split into `(xs, ys)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.xs, self.ys)
    }
}

/// Rim of radius `r` as a closed polygon of `RIM_POINTS` points.
///
/// `r` is not validated. A negative radius yields the point-reflected circle.
pub fn circle(r: f64) -> RimPolygon {
    let mut xs = Vec::with_capacity(RIM_POINTS);
    let mut ys = Vec::with_capacity(RIM_POINTS);

    for k in 1..=RIM_POINTS {
        let theta = k as f64 * TAU / RIM_SEGMENTS as f64;
        let p = polar_to_cartesian(r, theta);
        xs.push(p.x);
        ys.push(p.y);
    }

    RimPolygon { xs, ys }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_length_is_fixed() {
        for r in [0.0, 1.0, 10.0, -3.0, 1e6] {
            let rim = circle(r);
            assert_eq!(rim.len(), RIM_POINTS);
            assert_eq!(rim.ys.len(), RIM_POINTS);
        }
    }

    #[test]
    fn test_circle_first_point() {
        let rim = circle(10.0);
        assert!((rim.xs[0] - 9.980).abs() < 1e-3);
        assert!((rim.ys[0] - 0.628).abs() < 1e-3);
    }

    #[test]
    fn test_circle_closes_on_first_point() {
        let rim = circle(10.0);
        // k = 100 lands on angle 2π, k = 101 repeats k = 1
        assert!((rim.xs[99] - 10.0).abs() < 1e-9);
        assert!(rim.ys[99].abs() < 1e-9);
        assert!((rim.xs[100] - rim.xs[0]).abs() < 1e-9);
        assert!((rim.ys[100] - rim.ys[0]).abs() < 1e-9);
    }

    #[test]
    fn test_circle_zero_radius() {
        let rim = circle(0.0);
        assert!(rim.xs.iter().chain(&rim.ys).all(|&v| v == 0.0));
    }

    #[test]
    fn test_circle_negative_radius_reflects() {
        let pos = circle(4.0);
        let neg = circle(-4.0);
        for (a, b) in pos.points().iter().zip(neg.points()) {
            assert!((*a + b).length() < 1e-12);
        }
    }

    #[test]
    fn test_circle_angles_ascend() {
        let rim = circle(1.0);
        let points = rim.points();
        // Consecutive points are one segment apart on the unit circle
        let chord = 2.0 * (TAU / RIM_SEGMENTS as f64 / 2.0).sin();
        for pair in points.windows(2) {
            assert!(((pair[1] - pair[0]).length() - chord).abs() < 1e-9);
            // Counter-clockwise: positive cross product
            assert!(pair[0].perp_dot(pair[1]) > 0.0);
        }
    }

    #[test]
    fn test_into_parts_preserves_columns() {
        let rim = circle(2.0);
        let copy = rim.clone();
        let (xs, ys) = rim.into_parts();
        assert_eq!(xs, copy.xs);
        assert_eq!(ys, copy.ys);
    }
}
