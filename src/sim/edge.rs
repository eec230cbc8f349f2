//! Rim crossing predicate
//!
//! Naming caveat: despite the name, [`check_edge`] returns `true` while the
//! puck is strictly INSIDE the rim and `false` once it reaches or passes it.
//! The inverted sense is kept for compatibility with existing callers.

use glam::DVec2;

/// `true` iff `(x, y)` lies strictly inside the circle of radius `r`.
///
/// A point exactly on the rim returns `false`.
#[inline]
pub fn check_edge(x: f64, y: f64, r: f64) -> bool {
    r > (x * x + y * y).sqrt()
}

/// Vector form of [`check_edge`]
#[inline]
pub fn check_edge_point(p: DVec2, r: f64) -> bool {
    check_edge(p.x, p.y, r)
}
