//! Puck motion module
//!
//! Everything here is pure and deterministic:
//! - Closed-form evaluation only, no integration
//! - No global state
//! - Same inputs, same outputs, on any thread

pub mod edge;
pub mod motion;
pub mod rim;
pub mod trace;

pub use edge::{check_edge, check_edge_point};
pub use motion::{MotionParams, position, surface_height, try_position};
pub use rim::{RimPolygon, circle};
pub use trace::{Trace, TraceSample, sample_trajectory};
