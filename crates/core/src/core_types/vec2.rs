//! Vector type alias for 2D screen-space positions.

use nalgebra::Vector2;

/// 2D vector type for ember positions and offsets.
///
/// This is a simple alias for `nalgebra::Vector2<f32>`, used throughout the
/// simulation in screen-space coordinates: origin at the top-left of the
/// window, y increasing downward.
pub type Vec2 = Vector2<f32>;
