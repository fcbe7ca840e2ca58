//! Math utilities and types
//!
//! Screen-space types exchanged with the host. Coordinates are pixels with
//! the origin in the top-left corner.

pub use nalgebra::Vector2;

/// 2D vector type (pointer positions, text offsets)
pub type Vec2 = Vector2<f64>;

/// Build a screen-space point
#[inline]
pub fn point(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}
