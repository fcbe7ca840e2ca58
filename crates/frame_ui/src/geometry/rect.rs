//! Rectangle snapshot types

use serde::{Deserialize, Serialize};

/// Top-left corner of a rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate in pixels
    pub x: f64,
    /// Y coordinate in pixels
    pub y: f64,
}

impl Position {
    /// Create a new position
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Size {
    /// Create a new size
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle given by its top-left corner and size
///
/// Width and height are not required to be positive; every test that takes
/// a `Bounds` computes against the values literally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// X coordinate of the left edge
    pub x: f64,
    /// Y coordinate of the top edge
    pub y: f64,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Bounds {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create from position and size
    #[inline]
    pub const fn from_pos_size(pos: Position, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    /// Get the right edge
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Shrink by `amount` on every side
    #[inline]
    pub fn inset(&self, amount: f64) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - amount * 2.0,
            self.height - amount * 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_edges() {
        let b = Bounds::new(10.0, 20.0, 30.0, 40.0);
        assert_relative_eq!(b.right(), 40.0);
        assert_relative_eq!(b.bottom(), 60.0);
    }

    #[test]
    fn test_inset_keeps_center() {
        let b = Bounds::new(0.0, 0.0, 20.0, 10.0).inset(3.0);
        assert_eq!(b, Bounds::new(3.0, 3.0, 14.0, 4.0));
    }

    #[test]
    fn test_from_pos_size() {
        let b = Bounds::from_pos_size(Position::new(1.0, 2.0), Size::new(3.0, 4.0));
        assert_eq!(b, Bounds::new(1.0, 2.0, 3.0, 4.0));
    }
}
