//! Window - widget placement rectangle
//!
//! A mutable rectangle that widgets reference for drawing and hit testing.
//! Setters return `&mut Self` so calls can be chained on one instance.

use serde::{Deserialize, Serialize};

use super::rect::{Bounds, Position, Size};
use crate::foundation::math::Vec2;

const DEFAULT_X: f64 = 10.0;
const DEFAULT_Y: f64 = 10.0;
const DEFAULT_WIDTH: f64 = 20.0;
const DEFAULT_HEIGHT: f64 = 20.0;

/// Construction options for a [`Window`]
///
/// Zero or `NaN` fields are treated as "unset" and replaced by the defaults
/// (`x = 10`, `y = 10`, `width = 20`, `height = 20`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOptions {
    /// X coordinate in pixels
    pub x: f64,
    /// Y coordinate in pixels
    pub y: f64,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl WindowOptions {
    /// Options with only the position set
    pub const fn at(x: f64, y: f64) -> Self {
        Self { x, y, width: 0.0, height: 0.0 }
    }
}

/// Rectangle geometry for a widget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

fn or_default(value: f64, default: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        default
    } else {
        value
    }
}

impl Window {
    /// Create a window, filling unset options with defaults
    pub fn new(options: WindowOptions) -> Self {
        Self {
            x: or_default(options.x, DEFAULT_X),
            y: or_default(options.y, DEFAULT_Y),
            width: or_default(options.width, DEFAULT_WIDTH),
            height: or_default(options.height, DEFAULT_HEIGHT),
        }
    }

    /// X coordinate of the left edge
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Set the X coordinate
    pub fn set_x(&mut self, value: f64) -> &mut Self {
        self.x = value;
        self
    }

    /// Y coordinate of the top edge
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Set the Y coordinate
    pub fn set_y(&mut self, value: f64) -> &mut Self {
        self.y = value;
        self
    }

    /// Width in pixels
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Set the width
    pub fn set_width(&mut self, value: f64) -> &mut Self {
        self.width = value;
        self
    }

    /// Height in pixels
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Set the height
    pub fn set_height(&mut self, value: f64) -> &mut Self {
        self.height = value;
        self
    }

    /// Top-left corner
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Move the top-left corner
    pub fn set_position(&mut self, position: Position) -> &mut Self {
        self.x = position.x;
        self.y = position.y;
        self
    }

    /// Width and height
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Resize the window
    pub fn set_size(&mut self, size: Size) -> &mut Self {
        self.width = size.width;
        self.height = size.height;
        self
    }

    /// Axis-aligned bounds test against `rect`
    ///
    /// With `size_included == false` this returns `true` when the two
    /// rectangles touch or overlap at all. With `size_included == true` it
    /// returns `true` only when this window lies entirely inside `rect`.
    /// Edges are inclusive in both modes.
    pub fn is_in_bounds(&self, rect: &Bounds, size_included: bool) -> bool {
        if size_included {
            self.x >= rect.x
                && self.y >= rect.y
                && self.x + self.width <= rect.right()
                && self.y + self.height <= rect.bottom()
        } else {
            self.x + self.width >= rect.x
                && self.y + self.height >= rect.y
                && self.x <= rect.right()
                && self.y <= rect.bottom()
        }
    }

    /// Check whether a screen point lies on the window (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.is_in_bounds(&Bounds::new(point.x, point.y, 0.0, 0.0), false)
    }

    /// Plain snapshot of the geometry
    pub const fn to_json(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(WindowOptions::default())
    }
}

impl From<Bounds> for Window {
    /// Takes the rectangle literally, without applying defaults
    fn from(bounds: Bounds) -> Self {
        Self {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::point;
    use approx::assert_relative_eq;

    fn window(x: f64, y: f64, width: f64, height: f64) -> Window {
        Window::from(Bounds::new(x, y, width, height))
    }

    #[test]
    fn test_defaults_for_unset_options() {
        let w = Window::new(WindowOptions::default());
        assert_eq!(w.to_json(), Bounds::new(10.0, 10.0, 20.0, 20.0));

        let w = Window::new(WindowOptions::at(100.0, 100.0));
        assert_eq!(w.to_json(), Bounds::new(100.0, 100.0, 20.0, 20.0));
    }

    #[test]
    fn test_nan_option_falls_back_to_default() {
        let w = Window::new(WindowOptions { x: f64::NAN, y: 5.0, width: -3.0, height: 0.0 });
        assert_relative_eq!(w.x(), 10.0);
        assert_relative_eq!(w.y(), 5.0);
        // Negative values are not falsy
        assert_relative_eq!(w.width(), -3.0);
        assert_relative_eq!(w.height(), 20.0);
    }

    #[test]
    fn test_setter_getter_round_trip() {
        let mut w = Window::default();
        for v in [0.0, -15.5, 1e9, 42.0] {
            assert_relative_eq!(w.set_x(v).x(), v);
            assert_relative_eq!(w.set_y(v).y(), v);
            assert_relative_eq!(w.set_width(v).width(), v);
            assert_relative_eq!(w.set_height(v).height(), v);
        }
    }

    #[test]
    fn test_chained_setters_mutate_same_instance() {
        let mut w = Window::default();
        w.set_x(1.0).set_y(2.0).set_width(3.0).set_height(4.0);
        assert_eq!(w.to_json(), Bounds::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_position_and_size_pairs() {
        let mut w = Window::default();
        w.set_position(Position::new(7.0, 8.0)).set_size(Size::new(9.0, 11.0));
        assert_eq!(w.position(), Position::new(7.0, 8.0));
        assert_eq!(w.size(), Size::new(9.0, 11.0));
    }

    #[test]
    fn test_overlap_mode() {
        let w = window(0.0, 0.0, 10.0, 10.0);
        assert!(w.is_in_bounds(&Bounds::new(5.0, 5.0, 10.0, 10.0), false));
        assert!(!w.is_in_bounds(&Bounds::new(20.0, 20.0, 5.0, 5.0), false));

        // Touching edges count as overlap
        assert!(w.is_in_bounds(&Bounds::new(10.0, 10.0, 5.0, 5.0), false));
    }

    #[test]
    fn test_containment_mode() {
        let outer = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(window(2.0, 2.0, 4.0, 4.0).is_in_bounds(&outer, true));
        assert!(!window(2.0, 2.0, 20.0, 20.0).is_in_bounds(&outer, true));

        // Exactly equal rectangles are contained
        assert!(window(0.0, 0.0, 10.0, 10.0).is_in_bounds(&outer, true));
    }

    #[test]
    fn test_negative_size_is_computed_literally() {
        let w = window(5.0, 5.0, -10.0, -10.0);
        // Right edge at -5 lies left of the rect
        assert!(!w.is_in_bounds(&Bounds::new(0.0, 0.0, 10.0, 10.0), false));
        assert!(w.is_in_bounds(&Bounds::new(-5.0, -5.0, 10.0, 10.0), false));
    }

    #[test]
    fn test_contains_point() {
        let w = window(100.0, 100.0, 20.0, 20.0);
        assert!(w.contains_point(point(110.0, 110.0)));
        assert!(w.contains_point(point(100.0, 120.0)));
        assert!(!w.contains_point(point(99.0, 110.0)));
        assert!(!w.contains_point(point(f64::NAN, 110.0)));
    }

    #[test]
    fn test_to_json_field_names() {
        let json = serde_json::to_value(window(1.0, 2.0, 3.0, 4.0).to_json()).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0 }));
    }
}
