//! Per-frame input sampling
//!
//! The host only reports whether a button is held right now. Widgets need
//! edges (pressed this frame, released this frame), so the input system keeps
//! the previous frame's state and compares.

use bitflags::bitflags;

use crate::foundation::math::Vec2;
use crate::host::{InputSource, MouseButton};

bitflags! {
    /// Set of held mouse buttons
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        /// Left mouse button
        const LEFT = 1 << 0;
        /// Right mouse button
        const RIGHT = 1 << 1;
        /// Middle mouse button
        const MIDDLE = 1 << 2;
    }
}

impl From<MouseButton> for MouseButtons {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::LEFT,
            MouseButton::Right => Self::RIGHT,
            MouseButton::Middle => Self::MIDDLE,
        }
    }
}

const ALL_BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

/// Input state sampled once per frame
#[derive(Debug, Clone)]
pub struct InputSystem {
    /// Cursor position in screen pixels
    cursor: Vec2,

    /// Buttons held this frame
    down: MouseButtons,

    /// Buttons held last frame
    previous: MouseButtons,

    /// Frames sampled so far
    frame: u64,
}

impl InputSystem {
    /// Create an input system with nothing held
    pub fn new() -> Self {
        Self {
            cursor: Vec2::zeros(),
            down: MouseButtons::empty(),
            previous: MouseButtons::empty(),
            frame: 0,
        }
    }

    /// Sample the host once; call at the start of every frame
    pub fn update(&mut self, source: &dyn InputSource) {
        self.previous = self.down;
        self.cursor = source.cursor_position();
        self.down = ALL_BUTTONS
            .into_iter()
            .filter(|&b| source.is_button_down(b))
            .fold(MouseButtons::empty(), |acc, b| acc | MouseButtons::from(b));
        self.frame += 1;

        if self.down != self.previous {
            log::trace!(
                "frame {}: buttons {:?} -> {:?} at ({}, {})",
                self.frame,
                self.previous,
                self.down,
                self.cursor.x,
                self.cursor.y
            );
        }
    }

    /// Cursor position at the last update
    pub const fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Button is held this frame
    pub fn is_down(&self, button: MouseButton) -> bool {
        self.down.contains(button.into())
    }

    /// Button went down this frame
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        let flag = MouseButtons::from(button);
        self.down.contains(flag) && !self.previous.contains(flag)
    }

    /// Button went up this frame
    pub fn is_released(&self, button: MouseButton) -> bool {
        let flag = MouseButtons::from(button);
        !self.down.contains(flag) && self.previous.contains(flag)
    }

    /// Number of frames sampled
    pub const fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
