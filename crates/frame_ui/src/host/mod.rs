//! Host API boundary
//!
//! Defines the interface between the toolkit and the scripting host.
//! Keeps widgets independent of the host's drawing, input and console
//! specifics.
//!
//! - [`Renderer`]: fonts, rectangles and text
//! - [`InputSource`]: pointer position and button state
//! - [`Console`]: plain and colored diagnostic output
//! - [`CallbackRegistrar`]: per-frame callback subscription

pub mod recording;

pub use recording::{DrawCommand, RecordingHost};

use thiserror::Error;

use crate::callbacks::CallbackKind;
use crate::color::ColorRgba;
use crate::foundation::math::Vec2;
use crate::geometry::{Bounds, Size};

/// Handle to a font created by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontHandle(pub u64);

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Failures reported by the host API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// Font could not be created
    #[error("Font unavailable: {name} ({size}px)")]
    FontUnavailable {
        /// Font file name
        name: String,
        /// Requested pixel size
        size: u32,
    },

    /// Host refused to register a callback
    #[error("Callback rejected: {0}")]
    CallbackRejected(String),

    /// Draw call failed
    #[error("Render error: {0}")]
    Render(String),
}

/// Drawing primitives provided by the host
pub trait Renderer {
    /// Create (or look up) a font
    fn add_font(&mut self, name: &str, size: u32, weight: u32) -> Result<FontHandle, HostError>;

    /// Fill a rectangle
    fn filled_rect(&mut self, bounds: &Bounds, color: &ColorRgba) -> Result<(), HostError>;

    /// Outline a rectangle
    fn rect(&mut self, bounds: &Bounds, color: &ColorRgba) -> Result<(), HostError>;

    /// Draw text with its top-left corner at `(x, y)`
    fn text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        color: &ColorRgba,
        font: FontHandle,
    ) -> Result<(), HostError>;

    /// Measure text in pixels
    fn text_size(&self, text: &str, font: FontHandle) -> Size;
}

/// Pointer state provided by the host
pub trait InputSource {
    /// Cursor position in screen pixels
    fn cursor_position(&self) -> Vec2;

    /// Whether `button` is currently held
    fn is_button_down(&self, button: MouseButton) -> bool;
}

/// Host console output
pub trait Console {
    /// Print plain text
    fn print(&mut self, text: &str);

    /// Print text in a color
    fn print_color(&mut self, color: &ColorRgba, text: &str);
}

/// Subscription to host callbacks
pub trait CallbackRegistrar {
    /// Ask the host to invoke `kind` callbacks from now on
    fn register_callback(&mut self, kind: CallbackKind) -> Result<(), HostError>;
}
