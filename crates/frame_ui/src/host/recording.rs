//! Headless host that records every call
//!
//! Stands in for the scripting host in tests and in the demo app. Draw
//! calls become [`DrawCommand`]s, pointer state is set by the caller.

use crate::callbacks::CallbackKind;
use crate::color::ColorRgba;
use crate::foundation::math::Vec2;
use crate::geometry::{Bounds, Size};
use crate::input::MouseButtons;

use super::{CallbackRegistrar, Console, FontHandle, HostError, InputSource, MouseButton, Renderer};

/// Average glyph width as a fraction of the font size
const GLYPH_ASPECT: f64 = 0.5;

/// Draw call captured by [`RecordingHost`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Solid rectangle
    FilledRect {
        /// Rectangle
        bounds: Bounds,
        /// Fill color
        color: ColorRgba,
    },
    /// Rectangle outline
    Rect {
        /// Rectangle
        bounds: Bounds,
        /// Outline color
        color: ColorRgba,
    },
    /// Text run
    Text {
        /// Left edge
        x: f64,
        /// Top edge
        y: f64,
        /// Text content
        text: String,
        /// Text color
        color: ColorRgba,
        /// Font used
        font: FontHandle,
    },
}

#[derive(Debug, Clone)]
struct FontEntry {
    name: String,
    size: u32,
    weight: u32,
}

/// In-memory host implementation
#[derive(Debug)]
pub struct RecordingHost {
    commands: Vec<DrawCommand>,
    fonts: Vec<FontEntry>,
    cursor: Vec2,
    buttons: MouseButtons,
    console: Vec<(Option<ColorRgba>, String)>,
    registered: Vec<CallbackKind>,
    missing_fonts: Vec<String>,
}

impl RecordingHost {
    /// Create an empty host
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            fonts: Vec::new(),
            cursor: Vec2::zeros(),
            buttons: MouseButtons::empty(),
            console: Vec::new(),
            registered: Vec::new(),
            missing_fonts: Vec::new(),
        }
    }

    /// Move the simulated cursor
    pub fn set_cursor(&mut self, x: f64, y: f64) {
        self.cursor = Vec2::new(x, y);
    }

    /// Hold or release a simulated mouse button
    pub fn set_button(&mut self, button: MouseButton, down: bool) {
        self.buttons.set(MouseButtons::from(button), down);
    }

    /// Make [`Renderer::add_font`] fail for `name`
    pub fn mark_font_missing(&mut self, name: impl Into<String>) {
        self.missing_fonts.push(name.into());
    }

    /// Draw calls since the last [`take_commands`](Self::take_commands)
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain recorded draw calls (call once per frame)
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Console lines with their optional color
    pub fn console_lines(&self) -> &[(Option<ColorRgba>, String)] {
        &self.console
    }

    /// Callback kinds registered so far
    pub fn registered_callbacks(&self) -> &[CallbackKind] {
        &self.registered
    }

    /// Number of distinct fonts created
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for RecordingHost {
    fn add_font(&mut self, name: &str, size: u32, weight: u32) -> Result<FontHandle, HostError> {
        if self.missing_fonts.iter().any(|m| m == name) {
            return Err(HostError::FontUnavailable { name: name.to_string(), size });
        }

        let existing = self
            .fonts
            .iter()
            .position(|f| f.name == name && f.size == size && f.weight == weight);
        let index = existing.unwrap_or_else(|| {
            self.fonts.push(FontEntry { name: name.to_string(), size, weight });
            self.fonts.len() - 1
        });

        Ok(FontHandle(index as u64))
    }

    fn filled_rect(&mut self, bounds: &Bounds, color: &ColorRgba) -> Result<(), HostError> {
        self.commands.push(DrawCommand::FilledRect { bounds: *bounds, color: *color });
        Ok(())
    }

    fn rect(&mut self, bounds: &Bounds, color: &ColorRgba) -> Result<(), HostError> {
        self.commands.push(DrawCommand::Rect { bounds: *bounds, color: *color });
        Ok(())
    }

    fn text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        color: &ColorRgba,
        font: FontHandle,
    ) -> Result<(), HostError> {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            color: *color,
            font,
        });
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn text_size(&self, text: &str, font: FontHandle) -> Size {
        let size = self
            .fonts
            .get(font.0 as usize)
            .map_or(12.0, |f| f64::from(f.size));
        Size::new(text.chars().count() as f64 * size * GLYPH_ASPECT, size)
    }
}

impl InputSource for RecordingHost {
    fn cursor_position(&self) -> Vec2 {
        self.cursor
    }

    fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(MouseButtons::from(button))
    }
}

impl Console for RecordingHost {
    fn print(&mut self, text: &str) {
        self.console.push((None, text.to_string()));
    }

    fn print_color(&mut self, color: &ColorRgba, text: &str) {
        self.console.push((Some(*color), text.to_string()));
    }
}

impl CallbackRegistrar for RecordingHost {
    fn register_callback(&mut self, kind: CallbackKind) -> Result<(), HostError> {
        self.registered.push(kind);
        Ok(())
    }
}
