//! Checkbox widget - a toggle box with a label to its right

use crate::config::CheckboxStyle;
use crate::geometry::Window;
use crate::host::{FontHandle, HostError, MouseButton, Renderer};
use crate::input::InputSystem;

/// Label placement for [`SyncCheckbox::render_text`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOptions {
    /// Font created by the host
    pub font: FontHandle,
    /// Gap between the box's right edge and the label
    pub padding_left: f64,
    /// Label offset from the box's top edge
    pub padding_top: f64,
}

impl TextOptions {
    /// Take the paddings from a style
    pub const fn from_style(font: FontHandle, style: &CheckboxStyle) -> Self {
        Self {
            font,
            padding_left: style.padding_left,
            padding_top: style.padding_top,
        }
    }
}

/// Checkbox whose state is toggled synchronously inside the draw callback
#[derive(Debug, Clone)]
pub struct SyncCheckbox {
    /// Label text
    name: String,

    /// Box geometry
    window: Window,

    /// Current value
    checked: bool,

    /// Cursor was over the box at the last input check
    hovered: bool,

    /// Colors and spacing
    style: CheckboxStyle,
}

impl SyncCheckbox {
    /// Create an unchecked checkbox with the default style
    pub fn new(name: impl Into<String>, window: Window) -> Self {
        Self {
            name: name.into(),
            window,
            checked: false,
            hovered: false,
            style: CheckboxStyle::default(),
        }
    }

    /// Replace the style (builder pattern)
    #[must_use]
    pub fn with_style(mut self, style: CheckboxStyle) -> Self {
        self.style = style;
        self
    }

    /// Label text
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Box geometry
    pub const fn window(&self) -> &Window {
        &self.window
    }

    /// Mutable box geometry
    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    /// Current value
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the value without user input
    pub fn set_checked(&mut self, checked: bool) -> &mut Self {
        self.checked = checked;
        self
    }

    /// Cursor was over the box at the last [`handle_click`](Self::handle_click)
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Current style
    pub const fn style(&self) -> &CheckboxStyle {
        &self.style
    }

    /// Draw the box: fill, inner square when checked, outline
    pub fn render_box(&self, renderer: &mut dyn Renderer) -> Result<(), HostError> {
        let bounds = self.window.to_json();
        let fill = if self.hovered { &self.style.hover } else { &self.style.background };

        renderer.filled_rect(&bounds, fill)?;
        if self.checked {
            renderer.filled_rect(&bounds.inset(self.style.inset), &self.style.check)?;
        }
        renderer.rect(&bounds, &self.style.border)
    }

    /// Draw the label to the right of the box
    pub fn render_text(&self, renderer: &mut dyn Renderer, options: &TextOptions) -> Result<(), HostError> {
        let x = self.window.x() + self.window.width() + options.padding_left;
        let y = self.window.y() + options.padding_top;
        renderer.text(x, y, &self.name, &self.style.text, options.font)
    }

    /// Update hover state and toggle on a left click over the box
    ///
    /// Returns `true` when the value changed this frame.
    pub fn handle_click(&mut self, input: &InputSystem) -> bool {
        self.hovered = self.window.contains_point(input.cursor());

        if !(self.hovered && input.is_pressed(MouseButton::Left)) {
            return false;
        }

        self.checked = !self.checked;
        log::debug!("Checkbox '{}' set to {}", self.name, self.checked);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Bounds, WindowOptions};
    use crate::host::{DrawCommand, RecordingHost};

    fn checkbox() -> SyncCheckbox {
        SyncCheckbox::new("Hello world", Window::new(WindowOptions::at(100.0, 100.0)))
    }

    fn click_at(host: &mut RecordingHost, input: &mut InputSystem, x: f64, y: f64) {
        host.set_cursor(x, y);
        host.set_button(MouseButton::Left, true);
        input.update(&*host);
    }

    #[test]
    fn test_click_inside_toggles_once_per_press() {
        let mut host = RecordingHost::new();
        let mut input = InputSystem::new();
        let mut cb = checkbox();

        click_at(&mut host, &mut input, 110.0, 110.0);
        assert!(cb.handle_click(&input));
        assert!(cb.is_checked());

        // Still held: no second toggle
        input.update(&host);
        assert!(!cb.handle_click(&input));
        assert!(cb.is_checked());

        host.set_button(MouseButton::Left, false);
        input.update(&host);
        click_at(&mut host, &mut input, 110.0, 110.0);
        assert!(cb.handle_click(&input));
        assert!(!cb.is_checked());
    }

    #[test]
    fn test_click_outside_is_ignored() {
        let mut host = RecordingHost::new();
        let mut input = InputSystem::new();
        let mut cb = checkbox();

        click_at(&mut host, &mut input, 50.0, 50.0);
        assert!(!cb.handle_click(&input));
        assert!(!cb.is_checked());
        assert!(!cb.is_hovered());
    }

    #[test]
    fn test_click_on_edge_counts() {
        let mut host = RecordingHost::new();
        let mut input = InputSystem::new();
        let mut cb = checkbox();

        click_at(&mut host, &mut input, 120.0, 120.0);
        assert!(cb.handle_click(&input));
    }

    #[test]
    fn test_render_box_unchecked() {
        let mut host = RecordingHost::new();
        let cb = checkbox();
        cb.render_box(&mut host).unwrap();

        let bounds = Bounds::new(100.0, 100.0, 20.0, 20.0);
        assert_eq!(
            host.commands(),
            &[
                DrawCommand::FilledRect { bounds, color: cb.style().background },
                DrawCommand::Rect { bounds, color: cb.style().border },
            ]
        );
    }

    #[test]
    fn test_render_box_checked_draws_inner_square() {
        let mut host = RecordingHost::new();
        let mut cb = checkbox();
        cb.set_checked(true);
        cb.render_box(&mut host).unwrap();

        assert_eq!(host.commands().len(), 3);
        assert_eq!(
            host.commands()[1],
            DrawCommand::FilledRect {
                bounds: Bounds::new(104.0, 104.0, 12.0, 12.0),
                color: cb.style().check,
            }
        );
    }

    #[test]
    fn test_hover_changes_fill() {
        let mut host = RecordingHost::new();
        let mut input = InputSystem::new();
        let mut cb = checkbox();

        host.set_cursor(105.0, 105.0);
        input.update(&host);
        cb.handle_click(&input);
        assert!(cb.is_hovered());

        cb.render_box(&mut host).unwrap();
        assert!(matches!(
            host.commands()[0],
            DrawCommand::FilledRect { color, .. } if color == cb.style().hover
        ));
    }

    #[test]
    fn test_render_text_position() {
        let mut host = RecordingHost::new();
        let cb = checkbox();
        let font = host.add_font("Segoeui.ttf", 12, 200).unwrap();
        cb.render_text(&mut host, &TextOptions { font, padding_left: 5.0, padding_top: 4.0 })
            .unwrap();

        assert_eq!(
            host.commands(),
            &[DrawCommand::Text {
                x: 125.0,
                y: 104.0,
                text: "Hello world".to_string(),
                color: cb.style().text,
                font,
            }]
        );
    }
}
