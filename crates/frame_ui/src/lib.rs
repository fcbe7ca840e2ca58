//! # Frame UI
//!
//! A small immediate-mode widget toolkit for scripts that run inside a host
//! scripting environment. The host owns the frame loop, drawing and input;
//! this crate only talks to it through the traits in [`host`].
//!
//! ## Features
//!
//! - **Window**: rectangle geometry with overlap/containment tests
//! - **Colors**: RGBA and hex representations with conversions between them
//! - **Widgets**: a checkbox driven by per-frame draw callbacks
//! - **Error reporting**: an injectable observer for script errors
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use frame_ui::prelude::*;
//!
//! fn draw(
//!     checkbox: &mut SyncCheckbox,
//!     input: &mut InputSystem,
//!     source: &dyn InputSource,
//!     renderer: &mut dyn Renderer,
//! ) -> Result<(), HostError> {
//!     input.update(source);
//!     checkbox.render_box(renderer)?;
//!     let font = renderer.add_font("Segoeui.ttf", 12, 200)?;
//!     checkbox.render_text(renderer, &TextOptions { font, padding_left: 5.0, padding_top: 4.0 })?;
//!     checkbox.handle_click(input);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod geometry;
pub mod color;
pub mod host;
pub mod input;
pub mod callbacks;
pub mod widgets;
pub mod config;
pub mod errors;

/// Common imports for toolkit users
pub mod prelude {
    pub use crate::{
        callbacks::{CallbackId, CallbackKind, Callbacks},
        color::{ColorHex, ColorParseError, ColorRgba, HexOptions, NamedColor, RgbaColor, RgbaJson},
        config::{CheckboxStyle, Config, ConfigError, FontConfig, ToolkitConfig},
        errors::{ConsoleReporter, ErrorObserver, ScriptError},
        foundation::math::Vec2,
        geometry::{Bounds, Position, Size, Window, WindowOptions},
        host::{CallbackRegistrar, Console, FontHandle, HostError, InputSource, MouseButton, Renderer},
        input::{InputSystem, MouseButtons},
        widgets::{SyncCheckbox, TextOptions},
    };
}
