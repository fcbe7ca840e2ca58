//! UI widgets module
//!
//! Widgets draw through [`Renderer`](crate::host::Renderer) and read input
//! from an [`InputSystem`](crate::input::InputSystem) sampled each frame.

pub mod checkbox;

pub use checkbox::{SyncCheckbox, TextOptions};
