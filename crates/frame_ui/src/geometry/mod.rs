//! Screen-space geometry
//!
//! Plain rectangle records and the [`Window`] used to place widgets.

pub mod rect;
pub mod window;

pub use rect::{Bounds, Position, Size};
pub use window::{Window, WindowOptions};
