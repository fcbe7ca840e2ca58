//! Input handling module

pub mod system;

// Re-export commonly used types
pub use system::{InputSystem, MouseButtons};
