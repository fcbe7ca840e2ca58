//! Color types
//!
//! - [`ColorRgba`]: four numeric channels
//! - [`ColorHex`]: `#rrggbb` / `#rrggbbaa` strings
//! - [`NamedColor`]: the built-in palette
//!
//! Conversions always produce new, independent values.

pub mod rgba;
pub mod hex;
pub mod palette;
mod radix;

pub use rgba::{ColorRgba, HexOptions, RgbaColor, RgbaJson};
pub use hex::{ColorHex, ColorParseError};
pub use palette::{NamedColor, UnknownColorName};
