//! Hex string color

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::radix::{parse_hex_prefix, slice_chars};
use super::rgba::ColorRgba;

const DEFAULT_ALPHA: f64 = 255.0;

/// Reasons a hex color string fails strict validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// String does not start with `#`
    #[error("hex color must start with '#': {0:?}")]
    MissingHash(String),

    /// Digit count is neither 6 nor 8
    #[error("hex color must have 6 or 8 digits, got {len}: {text:?}")]
    InvalidLength {
        /// Offending string
        text: String,
        /// Number of characters after `#`
        len: usize,
    },

    /// A character is not a hex digit
    #[error("invalid hex digit {digit:?} in {text:?}")]
    InvalidDigit {
        /// Offending string
        text: String,
        /// First non-hex character
        digit: char,
    },
}

/// Hex string color (`#rrggbb` or `#rrggbbaa`)
///
/// The string is stored as given; malformed input only shows up as `NaN`
/// channels after [`to_rgba`](Self::to_rgba). Use
/// [`validate`](Self::validate) for an explicit check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorHex {
    color: String,
}

impl ColorHex {
    /// Wrap a hex string
    pub fn new(color: impl Into<String>) -> Self {
        Self { color: color.into() }
    }

    /// Stored string
    pub fn as_str(&self) -> &str {
        &self.color
    }

    /// Replace the stored string
    pub fn set_color(&mut self, value: impl Into<String>) -> &mut Self {
        self.color = value.into();
        self
    }

    /// Convert to RGBA channels
    ///
    /// The first `#` is removed, then characters `0..2`, `2..4` and `4..6`
    /// are read as red, green and blue. Alpha is read from `6..8` only when
    /// exactly eight characters remain, otherwise it is 255. Unparseable
    /// pieces become `NaN`.
    pub fn to_rgba(&self) -> ColorRgba {
        let digits = self.color.replacen('#', "", 1);

        let r = parse_hex_prefix(&slice_chars(&digits, 0, 2));
        let g = parse_hex_prefix(&slice_chars(&digits, 2, 4));
        let b = parse_hex_prefix(&slice_chars(&digits, 4, 6));
        let a = if digits.chars().count() == 8 {
            parse_hex_prefix(&slice_chars(&digits, 6, 8))
        } else {
            DEFAULT_ALPHA
        };

        ColorRgba::new([r, g, b, a])
    }

    /// Strict format check: `#` followed by 6 or 8 ASCII hex digits
    pub fn validate(&self) -> Result<(), ColorParseError> {
        let Some(digits) = self.color.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(self.color.clone()));
        };

        let len = digits.chars().count();
        if len != 6 && len != 8 {
            return Err(ColorParseError::InvalidLength { text: self.color.clone(), len });
        }

        if let Some(digit) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit { text: self.color.clone(), digit });
        }

        Ok(())
    }
}

impl fmt::Display for ColorHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.color)
    }
}

impl From<&str> for ColorHex {
    fn from(color: &str) -> Self {
        Self::new(color)
    }
}

impl From<String> for ColorHex {
    fn from(color: String) -> Self {
        Self::new(color)
    }
}
