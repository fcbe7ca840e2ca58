//! Built-in named colors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::rgba::RgbaColor;

/// Named palette entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum NamedColor {
    // Default colors
    Red,
    Orange,
    Yellow,
    Green,
    Aqua,
    Blue,
    Purple,
    // Dark colors
    DarkRed,
    DarkOrange,
    DarkYellow,
    DarkGreen,
    DarkAqua,
    DarkBlue,
    DarkPurple,
    // Light colors
    LightRed,
    LightOrange,
    LightYellow,
    LightGreen,
    LightAqua,
    LightBlue,
    LightPurple,
}

impl NamedColor {
    /// Every palette entry in declaration order
    pub const ALL: [Self; 21] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Aqua,
        Self::Blue,
        Self::Purple,
        Self::DarkRed,
        Self::DarkOrange,
        Self::DarkYellow,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkBlue,
        Self::DarkPurple,
        Self::LightRed,
        Self::LightOrange,
        Self::LightYellow,
        Self::LightGreen,
        Self::LightAqua,
        Self::LightBlue,
        Self::LightPurple,
    ];

    /// RGBA channels of this entry
    pub const fn rgba(self) -> RgbaColor {
        match self {
            Self::Red => [255.0, 0.0, 0.0, 255.0],
            Self::Orange => [255.0, 130.0, 0.0, 255.0],
            Self::Yellow => [255.0, 255.0, 0.0, 255.0],
            Self::Green => [0.0, 255.0, 0.0, 255.0],
            Self::Aqua => [0.0, 255.0, 255.0, 255.0],
            Self::Blue => [0.0, 0.0, 255.0, 255.0],
            Self::Purple => [130.0, 0.0, 255.0, 255.0],
            Self::DarkRed => [200.0, 0.0, 0.0, 255.0],
            Self::DarkOrange => [200.0, 100.0, 0.0, 255.0],
            Self::DarkYellow => [200.0, 210.0, 0.0, 255.0],
            Self::DarkGreen => [0.0, 200.0, 0.0, 255.0],
            Self::DarkAqua => [0.0, 210.0, 200.0, 255.0],
            Self::DarkBlue => [0.0, 0.0, 210.0, 255.0],
            Self::DarkPurple => [100.0, 0.0, 200.0, 255.0],
            Self::LightRed => [255.0, 100.0, 100.0, 255.0],
            Self::LightOrange => [255.0, 130.0, 100.0, 255.0],
            Self::LightYellow => [255.0, 240.0, 100.0, 255.0],
            Self::LightGreen => [100.0, 255.0, 100.0, 255.0],
            Self::LightAqua => [100.0, 255.0, 255.0, 255.0],
            Self::LightBlue => [100.0, 100.0, 255.0, 255.0],
            Self::LightPurple => [130.0, 100.0, 255.0, 255.0],
        }
    }

    /// Palette name, e.g. `"DarkAqua"`
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Aqua => "Aqua",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::DarkRed => "DarkRed",
            Self::DarkOrange => "DarkOrange",
            Self::DarkYellow => "DarkYellow",
            Self::DarkGreen => "DarkGreen",
            Self::DarkAqua => "DarkAqua",
            Self::DarkBlue => "DarkBlue",
            Self::DarkPurple => "DarkPurple",
            Self::LightRed => "LightRed",
            Self::LightOrange => "LightOrange",
            Self::LightYellow => "LightYellow",
            Self::LightGreen => "LightGreen",
            Self::LightAqua => "LightAqua",
            Self::LightBlue => "LightBlue",
            Self::LightPurple => "LightPurple",
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unknown palette name
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown palette color: {0:?}")]
pub struct UnknownColorName(pub String);

impl FromStr for NamedColor {
    type Err = UnknownColorName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownColorName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorRgba, HexOptions};

    #[test]
    fn test_names_round_trip() {
        for color in NamedColor::ALL {
            assert_eq!(color.name().parse::<NamedColor>(), Ok(color));
        }
        assert!("Magenta".parse::<NamedColor>().is_err());
    }

    #[test]
    fn test_palette_values() {
        assert_eq!(NamedColor::Orange.rgba(), [255.0, 130.0, 0.0, 255.0]);
        assert_eq!(NamedColor::DarkAqua.rgba(), [0.0, 210.0, 200.0, 255.0]);
        assert!(NamedColor::ALL.iter().all(|c| c.rgba()[3] == 255.0));
    }

    #[test]
    fn test_palette_to_hex() {
        let hex = ColorRgba::from(NamedColor::LightPurple).to_hex(HexOptions::default());
        assert_eq!(hex.as_str(), "#8264ff");
    }
}
