//! Four-channel RGBA color

use serde::{Deserialize, Serialize};

use super::hex::ColorHex;
use super::palette::NamedColor;
use super::radix::channel_to_hex;

/// Raw channel storage, logically `[r, g, b, a]` in `0..=255`
pub type RgbaColor = [f64; 4];

/// Object form of a color, channels in storage order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbaJson {
    /// Channel 0
    pub r: f64,
    /// Channel 1
    pub g: f64,
    /// Channel 2
    pub b: f64,
    /// Channel 3
    pub a: f64,
}

/// Options for [`ColorRgba::to_hex`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexOptions {
    /// Append the alpha channel
    pub alpha_included: bool,
    /// Pad every channel to two digits
    ///
    /// Off by default: channels below 16 then render as a single digit and
    /// the resulting string will not parse back to the same color.
    pub zero_pad: bool,
}

impl HexOptions {
    /// Include the alpha channel, no padding
    pub const fn with_alpha() -> Self {
        Self { alpha_included: true, zero_pad: false }
    }
}

/// RGBA color with chainable channel setters
///
/// Channel values are not validated. Note the accessor layout: `green`
/// reads index 2 and `blue` reads index 1, while [`to_array`](Self::to_array),
/// [`to_json`](Self::to_json) and [`to_hex`](Self::to_hex) use storage order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorRgba {
    color: RgbaColor,
}

impl ColorRgba {
    /// Create a color from raw channels
    pub const fn new(color: RgbaColor) -> Self {
        Self { color }
    }

    /// Red channel (index 0)
    pub const fn red(&self) -> f64 {
        self.color[0]
    }

    /// Set the red channel
    pub fn set_red(&mut self, value: f64) -> &mut Self {
        self.color[0] = value;
        self
    }

    /// Green channel (index 2)
    pub const fn green(&self) -> f64 {
        self.color[2]
    }

    /// Set the green channel (index 2)
    pub fn set_green(&mut self, value: f64) -> &mut Self {
        self.color[2] = value;
        self
    }

    /// Blue channel (index 1)
    pub const fn blue(&self) -> f64 {
        self.color[1]
    }

    /// Set the blue channel (index 1)
    pub fn set_blue(&mut self, value: f64) -> &mut Self {
        self.color[1] = value;
        self
    }

    /// Alpha channel (index 3)
    pub const fn alpha(&self) -> f64 {
        self.color[3]
    }

    /// Set the alpha channel
    pub fn set_alpha(&mut self, value: f64) -> &mut Self {
        self.color[3] = value;
        self
    }

    /// Replace all four channels
    pub fn set_color(&mut self, value: RgbaColor) -> &mut Self {
        self.color = value;
        self
    }

    /// Channels in storage order
    pub const fn to_array(&self) -> RgbaColor {
        self.color
    }

    /// Channels as an `{r, g, b, a}` record in storage order
    pub const fn to_json(&self) -> RgbaJson {
        RgbaJson {
            r: self.color[0],
            g: self.color[1],
            b: self.color[2],
            a: self.color[3],
        }
    }

    /// Convert to a hex string color
    ///
    /// Channels 0, 1 and 2 are written in that order as lowercase base-16.
    /// With `alpha_included` the first two characters of channel 3 are
    /// appended.
    pub fn to_hex(&self, options: HexOptions) -> ColorHex {
        let mut text = String::from("#");
        for &channel in &self.color[..3] {
            text.push_str(&channel_to_hex(channel, options.zero_pad));
        }

        if options.alpha_included {
            text.extend(channel_to_hex(self.color[3], options.zero_pad).chars().take(2));
        }

        ColorHex::new(text)
    }

    /// Channels clamped to `0..=255` and rounded, `NaN` mapped to 0
    ///
    /// For hosts whose draw calls take byte colors.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_bytes(&self) -> [u8; 4] {
        self.color.map(|c| if c.is_nan() { 0 } else { c.clamp(0.0, 255.0).round() as u8 })
    }
}

impl From<RgbaColor> for ColorRgba {
    fn from(color: RgbaColor) -> Self {
        Self::new(color)
    }
}

impl From<NamedColor> for ColorRgba {
    fn from(color: NamedColor) -> Self {
        Self::from(color.rgba())
    }
}
