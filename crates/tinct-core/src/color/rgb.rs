//! 8-bit sRGB color.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three channels of an [`RgbColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
        }
    }
}

/// An sRGB color with 8 bits per channel.
///
/// The channel type makes every value a valid sRGB color, so conversions
/// that produce an `RgbColor` must clamp before narrowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel, 0–255.
    pub r: u8,
    /// Green channel, 0–255.
    pub g: u8,
    /// Blue channel, 0–255.
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Read a single channel.
    pub const fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Copy of this color with one channel replaced.
    pub const fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
        self
    }

    /// Channels normalized to `[0, 1]`.
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<RgbColor> for [u8; 3] {
    fn from(c: RgbColor) -> Self {
        [c.r, c.g, c.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_channel_replaces_only_that_channel() {
        let c = RgbColor::new(10, 20, 30).with_channel(Channel::Green, 200);
        assert_eq!(c, RgbColor::new(10, 200, 30));
        assert_eq!(c.channel(Channel::Green), 200);
    }

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        assert_eq!(RgbColor::new(255, 8, 0).to_hex(), "#ff0800");
        assert_eq!(RgbColor::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn test_channel_reads_match_array_order() {
        let c = RgbColor::new(1, 2, 3);
        let arr: [u8; 3] = c.into();
        let read = [Channel::Red, Channel::Green, Channel::Blue].map(|ch| c.channel(ch));
        assert_eq!(read, arr);
        assert_eq!(Channel::Blue.to_string(), "blue");
    }
}
