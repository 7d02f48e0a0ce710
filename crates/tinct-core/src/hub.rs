//! The RGB hub: one color held in all three representations.
//!
//! A [`ColorTriad`] can only be built from an RGB value, or from XYZ/HSV by
//! first converting to RGB. The XYZ and HSV fields are then always derived
//! from that RGB value, so the three can never disagree.

use serde::{Deserialize, Serialize};

use crate::color::{Channel, HsvColor, RgbColor, XyzColor};
use crate::convert::{hsv_to_rgb, rgb_to_hsv, rgb_to_xyz, xyz_to_rgb};

/// A color given in one of the three representations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "space", content = "value", rename_all = "lowercase")]
pub enum Representation {
    Rgb(RgbColor),
    Xyz(XyzColor),
    Hsv(HsvColor),
}

impl Representation {
    /// Resolve to the hub value.
    pub fn to_rgb(self) -> RgbColor {
        match self {
            Self::Rgb(rgb) => rgb,
            Self::Xyz(xyz) => xyz_to_rgb(xyz),
            Self::Hsv(hsv) => hsv_to_rgb(hsv),
        }
    }

    /// Short lowercase name of the representation.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rgb(_) => "rgb",
            Self::Xyz(_) => "xyz",
            Self::Hsv(_) => "hsv",
        }
    }
}

/// A color held as RGB with its derived XYZ and HSV forms.
///
/// Invariant: `xyz == rgb_to_xyz(rgb)` and `hsv == rgb_to_hsv(rgb)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorTriad {
    rgb: RgbColor,
    xyz: XyzColor,
    hsv: HsvColor,
}

impl ColorTriad {
    pub fn from_rgb(rgb: RgbColor) -> Self {
        let triad = Self {
            rgb,
            xyz: rgb_to_xyz(rgb),
            hsv: rgb_to_hsv(rgb),
        };
        tracing::trace!(rgb = %triad.rgb, xyz = %triad.xyz, hsv = %triad.hsv, "derived triad");
        triad
    }

    /// Convert to RGB, then derive XYZ from that RGB value.
    ///
    /// The stored XYZ is generally not the input: out-of-gamut or
    /// off-grid values are replaced by those of the nearest 8-bit color.
    pub fn from_xyz(xyz: XyzColor) -> Self {
        Self::from_rgb(xyz_to_rgb(xyz))
    }

    /// Convert to RGB, then derive HSV from that RGB value.
    pub fn from_hsv(hsv: HsvColor) -> Self {
        Self::from_rgb(hsv_to_rgb(hsv))
    }

    pub fn from_representation(repr: Representation) -> Self {
        Self::from_rgb(repr.to_rgb())
    }

    /// Replace a single RGB channel and re-derive the other forms.
    pub fn with_channel(&self, channel: Channel, value: u8) -> Self {
        Self::from_rgb(self.rgb.with_channel(channel, value))
    }

    pub fn rgb(&self) -> RgbColor {
        self.rgb
    }

    pub fn xyz(&self) -> XyzColor {
        self.xyz
    }

    pub fn hsv(&self) -> HsvColor {
        self.hsv
    }
}

impl Default for ColorTriad {
    /// Black.
    fn default() -> Self {
        Self::from_rgb(RgbColor::BLACK)
    }
}

impl From<RgbColor> for ColorTriad {
    fn from(rgb: RgbColor) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Representation> for ColorTriad {
    fn from(repr: Representation) -> Self {
        Self::from_representation(repr)
    }
}
