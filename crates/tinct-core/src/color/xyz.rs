//! CIE 1931 XYZ tristimulus color, D65 reference white, 0–100 scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A CIE XYZ color on the 0–100 scale (Y = 100 for the reference white).
///
/// Values are not clamped. Anything outside the sRGB gamut is clamped only
/// when converted back to [`RgbColor`](super::RgbColor).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct XyzColor {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl XyzColor {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// D65 reference white on the 0–100 scale.
pub const D65_WHITE: XyzColor = XyzColor::new(95.047, 100.0, 108.883);

impl fmt::Display for XyzColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for XyzColor {
    fn from(c: [f64; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<XyzColor> for [f64; 3] {
    fn from(c: XyzColor) -> Self {
        [c.x, c.y, c.z]
    }
}
