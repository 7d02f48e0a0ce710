//! Hue/saturation/value color.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An HSV color: hue in degrees, saturation and value in `[0, 1]`.
///
/// Hue is periodic. Any finite hue is accepted and interpreted modulo 360;
/// [`HsvColor::normalized_hue`] gives the canonical `[0, 360)` angle.
/// Achromatic colors carry a hue of 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HsvColor {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation, 0–1.
    pub s: f64,
    /// Value, 0–1.
    pub v: f64,
}

impl HsvColor {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Hue wrapped into `[0, 360)`.
    pub fn normalized_hue(&self) -> f64 {
        let h = self.h.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs.
        if h >= 360.0 { 0.0 } else { h }
    }
}

impl fmt::Display for HsvColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.h, self.s, self.v)
    }
}

impl From<[f64; 3]> for HsvColor {
    fn from(c: [f64; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<HsvColor> for [f64; 3] {
    fn from(c: HsvColor) -> Self {
        [c.h, c.s, c.v]
    }
}
