//! What the editor shows: the three fields and the swatch.
//!
//! Views are serialized with the `#[serde(tag = "type", content = "data")]`
//! pattern so that JSON output can be consumed line by line.

use serde::Serialize;
use tinct_core::ColorTriad;
use tinct_core::display::{format_hsv, format_rgb, format_xyz, swatch_css};

/// Rendered text of every editor field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    /// `r,g,b` integers.
    pub rgb: String,
    /// `x,y,z` reals.
    pub xyz: String,
    /// `h,s,v` with s and v in percent.
    pub hsv: String,
    /// `#rrggbb`.
    pub hex: String,
    /// CSS declaration for the swatch.
    pub swatch: String,
}

impl FieldView {
    pub fn new(triad: &ColorTriad, precision: usize) -> Self {
        Self {
            rgb: format_rgb(triad.rgb()),
            xyz: format_xyz(triad.xyz(), precision),
            hsv: format_hsv(triad.hsv(), precision),
            hex: triad.rgb().to_hex(),
            swatch: swatch_css(triad.rgb()),
        }
    }

    /// Multi-line text rendering.
    pub fn to_text(&self) -> String {
        format!(
            "RGB: {}\nXYZ: {}\nHSV: {}\nColor: {} ({})",
            self.rgb, self.xyz, self.hsv, self.hex, self.swatch
        )
    }
}

/// Messages written by the demo.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ViewEvent {
    /// Current state of all fields.
    State {
        /// The fields.
        view: FieldView,
        /// Unformatted values behind the fields.
        color: ColorTriad,
        /// Whether the last edit was applied.
        accepted: bool,
    },
}
