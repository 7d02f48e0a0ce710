//! Text rendering of colors for the editor fields and swatch.
//!
//! The output of [`format_rgb`], [`format_xyz`] and [`format_hsv`] is accepted
//! back by the matching parser in [`crate::parse`].

use crate::color::{HsvColor, RgbColor, XyzColor};

/// Default number of decimals for real-valued fields.
pub const DEFAULT_PRECISION: usize = 3;

/// Largest useful number of decimals; f64 carries about 17 significant digits.
pub const MAX_PRECISION: usize = 15;

/// Format a real with at most `precision` decimals, trailing zeros removed.
///
/// `precision` is capped at [`MAX_PRECISION`].
pub fn format_real(value: f64, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    let mut s = format!("{value:.precision$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" { "0".to_string() } else { s }
}

/// `r,g,b` as integers.
pub fn format_rgb(rgb: RgbColor) -> String {
    rgb.to_string()
}

/// `x,y,z` as reals.
pub fn format_xyz(xyz: XyzColor, precision: usize) -> String {
    format!(
        "{},{},{}",
        format_real(xyz.x, precision),
        format_real(xyz.y, precision),
        format_real(xyz.z, precision)
    )
}

/// `h,s,v` with saturation and value shown as percentages.
pub fn format_hsv(hsv: HsvColor, precision: usize) -> String {
    format!(
        "{},{},{}",
        format_real(hsv.h, precision),
        format_real(hsv.s * 100.0, precision),
        format_real(hsv.v * 100.0, precision)
    )
}

/// CSS declaration painting a swatch in this color.
pub fn swatch_css(rgb: RgbColor) -> String {
    format!("background-color: rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
}
