//! RGB ↔ CIE XYZ (D65, 0–100 scale).

use crate::color::{RgbColor, XyzColor};
use crate::color_management::{
    LINEAR_SRGB_TO_XYZ, SrgbTransfer, TransferFunction, XYZ_TO_LINEAR_SRGB,
};

use super::quantize;

/// XYZ values are expressed on a 0–100 scale.
const XYZ_SCALE: f64 = 100.0;

/// Convert an 8-bit sRGB color to CIE XYZ.
///
/// ```text
/// linear = srgb_to_linear(channel / 255) × 100
/// xyz    = LINEAR_SRGB_TO_XYZ × linear
/// ```
///
/// The result is not clamped.
pub fn rgb_to_xyz(rgb: RgbColor) -> XyzColor {
    let linear = SrgbTransfer.to_linear3(rgb.to_unit()).map(|c| c * XYZ_SCALE);
    LINEAR_SRGB_TO_XYZ.apply(linear).into()
}

/// Convert a CIE XYZ color to 8-bit sRGB.
///
/// ```text
/// linear  = XYZ_TO_LINEAR_SRGB × (xyz / 100)
/// channel = round(clamp(linear_to_srgb(linear) × 255, 0, 255))
/// ```
///
/// Colors outside the sRGB gamut are hard-clamped per channel to the nearest
/// representable value. Non-finite input yields 0 for the affected channels.
pub fn xyz_to_rgb(xyz: XyzColor) -> RgbColor {
    let scaled = <[f64; 3]>::from(xyz).map(|c| c / XYZ_SCALE);
    let encoded = SrgbTransfer.to_encoded3(XYZ_TO_LINEAR_SRGB.apply(scaled));
    encoded.map(quantize).into()
}
