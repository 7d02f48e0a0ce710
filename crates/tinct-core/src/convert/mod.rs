//! The four conversions between RGB and the other two representations.
//!
//! RGB is the hub: XYZ and HSV each convert only to and from RGB, never to
//! each other. Every function is pure and total; the only domain-boundary
//! policy is the clamp applied when a real-valued channel is narrowed to 8
//! bits.

pub mod hsv;
pub mod xyz;

pub use hsv::{hsv_to_rgb, rgb_to_hsv};
pub use xyz::{rgb_to_xyz, xyz_to_rgb};

/// Scale a unit-range channel to 8 bits, clamping to `[0, 255]` and rounding
/// to nearest. NaN maps to 0.
pub(crate) fn quantize(unit: f64) -> u8 {
    (unit * 255.0).clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_rounds_to_nearest() {
        assert_eq!(quantize(0.5), 128);
        assert_eq!(quantize(127.4 / 255.0), 127);
        assert_eq!(quantize(1.0), 255);
    }

    #[test]
    fn test_quantize_clamps() {
        assert_eq!(quantize(-0.2), 0);
        assert_eq!(quantize(1.7), 255);
        assert_eq!(quantize(f64::INFINITY), 255);
        assert_eq!(quantize(f64::NEG_INFINITY), 0);
        assert_eq!(quantize(f64::NAN), 0);
    }
}
