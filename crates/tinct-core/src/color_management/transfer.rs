//! sRGB transfer function (IEC 61966-2-1).
//!
//! Transfer functions convert between non-linear (encoded) and linear light
//! values. Only the sRGB curve is supported.

/// A transfer function that converts between linear and non-linear encodings.
pub trait TransferFunction: Send + Sync {
    /// Convert from non-linear (encoded) to linear light.
    fn to_linear(&self, encoded: f64) -> f64;

    /// Convert from linear light to non-linear (encoded).
    fn to_encoded(&self, linear: f64) -> f64;

    /// Apply [`to_linear`](Self::to_linear) to each channel.
    fn to_linear3(&self, encoded: [f64; 3]) -> [f64; 3] {
        encoded.map(|c| self.to_linear(c))
    }

    /// Apply [`to_encoded`](Self::to_encoded) to each channel.
    fn to_encoded3(&self, linear: [f64; 3]) -> [f64; 3] {
        linear.map(|c| self.to_encoded(c))
    }
}

/// sRGB transfer function per IEC 61966-2-1.
///
/// ```text
/// to_linear:   V <= 0.04045 → V / 12.92
///              V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
///
/// to_encoded:  L <= 0.0031308 → L × 12.92
///              L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SrgbTransfer;

impl SrgbTransfer {
    const DECODE_CUT: f64 = 0.04045;
    const ENCODE_CUT: f64 = 0.0031308;
    const SLOPE: f64 = 12.92;
    const GAMMA: f64 = 2.4;
    const A: f64 = 0.055;
}

impl TransferFunction for SrgbTransfer {
    fn to_linear(&self, encoded: f64) -> f64 {
        if encoded > Self::DECODE_CUT {
            ((encoded + Self::A) / (1.0 + Self::A)).powf(Self::GAMMA)
        } else {
            encoded / Self::SLOPE
        }
    }

    fn to_encoded(&self, linear: f64) -> f64 {
        if linear > Self::ENCODE_CUT {
            (1.0 + Self::A) * linear.powf(1.0 / Self::GAMMA) - Self::A
        } else {
            linear * Self::SLOPE
        }
    }
}
