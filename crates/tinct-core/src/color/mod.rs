//! Color value types for the three supported representations.

pub mod hsv;
pub mod rgb;
pub mod xyz;

pub use hsv::HsvColor;
pub use rgb::{Channel, RgbColor};
pub use xyz::{D65_WHITE, XyzColor};
