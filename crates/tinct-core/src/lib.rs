//! Tinct Core — color conversion engine.
//!
//! Keeps one color consistent across 8-bit sRGB, CIE XYZ (D65, 0–100) and
//! HSV. RGB is the hub representation: XYZ and HSV convert only to and from
//! RGB, and [`ColorTriad`] derives both from a single RGB value. Also holds
//! the text contract used by editors (parsing and display formatting). No I/O.

pub mod color;
pub mod color_management;
pub mod convert;
pub mod display;
pub mod error;
pub mod hub;
pub mod parse;

// Re-exports for convenience.
pub use color::{Channel, D65_WHITE, HsvColor, RgbColor, XyzColor};
pub use convert::{hsv_to_rgb, rgb_to_hsv, rgb_to_xyz, xyz_to_rgb};
pub use error::ParseError;
pub use hub::{ColorTriad, Representation};
