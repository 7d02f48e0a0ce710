//! Color management: the sRGB transfer curve and the linear sRGB/XYZ matrices.

pub mod matrix;
pub mod transfer;

pub use matrix::{ColorMatrix, LINEAR_SRGB_TO_XYZ, XYZ_TO_LINEAR_SRGB};
pub use transfer::{SrgbTransfer, TransferFunction};
