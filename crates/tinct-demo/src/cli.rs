//! Command-line interface.

use clap::{Parser, Subcommand};
use tinct_core::display::MAX_PRECISION;

/// Convert a color between RGB, CIE XYZ and HSV.
#[derive(Debug, Parser)]
#[command(name = "tinct", version)]
pub struct Cli {
    /// Decimals shown for XYZ and HSV values (0-15).
    #[arg(
        short,
        long,
        global = true,
        value_parser = clap::value_parser!(u8).range(0..=MAX_PRECISION as i64)
    )]
    pub precision: Option<u8>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert from RGB, e.g. `255,128,0`.
    Rgb {
        #[arg(allow_hyphen_values = true)]
        triple: String,
    },
    /// Convert from XYZ on the 0-100 scale, e.g. `95.047,100,108.883`.
    Xyz {
        #[arg(allow_hyphen_values = true)]
        triple: String,
    },
    /// Convert from HSV with saturation and value in percent, e.g. `240,100,50`.
    Hsv {
        #[arg(allow_hyphen_values = true)]
        triple: String,
    },
    /// Read edits from stdin, one per line, keeping all fields in sync.
    Session,
}
