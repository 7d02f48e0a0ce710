//! Parsing and validation of comma-separated color triples.
//!
//! Accepted forms, with whitespace around each field ignored:
//!
//! | Space | Example              | Fields                                   |
//! |-------|----------------------|------------------------------------------|
//! | RGB   | `255,128,0`          | integers 0–255                           |
//! | XYZ   | `95.047,100,108.883` | finite reals                             |
//! | HSV   | `240,100,50`         | hue 0–360, saturation and value 0–100 %  |
//!
//! HSV saturation and value are read as percentages and stored in `[0, 1]`.

use crate::color::{HsvColor, RgbColor, XyzColor};
use crate::error::ParseError;

const FIELDS: usize = 3;

fn split_fields(text: &str) -> Result<[&str; FIELDS], ParseError> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    <[&str; FIELDS]>::try_from(fields.as_slice()).map_err(|_| ParseError::FieldCount {
        expected: FIELDS,
        found: fields.len(),
    })
}

fn parse_real(index: usize, token: &str) -> Result<f64, ParseError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::NotANumber {
            index,
            token: token.to_string(),
        })
}

fn check_range(index: usize, value: f64, min: f64, max: f64) -> Result<f64, ParseError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ParseError::OutOfRange {
            index,
            value,
            min,
            max,
        })
    }
}

fn parse_channel(index: usize, token: &str) -> Result<u8, ParseError> {
    let value = token.parse::<i64>().map_err(|_| ParseError::NotANumber {
        index,
        token: token.to_string(),
    })?;
    u8::try_from(value).map_err(|_| ParseError::OutOfRange {
        index,
        value: value as f64,
        min: 0.0,
        max: 255.0,
    })
}

/// Parse a single 8-bit channel value, as set from a slider.
pub fn parse_channel_value(text: &str) -> Result<u8, ParseError> {
    parse_channel(0, text.trim())
}

/// Parse `r,g,b` with integer channels in `[0, 255]`.
pub fn parse_rgb(text: &str) -> Result<RgbColor, ParseError> {
    let [r, g, b] = split_fields(text)?;
    Ok(RgbColor::new(
        parse_channel(0, r)?,
        parse_channel(1, g)?,
        parse_channel(2, b)?,
    ))
}

/// Parse `x,y,z` with finite real components on the 0–100 scale.
///
/// No range is enforced; out-of-gamut values are clamped on conversion.
pub fn parse_xyz(text: &str) -> Result<XyzColor, ParseError> {
    let [x, y, z] = split_fields(text)?;
    Ok(XyzColor::new(
        parse_real(0, x)?,
        parse_real(1, y)?,
        parse_real(2, z)?,
    ))
}

/// Parse `h,s,v` with hue in degrees `[0, 360]` and saturation and value as
/// percentages in `[0, 100]`.
pub fn parse_hsv(text: &str) -> Result<HsvColor, ParseError> {
    let [h, s, v] = split_fields(text)?;
    let h = check_range(0, parse_real(0, h)?, 0.0, 360.0)?;
    let s = check_range(1, parse_real(1, s)?, 0.0, 100.0)?;
    let v = check_range(2, parse_real(2, v)?, 0.0, 100.0)?;
    Ok(HsvColor::new(h, s / 100.0, v / 100.0))
}
