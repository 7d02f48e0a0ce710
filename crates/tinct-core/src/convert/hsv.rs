//! RGB ↔ HSV.

use crate::color::{HsvColor, RgbColor};

use super::quantize;

/// Convert an 8-bit sRGB color to HSV.
///
/// ```text
/// v = max / 255
/// s = (max − min) / max          (0 when max = 0)
/// h = 60 × sector formula        (0 when max = min)
/// ```
///
/// The hue lies in `[0, 360)`. Achromatic colors get a hue of 0.
pub fn rgb_to_hsv(rgb: RgbColor) -> HsvColor {
    let [r, g, b] = <[u8; 3]>::from(rgb).map(f64::from);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max / 255.0;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let sector = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let mut hsv = HsvColor::new(sector * 60.0, s, v);
    hsv.h = hsv.normalized_hue();
    hsv
}

/// Convert an HSV color to 8-bit sRGB.
///
/// The hue is taken modulo 360, so `h` and `h + 360` give the same color.
/// Saturation and value are clamped to `[0, 1]`. A non-finite hue is read as
/// sector 0 with the rising channel at 0, so it yields the red-side color
/// `(v, 0, v(1 − s))`.
///
/// ```text
/// i = floor(h / 60) mod 6,  f = h / 60 − floor(h / 60)
/// p = v(1 − s),  q = v(1 − s f),  t = v(1 − s(1 − f))
///
/// i:    0  1  2  3  4  5
/// r:    v  q  p  p  t  v
/// g:    t  v  v  q  p  p
/// b:    p  p  t  v  v  q
/// ```
pub fn hsv_to_rgb(hsv: HsvColor) -> RgbColor {
    let s = hsv.s.clamp(0.0, 1.0);
    let v = hsv.v.clamp(0.0, 1.0);

    let sector = hsv.normalized_hue() / 60.0;
    let i = sector.floor();
    let f = sector - i;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let unit = match i as u8 % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };
    unit.map(quantize).into()
}
