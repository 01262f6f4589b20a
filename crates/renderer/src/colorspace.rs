//! Cylindrical color models.
//!
//! Conversion between 8-bit RGB and the HSV / HSL models, with all
//! cylindrical components in `[0, 1]`. RGB channels are produced by scaling
//! to 255 and rounding half up.

use image::{Rgb, Rgba};
use serde::{Deserialize, Serialize};

/// HSV color representation
///
/// - `h`: Hue in range [0.0, 1.0] (where 1.0 wraps to 0.0)
/// - `s`: Saturation in range [0.0, 1.0]
/// - `v`: Value in range [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// HSL color representation
///
/// - `h`: Hue in range [0.0, 1.0] (where 1.0 wraps to 0.0)
/// - `s`: Saturation in range [0.0, 1.0]
/// - `l`: Lightness in range [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

#[inline]
fn to_channel(f: f64) -> u8 {
    (f * 255.0 + 0.5) as u8
}

#[inline]
fn to_unit(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
}

/// Hue of a chromatic color given its channel fractions, maximum and chroma.
fn chromatic_hue(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let h = if max == r {
        let h = (g - b) / d;
        if g < b {
            h + 6.0
        } else {
            h
        }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h / 6.0
}

/// Convert RGB values to HSV
///
/// Hue is 0 for achromatic input.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let (r, g, b) = to_unit(r, g, b);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max > 0.0 { d / max } else { 0.0 };
    let h = if d == 0.0 {
        0.0
    } else {
        chromatic_hue(r, g, b, max, d)
    };

    Hsv { h, s, v: max }
}

/// Convert HSV values to RGB
///
/// The hue circle is split into six equal sectors.
pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let Hsv { h, s, v } = hsv;
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    (to_channel(r), to_channel(g), to_channel(b))
}

/// Convert RGB values to HSL
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let (r, g, b) = to_unit(r, g, b);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic.
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    Hsl {
        h: chromatic_hue(r, g, b, max, d),
        s,
        l,
    }
}

/// Convert HSL values to RGB
pub fn hsl_to_rgb(hsl: Hsl) -> (u8, u8, u8) {
    let Hsl { h, s, l } = hsl;
    if s == 0.0 {
        let gray = to_channel(l);
        return (gray, gray, gray);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - s * l };
    let p = 2.0 * l - q;

    (
        to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_rgb(p, q, h)),
        to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

/// One channel of an HSL color, `t` being the hue shifted for that channel.
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Any color that can be expressed as 8-bit RGBA.
///
/// The HSV and HSL models accept any `ColorValue`. Values already in the
/// requested model are passed through instead of being re-quantized.
pub trait ColorValue {
    fn to_rgba(&self) -> Rgba<u8>;

    fn as_hsv(&self) -> Option<Hsv> {
        None
    }

    fn as_hsl(&self) -> Option<Hsl> {
        None
    }
}

/// Express any color in the HSV model. Alpha is ignored.
pub fn hsv_model<C: ColorValue + ?Sized>(color: &C) -> Hsv {
    color.as_hsv().unwrap_or_else(|| {
        let Rgba([r, g, b, _]) = color.to_rgba();
        rgb_to_hsv(r, g, b)
    })
}

/// Express any color in the HSL model. Alpha is ignored.
pub fn hsl_model<C: ColorValue + ?Sized>(color: &C) -> Hsl {
    color.as_hsl().unwrap_or_else(|| {
        let Rgba([r, g, b, _]) = color.to_rgba();
        rgb_to_hsl(r, g, b)
    })
}

impl ColorValue for Hsv {
    fn to_rgba(&self) -> Rgba<u8> {
        (*self).into()
    }

    fn as_hsv(&self) -> Option<Hsv> {
        Some(*self)
    }
}

impl ColorValue for Hsl {
    fn to_rgba(&self) -> Rgba<u8> {
        (*self).into()
    }

    fn as_hsl(&self) -> Option<Hsl> {
        Some(*self)
    }
}

impl ColorValue for Color {
    fn to_rgba(&self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl ColorValue for Rgba<u8> {
    fn to_rgba(&self) -> Rgba<u8> {
        *self
    }
}

impl ColorValue for Rgb<u8> {
    fn to_rgba(&self) -> Rgba<u8> {
        let Rgb([r, g, b]) = *self;
        Rgba([r, g, b, 255])
    }
}

impl From<Hsv> for Rgba<u8> {
    fn from(hsv: Hsv) -> Self {
        let (r, g, b) = hsv_to_rgb(hsv);
        Rgba([r, g, b, 255])
    }
}

impl From<Hsl> for Rgba<u8> {
    fn from(hsl: Hsl) -> Self {
        let (r, g, b) = hsl_to_rgb(hsl);
        Rgba([r, g, b, 255])
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        let (r, g, b) = hsv_to_rgb(hsv);
        Color::opaque(r, g, b)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        let (r, g, b) = hsl_to_rgb(hsl);
        Color::opaque(r, g, b)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(c: Color) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}
