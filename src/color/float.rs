//! Float color math and conversion to output colors
//!
//! Pattern math runs in normalized floats; conversion to the 8-bit
//! output type clamps every component, so patterns never have to guard
//! against out-of-range results themselves.

use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};
use crate::waveform::frac;

/// Linear RGB color with 0..1 float components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgbf {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgbf {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Mix toward `other` by `t` (0 = self, 1 = other).
    pub fn mix(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Scale all components by a brightness factor.
    pub fn scale(self, v: f32) -> Self {
        Self {
            r: self.r * v,
            g: self.g * v,
            b: self.b * v,
        }
    }

    /// Convert to the 8-bit output type, clamping each component.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb8(self) -> Rgb {
        Rgb {
            r: (self.r.clamp(0.0, 1.0) * 255.0 + 0.5) as u8,
            g: (self.g.clamp(0.0, 1.0) * 255.0 + 0.5) as u8,
            b: (self.b.clamp(0.0, 1.0) * 255.0 + 0.5) as u8,
        }
    }
}

/// Emit a color from float HSV: hue wraps, saturation and value clamp.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_f(h: f32, s: f32, v: f32) -> Rgb {
    let hue = (frac(h) * 255.0 + 0.5) as u8;
    let sat = (s.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
    let val = (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
    hsv2rgb(Hsv { hue, sat, val })
}
