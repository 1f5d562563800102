//! Float waveform helpers shared by every pattern
//!
//! These are the small shaping functions that show up over and over in
//! pattern math: unit-period oscillators and distance falloffs over
//! normalized 0..1 coordinates.

use core::f32::consts::TAU;

/// Fractional part of `x` (result is in 0..1, also for negative inputs)
#[inline]
pub fn frac(x: f32) -> f32 {
    x - libm::floorf(x)
}

/// Sinusoid with unit period, rescaled to 0..1
///
/// `wave(0) == 0.5`, peaks at `x == 0.25`, bottoms at `x == 0.75`.
#[inline]
pub fn wave(x: f32) -> f32 {
    0.5 + 0.5 * libm::sinf(x * TAU)
}

/// Triangle wave with unit period: ramps 0..1 then back to 0
#[inline]
pub fn triangle(x: f32) -> f32 {
    let t = frac(x) * 2.0;
    if t < 1.0 { t } else { 2.0 - t }
}

/// Square wave with unit period and the given duty cycle (0..1)
#[inline]
pub fn square(x: f32, duty: f32) -> f32 {
    if frac(x) < duty { 1.0 } else { 0.0 }
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp to the 0..1 range
#[inline]
pub fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Proximity falloff: 1 where `a == b`, fading linearly to 0 at
/// distance `range`
///
/// Used for drawing soft lines and dots from a distance value.
#[inline]
pub fn near(a: f32, b: f32, range: f32) -> f32 {
    if range <= 0.0 {
        return 0.0;
    }
    clamp01(1.0 - libm::fabsf(a - b) / range)
}
