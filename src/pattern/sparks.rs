//! Stochastic noise-gated sparks
//!
//! A rising noise field gates random flashes, shaded with an ember
//! ramp. The variants differ in how the noise and the random draw are
//! combined, giving anything from dense crackle to rare drifting
//! sparks.

use embassy_time::Duration;

use super::{FrameEnv, Pattern};
use crate::color::Rgb;
use crate::layout::PixelCoords;
use crate::noise::perlin3;
use crate::palette::{Palette, tables};
use crate::rng::Rng;
use crate::waveform::clamp01;

/// How the noise field gates the random flashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkVariant {
    /// Random flashes, density modulated by the noise field
    Gated,
    /// Flashes only where the noise field peaks
    Threshold,
    /// Rare flashes carrying the noise value as brightness
    Sparse,
}

/// Sparks pattern.
#[derive(Debug, Clone)]
pub struct SparksPattern {
    variant: SparkVariant,
    rng: Rng,
    scale: f32,
    rising_speed: f32,
    morph_speed: f32,
    y_time: f32,
    morph_time: f32,
}

impl Default for SparksPattern {
    fn default() -> Self {
        Self::new(SparkVariant::Threshold)
    }
}

impl SparksPattern {
    pub fn new(variant: SparkVariant) -> Self {
        Self {
            variant,
            rng: Rng::default(),
            scale: 1.0,
            rising_speed: 1.0,
            morph_speed: 1.0,
            y_time: 0.0,
            morph_time: 0.0,
        }
    }

    /// Spatial scale of the gating noise field
    #[must_use]
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// How fast the spark field rises
    #[must_use]
    pub const fn with_rising_speed(mut self, speed: f32) -> Self {
        self.rising_speed = speed;
        self
    }

    fn spark(&mut self, x: f32, y: f32, z: f32) -> f32 {
        let n = perlin3(x, y, z);
        match self.variant {
            SparkVariant::Gated => {
                if self.rng.chance(0.1 * n) {
                    self.rng.uniform()
                } else {
                    0.0
                }
            }
            SparkVariant::Threshold => {
                if n > 0.6 { self.rng.uniform() } else { 0.0 }
            }
            SparkVariant::Sparse => {
                if self.rng.chance(0.05) { (n + 1.0) / 2.0 } else { 0.0 }
            }
        }
    }
}

impl Pattern for SparksPattern {
    fn before_render(&mut self, _delta: Duration, env: &FrameEnv<'_>) {
        self.morph_time = env.clock.phase(6.0 * self.morph_speed) * 256.0;
        self.y_time = env.clock.phase(1.3 * self.rising_speed) * 256.0;
    }

    fn render_pixel(&mut self, px: PixelCoords) -> Rgb {
        let x = (px.x - 0.5) * self.scale;
        let y = px.y * self.scale;

        let mut v = self.spark(x, y + self.y_time, self.morph_time);

        // Same shaping as the fire patterns: bright center column,
        // fading with height
        v *= 2.0 * (1.0 - libm::fabsf(px.x - 0.5) * 1.8);
        v *= px.y;
        v = clamp01(v);

        Palette::new(tables::SPARK).sample(v).scale(v).to_rgb8()
    }
}
