//! Noise-driven fire
//!
//! Scrolls a 3D noise field upward and shades it with a fire ramp.
//! The variants trade plain noise for ridged, fBm or turbulence
//! fractals: tendrils, billows or a rolling blackened fireball. A hot
//! column sits at the horizontal center and the flames thin out with
//! height.

use embassy_time::Duration;

use super::{FrameEnv, Pattern};
use crate::color::Rgb;
use crate::layout::PixelCoords;
use crate::noise;
use crate::palette::{Palette, tables};
use crate::waveform::clamp01;

/// Which noise fractal shapes the flames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireVariant {
    /// Plain gradient noise rescaled to 0..1
    Plain,
    /// Ridged multifractal, creating fire tendrils
    Ridge,
    /// Fractal Brownian motion, a decent approximation of fire
    Fbm,
    /// Turbulence, a blackened rolling fireball
    Turbulence,
}

/// Perlin fire pattern.
#[derive(Debug, Clone)]
pub struct PerlinFirePattern {
    variant: FireVariant,
    scale: f32,
    rising_speed: f32,
    morph_speed: f32,
    y_time: f32,
    morph_time: f32,
}

impl Default for PerlinFirePattern {
    fn default() -> Self {
        Self::new(FireVariant::Fbm)
    }
}

impl PerlinFirePattern {
    pub const fn new(variant: FireVariant) -> Self {
        Self {
            variant,
            scale: 3.0,
            rising_speed: 1.0,
            morph_speed: 1.0,
            y_time: 0.0,
            morph_time: 0.0,
        }
    }

    /// Spatial scale of the noise field (bigger = smaller flames)
    #[must_use]
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// How fast the flames rise (1.0 = default speed)
    #[must_use]
    pub const fn with_rising_speed(mut self, speed: f32) -> Self {
        self.rising_speed = speed;
        self
    }

    /// How fast the noise field morphs over time
    #[must_use]
    pub const fn with_morph_speed(mut self, speed: f32) -> Self {
        self.morph_speed = speed;
        self
    }

    fn sample_noise(&self, x: f32, y: f32, z: f32) -> f32 {
        match self.variant {
            FireVariant::Plain => (noise::perlin3(x, y, z) + 1.0) / 2.0,
            FireVariant::Ridge => noise::ridge(x, y, z, 2.0, 0.5, 1.1, 3),
            FireVariant::Fbm => (noise::fbm(x, y, z, 2.0, 0.5, 3) + 1.0) / 2.0,
            FireVariant::Turbulence => noise::turbulence(x, y, z, 2.0, 0.5, 3),
        }
    }
}

impl Pattern for PerlinFirePattern {
    fn before_render(&mut self, _delta: Duration, env: &FrameEnv<'_>) {
        // The noise lattice wraps every 256 units, so driving the
        // scroll phases across 0..256 loops seamlessly.
        self.morph_time = env.clock.phase(6.0 * self.morph_speed) * 256.0;
        self.y_time = env.clock.phase(1.3 * self.rising_speed) * 256.0;
    }

    fn render_pixel(&mut self, px: PixelCoords) -> Rgb {
        let x = (px.x - 0.5) * self.scale;
        let y = px.y * self.scale;

        let mut v = self.sample_noise(x, y + self.y_time, self.morph_time);

        // Hotter column around the center of x, fading toward the edges
        v *= 2.0 * (1.0 - libm::fabsf(px.x - 0.5) * 1.8);

        // Fade out the higher it gets
        v *= px.y;

        // Keep the palette from wrapping if noise goes past 1.0
        v = clamp01(v);

        Palette::new(tables::FIRE).sample(v).scale(v).to_rgb8()
    }
}
