//! Audio spectrum matrix with automatic gain
//!
//! Maps a folded triangle path through the 32 frequency bins onto the
//! pixel plane. A PI controller adjusts sensitivity so the average lit
//! brightness tracks a target fill ratio regardless of input volume;
//! per-bin moving averages subtract the steady background so only
//! changes in the spectrum flash. Lit pixels decay slowly for a
//! phosphor-like trail.

use embassy_time::Duration;

use super::{FrameEnv, Pattern};
use crate::agc::PiController;
use crate::color::{Rgb, hsv_f};
use crate::layout::PixelCoords;
use crate::sensor::{FREQUENCY_BINS, array_lerp};
use crate::waveform::{clamp01, triangle, wave};

const DEFAULT_TARGET_FILL: f32 = 0.07;
const DEFAULT_FADE: f32 = 0.95;
const AVERAGE_WINDOW_MS: f32 = 1500.0;
const AVERAGE_FLOOR: f32 = 0.00001;

/// Spectrum pattern; `MAX_LEDS` sizes the persistence buffer.
#[derive(Debug, Clone)]
pub struct SpectrumPattern<const MAX_LEDS: usize> {
    controller: PiController,
    sensitivity: f32,
    /// Spectrum snapshot for the current frame.
    spectrum: [f32; FREQUENCY_BINS],
    /// Slow per-bin background averages.
    averages: [f32; FREQUENCY_BINS],
    /// Per-pixel brightness persistence.
    pixels: [f32; MAX_LEDS],
    /// Sum of lit brightness from the previous frame.
    feedback: f32,
    target_fill: f32,
    fade: f32,
    t1: f32,
    t2: f32,
}

impl<const MAX_LEDS: usize> Default for SpectrumPattern<MAX_LEDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX_LEDS: usize> SpectrumPattern<MAX_LEDS> {
    pub const fn new() -> Self {
        Self {
            controller: PiController::new(0.05, 0.15, 30.0, 0.0, 400.0),
            sensitivity: 0.0,
            spectrum: [0.0; FREQUENCY_BINS],
            averages: [AVERAGE_FLOOR; FREQUENCY_BINS],
            pixels: [0.0; MAX_LEDS],
            feedback: 0.0,
            target_fill: DEFAULT_TARGET_FILL,
            fade: DEFAULT_FADE,
            t1: 0.0,
            t2: 0.0,
        }
    }

    /// Target average lit brightness (0..1) the gain loop aims for
    #[must_use]
    pub const fn with_target_fill(mut self, target_fill: f32) -> Self {
        self.target_fill = target_fill;
        self
    }

    /// Per-frame persistence factor (closer to 1 = longer trails)
    #[must_use]
    pub const fn with_fade(mut self, fade: f32) -> Self {
        self.fade = fade;
        self
    }

    /// Current auto-gain sensitivity (for inspection)
    pub const fn sensitivity(&self) -> f32 {
        self.sensitivity
    }
}

impl<const MAX_LEDS: usize> Pattern for SpectrumPattern<MAX_LEDS> {
    #[allow(clippy::cast_precision_loss)]
    fn before_render(&mut self, delta: Duration, env: &FrameEnv<'_>) {
        self.t1 = env.clock.phase(0.2);
        self.t2 = env.clock.phase(0.13);

        // Hold the gain loop until a sensor board has reported, so
        // silence before the first frame cannot wind up the integrator.
        if !env.sensors.available() {
            return;
        }

        // Feedback loop: error is the target fill ratio minus the
        // average brightness the previous frame actually produced.
        let count = env.pixel_count.max(1) as f32;
        self.sensitivity = self
            .controller
            .update(self.target_fill - self.feedback / count);
        self.feedback = 0.0;

        self.spectrum = env.sensors.frequency_data;

        let dw = (delta.as_millis() as f32 / AVERAGE_WINDOW_MS).min(1.0);
        for (average, &bin) in self.averages.iter_mut().zip(&self.spectrum) {
            *average =
                (*average * (1.0 - dw) + bin * dw * self.sensitivity).max(AVERAGE_FLOOR);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn render_pixel(&mut self, px: PixelCoords) -> Rgb {
        // Folded path through the bins, drifting over time
        let bin = triangle(
            (wave(px.x + wave(self.t1)) + wave(px.y - wave(self.t1))) / 2.0 + self.t2,
        ) * (FREQUENCY_BINS - 1) as f32;

        let level = array_lerp(&self.spectrum, bin);
        let background = array_lerp(&self.averages, bin);

        // Emphasize what sticks out above the moving average
        let mut v = (level * self.sensitivity - background)
            * 10.0
            * (background * 1000.0 + 0.5);
        v = if v > 0.0 { v * v } else { 0.0 };

        let h = bin / 60.0 + self.t1;
        let s = 1.0 - v;

        let slot = (px.index as usize).min(MAX_LEDS - 1);
        self.pixels[slot] = self.pixels[slot] * self.fade + v;
        v = self.pixels[slot];

        self.feedback += clamp01(v);
        hsv_f(h, s, v)
    }

    fn reset(&mut self) {
        self.pixels = [0.0; MAX_LEDS];
        self.averages = [AVERAGE_FLOOR; FREQUENCY_BINS];
        self.feedback = 0.0;
        self.sensitivity = 0.0;
    }
}
