//! Blended-palette color waves
//!
//! The whole strip sweeps through a gradient palette while the
//! palette itself slowly crossfades through a rotation set, built on
//! [`PaletteCycle`].

use embassy_time::Duration;

use super::{FrameEnv, Pattern};
use crate::color::Rgb;
use crate::layout::PixelCoords;
use crate::palette::{PaletteCycle, tables};
use crate::waveform::{frac, wave};

const DEFAULT_HOLD: Duration = Duration::from_secs(5);
const DEFAULT_TRANSITION: Duration = Duration::from_secs(2);

/// Palette waves pattern.
#[derive(Debug, Clone)]
pub struct PaletteWavesPattern {
    cycle: PaletteCycle<'static>,
    /// Wave position captured once per frame.
    t: f32,
}

impl Default for PaletteWavesPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteWavesPattern {
    pub fn new() -> Self {
        Self {
            cycle: PaletteCycle::new(tables::CYCLE_SET, DEFAULT_HOLD, DEFAULT_TRANSITION),
            t: 0.0,
        }
    }

    /// Set hold and transition durations of the palette rotation
    #[must_use]
    pub fn with_timing(mut self, hold: Duration, transition: Duration) -> Self {
        self.cycle = PaletteCycle::new(tables::CYCLE_SET, hold, transition);
        self
    }

    /// Access the underlying palette cycle (for inspection)
    pub const fn cycle(&self) -> &PaletteCycle<'static> {
        &self.cycle
    }
}

impl Pattern for PaletteWavesPattern {
    fn before_render(&mut self, delta: Duration, env: &FrameEnv<'_>) {
        self.cycle.tick(delta);
        self.t = wave(env.clock.phase(0.1));
    }

    #[allow(clippy::cast_precision_loss)]
    fn render_pixel(&mut self, px: PixelCoords) -> Rgb {
        let pct = frac(self.t + px.index as f32 / px.count.max(1) as f32);
        self.cycle.sample(pct).to_rgb8()
    }
}
