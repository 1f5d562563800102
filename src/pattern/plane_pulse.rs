//! Rotating parallel-plane pulse
//!
//! Brightness is the distance to a family of parallel planes whose
//! normal vector slowly rotates; in 2D and 1D this degrades to
//! sweeping bands and a bouncing eye. Colors come from a cycling
//! blended palette.

use core::f32::consts::TAU;

use embassy_time::Duration;

use super::{FrameEnv, Pattern};
use crate::color::Rgb;
use crate::layout::PixelCoords;
use crate::palette::{PaletteCycle, tables};
use crate::waveform::{triangle, wave};

const DEFAULT_HOLD: Duration = Duration::from_secs(9);
const DEFAULT_TRANSITION: Duration = Duration::from_secs(1);

/// Plane pulse pattern.
#[derive(Debug, Clone)]
pub struct PlanePulsePattern {
    cycle: PaletteCycle<'static>,
    t1: f32,
    a: f32,
    b: f32,
    c: f32,
}

impl Default for PlanePulsePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanePulsePattern {
    pub fn new() -> Self {
        Self {
            cycle: PaletteCycle::new(tables::CYCLE_SET, DEFAULT_HOLD, DEFAULT_TRANSITION),
            t1: 0.0,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        }
    }

    /// Set hold and transition durations of the palette rotation
    #[must_use]
    pub fn with_timing(mut self, hold: Duration, transition: Duration) -> Self {
        self.cycle = PaletteCycle::new(tables::CYCLE_SET, hold, transition);
        self
    }
}

impl Pattern for PlanePulsePattern {
    fn before_render(&mut self, delta: Duration, env: &FrameEnv<'_>) {
        self.cycle.tick(delta);

        self.t1 = env.clock.phase(10.0);

        // Slowly rotating plane normal, each axis on its own period
        self.a = libm::sinf(env.clock.phase(0.10) * TAU);
        self.b = libm::sinf(env.clock.phase(0.05) * TAU);
        self.c = libm::sinf(env.clock.phase(0.07) * TAU);
    }

    fn render_pixel(&mut self, px: PixelCoords) -> Rgb {
        // a(x-x1) + b(y-y1) + c(z-z1) = 0 defines the dark plane; the
        // triangle shaping turns continuing distance into repeated
        // 0..1..0 layers, and the wave term sweeps them through space.
        let mut v = triangle(
            3.0 * wave(self.t1) + self.a * px.x + self.b * px.y + self.c * px.z,
        );

        // Thin the bright layers, widening the dark regions
        v *= v;

        self.cycle.sample(v).scale(v).to_rgb8()
    }
}
