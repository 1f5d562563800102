//! Polar hue rotation
//!
//! Hue and brightness follow the angle of each pixel around the
//! center, with a slow sinusoidal drift layered on top. On a bare
//! strip the pixels sit on a chord below the center, which still
//! yields a smooth angular sweep.

use core::f32::consts::TAU;

use embassy_time::Duration;

use super::{FrameEnv, Pattern};
use crate::color::{Rgb, hsv_f};
use crate::layout::PixelCoords;
use crate::waveform::wave;

/// Spin wheel pattern.
#[derive(Debug, Clone, Default)]
pub struct SpinWheelPattern {
    t1: f32,
    t2: f32,
}

impl SpinWheelPattern {
    pub const fn new() -> Self {
        Self { t1: 0.0, t2: 0.0 }
    }
}

impl Pattern for SpinWheelPattern {
    fn before_render(&mut self, _delta: Duration, env: &FrameEnv<'_>) {
        self.t1 = env.clock.phase(0.15) * TAU;
        self.t2 = env.clock.phase(0.1);
    }

    fn render_pixel(&mut self, px: PixelCoords) -> Rgb {
        let angle = libm::atan2f(px.y - 0.5, px.x - 0.5) + core::f32::consts::PI;

        let wobble = 5.0 * libm::sinf(self.t1);
        let h = self.t2 + 1.0 + libm::sinf(angle / 2.0 + wobble) / 5.0 + angle / (4.0 * TAU);

        let mut v = wave((angle / 2.0 + wobble) / TAU);
        v = v * v * v * v;

        hsv_f(h, 1.0, v)
    }
}
