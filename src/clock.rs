//! Global time base for pattern animation
//!
//! Patterns derive all motion from sawtooth phases of this clock, so a
//! whole frame sees one consistent time value regardless of how long
//! the per-pixel loop takes.

use embassy_time::Duration;

/// Milliseconds in one phase period at `interval == 1.0`.
///
/// The interval scaling is 65.536 seconds per unit (65536 ms), so
/// interval constants read as "roughly the period in minutes".
const PERIOD_UNIT_MS: f64 = 65_536.0;

/// Monotonic animation clock, advanced once per frame.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    millis: u64,
}

impl Clock {
    pub const fn new() -> Self {
        Self { millis: 0 }
    }

    /// Advance the clock by one frame delta.
    pub fn advance(&mut self, delta: Duration) {
        self.millis = self.millis.wrapping_add(delta.as_millis());
    }

    /// Elapsed animation time in milliseconds.
    pub const fn millis(&self) -> u64 {
        self.millis
    }

    /// Sawtooth phase in 0..1 with period `interval * 65.536` seconds.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn phase(&self, interval: f32) -> f32 {
        if interval <= 0.0 {
            return 0.0;
        }
        let period = f64::from(interval) * PERIOD_UNIT_MS;
        let cycles = self.millis as f64 / period;
        (cycles - libm::floor(cycles)) as f32
    }

    /// Elapsed animation time in seconds.
    #[allow(clippy::cast_precision_loss)]
    pub fn seconds(&self) -> f32 {
        (self.millis as f64 / 1000.0) as f32
    }
}
