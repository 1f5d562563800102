use embassy_time::Instant;

use crate::color::Rgb;

mod brightness;

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&mut self, frame: &mut [Rgb]);

    fn tick(&mut self, _now: Instant) {}
}

pub(crate) use brightness::BrightnessFilter;
pub use brightness::{BrightnessFilterConfig, BrightnessRange};

#[derive(Debug, Clone)]
pub struct FilterProcessorConfig {
    /// Brightness filter
    pub brightness: BrightnessFilterConfig,
}

/// Filter processor - applies post-processing to frames
///
/// Central hub for output modifications applied after the pattern has
/// produced raw colors.
#[derive(Debug)]
pub(crate) struct FilterProcessor {
    /// Brightness filter
    pub brightness: BrightnessFilter,
}

impl FilterProcessor {
    /// Create a new filter processor
    pub(crate) fn new(config: &FilterProcessorConfig) -> Self {
        Self {
            brightness: BrightnessFilter::new(0, &config.brightness),
        }
    }

    /// Tick the filters
    pub(crate) fn tick(&mut self, now: Instant) {
        self.brightness.tick(now);
    }
}
