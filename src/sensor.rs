//! Ambient sensor data supplied by the host
//!
//! The composer never talks to hardware itself; the host pushes one
//! `SensorFrame` per acquisition cycle through the intent channel and
//! patterns read whatever fields they care about.

/// Number of frequency bins in the host's audio spectrum.
pub const FREQUENCY_BINS: usize = 32;

/// One snapshot of ambient sensor readings.
#[derive(Debug, Clone, Copy)]
pub struct SensorFrame {
    /// Audio spectrum magnitudes, low to high frequency.
    pub frequency_data: [f32; FREQUENCY_BINS],
    /// Total audio energy, smoothed by the host.
    pub energy_average: f32,
    /// Dominant frequency in Hz.
    pub max_frequency: f32,
    /// Magnitude of the dominant frequency bin.
    pub max_frequency_magnitude: f32,
    /// Acceleration in g, device axes.
    pub accelerometer: [f32; 3],
    /// Ambient light level; negative means no sensor board attached.
    pub light: f32,
}

impl Default for SensorFrame {
    fn default() -> Self {
        Self {
            frequency_data: [0.0; FREQUENCY_BINS],
            energy_average: 0.0,
            max_frequency: 0.0,
            max_frequency_magnitude: 0.0,
            accelerometer: [0.0; 3],
            light: -1.0,
        }
    }
}

impl SensorFrame {
    /// Whether a sensor board has reported at least once.
    pub fn available(&self) -> bool {
        self.light >= 0.0
    }
}

/// Linearly interpolate between adjacent entries of `values` at the
/// fractional index `i`.
///
/// Out-of-range indexes clamp to the first/last entry.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn array_lerp(values: &[f32], i: f32) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let last = values.len() - 1;
    if i <= 0.0 {
        return values[0];
    }
    if i >= last as f32 {
        return values[last];
    }
    let lower = libm::floorf(i) as usize;
    let upper = (lower + 1).min(last);
    let ratio = i - lower as f32;
    values[lower] * (1.0 - ratio) + values[upper] * ratio
}
