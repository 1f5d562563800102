//! Pattern system with compile-time known pattern variants
//!
//! All patterns are stored in an enum to avoid heap allocations.
//! Each pattern implements the `Pattern` trait: one state-update hook
//! per frame, then one pure color function per pixel.

mod palette_waves;
mod perlin_fire;
mod plane_pulse;
mod sparks;
mod spectrum;
mod spin_wheel;

use embassy_time::Duration;

pub use palette_waves::PaletteWavesPattern;
pub use perlin_fire::{FireVariant, PerlinFirePattern};
pub use plane_pulse::PlanePulsePattern;
pub use sparks::{SparkVariant, SparksPattern};
pub use spectrum::SpectrumPattern;
pub use spin_wheel::SpinWheelPattern;

use crate::clock::Clock;
use crate::color::Rgb;
use crate::layout::PixelCoords;
use crate::sensor::SensorFrame;

const PATTERN_NAME_PALETTE_WAVES: &str = "palette_waves";
const PATTERN_NAME_PERLIN_FIRE: &str = "perlin_fire";
const PATTERN_NAME_PLANE_PULSE: &str = "plane_pulse";
const PATTERN_NAME_SPECTRUM: &str = "spectrum";
const PATTERN_NAME_SPIN_WHEEL: &str = "spin_wheel";
const PATTERN_NAME_SPARKS: &str = "sparks";

const PATTERN_ID_PALETTE_WAVES: u8 = 0;
const PATTERN_ID_PERLIN_FIRE: u8 = 1;
const PATTERN_ID_PLANE_PULSE: u8 = 2;
const PATTERN_ID_SPECTRUM: u8 = 3;
const PATTERN_ID_SPIN_WHEEL: u8 = 4;
const PATTERN_ID_SPARKS: u8 = 5;

/// Per-frame context handed to `before_render`.
pub struct FrameEnv<'a> {
    /// Global animation time base.
    pub clock: &'a Clock,
    /// Latest ambient sensor snapshot.
    pub sensors: &'a SensorFrame,
    /// Number of pixels in the rendering area.
    pub pixel_count: u32,
}

pub trait Pattern {
    /// Advance time-based state once per frame, before any pixel is
    /// rendered.
    fn before_render(&mut self, delta: Duration, env: &FrameEnv<'_>);

    /// Compute the color of a single pixel.
    fn render_pixel(&mut self, px: PixelCoords) -> Rgb;

    /// Reset pattern state
    fn reset(&mut self) {}
}

/// Pattern slot - enum containing all possible patterns
///
/// `MAX_LEDS` sizes the per-pixel persistence buffers some patterns
/// keep (matching the renderer's frame buffer).
#[derive(Debug, Clone)]
pub enum PatternSlot<const MAX_LEDS: usize> {
    /// Blended-palette color waves
    PaletteWaves(PaletteWavesPattern),
    /// Noise-driven fire
    PerlinFire(PerlinFirePattern),
    /// Rotating parallel-plane pulse
    PlanePulse(PlanePulsePattern),
    /// Audio spectrum with auto-gain
    Spectrum(SpectrumPattern<MAX_LEDS>),
    /// Polar hue rotation
    SpinWheel(SpinWheelPattern),
    /// Stochastic noise-gated sparks
    Sparks(SparksPattern),
}

/// Known pattern ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    PaletteWaves = PATTERN_ID_PALETTE_WAVES,
    PerlinFire = PATTERN_ID_PERLIN_FIRE,
    PlanePulse = PATTERN_ID_PLANE_PULSE,
    Spectrum = PATTERN_ID_SPECTRUM,
    SpinWheel = PATTERN_ID_SPIN_WHEEL,
    Sparks = PATTERN_ID_SPARKS,
}

impl<const MAX_LEDS: usize> Default for PatternSlot<MAX_LEDS> {
    fn default() -> Self {
        Self::PaletteWaves(PaletteWavesPattern::new())
    }
}

impl PatternId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_PALETTE_WAVES => Self::PaletteWaves,
            PATTERN_ID_PERLIN_FIRE => Self::PerlinFire,
            PATTERN_ID_PLANE_PULSE => Self::PlanePulse,
            PATTERN_ID_SPECTRUM => Self::Spectrum,
            PATTERN_ID_SPIN_WHEEL => Self::SpinWheel,
            PATTERN_ID_SPARKS => Self::Sparks,
            _ => return None,
        })
    }

    pub fn to_slot<const MAX_LEDS: usize>(self) -> PatternSlot<MAX_LEDS> {
        match self {
            Self::PaletteWaves => PatternSlot::PaletteWaves(PaletteWavesPattern::new()),
            Self::PerlinFire => {
                PatternSlot::PerlinFire(PerlinFirePattern::new(FireVariant::Fbm))
            }
            Self::PlanePulse => PatternSlot::PlanePulse(PlanePulsePattern::new()),
            Self::Spectrum => PatternSlot::Spectrum(SpectrumPattern::new()),
            Self::SpinWheel => PatternSlot::SpinWheel(SpinWheelPattern::new()),
            Self::Sparks => {
                PatternSlot::Sparks(SparksPattern::new(SparkVariant::Threshold))
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PaletteWaves => PATTERN_NAME_PALETTE_WAVES,
            Self::PerlinFire => PATTERN_NAME_PERLIN_FIRE,
            Self::PlanePulse => PATTERN_NAME_PLANE_PULSE,
            Self::Spectrum => PATTERN_NAME_SPECTRUM,
            Self::SpinWheel => PATTERN_NAME_SPIN_WHEEL,
            Self::Sparks => PATTERN_NAME_SPARKS,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_PALETTE_WAVES => Some(Self::PaletteWaves),
            PATTERN_NAME_PERLIN_FIRE => Some(Self::PerlinFire),
            PATTERN_NAME_PLANE_PULSE => Some(Self::PlanePulse),
            PATTERN_NAME_SPECTRUM => Some(Self::Spectrum),
            PATTERN_NAME_SPIN_WHEEL => Some(Self::SpinWheel),
            PATTERN_NAME_SPARKS => Some(Self::Sparks),
            _ => None,
        }
    }
}

impl<const MAX_LEDS: usize> PatternSlot<MAX_LEDS> {
    /// Run the per-frame hook of the current pattern
    pub fn before_render(&mut self, delta: Duration, env: &FrameEnv<'_>) {
        match self {
            Self::PaletteWaves(pattern) => pattern.before_render(delta, env),
            Self::PerlinFire(pattern) => pattern.before_render(delta, env),
            Self::PlanePulse(pattern) => pattern.before_render(delta, env),
            Self::Spectrum(pattern) => pattern.before_render(delta, env),
            Self::SpinWheel(pattern) => pattern.before_render(delta, env),
            Self::Sparks(pattern) => pattern.before_render(delta, env),
        }
    }

    /// Render a single pixel of the current pattern
    pub fn render_pixel(&mut self, px: PixelCoords) -> Rgb {
        match self {
            Self::PaletteWaves(pattern) => pattern.render_pixel(px),
            Self::PerlinFire(pattern) => pattern.render_pixel(px),
            Self::PlanePulse(pattern) => pattern.render_pixel(px),
            Self::Spectrum(pattern) => pattern.render_pixel(px),
            Self::SpinWheel(pattern) => pattern.render_pixel(px),
            Self::Sparks(pattern) => pattern.render_pixel(px),
        }
    }

    /// Reset the pattern state
    pub fn reset(&mut self) {
        match self {
            Self::PaletteWaves(pattern) => Pattern::reset(pattern),
            Self::PerlinFire(pattern) => Pattern::reset(pattern),
            Self::PlanePulse(pattern) => Pattern::reset(pattern),
            Self::Spectrum(pattern) => Pattern::reset(pattern),
            Self::SpinWheel(pattern) => Pattern::reset(pattern),
            Self::Sparks(pattern) => Pattern::reset(pattern),
        }
    }

    /// Get the pattern ID for external observation
    pub fn id(&self) -> PatternId {
        match self {
            Self::PaletteWaves(_) => PatternId::PaletteWaves,
            Self::PerlinFire(_) => PatternId::PerlinFire,
            Self::PlanePulse(_) => PatternId::PlanePulse,
            Self::Spectrum(_) => PatternId::Spectrum,
            Self::SpinWheel(_) => PatternId::SpinWheel,
            Self::Sparks(_) => PatternId::Sparks,
        }
    }
}
