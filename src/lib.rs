#![no_std]

pub mod agc;
pub mod bounds;
pub mod channel;
pub mod clock;
pub mod color;
pub mod filter;
pub mod frame_scheduler;
pub mod gamma;
pub mod intent;
pub mod layout;
pub mod math8;
pub mod noise;
pub mod operation;
pub mod palette;
pub mod pattern;
pub mod renderer;
pub mod rng;
pub mod sensor;
pub mod sequencer;
pub mod transition;
pub mod waveform;

pub use filter::{BrightnessFilterConfig, BrightnessRange, FilterProcessorConfig};
pub use intent::{
    ComposerIntent, ComposerStateIntent, IntentChannel, IntentProcessor,
    IntentReceiver, IntentSender,
};
pub use renderer::{ComposerConfig, Program, Renderer, TransitionTimings};
pub use frame_scheduler::FrameScheduler;
pub use gamma::ws2812_lut;
pub use layout::{PixelCoords, PixelLayout};
pub use palette::{Palette, PaletteCycle};
pub use pattern::{FrameEnv, Pattern, PatternId, PatternSlot};
pub use sensor::SensorFrame;
pub use sequencer::{Playlist, PlaylistEntry};
pub use operation::{Operation, OperationStack};

pub use color::{Hsv, Rgb, Rgbf};
pub use math8::{U8Adjuster, ease_in_out_quad};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The composer is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
