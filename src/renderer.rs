use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bounds::{RenderingBounds, bounded};
use crate::clock::Clock;
use crate::color::Rgb;
use crate::filter::{Filter, FilterProcessor, FilterProcessorConfig};
use crate::intent::{IntentEffects, IntentProcessor, IntentReceiver};
use crate::layout::PixelLayout;
use crate::operation::{Operation, OperationStack};
use crate::pattern::{FrameEnv, Pattern, PatternId, PatternSlot};
use crate::sensor::SensorFrame;
use crate::sequencer::Playlist;

/// Configuration for pattern transitions
#[derive(Clone, Copy)]
pub struct TransitionTimings {
    /// Duration of the fade-out phase of a pattern switch
    pub fade_out: Duration,
    /// Duration of the fade-in phase (also plain brightness changes)
    pub fade_in: Duration,
    /// Duration of power on/off ramps
    pub brightness: Duration,
}

/// What the renderer is currently running: a single pattern or a
/// self-advancing playlist.
#[derive(Debug, Clone)]
pub enum Program<const MAX_LEDS: usize> {
    Pattern(PatternSlot<MAX_LEDS>),
    Playlist(Playlist<MAX_LEDS>),
}

impl<const MAX_LEDS: usize> Default for Program<MAX_LEDS> {
    fn default() -> Self {
        Self::Pattern(PatternSlot::default())
    }
}

impl<const MAX_LEDS: usize> Program<MAX_LEDS> {
    fn before_render(&mut self, delta: Duration, env: &FrameEnv<'_>) {
        match self {
            Self::Pattern(slot) => slot.before_render(delta, env),
            Self::Playlist(playlist) => playlist.before_render(delta, env),
        }
    }

    fn render_pixel(&mut self, px: crate::layout::PixelCoords) -> Rgb {
        match self {
            Self::Pattern(slot) => slot.render_pixel(px),
            Self::Playlist(playlist) => playlist.render_pixel(px),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Pattern(slot) => slot.reset(),
            Self::Playlist(playlist) => Pattern::reset(playlist),
        }
    }

    /// Id of the pattern currently on the strip
    pub fn id(&self) -> PatternId {
        match self {
            Self::Pattern(slot) => slot.id(),
            Self::Playlist(playlist) => playlist.current_id(),
        }
    }
}

/// Configuration for the composer
#[derive(Clone)]
pub struct ComposerConfig {
    pub pattern: PatternId,
    pub layout: PixelLayout,
    pub bounds: RenderingBounds,
    pub filters: FilterProcessorConfig,
    pub timings: TransitionTimings,
    pub brightness: u8,
}

/// Pattern composer - the main orchestrator
pub struct Renderer<'a, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize> {
    // External dependencies and configuration
    intent_processor: IntentProcessor<'a, INTENT_CHANNEL_SIZE>,
    timings: TransitionTimings,
    bounds: RenderingBounds,
    layout: PixelLayout,

    // Internal state
    clock: Clock,
    sensors: SensorFrame,
    /// Target brightness the power state restores to.
    brightness: u8,
    program: Program<MAX_LEDS>,
    stack: OperationStack<10>,
    frame_buffer: [Rgb; MAX_LEDS],
    last_frame: Option<Instant>,

    // Internal dependencies
    filters: FilterProcessor,
}

impl<'a, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
    Renderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE>
{
    /// Create a new composer fed by an intent channel
    pub fn new(
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
        config: &ComposerConfig,
    ) -> Self {
        Self {
            intent_processor: IntentProcessor::new(intents),
            frame_buffer: [Rgb::default(); MAX_LEDS],
            timings: config.timings,
            bounds: config.bounds,
            layout: config.layout,
            clock: Clock::new(),
            sensors: SensorFrame::default(),
            brightness: config.brightness,
            program: Program::Pattern(config.pattern.to_slot()),
            stack: OperationStack::new(),
            last_frame: None,
            filters: FilterProcessor::new(&config.filters),
        }
    }

    /// Replace the configured pattern with an arbitrary program
    /// (e.g. a playlist)
    #[must_use]
    pub fn with_program(mut self, program: Program<MAX_LEDS>) -> Self {
        self.program = program;
        self
    }

    /// Process one frame
    ///
    /// This is the main render loop step. Call this continuously.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        self.process_intents();
        self.process_operations(now);

        self.filters.tick(now);

        let delta = self.last_frame.map_or(Duration::from_millis(0), |last| {
            Duration::from_millis(now.as_millis().saturating_sub(last.as_millis()))
        });
        self.last_frame = Some(now);
        self.clock.advance(delta);

        let layout = self.layout;
        let frame = bounded(&mut self.frame_buffer, self.bounds);
        #[allow(clippy::cast_possible_truncation)]
        let count = frame.len() as u32;

        let env = FrameEnv {
            clock: &self.clock,
            sensors: &self.sensors,
            pixel_count: count,
        };
        self.program.before_render(delta, &env);

        for (index, led) in frame.iter_mut().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let px = layout.coords(index as u32, count);
            *led = self.program.render_pixel(px);
        }

        self.filters.brightness.apply(frame);

        frame
    }

    /// Id of the pattern currently on the strip
    pub fn pattern_id(&self) -> PatternId {
        self.program.id()
    }

    /// Global animation time base
    pub const fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Process pending intents from the channel (non-blocking)
    fn process_intents(&mut self) {
        let effects = self
            .intent_processor
            .process_pending(&mut self.stack, self.brightness);

        self.apply_effects(&effects);
    }

    /// Apply side effects from intent processing
    fn apply_effects(&mut self, effects: &IntentEffects) {
        if let Some(bounds) = effects.bounds {
            self.bounds = bounds;
        }

        if let Some(layout) = effects.layout {
            self.layout = layout;
        }

        if let Some(brightness_range) = effects.brightness_range {
            self.filters.brightness.set_min_brightness(brightness_range.min());
            self.filters.brightness.set_scale(brightness_range.max());
        }

        if let Some(adjuster) = effects.adjuster {
            self.filters.brightness.set_adjuster(adjuster);
        }

        if let Some(sensors) = effects.sensors {
            self.sensors = sensors;
        }
    }

    /// Process the next operation from the stack
    fn process_operations(&mut self, now: Instant) {
        let Some(next) = self.process_current_operation() else {
            return;
        };
        // Start the transition for the current operation
        match next {
            Operation::SetBrightness(0) => {
                self.filters.brightness.set(0, self.timings.fade_out, now);
            }
            Operation::SetBrightness(brightness) => {
                self.filters
                    .brightness
                    .set(brightness, self.timings.fade_in, now);
            }
            Operation::PowerOff => {
                self.filters
                    .brightness
                    .set_uncorrected(0, self.timings.brightness, now);
            }
            Operation::PowerOn => {
                self.filters
                    .brightness
                    .set(self.brightness, self.timings.brightness, now);
            }
            Operation::SwitchPattern(_pattern) => {
                // This command changes instantly
            }
        }
    }

    /// Process the current operation from the stack
    ///
    /// Returns the next operation to process
    fn process_current_operation(&mut self) -> Option<Operation> {
        let current = self.stack.current()?;
        let is_complete = match current {
            Operation::SetBrightness(_) | Operation::PowerOff | Operation::PowerOn => {
                !self.filters.brightness.is_transitioning()
            }
            Operation::SwitchPattern(_) => true,
        };
        if !is_complete {
            return None;
        }
        // Apply the operation to the state
        match current {
            Operation::SetBrightness(brightness) => {
                self.brightness = brightness;
            }
            Operation::SwitchPattern(pattern) => {
                self.set_pattern(pattern);
            }
            Operation::PowerOff | Operation::PowerOn => {
                // These commands do not change the stored target
            }
        }

        self.stack.pop()
    }

    /// Set new pattern by id
    fn set_pattern(&mut self, pattern: PatternId) {
        #[cfg(feature = "esp32-log")]
        println!("composer: switching pattern to {}", pattern.as_str());

        self.program = Program::Pattern(pattern.to_slot());
        self.program.reset();
    }
}
