//! Intent processing module
//!
//! Handles conversion of user intents to renderer operations.

use crate::bounds::RenderingBounds;
use crate::channel::{Channel, Receiver, Sender};
use crate::filter::BrightnessRange;
use crate::layout::PixelLayout;
use crate::math8::U8Adjuster;
use crate::operation::OperationStack;
use crate::pattern::PatternId;
use crate::sensor::SensorFrame;

/// Represents a user intent to change the composer state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComposerStateIntent {
    pub power: Option<bool>,
    pub brightness: Option<u8>,
    pub pattern_id: Option<PatternId>,
}

/// Intent to change composer state or settings
#[derive(Debug, Clone, Copy)]
pub enum ComposerIntent {
    /// Change the composer state (power, brightness, pattern)
    State(ComposerStateIntent),
    /// Change the rendering bounds
    Bounds(RenderingBounds),
    /// Change the pixel layout
    Layout(PixelLayout),
    /// Change the brightness range (min/scale)
    BrightnessRange(BrightnessRange),
    /// Change the output brightness adjuster (None disables it)
    Adjuster(Option<U8Adjuster>),
    /// Publish a fresh sensor frame
    Sensors(SensorFrame),
}

/// Side effects from processing intents that the renderer should apply
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentEffects {
    /// New bounds to apply
    pub bounds: Option<RenderingBounds>,
    /// New layout to apply
    pub layout: Option<PixelLayout>,
    /// New brightness range to apply
    pub brightness_range: Option<BrightnessRange>,
    /// New adjuster to apply (outer None means no change)
    pub adjuster: Option<Option<U8Adjuster>>,
    /// New sensor frame to apply
    pub sensors: Option<SensorFrame>,
}

impl IntentEffects {
    /// Check if any effects need to be applied
    pub const fn has_effects(&self) -> bool {
        self.bounds.is_some()
            || self.layout.is_some()
            || self.brightness_range.is_some()
            || self.adjuster.is_some()
            || self.sensors.is_some()
    }
}

/// Type alias for intent sender
pub type IntentSender<'a, const SIZE: usize> = Sender<'a, ComposerIntent, SIZE>;

/// Type alias for intent receiver
pub type IntentReceiver<'a, const SIZE: usize> = Receiver<'a, ComposerIntent, SIZE>;

/// Type alias for the intent channel
pub type IntentChannel<const SIZE: usize> = Channel<ComposerIntent, SIZE>;

/// Processes user intents and converts them to renderer operations
pub struct IntentProcessor<'a, const SIZE: usize> {
    intents: IntentReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    /// Create a new intent processor
    pub const fn new(intents: IntentReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Process all pending intents from the channel (non-blocking)
    ///
    /// Drains all queued intents, pushes corresponding operations onto the stack,
    /// and returns side effects (bounds/layout/filter changes) for the renderer
    /// to apply.
    pub fn process_pending<const N: usize>(
        &mut self,
        stack: &mut OperationStack<N>,
        current_brightness: u8,
    ) -> IntentEffects {
        let mut effects = IntentEffects::default();

        while let Some(intent) = self.intents.try_receive() {
            match intent {
                ComposerIntent::State(state_intent) => {
                    Self::process_state_intent(stack, &state_intent, current_brightness);
                }
                ComposerIntent::Bounds(bounds) => {
                    effects.bounds = Some(bounds);
                }
                ComposerIntent::Layout(layout) => {
                    effects.layout = Some(layout);
                }
                ComposerIntent::BrightnessRange(range) => {
                    effects.brightness_range = Some(range);
                }
                ComposerIntent::Adjuster(adjuster) => {
                    effects.adjuster = Some(adjuster);
                }
                ComposerIntent::Sensors(frame) => {
                    effects.sensors = Some(frame);
                }
            }
        }

        effects
    }

    /// Process a state change intent, pushing operations onto the stack
    fn process_state_intent<const N: usize>(
        stack: &mut OperationStack<N>,
        intent: &ComposerStateIntent,
        current_brightness: u8,
    ) {
        if let Some(pattern_id) = intent.pattern_id {
            let _ = stack.push_pattern(pattern_id, current_brightness);
        }

        if let Some(brightness) = intent.brightness {
            let _ = stack.push_brightness(brightness);
        }

        if let Some(power) = intent.power {
            if power {
                let _ = stack.push_power_on();
            } else {
                let _ = stack.push_power_off();
            }
        }
    }
}
