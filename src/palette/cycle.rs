//! Palette crossfade state machine
//!
//! Holds one blended palette for a while, then linearly crossfades it
//! into the next source palette over a transition window. Rendering
//! always samples a fixed-size blended table, so the per-pixel cost is
//! independent of how many source palettes are cycling. The table is
//! only rebuilt while a transition is running.

use embassy_time::Duration;

use super::{Palette, STOP_STRIDE};
use crate::color::Rgbf;

/// Stops in the blended output table.
pub const BLEND_ROWS: usize = 16;

/// Cycles through a set of source palettes with timed crossfades.
#[derive(Debug, Clone)]
pub struct PaletteCycle<'a> {
    sources: &'a [&'a [f32]],
    current: usize,
    next: usize,
    hold: Duration,
    transition: Duration,
    run_ms: u64,
    in_transition: bool,
    blend: f32,
    table: [f32; BLEND_ROWS * STOP_STRIDE],
}

impl<'a> PaletteCycle<'a> {
    /// Create a cycle over `sources`, holding each blended palette for
    /// `hold` and crossfading over `transition`.
    pub fn new(sources: &'a [&'a [f32]], hold: Duration, transition: Duration) -> Self {
        let mut cycle = Self {
            sources,
            current: 0,
            next: if sources.len() > 1 { 1 } else { 0 },
            hold,
            transition,
            run_ms: 0,
            in_transition: false,
            blend: 0.0,
            table: [0.0; BLEND_ROWS * STOP_STRIDE],
        };
        cycle.rebuild();
        cycle
    }

    /// Advance the hold/transition state machine by one frame delta.
    #[allow(clippy::cast_precision_loss)]
    pub fn tick(&mut self, delta: Duration) {
        if self.sources.len() < 2 {
            return;
        }
        self.run_ms = self.run_ms.saturating_add(delta.as_millis());

        if self.in_transition {
            let transition_ms = self.transition.as_millis().max(1);
            if self.run_ms >= transition_ms {
                // Transition finished: the next pair becomes current
                // and the normal hold period restarts.
                self.run_ms = 0;
                self.in_transition = false;
                self.blend = 0.0;
                self.current = (self.current + 1) % self.sources.len();
                self.next = (self.next + 1) % self.sources.len();
            } else {
                self.blend = self.run_ms as f32 / transition_ms as f32;
            }
            self.rebuild();
        } else if self.run_ms >= self.hold.as_millis() {
            self.run_ms = 0;
            self.in_transition = true;
        }
    }

    /// Sample the blended palette at `v`.
    pub fn sample(&self, v: f32) -> Rgbf {
        Palette::new(&self.table).sample(v)
    }

    /// Current blend factor (0 outside transitions).
    pub const fn blend(&self) -> f32 {
        self.blend
    }

    /// Whether a crossfade is currently running.
    pub const fn in_transition(&self) -> bool {
        self.in_transition
    }

    /// Index of the currently held source palette.
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Rebuild the blended table from the current source pair.
    #[allow(clippy::cast_precision_loss)]
    fn rebuild(&mut self) {
        if self.sources.is_empty() {
            return;
        }
        let from = Palette::new(self.sources[self.current]);
        let to = Palette::new(self.sources[self.next]);

        let mut entry = 0;
        for i in 0..BLEND_ROWS {
            let v = i as f32 / BLEND_ROWS as f32;
            let mixed = from.sample(v).mix(to.sample(v), self.blend);

            self.table[entry] = v;
            self.table[entry + 1] = mixed.r;
            self.table[entry + 2] = mixed.g;
            self.table[entry + 3] = mixed.b;
            entry += STOP_STRIDE;
        }
    }
}
