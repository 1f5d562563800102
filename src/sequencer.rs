//! Timed pattern playlist with shimmer crossfades
//!
//! Runs a circular queue of `(pattern, duration)` entries. Near the
//! end of each entry the upcoming pattern is instantiated and both run
//! side by side; every pixel is probabilistically drawn from one or
//! the other, with the probability tweened across the fade window.
//! The result looks like a shimmering dissolve and needs no color
//! blending between arbitrary patterns.

use embassy_time::Duration;
use heapless::Vec;

use crate::color::Rgb;
use crate::layout::PixelCoords;
use crate::pattern::{FrameEnv, Pattern, PatternId, PatternSlot};
use crate::rng::Rng;
use crate::waveform::wave;

/// One playlist step.
#[derive(Debug, Clone, Copy)]
pub struct PlaylistEntry {
    pub pattern: PatternId,
    pub duration: Duration,
}

impl PlaylistEntry {
    pub const fn new(pattern: PatternId, duration: Duration) -> Self {
        Self { pattern, duration }
    }
}

/// Circular pattern scheduler with shimmer crossfades.
#[derive(Debug, Clone)]
pub struct Playlist<const MAX_LEDS: usize, const MAX_ENTRIES: usize = 16> {
    entries: Vec<PlaylistEntry, MAX_ENTRIES>,
    position: usize,
    current: PatternSlot<MAX_LEDS>,
    next: Option<PatternSlot<MAX_LEDS>>,
    crossfade: Duration,
    elapsed_ms: u64,
    /// 0 outside crossfades, ramping 0..1 inside the fade window.
    fade_pct: f32,
    rng: Rng,
}

impl<const MAX_LEDS: usize, const MAX_ENTRIES: usize> Playlist<MAX_LEDS, MAX_ENTRIES> {
    /// Build a playlist from entries; entries beyond the capacity are
    /// dropped.
    pub fn new(list: &[PlaylistEntry], crossfade: Duration) -> Self {
        let mut entries = Vec::new();
        for entry in list {
            if entries.push(*entry).is_err() {
                break;
            }
        }
        let current = entries
            .first()
            .map_or_else(PatternSlot::default, |entry| entry.pattern.to_slot());
        Self {
            entries,
            position: 0,
            current,
            next: None,
            crossfade,
            elapsed_ms: 0,
            fade_pct: 0.0,
            rng: Rng::default(),
        }
    }

    /// Id of the pattern currently holding the strip.
    pub fn current_id(&self) -> PatternId {
        self.current.id()
    }

    /// Whether a crossfade is currently running.
    pub fn crossfading(&self) -> bool {
        self.fade_pct > 0.0 && self.next.is_some()
    }

    fn upcoming(&self) -> Option<PatternId> {
        if self.entries.is_empty() {
            return None;
        }
        let next_pos = (self.position + 1) % self.entries.len();
        Some(self.entries[next_pos].pattern)
    }
}

impl<const MAX_LEDS: usize, const MAX_ENTRIES: usize> Pattern
    for Playlist<MAX_LEDS, MAX_ENTRIES>
{
    #[allow(clippy::cast_precision_loss)]
    fn before_render(&mut self, delta: Duration, env: &FrameEnv<'_>) {
        if self.entries.is_empty() {
            self.current.before_render(delta, env);
            return;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(delta.as_millis());

        let entry_ms = self.entries[self.position].duration.as_millis().max(1);
        let fade_ms = self.crossfade.as_millis().min(entry_ms);

        if self.elapsed_ms >= entry_ms {
            // The incoming pattern takes over with its pre-rolled state.
            self.position = (self.position + 1) % self.entries.len();
            self.current = self.next.take().unwrap_or_else(|| {
                self.entries[self.position].pattern.to_slot()
            });
            self.elapsed_ms = 0;
            self.fade_pct = 0.0;
        }

        let entry_ms = self.entries[self.position].duration.as_millis().max(1);
        let fade_start = entry_ms.saturating_sub(fade_ms);
        if fade_ms > 0 && self.elapsed_ms >= fade_start {
            if self.next.is_none() {
                if let Some(upcoming) = self.upcoming() {
                    self.next = Some(upcoming.to_slot());
                }
            }
            self.fade_pct = (self.elapsed_ms - fade_start) as f32 / fade_ms as f32;
        } else {
            self.fade_pct = 0.0;
            self.next = None;
        }

        self.current.before_render(delta, env);
        if let Some(next) = &mut self.next {
            next.before_render(delta, env);
        }
    }

    fn render_pixel(&mut self, px: PixelCoords) -> Rgb {
        if self.fade_pct > 0.0 {
            if let Some(next) = &mut self.next {
                // Probability eases in and out across the fade window
                let take_next = wave((self.fade_pct - 0.5) / 2.0);
                if self.rng.chance(take_next) {
                    return next.render_pixel(px);
                }
            }
        }
        self.current.render_pixel(px)
    }

    fn reset(&mut self) {
        self.position = 0;
        self.current = self
            .entries
            .first()
            .map_or_else(PatternSlot::default, |entry| entry.pattern.to_slot());
        self.next = None;
        self.elapsed_ms = 0;
        self.fade_pct = 0.0;
    }
}
