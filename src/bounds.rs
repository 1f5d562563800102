use crate::Rgb;

/// Bounds of the rendering area, in pixels.
///
/// `u16` because matrices routinely exceed 255 pixels.
#[derive(Debug, Clone, Copy)]
pub struct RenderingBounds {
    pub start: u16,
    pub end: u16,
}

impl RenderingBounds {
    /// Bounds covering a whole strip of `count` pixels.
    pub const fn full(count: u16) -> Self {
        Self {
            start: 0,
            end: count,
        }
    }

    /// Number of pixels in the rendering area.
    pub const fn count(self) -> u16 {
        self.end.saturating_sub(self.start)
    }
}

/// Get a slice of the LEDs within the bounds.
pub(crate) fn bounded(leds: &mut [Rgb], bounds: RenderingBounds) -> &mut [Rgb] {
    let start = (bounds.start as usize).min(leds.len());
    let end = (bounds.end as usize).clamp(start, leds.len());
    &mut leds[start..end]
}
