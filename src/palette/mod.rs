mod cycle;
pub mod tables;

use crate::color::Rgbf;
use crate::waveform::mix;
pub use cycle::{BLEND_ROWS, PaletteCycle};

/// Floats per gradient stop: position, r, g, b.
pub const STOP_STRIDE: usize = 4;

/// A gradient palette over a flat `(stop, r, g, b)` table.
///
/// Stops ascend from 0.0 to 1.0 and color components are 0..1. The
/// table is borrowed, so palettes are free to copy and pass around.
#[derive(Debug, Clone, Copy)]
pub struct Palette<'a> {
    data: &'a [f32],
}

impl<'a> Palette<'a> {
    /// Wrap a flat stop table. The length is expected to be a multiple
    /// of [`STOP_STRIDE`]; trailing partial stops are ignored.
    pub const fn new(data: &'a [f32]) -> Self {
        Self { data }
    }

    /// Number of gradient stops.
    pub const fn rows(&self) -> usize {
        self.data.len() / STOP_STRIDE
    }

    /// Sample the gradient at `v`.
    ///
    /// Exact stop positions return the stop color exactly; queries
    /// outside 0..1 clamp to the first or last stop.
    #[allow(clippy::float_cmp)]
    pub fn sample(&self, v: f32) -> Rgbf {
        let rows = self.rows();
        if rows == 0 {
            return Rgbf::default();
        }

        // Find the top bounding stop.
        let mut i = 0;
        let mut k = 0.0;
        while i < rows {
            k = self.data[i * STOP_STRIDE];
            if k >= v {
                break;
            }
            i += 1;
        }

        // Fast path: clamped ends or exact stop hit.
        if i == 0 || i >= rows || k == v {
            let row = STOP_STRIDE * i.min(rows - 1);
            return Rgbf::new(
                self.data[row + 1],
                self.data[row + 2],
                self.data[row + 3],
            );
        }

        let lower = STOP_STRIDE * (i - 1);
        let upper = STOP_STRIDE * i;
        let l = self.data[lower];
        let u = self.data[upper];

        let pct = 1.0 - (u - v) / (u - l);

        Rgbf::new(
            mix(self.data[lower + 1], self.data[upper + 1], pct),
            mix(self.data[lower + 2], self.data[upper + 2], pct),
            mix(self.data[lower + 3], self.data[upper + 3], pct),
        )
    }
}
