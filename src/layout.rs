//! Pixel index to normalized coordinate mapping
//!
//! Patterns are pure functions over normalized 0..1 coordinates; the
//! layout describes how the physical strip is arranged so one pattern
//! renders correctly on a bare strip or a serpentine matrix.

/// Physical arrangement of the LED strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    /// A straight 1D run; `x` spans 0..1, `y` and `z` are 0.
    Strip,
    /// A 2D matrix fed row by row. `zigzag` flips the direction of
    /// every other row (serpentine wiring).
    Matrix { width: u16, zigzag: bool },
}

/// Normalized coordinates of one pixel within the rendering area.
#[derive(Debug, Clone, Copy)]
pub struct PixelCoords {
    /// Pixel index within the rendering area.
    pub index: u32,
    /// Number of pixels in the rendering area.
    pub count: u32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PixelLayout {
    /// Map `index` (of `count` pixels) to normalized coordinates.
    #[allow(clippy::cast_precision_loss)]
    pub fn coords(self, index: u32, count: u32) -> PixelCoords {
        let count = count.max(1);
        let index = index.min(count - 1);
        match self {
            Self::Strip => {
                let span = (count - 1).max(1) as f32;
                PixelCoords {
                    index,
                    count,
                    x: index as f32 / span,
                    y: 0.0,
                    z: 0.0,
                }
            }
            Self::Matrix { width, zigzag } => {
                let width = u32::from(width).max(1);
                let row = index / width;
                let mut col = index % width;
                if zigzag && row % 2 == 1 {
                    col = width - 1 - col;
                }
                let rows = count.div_ceil(width);
                PixelCoords {
                    index,
                    count,
                    x: col as f32 / (width - 1).max(1) as f32,
                    y: row as f32 / (rows - 1).max(1) as f32,
                    z: 0.0,
                }
            }
        }
    }
}
