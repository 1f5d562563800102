//! Shared gradient tables
//!
//! The classic cpt-city / FastLED-heritage gradients, normalized to
//! 0..1 stops and components and defined once. Each table is a flat
//! `(stop, r, g, b)` sequence suitable for
//! [`Palette::new`](super::Palette::new).

#[rustfmt::skip]
pub const SUNSET_REAL: &[f32] = &[
    0.0,   0.471, 0.0,   0.0,
    0.086, 0.702, 0.086, 0.0,
    0.2,   1.0,   0.408, 0.0,
    0.333, 0.655, 0.086, 0.071,
    0.529, 0.392, 0.0,   0.404,
    0.776, 0.063, 0.0,   0.51,
    1.0,   0.0,   0.0,   0.627,
];

#[rustfmt::skip]
pub const ANALOGOUS_1: &[f32] = &[
    0.0,   0.012, 0.0,   1.0,
    0.247, 0.09,  0.0,   1.0,
    0.498, 0.263, 0.0,   1.0,
    0.749, 0.557, 0.0,   0.176,
    1.0,   1.0,   0.0,   0.0,
];

#[rustfmt::skip]
pub const BLACK_BLUE_MAGENTA_WHITE: &[f32] = &[
    0.0,   0.0,   0.0,   0.0,
    0.165, 0.0,   0.0,   0.176,
    0.329, 0.0,   0.0,   1.0,
    0.498, 0.165, 0.0,   1.0,
    0.667, 1.0,   0.0,   1.0,
    0.831, 1.0,   0.216, 1.0,
    1.0,   1.0,   1.0,   1.0,
];

#[rustfmt::skip]
pub const BLUE_CYAN_YELLOW: &[f32] = &[
    0.0,   0.0,   0.0,   1.0,
    0.247, 0.0,   0.216, 1.0,
    0.498, 0.0,   1.0,   1.0,
    0.749, 0.165, 1.0,   0.176,
    1.0,   1.0,   1.0,   0.0,
];

#[rustfmt::skip]
pub const RAINBOW_SHERBET: &[f32] = &[
    0.0,   1.0,   0.129, 0.016,
    0.169, 1.0,   0.267, 0.098,
    0.337, 1.0,   0.027, 0.098,
    0.498, 1.0,   0.322, 0.404,
    0.667, 1.0,   1.0,   0.949,
    0.82,  0.165, 1.0,   0.086,
    1.0,   0.341, 1.0,   0.255,
];

#[rustfmt::skip]
pub const HEATMAP: &[f32] = &[
    0.0,   0.0,   0.0,   0.0,
    0.502, 1.0,   0.0,   0.0,
    0.878, 1.0,   1.0,   0.0,
    1.0,   1.0,   1.0,   1.0,
];

#[rustfmt::skip]
pub const INFERNO: &[f32] = &[
    0.0, 0.0,   0.0,   0.016,
    0.1, 0.086, 0.043, 0.224,
    0.2, 0.259, 0.039, 0.408,
    0.3, 0.416, 0.09,  0.431,
    0.4, 0.576, 0.149, 0.404,
    0.5, 0.737, 0.216, 0.329,
    0.6, 0.867, 0.318, 0.227,
    0.7, 0.953, 0.471, 0.098,
    0.8, 0.988, 0.647, 0.039,
    0.9, 0.965, 0.843, 0.275,
    1.0, 0.988, 1.0,   0.643,
];

#[rustfmt::skip]
pub const LAVA: &[f32] = &[
    0.0,   0.0,   0.0,   0.0,
    0.18,  0.071, 0.0,   0.0,
    0.376, 0.443, 0.0,   0.0,
    0.424, 0.557, 0.012, 0.004,
    0.467, 0.686, 0.067, 0.004,
    0.573, 0.835, 0.173, 0.008,
    0.682, 1.0,   0.322, 0.016,
    0.737, 1.0,   0.451, 0.016,
    0.792, 1.0,   0.612, 0.016,
    0.855, 1.0,   0.796, 0.016,
    0.918, 1.0,   1.0,   0.016,
    0.957, 1.0,   1.0,   0.278,
    1.0,   1.0,   1.0,   1.0,
];

/// Black-red-yellow-white fire ramp used by the noise fire patterns.
#[rustfmt::skip]
pub const FIRE: &[f32] = &[
    0.0, 0.0, 0.0, 0.0,
    0.2, 1.0, 0.0, 0.0,
    0.8, 1.0, 1.0, 0.0,
    1.0, 1.0, 1.0, 1.0,
];

/// Ember ramp for spark effects: black, orange, white, cooling gray.
#[rustfmt::skip]
pub const SPARK: &[f32] = &[
    0.0, 0.0, 0.0, 0.0,
    0.2, 1.0, 0.5, 0.0,
    0.8, 1.0, 1.0, 1.0,
    1.0, 0.5, 0.5, 0.5,
];

/// Default rotation set for palette-cycling patterns.
pub const CYCLE_SET: &[&[f32]] = &[
    SUNSET_REAL,
    BLUE_CYAN_YELLOW,
    ANALOGOUS_1,
    BLACK_BLUE_MAGENTA_WHITE,
    INFERNO,
    LAVA,
    RAINBOW_SHERBET,
    HEATMAP,
];
