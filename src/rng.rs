//! Small deterministic random generator for stochastic patterns
//!
//! Xorshift32 is plenty for visual noise and keeps the crate free of a
//! platform entropy source.

/// Xorshift32 generator.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u32,
}

impl Rng {
    /// Create a generator from a non-zero seed (zero is remapped).
    pub const fn new(seed: u32) -> Self {
        let state = if seed == 0 { 0x9e37_79b9 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform value in 0..1.
    #[allow(clippy::cast_precision_loss)]
    pub fn uniform(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / 16_777_216.0
    }

    /// Bernoulli draw: true with probability `p`.
    pub fn chance(&mut self, p: f32) -> bool {
        self.uniform() < p
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(0x2545_f491)
    }
}
