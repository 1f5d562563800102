//! Proportional-integral controller for automatic gain
//!
//! Audio-reactive patterns scale raw sensor magnitudes by a
//! sensitivity value. The controller nudges that sensitivity each
//! frame so the observed output (average lit brightness) tracks a
//! target fill ratio, which keeps quiet rooms and loud rooms looking
//! the same.

/// Two-term feedback controller with a clamped integral accumulator.
#[derive(Debug, Clone)]
pub struct PiController {
    kp: f32,
    ki: f32,
    accumulator: f32,
    min: f32,
    max: f32,
}

impl PiController {
    /// Create a controller.
    ///
    /// `start` seeds the integral accumulator; `min`/`max` bound it so
    /// the loop cannot wind up without limit.
    pub const fn new(kp: f32, ki: f32, start: f32, min: f32, max: f32) -> Self {
        Self {
            kp,
            ki,
            accumulator: start,
            min,
            max,
        }
    }

    /// Feed one error sample and get the new control output.
    ///
    /// Call once per frame with `target - observed`.
    pub fn update(&mut self, error: f32) -> f32 {
        self.accumulator = (self.accumulator + error).clamp(self.min, self.max);
        self.kp * error + self.ki * self.accumulator
    }

    /// Current integral accumulator (mainly for inspection).
    pub const fn accumulator(&self) -> f32 {
        self.accumulator
    }
}
