// slipstream_core/src/models/speed.rs

use crate::tuning::AccelerationTuning;

/// Scalar forward speed integrator with asymmetric acceleration and
/// deceleration. Holding throttle drives the speed toward the cap at the
/// equivalent acceleration rate; releasing it bleeds speed at the equivalent
/// deceleration rate, airborne or not. The result is clamped to
/// `[0, speed_base + cap_bonus]` every frame, so with a zero bonus the speed
/// can never leave `[0, speed_base]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedModel {
    current: f64,
    target: f64,
}

impl SpeedModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// One frame of speed integration. `cap_bonus` is the turbo reserve bonus
    /// for this frame (0 in the base model); a shrinking bonus lowers the cap
    /// and the clamp rides the speed back down with it.
    pub fn advance(
        &mut self,
        delta_seconds: f64,
        throttle: bool,
        tuning: &AccelerationTuning,
        cap_bonus: f64,
    ) -> f64 {
        let cap = tuning.speed_base + cap_bonus.max(0.0);
        self.target = if throttle { cap } else { 0.0 };

        let rate = if throttle {
            tuning.equivalent_acceleration()
        } else {
            -tuning.equivalent_deceleration()
        };

        self.current = (self.current + rate * delta_seconds).clamp(0.0, cap);
        self.current
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Fraction of the base cap currently held, used by the cosmetic layers.
    pub fn ratio(&self, tuning: &AccelerationTuning) -> f64 {
        self.current / tuning.speed_base
    }
}
