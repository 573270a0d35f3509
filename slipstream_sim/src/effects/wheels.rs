// slipstream_sim/src/effects/wheels.rs

use slipstream_core::prelude::SimTimer;

/// Blink period at full speed, milliseconds. The period divides by the speed
/// ratio, so the blink slows as the kart slows and stops entirely at rest.
pub const FRAME_CHANGE_RATE_MS: f64 = 3.0;

/// Wheel sprite blink cadence: the sprites alternate between two color
/// frames to fake rotation, faster the faster the kart goes. The
/// camera-relative frame selection lives with the renderer, not here.
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelAnimator {
    timer: SimTimer,
}

impl WheelAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, delta_seconds: f64) {
        self.timer.tick(delta_seconds);
    }

    /// Which of the two color frames is lit: 0 or 1. A stationary kart has
    /// an infinite period and never leaves frame 0.
    pub fn blink_phase(&self, speed_ratio: f64) -> u8 {
        if speed_ratio <= 0.0 {
            return 0;
        }
        let period_ms = FRAME_CHANGE_RATE_MS / speed_ratio;
        ((self.timer.elapsed_ms() / period_ms) as u64 % 2) as u8
    }
}
