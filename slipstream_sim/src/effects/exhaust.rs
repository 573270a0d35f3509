// slipstream_sim/src/effects/exhaust.rs

use slipstream_core::prelude::{SimTimer, TurboTier};

/// Frames in the looping flame flipbook.
pub const TOTAL_FRAMES: u8 = 8;
/// Seconds per flipbook frame.
pub const ANIMATION_SPEED: f64 = 0.03;

/// Flame death durations, seconds. Quick when the throttle is dropped
/// mid-boost, slow for a Large flame, normal otherwise.
pub const QUICK_DEATH: f64 = 0.1;
pub const NORMAL_DEATH: f64 = 2.1; // 63 frames of 30fps
pub const SLOW_DEATH: f64 = 8.5; // 255 frames of 30fps

/// Turbo exhaust flame state: an 8-frame flipbook that lights when a turbo
/// fires, scales with the turbo tier, and burns out on a countdown once the
/// reserve pool behind it empties. Pure frame-index state; the renderer owns
/// the meshes.
#[derive(Debug, Clone, Copy)]
pub struct ExhaustFlame {
    frame_timer: SimTimer,
    current_frame: u8,
    scale_ratio: f64,
    last_tier: Option<TurboTier>,
    death_remaining: Option<f64>,
    visible: bool,
}

impl Default for ExhaustFlame {
    fn default() -> Self {
        Self {
            frame_timer: SimTimer::new(),
            current_frame: 0,
            scale_ratio: 0.0,
            last_tier: None,
            death_remaining: None,
            visible: false,
        }
    }
}

impl ExhaustFlame {
    pub fn new() -> Self {
        Self::default()
    }

    /// One frame. `live_tier` is the tier of the turbo currently burning
    /// (None once the reserves are spent); `throttle_held` picks the quick
    /// death when the driver lets off mid-boost.
    pub fn advance(&mut self, delta_seconds: f64, live_tier: Option<TurboTier>, throttle_held: bool) {
        match live_tier {
            Some(tier) => {
                if !self.visible {
                    // Fresh ignition restarts the flipbook.
                    self.current_frame = 0;
                    self.frame_timer.reset();
                }
                self.visible = true;
                self.scale_ratio = tier.flame_scale_ratio();
                self.death_remaining = None;
                self.last_tier = Some(tier);
            }
            None => {
                if self.visible && self.death_remaining.is_none() {
                    // The reserve just emptied: start the burn-out countdown.
                    let duration = match self.last_tier {
                        Some(TurboTier::Large) | Some(TurboTier::ExtraLarge) => SLOW_DEATH,
                        _ => NORMAL_DEATH,
                    };
                    self.death_remaining = Some(duration);
                }
                if let Some(mut remaining) = self.death_remaining {
                    if !throttle_held {
                        remaining = remaining.min(QUICK_DEATH);
                    }
                    remaining -= delta_seconds;
                    if remaining <= 0.0 {
                        self.death_remaining = None;
                        self.visible = false;
                        self.last_tier = None;
                        self.scale_ratio = 0.0;
                        self.current_frame = 0;
                        self.frame_timer.reset();
                    } else {
                        self.death_remaining = Some(remaining);
                    }
                }
            }
        }

        if self.visible {
            self.frame_timer.tick(delta_seconds);
            if self.frame_timer.elapsed() >= ANIMATION_SPEED {
                self.frame_timer.reset();
                self.current_frame = (self.current_frame + 1) % TOTAL_FRAMES;
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Index into the flipbook, `[0, TOTAL_FRAMES)`.
    pub fn current_frame(&self) -> u8 {
        self.current_frame
    }

    /// Flame scale for the live or dying turbo, `[0, 1]`.
    pub fn scale_ratio(&self) -> f64 {
        self.scale_ratio
    }
}
