// slipstream_core/src/models/slide.rs

use crate::timer::SimTimer;
use crate::tuning::SlideTuning;
use crate::types::TurboTier;

/// Powerslide meter and turbo reserve pool.
///
/// While the slide stance is held (hop button down, grounded, steering,
/// under throttle) the meter gains `increment` every `increment_interval`
/// seconds. Dropping the stance releases the meter: at or above `min_turbo`
/// a turbo fires and adds to the reserve pool, below it the charge is wasted.
/// Either way the meter resets.
///
/// Reserves are a speed bonus that drains linearly at `drain_rate()`;
/// chaining another slide before the pool empties raises the tier of the
/// next turbo, up to Large. The frame's cap bonus is the pool value while
/// boost is held, zero otherwise, so with an empty pool the base speed model
/// is exactly recovered.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlideMachine {
    charge: f64,
    reserves: f64,
    chain: u32,
    in_stance: bool,
    stance_timer: SimTimer,
    live_tier: Option<TurboTier>,
}

impl SlideMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// One frame. `stance_active` is the combined slide-stance input for this
    /// frame; returns the tier when a turbo fires on stance release.
    pub fn advance(
        &mut self,
        delta_seconds: f64,
        stance_active: bool,
        tuning: &SlideTuning,
    ) -> Option<TurboTier> {
        // Pool drains with time no matter what; the flame burns out on its
        // own schedule.
        if self.reserves > 0.0 {
            self.reserves = (self.reserves - tuning.drain_rate() * delta_seconds).max(0.0);
            if self.reserves == 0.0 {
                self.chain = 0;
                self.live_tier = None;
            }
        }

        let mut fired = None;

        if stance_active {
            if !self.in_stance {
                self.in_stance = true;
                self.stance_timer.reset();
            }
            self.stance_timer.tick(delta_seconds);
            if self.stance_timer.elapsed() >= tuning.increment_interval {
                self.stance_timer.reset();
                self.charge = (self.charge + tuning.increment).min(tuning.max_value);
            }
        } else if self.in_stance {
            // Stance released: bank or waste the meter.
            self.in_stance = false;
            self.stance_timer.reset();
            if self.charge >= tuning.min_turbo {
                let tier = TurboTier::from_chain_index(self.chain);
                self.reserves += tuning.single_turbo + f64::from(self.chain.min(2)) * tuning.each_turbo;
                self.chain += 1;
                self.live_tier = Some(tier);
                fired = Some(tier);
            }
            self.charge = 0.0;
        }

        fired
    }

    /// Meter value, `[0, max_value]`.
    pub fn charge(&self) -> f64 {
        self.charge
    }

    /// Remaining turbo speed bonus.
    pub fn reserves(&self) -> f64 {
        self.reserves
    }

    /// Tier of the turbo currently burning, for the exhaust flame.
    pub fn live_tier(&self) -> Option<TurboTier> {
        self.live_tier
    }

    /// The speed-cap bonus for this frame. Boost has to be held to spend the
    /// pool.
    pub fn cap_bonus(&self, boost_held: bool) -> f64 {
        if boost_held {
            self.reserves
        } else {
            0.0
        }
    }
}
