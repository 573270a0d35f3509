// slipstream_core/src/models/hop.rs

use crate::tuning::HopTuning;

/// Hop permission gate. A hop fires on the rising edge of the jump input
/// when the kart is grounded (or has been airborne for no longer than the
/// coyote window) and the cooldown from the previous hop has elapsed.
/// Holding the button does not autofire.
///
/// The gate only decides; the physics bridge applies the actual impulse.
#[derive(Debug, Clone, Copy)]
pub struct HopGate {
    since_hop_ms: f64,
    airborne_ms: f64,
    jump_was_held: bool,
}

impl Default for HopGate {
    fn default() -> Self {
        Self {
            // Never hopped: the first press is only cooldown-free, not
            // cooldown-blocked.
            since_hop_ms: f64::INFINITY,
            airborne_ms: 0.0,
            jump_was_held: false,
        }
    }
}

impl HopGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// One frame of gate logic. Returns true when a hop fires this frame.
    pub fn advance(
        &mut self,
        delta_ms: f64,
        grounded: bool,
        jump_held: bool,
        tuning: &HopTuning,
    ) -> bool {
        self.since_hop_ms += delta_ms;
        if grounded {
            self.airborne_ms = 0.0;
        } else {
            self.airborne_ms += delta_ms;
        }

        let rising_edge = jump_held && !self.jump_was_held;
        self.jump_was_held = jump_held;

        let within_coyote = grounded || self.airborne_ms <= tuning.coyote_ms;
        let cooled_down = self.since_hop_ms >= tuning.cooldown_ms;

        if rising_edge && within_coyote && cooled_down {
            self.since_hop_ms = 0.0;
            return true;
        }
        false
    }

    /// Milliseconds spent airborne since last touching ground.
    pub fn airborne_ms(&self) -> f64 {
        self.airborne_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_grounded_press_fires() {
        let tuning = HopTuning::default();
        let mut gate = HopGate::new();
        assert!(gate.advance(16.0, true, true, &tuning));
    }

    #[test]
    fn test_holding_the_button_does_not_autofire() {
        let tuning = HopTuning::default();
        let mut gate = HopGate::new();
        assert!(gate.advance(16.0, true, true, &tuning));
        // Held across many frames, long past the cooldown: no refire.
        for _ in 0..100 {
            assert!(!gate.advance(16.0, true, true, &tuning));
        }
    }

    #[test]
    fn test_cooldown_blocks_an_early_second_press() {
        let tuning = HopTuning::default();
        let mut gate = HopGate::new();
        assert!(gate.advance(16.0, true, true, &tuning));
        gate.advance(16.0, true, false, &tuning);

        // 32 ms after the hop: pressed again, still cooling down (352 ms).
        assert!(!gate.advance(16.0, true, true, &tuning));
        gate.advance(16.0, true, false, &tuning);

        // Walk time forward past the cooldown, then press again.
        for _ in 0..25 {
            gate.advance(16.0, true, false, &tuning);
        }
        assert!(gate.advance(16.0, true, true, &tuning));
    }

    #[test]
    fn test_coyote_window_admits_a_late_hop() {
        let tuning = HopTuning::default();
        let mut gate = HopGate::new();

        // Roll off a ledge: airborne for 4 frames of 40 ms = 160 ms, right
        // at the edge of the window.
        for _ in 0..3 {
            assert!(!gate.advance(40.0, false, false, &tuning));
        }
        assert!(gate.advance(40.0, false, true, &tuning));
    }

    #[test]
    fn test_hop_rejected_past_the_coyote_window() {
        let tuning = HopTuning::default();
        let mut gate = HopGate::new();
        for _ in 0..5 {
            gate.advance(40.0, false, false, &tuning);
        }
        // 240 ms airborne, well past 160 ms.
        assert!(!gate.advance(40.0, false, true, &tuning));
    }

    #[test]
    fn test_touching_ground_resets_the_coyote_clock() {
        let tuning = HopTuning::default();
        let mut gate = HopGate::new();
        for _ in 0..10 {
            gate.advance(40.0, false, false, &tuning);
        }
        assert!(gate.airborne_ms() > tuning.coyote_ms);

        gate.advance(16.0, true, false, &tuning);
        assert_eq!(gate.airborne_ms(), 0.0);
        assert!(gate.advance(16.0, true, true, &tuning));
    }
}
