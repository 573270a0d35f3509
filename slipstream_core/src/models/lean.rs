// slipstream_core/src/models/lean.rs

use crate::tuning::LeanTuning;
use crate::types::SteerDirection;

/// Cosmetic body-roll smoother. The model chases a target of
/// `steer_sign * max_angle` while the throttle is held; releasing the
/// throttle zeroes the target even if steering is still held. The approach
/// rate scales with distance from the target so a direction reversal snaps,
/// and an idle counter-step of `idle_decay_ratio` of the base rate leans
/// against the return-to-center, making it settle slower than the turn-in.
///
/// Degrees throughout. Never read by the physics side.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeanModel {
    current: f64,
    target: f64,
}

impl LeanModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(
        &mut self,
        delta_seconds: f64,
        steer: SteerDirection,
        throttle: bool,
        tuning: &LeanTuning,
    ) -> f64 {
        // Leaning only happens under power.
        let effective_steer = if throttle { steer } else { SteerDirection::None };
        let rotation_rate = tuning.rotation_rate();
        self.target = effective_steer.sign() * tuning.max_angle;

        // The further from the target, the faster the approach. This is what
        // makes switching steer directions feel snappy.
        let difference = self.target - self.current;
        let scaling_factor = 1.0 + difference.abs() / tuning.max_angle;

        let max_step = rotation_rate * delta_seconds * scaling_factor;
        self.current += difference.signum() * difference.abs().min(max_step);

        self.current = self.current.clamp(-tuning.max_angle, tuning.max_angle);

        // Idle counter-step. The main step above already moved toward zero;
        // this pushes part of it back, netting a slower settle. The min()
        // keeps it from crossing zero outward.
        if !effective_steer.is_steering() {
            let pushback = rotation_rate * delta_seconds * tuning.idle_decay_ratio;
            self.current += self.current.signum() * self.current.abs().min(pushback);
        }

        self.current
    }

    /// Current body roll, degrees.
    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_turn_in_first_step_uses_doubled_rate_from_center() {
        let tuning = LeanTuning::default();
        let mut model = LeanModel::new();
        // From 0 toward -30: scaling = 1 + 30/30 = 2, rate = 60 deg/s.
        let lean = model.advance(0.03, SteerDirection::Left, true, &tuning);
        assert_abs_diff_eq!(lean, -(60.0 * 0.03 * 2.0), epsilon = EPS);
    }

    #[test]
    fn test_lean_saturates_at_max_angle() {
        let tuning = LeanTuning::default();
        let mut model = LeanModel::new();
        for _ in 0..200 {
            let lean = model.advance(0.03, SteerDirection::Right, true, &tuning);
            assert!(lean.abs() <= tuning.max_angle + EPS);
        }
        assert_abs_diff_eq!(model.current(), tuning.max_angle, epsilon = EPS);
    }

    #[test]
    fn test_clamp_holds_for_arbitrary_deltas_and_inputs() {
        let tuning = LeanTuning::default();
        let mut model = LeanModel::new();
        let steers = [
            SteerDirection::Left,
            SteerDirection::Right,
            SteerDirection::None,
        ];
        let deltas = [0.001, 0.016, 0.03, 0.25, 2.0];
        for i in 0..1000 {
            let lean = model.advance(
                deltas[i % deltas.len()],
                steers[i % steers.len()],
                i % 3 != 0,
                &tuning,
            );
            assert!(lean.abs() <= tuning.max_angle + EPS);
        }
    }

    #[test]
    fn test_releasing_throttle_cancels_target_in_one_call() {
        let tuning = LeanTuning::default();
        let mut model = LeanModel::new();
        model.advance(0.03, SteerDirection::Left, true, &tuning);
        assert_abs_diff_eq!(model.target(), -tuning.max_angle, epsilon = EPS);

        // Steer unchanged, throttle dropped: the target must zero right away.
        model.advance(0.03, SteerDirection::Left, false, &tuning);
        assert_abs_diff_eq!(model.target(), 0.0, epsilon = EPS);
    }

    #[test]
    fn test_idle_settle_is_slower_than_turn_in() {
        let tuning = LeanTuning::default();

        // Saturate a right lean first.
        let mut model = LeanModel::new();
        for _ in 0..200 {
            model.advance(0.03, SteerDirection::Right, true, &tuning);
        }

        // One idle frame from full lean: main step inward at 2x rate, then
        // pushback of 0.25x, net 1.75x the base rate.
        let before = model.current();
        let after = model.advance(0.03, SteerDirection::None, true, &tuning);
        let rate = tuning.rotation_rate();
        let expected_net = rate * 0.03 * (2.0 - tuning.idle_decay_ratio);
        assert_abs_diff_eq!(before - after, expected_net, epsilon = EPS);

        // That net motion is slower than the first turn-in step from center.
        let mut fresh = LeanModel::new();
        let turn_in = fresh
            .advance(0.03, SteerDirection::Right, true, &tuning)
            .abs();
        assert!(before - after < turn_in);
    }

    #[test]
    fn test_idle_settle_reaches_zero_and_stays() {
        let tuning = LeanTuning::default();
        let mut model = LeanModel::new();
        for _ in 0..30 {
            model.advance(0.03, SteerDirection::Left, true, &tuning);
        }
        for _ in 0..500 {
            model.advance(0.03, SteerDirection::None, true, &tuning);
        }
        assert_abs_diff_eq!(model.current(), 0.0, epsilon = EPS);
        let lean = model.advance(0.03, SteerDirection::None, true, &tuning);
        assert_abs_diff_eq!(lean, 0.0, epsilon = EPS);
    }

    #[test]
    fn test_direction_reversal_moves_faster_than_steady_approach() {
        let tuning = LeanTuning::default();

        // Full right lean, then slam left: distance 60 gives scaling 3.
        let mut model = LeanModel::new();
        for _ in 0..200 {
            model.advance(0.03, SteerDirection::Right, true, &tuning);
        }
        let before = model.current();
        let after = model.advance(0.03, SteerDirection::Left, true, &tuning);
        let step = before - after;
        assert_abs_diff_eq!(
            step,
            tuning.rotation_rate() * 0.03 * 3.0,
            epsilon = EPS
        );
    }
}
