// slipstream_core/src/tuning.rs

// The handling constants, grouped the way a kart prefab declares them. The
// default values are the reference game's fixed-point table converted to
// float; they are the contract for the "feel" and tests pin several of them
// numerically. Prefab TOML files deserialize straight into these structs, a
// missing section keeps its defaults.

use crate::error::TuningError;
use serde::Deserialize;

// =========================================================================
// == Top-Level Tuning Table ==
// =========================================================================

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct KartTuning {
    pub acceleration: AccelerationTuning,
    pub handling: HandlingTuning,
    pub hop: HopTuning,
    pub slide: SlideTuning,
    pub lean: LeanTuning,
    pub audio: AudioTuning,
    pub body: BodyTuning,
}

impl KartTuning {
    /// Check every section. Called once when a prefab is resolved, never in
    /// the per-frame path.
    pub fn validate(&self) -> Result<(), TuningError> {
        self.acceleration.validate()?;
        self.handling.validate()?;
        self.hop.validate()?;
        self.slide.validate()?;
        self.lean.validate()?;
        self.body.validate()?;
        Ok(())
    }
}

// =========================================================================
// == Sections ==
// =========================================================================

/// Longitudinal speed constants. `acceleration`/`deceleration` are per-tick
/// deltas captured at the reference 30 ticks/s; dividing by
/// `increment_interval` turns them into per-second rates, which is what makes
/// the integration frame-rate independent.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AccelerationTuning {
    pub acceleration: f64,
    pub deceleration: f64, // checked value frame by frame
    pub increment_interval: f64,
    pub speed_base: f64, // max speed without doing turbos
}

impl Default for AccelerationTuning {
    fn default() -> Self {
        Self {
            acceleration: 30.0,
            deceleration: 8.125,
            increment_interval: 0.03,
            speed_base: 821.25,
        }
    }
}

impl AccelerationTuning {
    pub fn equivalent_acceleration(&self) -> f64 {
        self.acceleration / self.increment_interval
    }

    pub fn equivalent_deceleration(&self) -> f64 {
        self.deceleration / self.increment_interval
    }

    fn validate(&self) -> Result<(), TuningError> {
        if self.increment_interval <= 0.0 {
            return Err(TuningError::NonPositive {
                field: "acceleration.increment_interval",
                value: self.increment_interval,
            });
        }
        if self.acceleration <= 0.0 {
            return Err(TuningError::NonPositive {
                field: "acceleration.acceleration",
                value: self.acceleration,
            });
        }
        if self.deceleration <= 0.0 {
            return Err(TuningError::NonPositive {
                field: "acceleration.deceleration",
                value: self.deceleration,
            });
        }
        if self.speed_base <= 0.0 {
            return Err(TuningError::NonPositive {
                field: "acceleration.speed_base",
                value: self.speed_base,
            });
        }
        Ok(())
    }
}

/// Steering constants. The heading integrator consumes
/// `turn_angle_degree / turn_angle_rate` with the reference's empirical
/// `/ 1000` scale, producing radians.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HandlingTuning {
    pub turn_angle_degree: f64,
    pub turn_angle_rate: f64,
}

impl Default for HandlingTuning {
    fn default() -> Self {
        Self {
            turn_angle_degree: 32.0,
            turn_angle_rate: 0.03,
        }
    }
}

impl HandlingTuning {
    pub fn rotation_rate(&self) -> f64 {
        self.turn_angle_degree / self.turn_angle_rate
    }

    fn validate(&self) -> Result<(), TuningError> {
        if self.turn_angle_rate <= 0.0 {
            return Err(TuningError::NonPositive {
                field: "handling.turn_angle_rate",
                value: self.turn_angle_rate,
            });
        }
        Ok(())
    }
}

/// Hop timing and strength. `gravity` and `jump_force` are the reference
/// game's fixed-point values (56.25 and 287.25 before the <<4 shift); their
/// ratio is the hop rise time in reference ticks, which is how the launch
/// speed is derived for an arbitrary world gravity.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HopTuning {
    pub cooldown_ms: f64,
    pub coyote_ms: f64,
    pub gravity: f64,
    pub jump_force: f64,
}

impl Default for HopTuning {
    fn default() -> Self {
        Self {
            cooldown_ms: 352.0, //0x3f2
            coyote_ms: 160.0,   //0x3f4
            gravity: 900.0,     //0x416 (56.2500)
            jump_force: 4596.0, //0x418 (287.2500)
        }
    }
}

impl HopTuning {
    /// Hop rise time in seconds: `jump_force / gravity` reference ticks,
    /// each `tick_interval` seconds long.
    pub fn rise_time(&self, tick_interval: f64) -> f64 {
        self.jump_force / self.gravity * tick_interval
    }

    /// Upward launch speed that peaks after `rise_time` under the given
    /// world gravity magnitude.
    pub fn launch_speed(&self, world_gravity: f64, tick_interval: f64) -> f64 {
        world_gravity.abs() * self.rise_time(tick_interval)
    }

    fn validate(&self) -> Result<(), TuningError> {
        if self.gravity <= 0.0 {
            return Err(TuningError::NonPositive {
                field: "hop.gravity",
                value: self.gravity,
            });
        }
        if self.cooldown_ms < 0.0 || self.coyote_ms < 0.0 {
            return Err(TuningError::NegativeWindow {
                cooldown_ms: self.cooldown_ms,
                coyote_ms: self.coyote_ms,
            });
        }
        Ok(())
    }
}

/// Powerslide meter and turbo reserve constants. `increment_interval` is
/// seconds of held stance per meter increment.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SlideTuning {
    pub increment: f64,
    pub increment_interval: f64,
    pub min_turbo: f64,
    pub max_value: f64,
    pub single_turbo: f64, // 0x430
    pub each_turbo: f64,
    /// Seconds for one single-turbo reserve to drain back to the base cap.
    pub turbo_drain_time: f64,
}

impl Default for SlideTuning {
    fn default() -> Self {
        Self {
            increment: 2.0,
            increment_interval: 0.33,
            min_turbo: 33.0,
            max_value: 60.0,
            single_turbo: 128.0,
            each_turbo: 32.0,
            turbo_drain_time: 2.1, // 63 frames of 30fps
        }
    }
}

impl SlideTuning {
    /// Reserve units drained per second while a turbo is live.
    pub fn drain_rate(&self) -> f64 {
        self.single_turbo / self.turbo_drain_time
    }

    fn validate(&self) -> Result<(), TuningError> {
        if self.increment_interval <= 0.0 {
            return Err(TuningError::NonPositive {
                field: "slide.increment_interval",
                value: self.increment_interval,
            });
        }
        if self.turbo_drain_time <= 0.0 {
            return Err(TuningError::NonPositive {
                field: "slide.turbo_drain_time",
                value: self.turbo_drain_time,
            });
        }
        if self.min_turbo > self.max_value {
            return Err(TuningError::SlideThresholdAboveCap {
                min_turbo: self.min_turbo,
                max_value: self.max_value,
            });
        }
        Ok(())
    }
}

/// Cosmetic body-roll constants. The angle doubles while drifting in the
/// reference game; the base model only uses the single value.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LeanTuning {
    pub max_angle: f64,       // degrees
    pub transition_time: f64, // (15frames/30fps)
    pub idle_decay_ratio: f64,
}

impl Default for LeanTuning {
    fn default() -> Self {
        Self {
            max_angle: 30.0,
            transition_time: 0.5,
            idle_decay_ratio: 0.25,
        }
    }
}

impl LeanTuning {
    pub fn rotation_rate(&self) -> f64 {
        self.max_angle / self.transition_time
    }

    fn validate(&self) -> Result<(), TuningError> {
        if self.max_angle <= 0.0 {
            return Err(TuningError::NonPositive {
                field: "lean.max_angle",
                value: self.max_angle,
            });
        }
        if self.transition_time <= 0.0 {
            return Err(TuningError::NonPositive {
                field: "lean.transition_time",
                value: self.transition_time,
            });
        }
        Ok(())
    }
}

/// Engine pitch curve: detune in cents as a linear function of speed.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AudioTuning {
    pub detune_start: f64,
    pub detune_modifier: f64,
}

impl Default for AudioTuning {
    fn default() -> Self {
        Self {
            detune_start: -1100.0,
            detune_modifier: 1.95,
        }
    }
}

/// Rigid-body and impulse constants shared by the physics bridge.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BodyTuning {
    pub collider_radius: f64,
    pub mass: f64, // Hard-coded mass if setting the radius to 1
    pub impulse_scale: f64,
    pub damping: f64,
}

impl Default for BodyTuning {
    fn default() -> Self {
        Self {
            collider_radius: 0.26,
            mass: 0.5235987901687622,
            impulse_scale: 0.01,
            damping: 0.4,
        }
    }
}

impl BodyTuning {
    fn validate(&self) -> Result<(), TuningError> {
        if self.collider_radius <= 0.0 {
            return Err(TuningError::NonPositive {
                field: "body.collider_radius",
                value: self.collider_radius,
            });
        }
        if self.mass <= 0.0 {
            return Err(TuningError::NonPositive {
                field: "body.mass",
                value: self.mass,
            });
        }
        if !(0.0..1.0).contains(&self.damping) {
            return Err(TuningError::DampingOutOfRange {
                value: self.damping,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_defaults_validate() {
        KartTuning::default().validate().unwrap();
    }

    #[test]
    fn test_equivalent_rates_normalize_by_interval() {
        let accel = AccelerationTuning::default();
        assert_abs_diff_eq!(accel.equivalent_acceleration(), 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            accel.equivalent_deceleration(),
            8.125 / 0.03,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_hop_launch_speed_from_rise_time() {
        let hop = HopTuning::default();
        // 4596 / 900 = 5.106... reference ticks of rise, 0.03 s each.
        assert_abs_diff_eq!(hop.rise_time(0.03), 0.1532, epsilon = 1e-4);
        let v0 = hop.launch_speed(9.81, 0.03);
        assert_abs_diff_eq!(v0, 9.81 * 4596.0 / 900.0 * 0.03, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let mut tuning = KartTuning::default();
        tuning.acceleration.increment_interval = 0.0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_slide_threshold_above_cap_is_rejected() {
        let mut tuning = KartTuning::default();
        tuning.slide.min_turbo = 99.0;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::SlideThresholdAboveCap { .. })
        ));
    }

    #[test]
    fn test_damping_must_stay_below_one() {
        let mut tuning = KartTuning::default();
        tuning.body.damping = 1.0;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::DampingOutOfRange { .. })
        ));
    }
}
