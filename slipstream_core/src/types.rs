// slipstream_core/src/types.rs

use nalgebra::{UnitQuaternion, Vector3};
use serde::Deserialize;

// --- Core Type Aliases ---
/// Heading angle about the world up axis, radians, counterclockwise positive.
/// Accumulates without wraparound; consumers normalize if they need a range.
pub type Heading = f64;

// --- Steering Direction ---
/// Discrete steering input. The numeric signs match the reference handling
/// model: Left = -1, Right = +1, and the heading integrator negates the
/// product, so a Left input yields a positive (counterclockwise) yaw rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum SteerDirection {
    Left,
    #[default]
    None,
    Right,
}

impl SteerDirection {
    pub fn sign(self) -> f64 {
        match self {
            SteerDirection::Left => -1.0,
            SteerDirection::None => 0.0,
            SteerDirection::Right => 1.0,
        }
    }

    pub fn is_steering(self) -> bool {
        !matches!(self, SteerDirection::None)
    }
}

// --- Heading Helpers ---
// The physics engine consumes the heading as a rotation about +Y. These two
// helpers are the single place that convention lives; the bridge and the
// tests both go through them.

/// Quaternion for a heading angle about the world up axis.
pub fn heading_quat(heading: Heading) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), heading)
}

/// Local forward (+Z) scaled by `magnitude`, rotated into the world by
/// `heading`. This is the shape of the per-frame drive impulse.
pub fn forward_vector(heading: Heading, magnitude: f64) -> Vector3<f64> {
    heading_quat(heading) * Vector3::new(0.0, 0.0, magnitude)
}

// --- Turbo Tier ---
/// Strength class of a fired turbo. The ratios scale the exhaust flame and
/// come from the reference game's hang-time table (n / 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurboTier {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl TurboTier {
    pub fn flame_scale_ratio(self) -> f64 {
        match self {
            TurboTier::Small => 0.25,
            TurboTier::Medium => 0.5,
            TurboTier::Large => 0.75,
            TurboTier::ExtraLarge => 1.0,
        }
    }

    /// Tier for the n-th chained powerslide turbo (0-based). Chains cap at
    /// Large; ExtraLarge is reserved for pad/ultimate boosts outside the
    /// slide machine.
    pub fn from_chain_index(index: u32) -> Self {
        match index {
            0 => TurboTier::Small,
            1 => TurboTier::Medium,
            _ => TurboTier::Large,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_steer_direction_signs() {
        assert_abs_diff_eq!(SteerDirection::Left.sign(), -1.0, epsilon = EPS);
        assert_abs_diff_eq!(SteerDirection::None.sign(), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(SteerDirection::Right.sign(), 1.0, epsilon = EPS);
        assert!(!SteerDirection::None.is_steering());
        assert!(SteerDirection::Left.is_steering());
    }

    #[test]
    fn test_forward_vector_at_zero_heading_is_plus_z() {
        let v = forward_vector(0.0, 2.5);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(v.y, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(v.z, 2.5, epsilon = EPS);
    }

    #[test]
    fn test_forward_vector_quarter_turn() {
        // +90 degrees about +Y maps +Z onto +X.
        let v = forward_vector(std::f64::consts::FRAC_PI_2, 1.0);
        assert_abs_diff_eq!(v.x, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(v.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(v.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_forward_vector_preserves_magnitude() {
        let v = forward_vector(1.234, 8.2125);
        assert_abs_diff_eq!(v.norm(), 8.2125, epsilon = 1e-9);
    }

    #[test]
    fn test_chain_index_tier_caps_at_large() {
        assert_eq!(TurboTier::from_chain_index(0), TurboTier::Small);
        assert_eq!(TurboTier::from_chain_index(1), TurboTier::Medium);
        assert_eq!(TurboTier::from_chain_index(2), TurboTier::Large);
        assert_eq!(TurboTier::from_chain_index(7), TurboTier::Large);
    }
}
