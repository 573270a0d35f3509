// slipstream_core/src/models/steering.rs

use crate::tuning::HandlingTuning;
use crate::types::{Heading, SteerDirection};

/// Heading integrator. The turn rate is `turn_angle_degree / turn_angle_rate`
/// scaled by the reference's empirical `/ 1000`, which lands the result in
/// radians per second at a playable magnitude. A kart that is not moving does
/// not turn in place, so the whole update is gated on `current_speed > 0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteeringModel {
    heading: Heading,
}

impl SteeringModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the heading from the spawn pose yaw, once, before the first
    /// frame.
    pub fn with_heading(initial: Heading) -> Self {
        Self { heading: initial }
    }

    pub fn advance(
        &mut self,
        delta_seconds: f64,
        steer: SteerDirection,
        current_speed: f64,
        tuning: &HandlingTuning,
    ) -> Heading {
        let angle_change = tuning.rotation_rate() * steer.sign() * delta_seconds / 1000.0;
        if current_speed > 0.0 {
            self.heading -= angle_change;
        }
        self.heading
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }
}
