// slipstream_sim/src/effects/smoke.rs

use nalgebra::Vector3;
use rand::Rng;

use slipstream_core::prelude::SimTimer;

/// Exhaust marker positions in kart-local space, left and mirrored right.
pub const LEFT_EXHAUST_POSITION: [f64; 3] = [0.2835, 0.715, -0.783];
pub const RIGHT_EXHAUST_POSITION: [f64; 3] = [-0.2835, 0.715, -0.783];
/// The first smoke frame is drawn offset; the spawn point compensates.
pub const SPAWN_OFFSET: [f64; 3] = [0.0, 0.1, -0.05];

pub const SPAWN_INTERVAL: f64 = 0.03; // one pair per 30 fps frame
pub const LIFETIME: f64 = 0.16; // 5 frames of 30fps
pub const MOVE_SPEED: f64 = 0.02;
pub const SPREAD: f64 = 0.5;
pub const UP_ANGLE: f64 = 0.5;
pub const SCALE_MIN: f64 = 0.5;
pub const SCALE_MAX: f64 = 1.0;

/// One smoke sprite's worth of state, in kart-local space.
#[derive(Debug, Clone, Copy)]
pub struct SmokePuff {
    pub position: Vector3<f64>,
    pub spin_deg: f64,
    rotate_speed: f64, // degrees per frame, sign randomized at spawn
    age: f64,
}

impl SmokePuff {
    /// Sprite scale, lerped from min to max over the lifetime.
    pub fn scale(&self) -> f64 {
        let ratio = (self.age / LIFETIME).clamp(0.0, 1.0);
        SCALE_MIN + (SCALE_MAX - SCALE_MIN) * ratio
    }
}

/// Exhaust smoke emitter: spawns a left/right pair of puffs on a fixed
/// cadence and drifts them up and backward with a seeded random spread.
/// Identical seeds give identical puff trajectories.
#[derive(Debug, Clone, Default)]
pub struct SmokeEmitter {
    spawn_timer: SimTimer,
    puffs: Vec<SmokePuff>,
}

impl SmokeEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance<R: Rng>(&mut self, delta_seconds: f64, rng: &mut R) {
        self.spawn_timer.tick(delta_seconds);
        if self.spawn_timer.elapsed() >= SPAWN_INTERVAL {
            self.spawn_timer.reset();
            self.spawn_pair(rng);
        }

        // Drift and spin are per sampled frame, like the reference; the
        // cadence above keeps that frame-rate honest.
        for puff in &mut self.puffs {
            puff.age += delta_seconds;
            let spread_x = rng.gen_range(-SPREAD..=SPREAD);
            let drift = Vector3::new(spread_x, UP_ANGLE, -1.0) * MOVE_SPEED;
            puff.position += drift;
            puff.spin_deg -= puff.rotate_speed;
        }
        self.puffs.retain(|puff| puff.age <= LIFETIME);
    }

    fn spawn_pair<R: Rng>(&mut self, rng: &mut R) {
        // Both puffs of a pair share one spin speed, half the time inverted.
        let mut rotate_speed = f64::from(rng.gen_range(1..=2));
        if rng.gen_bool(0.5) {
            rotate_speed = -rotate_speed;
        }

        let offset = Vector3::from(SPAWN_OFFSET);
        for exhaust in [LEFT_EXHAUST_POSITION, RIGHT_EXHAUST_POSITION] {
            self.puffs.push(SmokePuff {
                position: Vector3::from(exhaust) + offset,
                spin_deg: 0.0,
                rotate_speed,
                age: 0.0,
            });
        }
    }

    pub fn puffs(&self) -> &[SmokePuff] {
        &self.puffs
    }
}
