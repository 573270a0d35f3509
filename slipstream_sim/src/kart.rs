// slipstream_sim/src/kart.rs

//! The kart facade: owns the pure motion models, the physics bridge, and the
//! cosmetic effect machines, and orchestrates them in a fixed order once per
//! frame. The physics body is the single source of truth for the pose; the
//! visual transform held here is a projection written only by the sync step.

use nalgebra::Vector3;
use rand::Rng;
use rapier3d::prelude::RigidBodyHandle;
use tracing::debug;

use slipstream_core::prelude::*;

use crate::config::Pose;
use crate::effects::exhaust::ExhaustFlame;
use crate::effects::smoke::SmokeEmitter;
use crate::effects::wheels::WheelAnimator;
use crate::error::ConfigError;
use crate::physics::PhysicsContext;

/// Length of the downward ground probe.
const GROUND_RAY_LENGTH: f64 = 1.0;

/// Frames longer than this clamp down; shorter-than-zero or non-finite
/// frames are skipped outright. Integrating a stalled frame's delta would
/// explode the speed and heading state.
const MAX_FRAME_DELTA: f64 = 0.25;

/// Read-only state snapshot handed to renderer/audio/camera collaborators.
#[derive(Debug, Clone, Copy)]
pub struct KartSnapshot {
    pub position: Vector3<f64>,
    pub heading: f64,
    pub current_speed: f64,
    pub is_grounded: bool,
    pub lean_degrees: f64,
    pub slide_charge: f64,
    pub turbo_reserves: f64,
    pub detune_cents: f64,
}

pub struct Kart {
    tuning: KartTuning,

    /// Driver inputs, mutated by an external collaborator between frames.
    pub intent: DriverIntent,

    // Motion models.
    speed: SpeedModel,
    steering: SteeringModel,
    lean: LeanModel,
    hop: HopGate,
    slide: SlideMachine,

    // Cosmetics.
    exhaust: ExhaustFlame,
    wheels: WheelAnimator,
    smoke: SmokeEmitter,

    // Physics bridge state.
    body: Option<RigidBodyHandle>,
    spawn_pose: Pose,

    // Visual projection, written only by the sync step.
    position: Vector3<f64>,
    is_grounded: bool,
    detune: f64,

    // Run counters for telemetry.
    hops_fired: u32,
    turbos_fired: u32,
}

impl Kart {
    /// A kart with zeroed intents and speed, parked at `spawn_pose`. The
    /// tuning is validated here, once; the per-frame path trusts it.
    pub fn new(tuning: KartTuning, spawn_pose: Pose) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let idle_detune = detune_cents(0.0, &tuning.audio);
        Ok(Self {
            tuning,
            intent: DriverIntent::new(),
            speed: SpeedModel::new(),
            steering: SteeringModel::with_heading(spawn_pose.yaw_rad()),
            lean: LeanModel::new(),
            hop: HopGate::new(),
            slide: SlideMachine::new(),
            exhaust: ExhaustFlame::new(),
            wheels: WheelAnimator::new(),
            smoke: SmokeEmitter::new(),
            body: None,
            spawn_pose,
            position: spawn_pose.translation_vector(),
            is_grounded: false,
            detune: idle_detune,
            hops_fired: 0,
            turbos_fired: 0,
        })
    }

    /// Create the rigid body and collider. Must be called exactly once,
    /// before the first `update()`. The collider center sits one radius
    /// above the visual contact point, so the body spawns lifted by that
    /// radius.
    pub fn initialize_physics(&mut self, physics: &mut PhysicsContext) {
        assert!(
            self.body.is_none(),
            "initialize_physics() called twice; the kart owns exactly one body"
        );
        let translation =
            self.spawn_pose.translation_vector() + Vector3::new(0.0, self.tuning.body.collider_radius, 0.0);
        let handle = physics.spawn_kart_body(
            translation,
            self.spawn_pose.yaw_rad(),
            self.tuning.body.collider_radius,
            self.tuning.body.mass,
        );
        self.body = Some(handle);
    }

    /// One frame, in fixed order: physics bridge, lean animator, visual
    /// sync, then the cosmetic sub-objects.
    pub fn update<R: Rng>(&mut self, delta_seconds: f64, physics: &mut PhysicsContext, rng: &mut R) {
        let delta_seconds = sanitize_delta(delta_seconds);

        self.compute_physics(delta_seconds, physics);
        self.lean
            .advance(delta_seconds, self.intent.steer, self.intent.throttle, &self.tuning.lean);
        self.sync_from_body(physics);

        self.detune = detune_cents(self.speed.current(), &self.tuning.audio);
        self.wheels.advance(delta_seconds);
        self.exhaust
            .advance(delta_seconds, self.slide.live_tier(), self.intent.throttle);
        self.smoke.advance(delta_seconds, rng);
    }

    /// The physics half of the frame: ground probe, heading and speed
    /// integration, hop gate, then the forward and damping impulses.
    fn compute_physics(&mut self, delta_seconds: f64, physics: &mut PhysicsContext) {
        let body = self
            .body
            .expect("initialize_physics() must be called before update()");

        // Ground probe.
        self.is_grounded = physics.is_grounded(body, GROUND_RAY_LENGTH);

        // Steering angle.
        self.steering.advance(
            delta_seconds,
            self.intent.steer,
            self.speed.current(),
            &self.tuning.handling,
        );

        // Powerslide meter and turbo reserves.
        let stance = self.intent.jump
            && self.is_grounded
            && self.intent.steer.is_steering()
            && self.intent.throttle;
        if let Some(tier) = self.slide.advance(delta_seconds, stance, &self.tuning.slide) {
            self.turbos_fired += 1;
            debug!(?tier, reserves = self.slide.reserves(), "turbo fired");
        }

        // Acceleration and deceleration, with the frame's reserve bonus.
        let cap_bonus = self.slide.cap_bonus(self.intent.boost);
        self.speed
            .advance(delta_seconds, self.intent.throttle, &self.tuning.acceleration, cap_bonus);

        // Hop.
        let hop_fired = self.hop.advance(
            delta_seconds * 1000.0,
            self.is_grounded,
            self.intent.jump,
            &self.tuning.hop,
        );
        if hop_fired {
            self.hops_fired += 1;
            let launch = self.tuning.hop.launch_speed(
                f64::from(physics.gravity.y),
                self.tuning.acceleration.increment_interval,
            );
            let mass = physics.body_mass(body);
            physics.apply_impulse(body, Vector3::new(0.0, mass * launch, 0.0));
            debug!(launch, "hop");
        }

        // Forward impulse along the heading.
        let impulse = forward_vector(
            self.steering.heading(),
            self.speed.current() * self.tuning.body.impulse_scale,
        );
        if impulse.norm() > 0.0 {
            physics.apply_impulse(body, impulse);
        }

        // Horizontal damping, every frame regardless of throttle. The Y
        // component is the engine's business (gravity, hop arc).
        let linvel = physics.body_linvel(body);
        physics.apply_impulse(
            body,
            Vector3::new(
                -linvel.x * self.tuning.body.damping,
                0.0,
                -linvel.z * self.tuning.body.damping,
            ),
        );
    }

    /// Mirror the body's authoritative translation onto the visual
    /// transform, dropped by the collider radius to the contact point.
    fn sync_from_body(&mut self, physics: &PhysicsContext) {
        let body = self
            .body
            .expect("initialize_physics() must be called before update()");
        let translation = physics.body_translation(body);
        self.position = translation - Vector3::new(0.0, self.tuning.body.collider_radius, 0.0);
    }

    pub fn snapshot(&self) -> KartSnapshot {
        KartSnapshot {
            position: self.position,
            heading: self.steering.heading(),
            current_speed: self.speed.current(),
            is_grounded: self.is_grounded,
            lean_degrees: self.lean.current(),
            slide_charge: self.slide.charge(),
            turbo_reserves: self.slide.reserves(),
            detune_cents: self.detune,
        }
    }

    pub fn tuning(&self) -> &KartTuning {
        &self.tuning
    }

    pub fn hops_fired(&self) -> u32 {
        self.hops_fired
    }

    pub fn turbos_fired(&self) -> u32 {
        self.turbos_fired
    }

    /// Blink phase of the wheel sprites for the current speed.
    pub fn wheel_blink_phase(&self) -> u8 {
        self.wheels.blink_phase(self.speed.ratio(&self.tuning.acceleration))
    }

    pub fn exhaust(&self) -> &ExhaustFlame {
        &self.exhaust
    }

    pub fn smoke(&self) -> &SmokeEmitter {
        &self.smoke
    }
}

/// Frame-delta hygiene: skip degenerate frames, clamp stalls.
fn sanitize_delta(delta_seconds: f64) -> f64 {
    if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
        return 0.0;
    }
    delta_seconds.min(MAX_FRAME_DELTA)
}
