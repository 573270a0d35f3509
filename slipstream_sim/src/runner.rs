// slipstream_sim/src/runner.rs

//! Headless fixed-step runner. Per frame: step the physics world, then tick
//! the kart. The step consumes the impulses applied during the *previous*
//! frame's tick, so impulses lag one step behind their visible effect; that
//! lag is deterministic and part of the contract.

use nalgebra::Vector3;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, trace};

use crate::config::{KartPrefab, PrefabCatalog, ScenarioConfig};
use crate::error::ConfigError;
use crate::kart::Kart;
use crate::physics::PhysicsContext;
use crate::script::ScriptedDriver;
use crate::track::TrackPrefab;

/// End-of-run telemetry.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub frames: u64,
    pub final_position: Vector3<f64>,
    pub final_heading: f64,
    pub top_speed: f64,
    pub hops: u32,
    pub turbos: u32,
}

/// Build the world from the scenario and drive it to completion.
pub fn run_scenario(
    config: &ScenarioConfig,
    catalog: &PrefabCatalog,
) -> Result<RunSummary, ConfigError> {
    let timestep = 1.0 / config.simulation.tick_rate;
    let total_frames = (config.simulation.duration_seconds * config.simulation.tick_rate) as u64;

    // Deterministic PRNG: seeded from the scenario, OS entropy otherwise.
    let mut rng = match config.simulation.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(OsRng).expect("OS RNG failed"),
    };

    let mut physics = PhysicsContext::new(config.world.gravity_vector(), timestep);

    let track: TrackPrefab = catalog.get(&config.world.track)?;
    track.build(&mut physics);

    let prefab: KartPrefab = catalog.get(&config.kart.prefab)?;
    let spawn_pose = config.kart.start_pose.unwrap_or(track.start_pose);
    info!(
        kart = %prefab.name,
        track = %track.name,
        seed = ?config.simulation.seed,
        frames = total_frames,
        "starting run"
    );

    let mut kart = Kart::new(prefab.tuning, spawn_pose)?;
    kart.initialize_physics(&mut physics);
    physics.refresh_queries();

    let driver = ScriptedDriver::new(config.script.clone());

    let mut top_speed: f64 = 0.0;
    for frame in 0..total_frames {
        let now = frame as f64 * timestep;
        kart.intent = driver.intent_at(now);

        // World first, then the kart reads the stepped state.
        physics.step();
        kart.update(timestep, &mut physics, &mut rng);

        let snapshot = kart.snapshot();
        top_speed = top_speed.max(snapshot.current_speed);
        trace!(
            frame,
            x = snapshot.position.x,
            y = snapshot.position.y,
            z = snapshot.position.z,
            heading = snapshot.heading,
            speed = snapshot.current_speed,
            grounded = snapshot.is_grounded,
            lean = snapshot.lean_degrees,
            charge = snapshot.slide_charge,
            reserves = snapshot.turbo_reserves,
            "frame"
        );
    }

    let snapshot = kart.snapshot();
    let summary = RunSummary {
        frames: total_frames,
        final_position: snapshot.position,
        final_heading: snapshot.heading,
        top_speed,
        hops: kart.hops_fired(),
        turbos: kart.turbos_fired(),
    };
    info!(
        frames = summary.frames,
        x = summary.final_position.x,
        z = summary.final_position.z,
        heading = summary.final_heading,
        top_speed = summary.top_speed,
        hops = summary.hops,
        turbos = summary.turbos,
        "run complete"
    );
    Ok(summary)
}
