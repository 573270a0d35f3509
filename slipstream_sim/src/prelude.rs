// slipstream_sim/src/prelude.rs

// Re-export the entire slipstream_core prelude so the pure model types
// (tuning tables, intents, the timer, the frame models) are always at hand.
pub use slipstream_core::prelude::*;

// Re-export common simulation-specific types for easy access.
pub use crate::config::{
    load_scenario, KartPrefab, KartSpawnConfig, Pose, PrefabCatalog, ScenarioConfig,
    SimulationSettings, WorldSettings,
};
pub use crate::error::ConfigError;
pub use crate::kart::{Kart, KartSnapshot};
pub use crate::physics::PhysicsContext;
pub use crate::runner::{run_scenario, RunSummary};
pub use crate::script::{ScriptSegment, ScriptedDriver};
pub use crate::track::{StaticCollider, TrackPrefab};
