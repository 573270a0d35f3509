// slipstream_sim/src/config/mod.rs

//! Scenario loading and the prefab catalog. A scenario TOML names a track and
//! a kart prefab by catalog key, sets the world and run parameters, and
//! carries the scripted driver timeline for headless runs.

mod catalog;

use std::path::Path;

use figment::{
    providers::{Format, Toml},
    Figment,
};
use nalgebra::Vector3;
use serde::Deserialize;

use slipstream_core::prelude::KartTuning;

use crate::error::ConfigError;
use crate::script::ScriptSegment;

pub use catalog::PrefabCatalog;

// =========================================================================
// == Top-Level Scenario Configuration ==
// =========================================================================

/// The root of the data parsed from a `scenario.toml` file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)] // Fail if the TOML has fields not in our struct
pub struct ScenarioConfig {
    #[serde(default)] // Use defaults if the [simulation] section is missing
    pub simulation: SimulationSettings,

    #[serde(default)]
    pub world: WorldSettings,

    #[serde(default)]
    pub kart: KartSpawnConfig,

    // The TOML has `[[script]]`, which becomes a Vec of timed segments.
    #[serde(default)]
    pub script: Vec<ScriptSegment>,
}

/// Load and parse one scenario file.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, ConfigError> {
    Figment::new()
        .merge(Toml::file(path))
        .extract()
        .map_err(|source| ConfigError::Scenario {
            path: path.to_path_buf(),
            source,
        })
}

// =========================================================================
// == Configuration Sub-Structs ==
// These map directly to the sections in a scenario.toml file.
// =========================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationSettings {
    /// Optional seed for the pseudo-random number generator for determinism.
    pub seed: Option<u64>,
    /// Duration of the simulation in seconds.
    pub duration_seconds: f64,
    /// Fixed simulation frequency in Hz.
    pub tick_rate: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            seed: None,
            duration_seconds: 30.0,
            tick_rate: 60.0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldSettings {
    /// Global gravity vector in m/s^2.
    pub gravity: [f64; 3],
    /// Catalog key of the track prefab to build.
    pub track: String,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            gravity: [0.0, -9.81, 0.0],
            track: "tracks.slide_coliseum".to_string(),
        }
    }
}

impl WorldSettings {
    pub fn gravity_vector(&self) -> Vector3<f64> {
        Vector3::new(self.gravity[0], self.gravity[1], self.gravity[2])
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KartSpawnConfig {
    /// Catalog key of the kart prefab (its tuning table).
    pub prefab: String,
    /// Optional spawn pose; the track's start pose is used when absent.
    #[serde(default)]
    pub start_pose: Option<Pose>,
}

impl Default for KartSpawnConfig {
    fn default() -> Self {
        Self {
            prefab: "karts.default".to_string(),
            start_pose: None,
        }
    }
}

/// A flat-ground pose: translation plus a yaw about the up axis, degrees in
/// the file, radians at the API.
#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Pose {
    pub translation: [f64; 3],
    pub yaw_deg: f64,
}

impl Pose {
    pub fn translation_vector(&self) -> Vector3<f64> {
        Vector3::new(self.translation[0], self.translation[1], self.translation[2])
    }

    pub fn yaw_rad(&self) -> f64 {
        self.yaw_deg.to_radians()
    }
}

/// A kart prefab as stored in the catalog: a display name plus the full
/// tuning table. Missing tuning sections keep the reference defaults.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KartPrefab {
    pub name: String,
    #[serde(default)]
    pub tuning: KartTuning,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use slipstream_core::prelude::SteerDirection;

    fn parse(toml_text: &str) -> ScenarioConfig {
        Figment::new()
            .merge(Toml::string(toml_text))
            .extract()
            .unwrap()
    }

    #[test]
    fn test_minimal_scenario_uses_defaults() {
        let config = parse("");
        assert_eq!(config.simulation.seed, None);
        assert_abs_diff_eq!(config.simulation.tick_rate, 60.0, epsilon = 1e-12);
        assert_eq!(config.world.track, "tracks.slide_coliseum");
        assert_eq!(config.kart.prefab, "karts.default");
        assert!(config.script.is_empty());
    }

    #[test]
    fn test_full_scenario_round_trip() {
        let config = parse(
            r#"
                [simulation]
                seed = 7
                duration_seconds = 12.5
                tick_rate = 30.0

                [world]
                gravity = [0.0, -9.81, 0.0]
                track = "tracks.slide_coliseum"

                [kart]
                prefab = "karts.default"
                start_pose = { translation = [14.8, 0.0, -108.65], yaw_deg = -90.0 }

                [[script]]
                start = 0.0
                throttle = true

                [[script]]
                start = 2.0
                throttle = true
                steer = "Left"
            "#,
        );
        assert_eq!(config.simulation.seed, Some(7));
        assert_abs_diff_eq!(config.simulation.duration_seconds, 12.5, epsilon = 1e-12);

        let pose = config.kart.start_pose.unwrap();
        assert_abs_diff_eq!(pose.translation_vector().x, 14.8, epsilon = 1e-12);
        assert_abs_diff_eq!(pose.yaw_rad(), -std::f64::consts::FRAC_PI_2, epsilon = 1e-12);

        assert_eq!(config.script.len(), 2);
        assert_eq!(config.script[1].steer, SteerDirection::Left);
    }

    #[test]
    fn test_unknown_scenario_fields_are_rejected() {
        let result: Result<ScenarioConfig, _> = Figment::new()
            .merge(Toml::string("[simulation]\nseeed = 7"))
            .extract();
        assert!(result.is_err());
    }
}
