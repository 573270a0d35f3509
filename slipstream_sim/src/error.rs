// slipstream_sim/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

use slipstream_core::prelude::TuningError;

/// Startup failures: scenario loading, catalog scanning, prefab resolution.
/// All of these surface before the first frame; nothing in the per-frame path
/// returns them.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load scenario `{path}`: {source}")]
    Scenario {
        path: PathBuf,
        source: figment::Error,
    },

    #[error("catalog directory not found at `{0}`")]
    CatalogMissing(PathBuf),

    #[error("catalog item `{key}` failed to parse: {source}")]
    CatalogItem { key: String, source: figment::Error },

    #[error("no catalog entry named `{key}`")]
    UnknownKey { key: String },

    #[error("prefab `{key}` does not match the expected shape: {source}")]
    BadPrefab { key: String, source: figment::Error },

    #[error("kart tuning rejected: {0}")]
    Tuning(#[from] TuningError),
}
