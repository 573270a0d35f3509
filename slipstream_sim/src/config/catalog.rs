// slipstream_sim/src/config/catalog.rs

//! The prefab catalog: every `.toml` under the catalog directory, parsed and
//! keyed by its dotted relative path (`tracks/slide_coliseum.toml` becomes
//! `tracks.slide_coliseum`). Scenarios reference prefabs by these keys.

use std::{collections::HashMap, path::Path};

use figment::{
    providers::{Format, Toml},
    value::Value,
    Figment,
};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::ConfigError;

/// The parsed catalog. Values stay raw until a scenario asks for a typed
/// prefab, so one malformed file only fails the run that references it.
#[derive(Debug, Default)]
pub struct PrefabCatalog(HashMap<String, Value>);

impl PrefabCatalog {
    /// Walk `catalog_dir`, parse every `.toml` file, and build the key map.
    pub fn load_from_dir(catalog_dir: &Path) -> Result<Self, ConfigError> {
        if !catalog_dir.exists() {
            return Err(ConfigError::CatalogMissing(catalog_dir.to_path_buf()));
        }

        info!(path = %catalog_dir.display(), "loading prefab catalog");
        let mut entries = HashMap::new();

        for entry in WalkDir::new(catalog_dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| {
                !e.file_type().is_dir() && e.path().extension().map_or(false, |ext| ext == "toml")
            })
        {
            let path = entry.path();
            // "tracks/slide_coliseum.toml" -> "tracks.slide_coliseum"
            let key = path
                .strip_prefix(catalog_dir)
                .expect("walkdir yields paths under its root")
                .with_extension("")
                .to_string_lossy()
                .replace(std::path::MAIN_SEPARATOR, ".");

            let value = Figment::new()
                .merge(Toml::file(path))
                .extract::<Value>()
                .map_err(|source| ConfigError::CatalogItem {
                    key: key.clone(),
                    source,
                })?;

            debug!(%key, "loaded catalog item");
            entries.insert(key, value);
        }

        Ok(Self(entries))
    }

    /// Resolve a catalog key into a typed prefab.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, ConfigError> {
        let value = self.0.get(key).ok_or_else(|| ConfigError::UnknownKey {
            key: key.to_string(),
        })?;
        value.deserialize().map_err(|source| ConfigError::BadPrefab {
            key: key.to_string(),
            source,
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build a catalog directly from (key, parsed value) pairs. Test seam.
    #[cfg(test)]
    pub(crate) fn from_entries(entries: HashMap<String, Value>) -> Self {
        Self(entries)
    }
}
