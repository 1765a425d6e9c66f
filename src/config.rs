// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Optional user configuration.
//!
//! Read from `<config dir>/specimen/config.toml`. Every field is optional;
//! a missing file means all defaults.
//!
//! ```toml
//! catalog_path = "/home/me/fonts.json"
//! store_path = "/home/me/.local/share/specimen/store.json"
//! persist = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::settings::storage;

/// User-overridable settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Raw catalog JSON to use instead of the bundled one
    pub catalog_path: Option<PathBuf>,

    /// Where the key-value store lives
    pub store_path: Option<PathBuf>,

    /// When false, the selection only lives for this run
    pub persist: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            store_path: None,
            persist: true,
        }
    }
}

impl AppConfig {
    /// Default location of `config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(storage::APP_DIR_NAME)
            .join(storage::CONFIG_FILE_NAME)
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from a specific file. A missing file gives the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Configured store path, or the platform data dir
    pub fn resolved_store_path(&self) -> PathBuf {
        self.store_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(storage::APP_DIR_NAME)
                .join(storage::STORE_FILE_NAME)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = tempdir().unwrap();
        let config = AppConfig::load_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.persist);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "catalog_path = \"/tmp/fonts.json\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/fonts.json")));
        assert_eq!(config.store_path, None);
        assert!(config.persist);
    }

    #[test]
    fn full_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "store_path = \"/tmp/specimen.json\"\npersist = false\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert!(!config.persist);
        assert_eq!(config.resolved_store_path(), PathBuf::from("/tmp/specimen.json"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "persist = maybe").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn default_store_path_ends_with_store_file() {
        let path = AppConfig::default().resolved_store_path();
        assert!(path.ends_with("specimen/store.json"));
    }
}
