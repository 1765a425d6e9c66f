// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! JSON-file-backed store.
//!
//! The whole store is one JSON object of strings. It is read once in
//! `open` and rewritten after every `save`/`remove`. Each rewrite goes to a
//! sibling temp file that is then renamed over the store, so an interrupted
//! write leaves the previous contents in place.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{KeyValueStore, StoreError};

/// A `KeyValueStore` persisted to a single JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing or blank file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if !path.exists() {
            tracing::debug!("No store file at {}, starting empty", path.display());
            return Ok(Self::empty(path));
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        if contents.trim().is_empty() {
            return Ok(Self::empty(path));
        }

        let entries: BTreeMap<String, String> =
            serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?;

        tracing::info!("Loaded {} stored values from {}", entries.len(), path.display());
        Ok(Self { path, entries })
    }

    /// An empty store that will write to `path` on first change
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Open the store, replacing a corrupt or unreadable file with an empty
    /// store.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("Starting with an empty store: {}", e);
                Self::empty(path)
            }
        }
    }

    fn flush(&self) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let contents = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| io_err(std::io::Error::other(e)))?;

        // Atomic save: write to temp file then rename over the store
        let temp_path = self.temp_path();
        std::fs::write(&temp_path, contents).map_err(io_err)?;
        std::fs::rename(&temp_path, &self.path).map_err(io_err)
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
