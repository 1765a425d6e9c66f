// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Synchronous string key-value storage for the persisted selection.
//!
//! The session only talks to `KeyValueStore`; which backend sits behind it
//! is decided at startup. `MemoryStore` keeps everything in a map and is
//! what tests (and `persist = false`) use. `FileStore` mirrors the map into
//! a JSON file on every write.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;
use thiserror::Error;

/// Failure talking to a store backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("store I/O failed for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object of strings
    #[error("store file '{path}' is corrupt: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded before writing
    #[error("failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String-keyed, string-valued storage
///
/// Reads never fail: a key that cannot be produced is simply absent.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Option<String>;

    /// Insert or overwrite `key`.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
