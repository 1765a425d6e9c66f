// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! In-memory store

use std::collections::BTreeMap;

use super::{KeyValueStore, StoreError};

/// A `KeyValueStore` that lives only as long as the process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_overwrites() {
        let mut store = MemoryStore::new();
        store.save("k", "a").unwrap();
        store.save("k", "b").unwrap();
        assert_eq!(store.load("k").as_deref(), Some("b"));
        assert!(store.contains_key("k"));
        assert!(!store.contains_key("b"));
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let mut store = MemoryStore::new();
        store.remove("nope").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.save("text", "hi").unwrap();
        assert_eq!(store.load("text").as_deref(), Some("hi"));
        store.remove("text").unwrap();
        assert_eq!(store.load("text"), None);
    }
}
