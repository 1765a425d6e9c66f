// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection session: the catalog, the live `Selection`, and the store it is
//! mirrored into.
//!
//! Every user intent goes through here. The session applies the pure
//! `Selection` transition first, then writes to the store:
//!
//! - `set_text` writes the `text` key right away.
//! - font/variant/italic changes call `commit` once both a font and a
//!   variant are resolved. While either is missing the last good values
//!   stay in the store.
//! - `save` writes everything, unresolved values included (as `null`).
//! - `reset` restores catalog defaults and removes all four keys.
//!
//! Store errors are returned to the caller after the in-memory change has
//! already happened, so the UI never disagrees with what the user did.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::selection::Selection;
use crate::model::{Catalog, Font, Variant};
use crate::settings::storage;
use crate::store::{KeyValueStore, StoreError};

/// Owns the selection and the store that persists it
#[derive(Debug)]
pub struct SelectionSession<S: KeyValueStore> {
    catalog: Catalog,
    selection: Selection,
    store: S,
}

/// Font/variant/italic as read back from the store
#[derive(Debug, Clone, PartialEq, Eq)]
struct PersistedSelection {
    font: Option<Font>,
    variant: Option<Variant>,
    italic: bool,
}

impl<S: KeyValueStore> SelectionSession<S> {
    /// Start a session, restoring whatever the store remembers.
    pub fn open(catalog: Catalog, store: S) -> Self {
        let text = store.load(storage::TEXT).unwrap_or_default();

        let selection = match PersistedSelection::load(&store) {
            Some(persisted) => {
                tracing::info!(
                    "Restored selection: {}",
                    persisted.font.as_ref().map_or("<none>", |f| f.family.as_str())
                );
                Selection {
                    font: persisted.font,
                    variant: persisted.variant,
                    italic: persisted.italic,
                    text,
                }
            }
            None => Selection::catalog_default(&catalog, text),
        };

        Self {
            catalog,
            selection,
            store,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn select_font(&mut self, family: &str) -> Result<(), StoreError> {
        self.selection.select_font(&self.catalog, family);
        self.auto_commit()
    }

    pub fn select_variant(&mut self, weight: i32) -> Result<(), StoreError> {
        self.selection.select_variant(weight);
        self.auto_commit()
    }

    pub fn toggle_italic(&mut self) -> Result<(), StoreError> {
        self.selection.toggle_italic();
        self.auto_commit()
    }

    /// Replace the preview text and persist it immediately.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), StoreError> {
        self.selection.set_text(text);
        self.store.save(storage::TEXT, &self.selection.text)
    }

    /// Write font, variant and italic override to the store.
    ///
    /// Does not change the in-memory selection.
    pub fn commit(&mut self) -> Result<(), StoreError> {
        let sel = &self.selection;
        let font = encode(storage::SELECTED_FONT, &sel.font)?;
        let variant = encode(storage::SELECTED_VARIANT, &sel.variant)?;
        let italic = encode(storage::IS_ITALIC, &sel.italic)?;

        self.store.save(storage::SELECTED_FONT, &font)?;
        self.store.save(storage::SELECTED_VARIANT, &variant)?;
        self.store.save(storage::IS_ITALIC, &italic)
    }

    /// Explicit save: text plus everything `commit` writes.
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.store.save(storage::TEXT, &self.selection.text)?;
        self.commit()?;
        tracing::info!("Saved selection");
        Ok(())
    }

    /// Back to catalog defaults, with every persisted key removed.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.selection = Selection::reset_state(&self.catalog);
        for key in storage::ALL {
            self.store.remove(key)?;
        }
        tracing::info!("Selection reset to defaults");
        Ok(())
    }

    fn auto_commit(&mut self) -> Result<(), StoreError> {
        if self.selection.is_resolved() {
            self.commit()
        } else {
            tracing::debug!("Selection unresolved, keeping previously stored values");
            Ok(())
        }
    }
}

impl PersistedSelection {
    /// All three keys present and decodable, or nothing.
    ///
    /// A missing key is an ordinary cache miss. A present but undecodable
    /// value is logged and treated the same way.
    fn load(store: &impl KeyValueStore) -> Option<Self> {
        let font = store.load(storage::SELECTED_FONT);
        let variant = store.load(storage::SELECTED_VARIANT);
        let italic = store.load(storage::IS_ITALIC);

        let (Some(font), Some(variant), Some(italic)) = (font, variant, italic) else {
            tracing::debug!("No complete stored selection, using catalog defaults");
            return None;
        };

        Some(Self {
            font: decode(storage::SELECTED_FONT, &font)?,
            variant: decode(storage::SELECTED_VARIANT, &variant)?,
            italic: decode(storage::IS_ITALIC, &italic)?,
        })
    }
}

fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring stored selection, '{}' is corrupt: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::normalize_json;
    use crate::store::{FileStore, MemoryStore};

    fn catalog() -> Catalog {
        normalize_json(
            r#"{
                "Lora": {"regular": "Regular", "italic": "Italic", "700": "Bold"},
                "Caveat": {"700italic": "Bold Italic", "500": "Medium", "500italic": "Medium Italic"}
            }"#,
        )
        .unwrap()
    }

    fn fresh() -> SelectionSession<MemoryStore> {
        SelectionSession::open(catalog(), MemoryStore::new())
    }

    fn reopen(session: SelectionSession<MemoryStore>) -> SelectionSession<MemoryStore> {
        SelectionSession::open(catalog(), session.store().clone())
    }

    #[test]
    fn empty_store_starts_at_catalog_default() {
        let session = fresh();
        let sel = session.selection();
        assert_eq!(sel, &Selection::catalog_default(session.catalog(), String::new()));
        assert!(session.store().is_empty());
    }

    #[test]
    fn select_font_auto_commits() {
        let mut session = fresh();
        session.select_font("Caveat").unwrap();

        let store = session.store();
        assert!(store.contains_key(storage::SELECTED_FONT));
        assert_eq!(store.load(storage::IS_ITALIC).as_deref(), Some("true"));
        assert_eq!(
            store.load(storage::SELECTED_VARIANT).as_deref(),
            Some(r#"{"weight":700,"italic":true,"name":"Bold Italic"}"#)
        );
        assert!(!store.contains_key(storage::TEXT));
    }

    #[test]
    fn unresolved_selection_keeps_last_stored_values() {
        let mut session = fresh();
        session.select_variant(700).unwrap();
        let before = session.store().clone();

        // Lora has no 700 italic
        session.toggle_italic().unwrap();
        assert_eq!(session.selection().variant, None);
        assert_eq!(session.store(), &before);
    }

    #[test]
    fn round_trip_through_store() {
        let mut session = fresh();
        session.select_font("Caveat").unwrap();
        session.select_variant(500).unwrap();
        session.toggle_italic().unwrap();
        session.commit().unwrap();
        let expected = session.selection().clone();
        assert_eq!(
            expected.variant.as_ref().map(|v| (v.weight, v.italic)),
            Some((500, true))
        );

        let restored = reopen(session);
        let sel = restored.selection();
        assert_eq!(sel.font, expected.font);
        assert_eq!(sel.variant, expected.variant);
        assert_eq!(sel.italic, expected.italic);
    }

    #[test]
    fn round_trip_with_unresolved_variant() {
        let mut session = fresh();
        session.select_variant(700).unwrap();
        session.toggle_italic().unwrap();
        session.commit().unwrap();
        assert_eq!(
            session.store().load(storage::SELECTED_VARIANT).as_deref(),
            Some("null")
        );

        let restored = reopen(session);
        assert_eq!(restored.selection().family(), Some("Lora"));
        assert_eq!(restored.selection().variant, None);
        assert!(restored.selection().italic);
    }

    #[test]
    fn commit_does_not_touch_memory() {
        let mut session = fresh();
        session.select_font("Caveat").unwrap();
        let before = session.selection().clone();
        session.commit().unwrap();
        assert_eq!(session.selection(), &before);
    }

    #[test]
    fn set_text_persists_without_commit() {
        let mut session = fresh();
        session.set_text("abc").unwrap();
        assert_eq!(session.store().load(storage::TEXT).as_deref(), Some("abc"));
        assert!(!session.store().contains_key(storage::SELECTED_FONT));

        let restored = reopen(session);
        assert_eq!(restored.selection().text, "abc");
    }

    #[test]
    fn save_writes_text_and_selection() {
        let mut session = fresh();
        session.selection.set_text("unsaved");
        session.save().unwrap();

        let store = session.store();
        assert_eq!(store.load(storage::TEXT).as_deref(), Some("unsaved"));
        for key in storage::ALL {
            assert!(store.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn reset_clears_all_keys_and_state() {
        let mut session = fresh();
        session.select_font("Caveat").unwrap();
        session.set_text("hello").unwrap();
        session.save().unwrap();

        session.reset().unwrap();
        assert!(session.store().is_empty());

        let sel = session.selection();
        let default_font = session.catalog().default_font();
        assert_eq!(sel.font.as_ref(), Some(default_font));
        assert_eq!(sel.variant.as_ref(), default_font.variants.first());
        assert!(!sel.italic);
        assert!(sel.text.is_empty());
    }

    #[test]
    fn partial_store_falls_back_but_keeps_text() {
        let mut store = MemoryStore::new();
        store.save(storage::TEXT, "kept").unwrap();
        store.save(storage::SELECTED_FONT, r#"{"family":"Caveat","variants":[]}"#).unwrap();
        store.save(storage::IS_ITALIC, "true").unwrap();

        let session = SelectionSession::open(catalog(), store);
        let expected = Selection::catalog_default(session.catalog(), "kept".to_string());
        assert_eq!(session.selection(), &expected);
    }

    #[test]
    fn corrupt_store_falls_back_but_keeps_text() {
        let mut store = MemoryStore::new();
        store.save(storage::TEXT, "kept").unwrap();
        store.save(storage::SELECTED_FONT, "{broken").unwrap();
        store.save(storage::SELECTED_VARIANT, "null").unwrap();
        store.save(storage::IS_ITALIC, "false").unwrap();

        let session = SelectionSession::open(catalog(), store);
        assert_eq!(session.selection().family(), Some("Lora"));
        assert_eq!(session.selection().text, "kept");
    }

    #[test]
    fn wrongly_typed_value_is_corrupt() {
        let mut store = MemoryStore::new();
        store.save(storage::SELECTED_FONT, "null").unwrap();
        store.save(storage::SELECTED_VARIANT, "null").unwrap();
        store.save(storage::IS_ITALIC, r#""yes""#).unwrap();

        let session = SelectionSession::open(catalog(), store);
        assert_eq!(session.selection().family(), Some("Lora"));
    }

    #[test]
    fn restored_font_need_not_be_in_catalog() {
        let mut store = MemoryStore::new();
        store
            .save(
                storage::SELECTED_FONT,
                r#"{"family":"Gone","variants":[{"weight":300,"italic":false}]}"#,
            )
            .unwrap();
        store.save(storage::SELECTED_VARIANT, r#"{"weight":300,"italic":false}"#).unwrap();
        store.save(storage::IS_ITALIC, "false").unwrap();

        let session = SelectionSession::open(catalog(), store);
        assert_eq!(session.selection().family(), Some("Gone"));
        assert_eq!(session.selection().variant.as_ref().map(|v| v.weight), Some(300));
    }

    #[test]
    fn file_store_session_survives_restart() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("store.json");

        let mut session = SelectionSession::open(catalog(), FileStore::open(&path).unwrap());
        session.select_font("Caveat").unwrap();
        session.select_variant(500).unwrap();
        session.set_text("Sphinx of black quartz").unwrap();
        let expected = session.selection().clone();
        drop(session);

        let restored = SelectionSession::open(catalog(), FileStore::open(&path).unwrap());
        assert_eq!(restored.selection(), &expected);
    }
}
