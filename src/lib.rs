// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Specimen: pick a font family and variant, preview text, keep the choice
//! across sessions.
//!
//! The core is `model` (catalog normalization), `editing` (the selection
//! state machine) and `store` (persistence). The Xilem window in `views` and
//! `components` only renders `AppState` and forwards user intents.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

mod components;
pub mod config;
mod data;
pub mod editing;
pub mod model;
pub mod settings;
pub mod store;
mod theme;
mod views;

use config::AppConfig;
use data::{AppState, DynStore};
use model::Catalog;
use store::{FileStore, MemoryStore};
use views::font_editor;

/// Catalog shipped with the binary, used when nothing else is configured
const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

/// Entry point for the Specimen application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("specimen=info".parse().unwrap())
                .add_directive("wgpu=warn".parse().unwrap())
                .add_directive("naga=warn".parse().unwrap()),
        )
        .init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::error!("{:#}", e);
        AppConfig::default()
    });

    let catalog = load_catalog(command_line_catalog().or_else(|| config.catalog_path.clone()));
    tracing::info!("Catalog ready: {} families", catalog.fonts().len());

    let initial_state = AppState::new(catalog, open_store(&config));

    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Catalog path given as the first command-line argument, if any
fn command_line_catalog() -> Option<PathBuf> {
    std::env::args_os().nth(1).map(PathBuf::from)
}

/// Build the catalog from `path`, or the bundled catalog when there is no
/// path or it cannot be read.
fn load_catalog(path: Option<PathBuf>) -> Catalog {
    let Some(path) = path else {
        return Catalog::from_json_or_default(BUNDLED_CATALOG);
    };

    match read_catalog_source(&path) {
        Ok(text) => {
            tracing::info!("Loading catalog from: {}", path.display());
            Catalog::from_json_or_default(&text)
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            tracing::error!("Usage: specimen [path/to/catalog.json]");
            Catalog::from_json_or_default(BUNDLED_CATALOG)
        }
    }
}

fn read_catalog_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))
}

fn open_store(config: &AppConfig) -> DynStore {
    if !config.persist {
        tracing::info!("Persistence disabled, selection lasts for this run only");
        return Box::new(MemoryStore::new());
    }

    let path = config.resolved_store_path();
    tracing::info!("Store: {}", path.display());
    Box::new(FileStore::open_or_empty(path))
}

/// Build the single window.
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let window_size = LogicalSize::new(settings::window::WIDTH, settings::window::HEIGHT);
    let window_view = window(state.main_window_id, settings::window::TITLE, font_editor(state));
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::KeyValueStore;

    #[test]
    fn bundled_catalog_normalizes() {
        let catalog = model::normalize_json(BUNDLED_CATALOG).unwrap();
        assert!(catalog.fonts().len() > 1);
        assert!(catalog.iter().all(|f| !f.variants.is_empty()));
    }

    #[test]
    fn unreadable_catalog_falls_back_to_bundled() {
        let temp = tempfile::tempdir().unwrap();
        let catalog = load_catalog(Some(temp.path().join("missing.json")));
        assert_eq!(catalog, Catalog::from_json_or_default(BUNDLED_CATALOG));
    }

    #[test]
    fn catalog_file_is_used_when_readable() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("fonts.json");
        std::fs::write(&path, r#"{"Only": {"300": "Light"}}"#).unwrap();

        let catalog = load_catalog(Some(path));
        assert_eq!(catalog.fonts().len(), 1);
        assert_eq!(catalog.default_font().family, "Only");
    }

    #[test]
    fn empty_catalog_file_uses_builtin_fallback() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("fonts.json");
        std::fs::write(&path, "{}").unwrap();

        assert_eq!(load_catalog(Some(path)), Catalog::fallback());
    }

    #[test]
    fn disabled_persistence_uses_memory_store() {
        let config = AppConfig {
            persist: false,
            ..AppConfig::default()
        };
        let mut store = open_store(&config);
        store.save("text", "x").unwrap();
        assert_eq!(store.load("text").as_deref(), Some("x"));
    }
}
