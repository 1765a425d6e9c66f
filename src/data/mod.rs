// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`) that drives the Xilem reactive UI.
//!
//! `AppState` owns the selection session and a little window metadata.
//! Every UI rebuild reads from it; user intents arrive in event callbacks as
//! method calls (see `intents.rs`) that forward to the session.

mod intents;

use xilem::WindowId;

use crate::editing::SelectionSession;
use crate::model::Catalog;
use crate::store::KeyValueStore;

/// Store backend chosen at startup (file-backed or in-memory)
pub type DynStore = Box<dyn KeyValueStore + Send + Sync>;

/// Main application state
pub struct AppState {
    /// Catalog, live selection and its persistence
    pub session: SelectionSession<DynStore>,

    /// Error message to display, if any
    pub error_message: Option<String>,

    /// When the selection was last explicitly saved (formatted for UI)
    pub last_saved: Option<String>,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    /// Create the state, restoring the selection from `store`
    pub fn new(catalog: Catalog, store: DynStore) -> Self {
        Self {
            session: SelectionSession::open(catalog, store),
            error_message: None,
            last_saved: None,
            running: true,
            main_window_id: WindowId::next(),
        }
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}
