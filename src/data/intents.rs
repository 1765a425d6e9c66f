// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! User intents forwarded from the UI to the selection session

use chrono::Local;

use super::AppState;
use crate::settings;
use crate::store::StoreError;

impl AppState {
    pub fn select_font(&mut self, family: &str) {
        let result = self.session.select_font(family);
        self.report(result, "select font");
    }

    pub fn select_variant(&mut self, weight: i32) {
        let result = self.session.select_variant(weight);
        self.report(result, "select variant");
    }

    pub fn toggle_italic(&mut self) {
        let result = self.session.toggle_italic();
        self.report(result, "toggle italic");
    }

    pub fn set_text(&mut self, text: String) {
        let result = self.session.set_text(text);
        self.report(result, "save text");
    }

    /// Explicit save button
    pub fn save(&mut self) {
        match self.session.save() {
            Ok(()) => {
                self.error_message = None;
                self.last_saved = Some(
                    Local::now()
                        .format(settings::preview::LAST_SAVED_FORMAT)
                        .to_string(),
                );
            }
            Err(e) => self.fail("save", e),
        }
    }

    pub fn reset(&mut self) {
        let result = self.session.reset();
        if result.is_ok() {
            self.last_saved = None;
        }
        self.report(result, "reset");
    }

    fn report(&mut self, result: Result<(), StoreError>, action: &str) {
        match result {
            Ok(()) => self.error_message = None,
            Err(e) => self.fail(action, e),
        }
    }

    fn fail(&mut self, action: &str, error: StoreError) {
        let error = format!("Failed to {}: {}", action, error);
        tracing::error!("{}", error);
        self.error_message = Some(error);
    }
}
