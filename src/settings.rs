// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`. Settings a
//! user can override at runtime live in `config.rs`.

// ============================================================================
// CATALOG SETTINGS
// ============================================================================
/// Weight used when a variant key carries no usable number
const DEFAULT_WEIGHT: i32 = 400;

/// Substring that marks a variant key as italic (case-sensitive)
const ITALIC_MARKER: &str = "italic";

/// Family of the built-in fallback catalog
const FALLBACK_FAMILY: &str = "Roboto";

/// Weights of the built-in fallback catalog, all upright
const FALLBACK_WEIGHTS: [i32; 3] = [400, 500, 700];

/// Display name shared by every fallback variant
const FALLBACK_DISPLAY_NAME: &str = "md bolt";

// ============================================================================
// STORAGE KEYS
// ============================================================================
// Part of the on-disk format. Do not rename.
const KEY_TEXT: &str = "text";
const KEY_SELECTED_FONT: &str = "selectedFont";
const KEY_SELECTED_VARIANT: &str = "selectedVariant";
const KEY_IS_ITALIC: &str = "isItalic";

/// Directory name under the platform config/data dirs
const APP_DIR_NAME: &str = "specimen";

/// File name of the on-disk key-value store
const STORE_FILE_NAME: &str = "store.json";

/// File name of the optional user config
const CONFIG_FILE_NAME: &str = "config.toml";

// ============================================================================
// WINDOW SETTINGS
// ============================================================================
const WINDOW_TITLE: &str = "Specimen";
const WINDOW_WIDTH: f64 = 960.0;
const WINDOW_HEIGHT: f64 = 720.0;

// ============================================================================
// PREVIEW SETTINGS
// ============================================================================
/// Text size of the rendered preview line
const PREVIEW_TEXT_SIZE: f32 = 32.0;

/// Placeholder shown in the empty preview input
const PREVIEW_PLACEHOLDER: &str = "Type something to preview";

/// strftime pattern for the "last saved" label
const LAST_SAVED_FORMAT: &str = "%I:%M %p";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Catalog normalization settings
pub mod catalog {
    /// Weight used when a variant key carries no usable number
    pub const DEFAULT_WEIGHT: i32 = super::DEFAULT_WEIGHT;

    /// Substring that marks a variant key as italic
    pub const ITALIC_MARKER: &str = super::ITALIC_MARKER;

    /// Built-in catalog used when the configured one is empty or malformed
    pub mod fallback {
        pub const FAMILY: &str = super::super::FALLBACK_FAMILY;
        pub const WEIGHTS: [i32; 3] = super::super::FALLBACK_WEIGHTS;
        pub const DISPLAY_NAME: &str = super::super::FALLBACK_DISPLAY_NAME;
    }
}

/// Persistence keys and file locations
pub mod storage {
    /// Preview text, stored raw
    pub const TEXT: &str = super::KEY_TEXT;

    /// Selected font, stored as JSON
    pub const SELECTED_FONT: &str = super::KEY_SELECTED_FONT;

    /// Selected variant, stored as JSON (`null` when unresolved)
    pub const SELECTED_VARIANT: &str = super::KEY_SELECTED_VARIANT;

    /// Italic override, stored as a JSON boolean
    pub const IS_ITALIC: &str = super::KEY_IS_ITALIC;

    /// Every key owned by the selection, in the order reset removes them
    pub const ALL: [&str; 4] = [TEXT, SELECTED_FONT, SELECTED_VARIANT, IS_ITALIC];

    pub const APP_DIR_NAME: &str = super::APP_DIR_NAME;
    pub const STORE_FILE_NAME: &str = super::STORE_FILE_NAME;
    pub const CONFIG_FILE_NAME: &str = super::CONFIG_FILE_NAME;
}

/// Main window settings
pub mod window {
    pub const TITLE: &str = super::WINDOW_TITLE;
    pub const WIDTH: f64 = super::WINDOW_WIDTH;
    pub const HEIGHT: f64 = super::WINDOW_HEIGHT;
}

/// Preview pane settings
pub mod preview {
    pub const TEXT_SIZE: f32 = super::PREVIEW_TEXT_SIZE;
    pub const PLACEHOLDER: &str = super::PREVIEW_PLACEHOLDER;
    pub const LAST_SAVED_FORMAT: &str = super::LAST_SAVED_FORMAT;
}
