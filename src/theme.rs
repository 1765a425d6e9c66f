// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0x10, 0x10, 0x10);
const BASE_B: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const BASE_C: Color = Color::from_rgb8(0x30, 0x30, 0x30);
const BASE_E: Color = Color::from_rgb8(0x50, 0x50, 0x50);
const BASE_F: Color = Color::from_rgb8(0x60, 0x60, 0x60);
const BASE_G: Color = Color::from_rgb8(0x70, 0x70, 0x70);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_L: Color = Color::from_rgb8(0xc0, 0xc0, 0xc0);
const BASE_O: Color = Color::from_rgb8(0xf0, 0xf0, 0xf0);

// ============================================================================
// GLOBAL BACKGROUNDS
// ============================================================================
const APP_BACKGROUND: Color = BASE_B;

// ============================================================================
// UI TEXT AND LABELS
// ============================================================================
const PRIMARY_UI_TEXT: Color = BASE_I;
const SECONDARY_UI_TEXT: Color = BASE_G;
const HEADER_TEXT: Color = Color::from_rgb8(0x90, 0xee, 0x90);
const ERROR_TEXT: Color = Color::from_rgb8(0xff, 0x6b, 0x6b);

// ============================================================================
// UI PANELS
// ============================================================================
const PANEL_BACKGROUND: Color = BASE_C;
const PANEL_OUTLINE: Color = BASE_F;

// ============================================================================
// LIST ITEMS AND TOGGLES (font list, variant list, italic toggle)
// ============================================================================
const ITEM_BACKGROUND: Color = BASE_C;
const ITEM_SELECTED_BACKGROUND: Color = Color::from_rgb8(0x14, 0x64, 0x14);
const ITEM_TEXT: Color = BASE_L;
const ITEM_SELECTED_TEXT: Color = BASE_O;
const TOGGLE_ON_BACKGROUND: Color = BASE_E;
const TOGGLE_OUTLINE: Color = BASE_A;

// ============================================================================
// ACTION BUTTONS (reset, save)
// ============================================================================
const ACTION_BACKGROUND: Color = Color::from_rgb8(0x25, 0x63, 0xeb);
const ACTION_TEXT: Color = BASE_O;

// ============================================================================
// PREVIEW
// ============================================================================
const PREVIEW_TEXT: Color = BASE_O;

// ============================================================================
// SIZES
// ============================================================================
const PANEL_RADIUS: f64 = 8.0;
const PANEL_GAP: f64 = 6.0;
const FONT_LIST_WIDTH: f64 = 240.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Window background
pub mod app {
    use super::Color;
    pub const BACKGROUND: Color = super::APP_BACKGROUND;
}

/// UI text colors
pub mod text {
    use super::Color;
    pub const PRIMARY: Color = super::PRIMARY_UI_TEXT;
    pub const SECONDARY: Color = super::SECONDARY_UI_TEXT;
    pub const HEADER: Color = super::HEADER_TEXT;
    pub const ERROR: Color = super::ERROR_TEXT;
}

/// Panel backgrounds and outlines
pub mod panel {
    use super::Color;
    pub const BACKGROUND: Color = super::PANEL_BACKGROUND;
    pub const OUTLINE: Color = super::PANEL_OUTLINE;
}

/// Selectable list items (families, variants) and the italic toggle
pub mod item {
    use super::Color;
    pub const BACKGROUND: Color = super::ITEM_BACKGROUND;
    pub const SELECTED_BACKGROUND: Color = super::ITEM_SELECTED_BACKGROUND;
    pub const TEXT: Color = super::ITEM_TEXT;
    pub const SELECTED_TEXT: Color = super::ITEM_SELECTED_TEXT;
    pub const TOGGLE_ON_BACKGROUND: Color = super::TOGGLE_ON_BACKGROUND;
    pub const TOGGLE_OUTLINE: Color = super::TOGGLE_OUTLINE;
}

/// Reset and save buttons
pub mod action {
    use super::Color;
    pub const BACKGROUND: Color = super::ACTION_BACKGROUND;
    pub const TEXT: Color = super::ACTION_TEXT;
}

pub mod preview {
    use super::Color;
    pub const TEXT: Color = super::PREVIEW_TEXT;
}

pub mod size {
    /// Corner radius for all panels
    pub const PANEL_RADIUS: f64 = super::PANEL_RADIUS;
    /// Gap between panels and around the window edge
    pub const PANEL_GAP: f64 = super::PANEL_GAP;
    pub const FONT_LIST_WIDTH: f64 = super::FONT_LIST_WIDTH;
}
