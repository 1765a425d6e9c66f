// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for the Specimen font picker

pub mod font_list;
pub mod preview_panel;
pub mod variant_panel;

// Re-export commonly used widget views
pub use font_list::font_list;
pub use preview_panel::preview_panel;
pub use variant_panel::variant_panel;
