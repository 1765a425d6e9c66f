// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! The user's current font, variant, italic intent and preview text.
//!
//! `Selection` is a plain value with pure transitions; it never touches the
//! store. `SelectionSession` (in `session.rs`) drives these transitions and
//! mirrors the result into a `KeyValueStore`.
//!
//! `italic` is the user's latest toggle intent. It can disagree with
//! `variant.italic`, and `variant` can be `None` when a toggle asks for a
//! weight/italic pair the font does not have. Both are valid states that the
//! presentation must render.

use crate::model::{Catalog, Font, Variant};
use crate::settings::catalog::DEFAULT_WEIGHT;

/// Current selection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub font: Option<Font>,
    pub variant: Option<Variant>,
    /// Italic override (latest toggle intent)
    pub italic: bool,
    pub text: String,
}

/// Styling the preview should use for the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewStyle<'a> {
    /// `None` means "use the default family"
    pub family: Option<&'a str>,
    pub weight: i32,
    pub italic: bool,
}

impl Selection {
    /// First family, its first variant, and that variant's italic flag.
    pub fn catalog_default(catalog: &Catalog, text: String) -> Self {
        let font = catalog.default_font();
        let variant = font.first_variant().cloned();
        let italic = variant.as_ref().is_some_and(|v| v.italic);

        Self {
            font: Some(font.clone()),
            variant,
            italic,
            text,
        }
    }

    /// State after `reset`: like `catalog_default`, but upright and empty.
    pub fn reset_state(catalog: &Catalog) -> Self {
        Self {
            italic: false,
            ..Self::catalog_default(catalog, String::new())
        }
    }

    /// Switch family. Always lands on the new family's first variant.
    pub fn select_font(&mut self, catalog: &Catalog, family: &str) {
        self.font = catalog.find(family).cloned();
        self.variant = self.font.as_ref().and_then(|f| f.first_variant().cloned());
        self.italic = self.variant.as_ref().is_some_and(|v| v.italic);

        if self.font.is_none() {
            tracing::debug!("Family '{}' not in catalog", family);
        }
    }

    /// Pick the first variant of the current font with `weight`.
    ///
    /// Italic is not part of the match; the override follows whatever
    /// variant matched.
    pub fn select_variant(&mut self, weight: i32) {
        self.variant = self
            .font
            .as_ref()
            .and_then(|f| f.variant_by_weight(weight))
            .cloned();
        self.italic = self.variant.as_ref().is_some_and(|v| v.italic);
    }

    /// Flip the italic override and re-resolve the variant at the same
    /// weight. Leaves `variant` empty when no such variant exists.
    pub fn toggle_italic(&mut self) {
        self.italic = !self.italic;

        self.variant = match (&self.font, &self.variant) {
            (Some(font), Some(current)) => font.variant_exact(current.weight, self.italic).cloned(),
            _ => None,
        };

        if self.variant.is_none() {
            tracing::debug!("No variant for italic={} in current font", self.italic);
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Both a family and a variant are resolved
    pub fn is_resolved(&self) -> bool {
        self.font.is_some() && self.variant.is_some()
    }

    pub fn family(&self) -> Option<&str> {
        self.font.as_ref().map(|f| f.family.as_str())
    }

    /// Preview styling, with default weight when no variant resolved
    pub fn preview_style(&self) -> PreviewStyle<'_> {
        PreviewStyle {
            family: self.family(),
            weight: self.variant.as_ref().map_or(DEFAULT_WEIGHT, |v| v.weight),
            italic: self.italic,
        }
    }
}

impl PreviewStyle<'_> {
    /// Human-readable summary, e.g. "Lora 700 Italic"
    pub fn describe(&self) -> String {
        let style = if self.italic { "Italic" } else { "Regular" };
        format!(
            "{} {} {}",
            self.family.unwrap_or("Default"),
            self.weight,
            style
        )
    }
}
