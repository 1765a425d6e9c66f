// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Canonical font catalog: families and their weight/italic variants.
//!
//! A `Catalog` is built once at startup (see `normalize.rs`) and never
//! changes afterwards. It always holds at least one family, so "the default
//! font" is always defined. `Font` and `Variant` derive serde so the
//! selection can be written to the key-value store as JSON.

use serde::{Deserialize, Serialize};

use crate::settings::catalog::fallback;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A weight/italic combination within a family
///
/// Identity is the `(weight, italic)` pair. `name` is whatever the raw
/// catalog carried for this variant, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub weight: i32,
    pub italic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A font family and its variants, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub variants: Vec<Variant>,
}

/// The ordered, non-empty collection of families available for selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    fonts: Vec<Font>,
}

// ============================================================================
// IMPLEMENTATION
// ============================================================================

impl Variant {
    pub fn new(weight: i32, italic: bool, name: Option<String>) -> Self {
        Self {
            weight,
            italic,
            name,
        }
    }

    /// Label used by variant pickers, e.g. "700 Italic"
    pub fn label(&self) -> String {
        let style = if self.italic { "Italic" } else { "Regular" };
        format!("{} {}", self.weight, style)
    }
}

impl Font {
    /// First variant in catalog order, the one a fresh selection lands on
    pub fn first_variant(&self) -> Option<&Variant> {
        self.variants.first()
    }

    /// First variant with the given weight, ignoring italic
    pub fn variant_by_weight(&self, weight: i32) -> Option<&Variant> {
        self.variants.iter().find(|v| v.weight == weight)
    }

    /// First variant matching both weight and italic
    pub fn variant_exact(&self, weight: i32, italic: bool) -> Option<&Variant> {
        self.variants
            .iter()
            .find(|v| v.weight == weight && v.italic == italic)
    }
}

impl Catalog {
    /// Wrap a list of fonts. Returns `None` for an empty list.
    pub(crate) fn from_fonts(fonts: Vec<Font>) -> Option<Self> {
        if fonts.is_empty() {
            None
        } else {
            Some(Self { fonts })
        }
    }

    /// The built-in single-family catalog used when nothing better loads
    pub fn fallback() -> Self {
        let variants = fallback::WEIGHTS
            .iter()
            .map(|&weight| Variant::new(weight, false, Some(fallback::DISPLAY_NAME.to_string())))
            .collect();

        Self {
            fonts: vec![Font {
                family: fallback::FAMILY.to_string(),
                variants,
            }],
        }
    }

    /// The family a fresh or reset selection uses
    pub fn default_font(&self) -> &Font {
        // Non-empty by construction
        &self.fonts[0]
    }

    /// Exact, case-sensitive family lookup
    pub fn find(&self, family: &str) -> Option<&Font> {
        self.fonts.iter().find(|f| f.family == family)
    }

    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Font> {
        self.fonts.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font(family: &str, variants: &[(i32, bool)]) -> Font {
        Font {
            family: family.to_string(),
            variants: variants
                .iter()
                .map(|&(w, i)| Variant::new(w, i, None))
                .collect(),
        }
    }

    #[test]
    fn fallback_has_one_family_three_upright_weights() {
        let catalog = Catalog::fallback();
        assert_eq!(catalog.fonts().len(), 1);

        let font = catalog.default_font();
        assert_eq!(font.family, "Roboto");
        let weights: Vec<i32> = font.variants.iter().map(|v| v.weight).collect();
        assert_eq!(weights, vec![400, 500, 700]);
        assert!(font.variants.iter().all(|v| !v.italic));
    }

    #[test]
    fn empty_font_list_is_rejected() {
        assert!(Catalog::from_fonts(Vec::new()).is_none());
    }

    #[test]
    fn find_is_exact_and_case_sensitive() {
        let catalog =
            Catalog::from_fonts(vec![font("Inter", &[(400, false)])]).unwrap();
        assert!(catalog.find("Inter").is_some());
        assert!(catalog.find("inter").is_none());
        assert!(catalog.find("Inter ").is_none());
    }

    #[test]
    fn variant_by_weight_takes_first_match() {
        let f = font("Lora", &[(400, false), (400, true)]);
        assert_eq!(f.variant_by_weight(400), Some(&Variant::new(400, false, None)));
        assert_eq!(f.variant_by_weight(700), None);
    }

    #[test]
    fn variant_exact_matches_both_fields() {
        let f = font("Lora", &[(400, false), (400, true)]);
        assert_eq!(f.variant_exact(400, true), Some(&Variant::new(400, true, None)));
        assert_eq!(f.variant_exact(700, true), None);
    }

    #[test]
    fn variant_label() {
        assert_eq!(Variant::new(700, true, None).label(), "700 Italic");
        assert_eq!(Variant::new(400, false, None).label(), "400 Regular");
    }

    #[test]
    fn variant_json_omits_missing_name() {
        let json = serde_json::to_string(&Variant::new(500, false, None)).unwrap();
        assert_eq!(json, r#"{"weight":500,"italic":false}"#);

        let named = Variant::new(500, true, Some("Medium Italic".to_string()));
        let back: Variant =
            serde_json::from_str(&serde_json::to_string(&named).unwrap()).unwrap();
        assert_eq!(back, named);
    }
}
