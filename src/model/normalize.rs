// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Turns a raw `family -> { variant key -> display name }` mapping into a
//! `Catalog`.
//!
//! Variant keys look like `"regular"`, `"500"`, `"700italic"`. The weight is
//! the leading integer left after removing the first `"italic"` from the key;
//! keys without one (or with a zero weight) get 400. The key is italic when
//! it contains `"italic"` anywhere.
//!
//! Normalization itself only fails when it produces no families. Callers that
//! want the old "always get something" behavior use
//! `Catalog::from_raw_or_default` / `Catalog::from_json_or_default`.

use indexmap::IndexMap;
use thiserror::Error;

use super::catalog::{Catalog, Font, Variant};
use crate::settings::catalog::{DEFAULT_WEIGHT, ITALIC_MARKER};

/// Raw catalog as read from the source, in source order
pub type RawCatalog = IndexMap<String, IndexMap<String, String>>;

/// Why a raw catalog could not be turned into a `Catalog`
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source contained no families
    #[error("catalog contains no font families")]
    Empty,

    /// The source was not a `family -> { key -> name }` JSON object
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Build a catalog from an already-decoded raw mapping.
pub fn normalize(raw: &RawCatalog) -> Result<Catalog, CatalogError> {
    let fonts: Vec<Font> = raw
        .iter()
        .map(|(family, variants)| Font {
            family: family.clone(),
            variants: variants
                .iter()
                .map(|(key, name)| parse_variant(key, name))
                .collect(),
        })
        .collect();

    tracing::debug!("Normalized {} families", fonts.len());
    Catalog::from_fonts(fonts).ok_or(CatalogError::Empty)
}

/// Decode JSON text into the raw mapping, then normalize it.
pub fn normalize_json(text: &str) -> Result<Catalog, CatalogError> {
    let raw: RawCatalog = serde_json::from_str(text)?;
    normalize(&raw)
}

/// Build one variant from its raw key and display name.
pub fn parse_variant(key: &str, name: &str) -> Variant {
    Variant::new(
        parse_weight(key),
        key.contains(ITALIC_MARKER),
        Some(name.to_string()),
    )
}

/// Leading integer of the key once the italic marker is removed.
///
/// Accepts surrounding whitespace and an optional sign. Numbers outside the
/// `i32` range saturate. No digits, or a zero weight, maps to the default
/// weight.
pub fn parse_weight(key: &str) -> i32 {
    let stripped = key.replacen(ITALIC_MARKER, "", 1);
    let trimmed = stripped.trim();

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return DEFAULT_WEIGHT;
    }

    // Only overflow can fail here; saturate instead of dropping the number
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    let weight = if negative { -magnitude } else { magnitude };

    match weight.clamp(i32::MIN.into(), i32::MAX.into()) {
        0 => DEFAULT_WEIGHT,
        w => w as i32,
    }
}

impl Catalog {
    /// Normalize `raw`, substituting the fallback catalog on failure.
    pub fn from_raw_or_default(raw: &RawCatalog) -> Self {
        normalize(raw).unwrap_or_else(|e| {
            tracing::warn!("Using built-in catalog: {}", e);
            Catalog::fallback()
        })
    }

    /// Parse and normalize JSON text, substituting the fallback catalog on
    /// failure.
    pub fn from_json_or_default(text: &str) -> Self {
        normalize_json(text).unwrap_or_else(|e| {
            tracing::warn!("Using built-in catalog: {}", e);
            Catalog::fallback()
        })
    }
}
