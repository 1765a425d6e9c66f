// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Font catalog model

pub mod catalog;
pub mod normalize;

pub use catalog::{Catalog, Font, Variant};
pub use normalize::{CatalogError, RawCatalog, normalize, normalize_json};
