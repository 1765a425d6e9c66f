// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Top-level window views

mod font_editor;

pub use font_editor::font_editor;
