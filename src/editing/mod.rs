// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection state and the session that persists it

pub mod selection;
pub mod session;

pub use selection::{PreviewStyle, Selection};
pub use session::SelectionSession;
