// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Preview text input and the styled preview line
//!
//! Font rendering is out of scope, so the preview shows the text together
//! with the style it resolves to. An unresolved variant falls back to the
//! default weight.

use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, flex_col, label, sized_box, text_input};

use crate::data::AppState;
use crate::settings;
use crate::theme;

pub fn preview_panel(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let selection = state.session.selection();
    let style = selection.preview_style().describe();
    let text = selection.text.clone();
    let sample = if text.is_empty() {
        settings::preview::PLACEHOLDER.to_string()
    } else {
        text.clone()
    };

    sized_box(
        flex_col((
            label(style).text_size(12.0).color(theme::text::HEADER),
            text_input(text, |state: &mut AppState, new_value| {
                state.set_text(new_value);
            })
            .placeholder(settings::preview::PLACEHOLDER),
            sized_box(label("")).height(8.px()),
            label(sample)
                .text_size(settings::preview::TEXT_SIZE)
                .color(theme::preview::TEXT),
        ))
        .gap(6.px())
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .padding(12.0),
    )
    .expand_width()
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(1.5)
    .corner_radius(theme::size::PANEL_RADIUS)
}
