// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Font editor view - family list on the left, variant picker and preview
//! on the right, reset/save along the bottom

use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::core::one_of::Either;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, FlexExt, button, flex_col, flex_row, label};

use crate::components::{font_list, preview_panel, variant_panel};
use crate::data::AppState;
use crate::theme;

/// Main (and only) window content
pub fn font_editor(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    let gap = theme::size::PANEL_GAP;

    flex_row((
        font_list(state),
        flex_col((
            label("Font Editor")
                .text_size(24.0)
                .color(theme::text::PRIMARY),
            variant_panel(state),
            preview_panel(state),
            status_line(state).flex(1.0),
            action_row(),
        ))
        .gap(gap.px())
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .flex(1.0),
    ))
    .gap(gap.px())
    .cross_axis_alignment(CrossAxisAlignment::Fill)
    .padding(gap * 2.0)
    .background_color(theme::app::BACKGROUND)
}

/// Error message if there is one, otherwise the last save time
fn status_line(state: &AppState) -> impl WidgetView<AppState> + use<> {
    if let Some(error) = &state.error_message {
        Either::A(label(error.clone()).text_size(13.0).color(theme::text::ERROR))
    } else {
        let text = state
            .last_saved
            .as_ref()
            .map(|time| format!("Saved at {}", time))
            .unwrap_or_default();
        Either::B(label(text).text_size(13.0).color(theme::text::SECONDARY))
    }
}

// ===== Actions =====

fn action_row() -> impl WidgetView<AppState> + use<> {
    flex_row((
        action_button("Reset", |state: &mut AppState| state.reset()),
        label("").flex(1.0),
        action_button("Save", |state: &mut AppState| state.save()),
    ))
    .cross_axis_alignment(CrossAxisAlignment::Center)
}

fn action_button(
    text: &'static str,
    on_press: impl Fn(&mut AppState) + Send + Sync + 'static,
) -> impl WidgetView<AppState> {
    button(
        label(text).text_size(14.0).color(theme::action::TEXT),
        move |state: &mut AppState| on_press(state),
    )
    .background_color(theme::action::BACKGROUND)
    .border_color(theme::action::BACKGROUND)
}
