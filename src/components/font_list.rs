// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Family list for the left sidebar
//!
//! One button per catalog family, in catalog order. The selected family is
//! highlighted; when the selection holds no family, nothing is.

use masonry::properties::Padding;
use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, button, flex_col, label, portal, sized_box};

use crate::data::AppState;
use crate::theme;

/// Font family list view
pub fn font_list(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let selected = state.session.selection().family().map(str::to_owned);

    let buttons: Vec<_> = state
        .session
        .catalog()
        .iter()
        .map(|font| {
            let is_selected = selected.as_deref() == Some(font.family.as_str());
            family_button(font.family.clone(), is_selected)
        })
        .collect();

    sized_box(
        flex_col((
            sized_box(
                label("FAMILIES")
                    .text_size(12.0)
                    .color(theme::text::SECONDARY),
            )
            .padding(Padding::from_vh(8.0, 8.0)),
            portal(flex_col(buttons).cross_axis_alignment(CrossAxisAlignment::Fill)),
        ))
        .cross_axis_alignment(CrossAxisAlignment::Fill),
    )
    .width(theme::size::FONT_LIST_WIDTH.px())
    .expand_height()
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(1.5)
    .corner_radius(theme::size::PANEL_RADIUS)
}

/// Single family button
fn family_button(family: String, is_selected: bool) -> impl WidgetView<AppState> + use<> {
    let (bg_color, text_color) = if is_selected {
        (theme::item::SELECTED_BACKGROUND, theme::item::SELECTED_TEXT)
    } else {
        (theme::item::BACKGROUND, theme::item::TEXT)
    };

    sized_box(
        button(
            label(family.clone()).text_size(14.0).color(text_color),
            move |state: &mut AppState| {
                state.select_font(&family);
            },
        )
        .background_color(bg_color)
        .border_color(masonry::vello::peniko::Color::TRANSPARENT),
    )
    .expand_width()
    .padding(Padding::from_vh(1.0, 6.0))
}
