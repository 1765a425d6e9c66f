// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Variant picker and italic toggle
//!
//! Variant buttons pick by weight only, the same way the session matches
//! them. The italic toggle reflects the italic override, which may be on
//! even when no italic variant resolved.

use masonry::properties::Padding;
use masonry::properties::types::AsUnit;
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, FlexExt, button, flex_row, label, sized_box};

use crate::data::AppState;
use crate::model::Variant;
use crate::theme;

/// Row of variant buttons followed by the italic toggle
pub fn variant_panel(state: &AppState) -> impl WidgetView<AppState> + use<> {
    let selection = state.session.selection();
    let current = selection.variant.clone();

    let buttons: Vec<_> = selection
        .font
        .iter()
        .flat_map(|font| font.variants.iter())
        .map(|variant| {
            let is_selected = current.as_ref() == Some(variant);
            variant_button(variant, is_selected)
        })
        .collect();

    sized_box(
        flex_row((
            flex_row(buttons).gap(4.px()).flex(1.0),
            italic_toggle(selection.italic),
        ))
        .gap(8.px())
        .cross_axis_alignment(CrossAxisAlignment::Center)
        .padding(8.0),
    )
    .expand_width()
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(1.5)
    .corner_radius(theme::size::PANEL_RADIUS)
}

fn variant_button(variant: &Variant, is_selected: bool) -> impl WidgetView<AppState> + use<> {
    let weight = variant.weight;
    let (bg_color, text_color) = if is_selected {
        (theme::item::SELECTED_BACKGROUND, theme::item::SELECTED_TEXT)
    } else {
        (theme::item::BACKGROUND, theme::item::TEXT)
    };

    button(
        label(variant.label()).text_size(13.0).color(text_color),
        move |state: &mut AppState| {
            state.select_variant(weight);
        },
    )
    .background_color(bg_color)
    .border_color(theme::panel::OUTLINE)
}

fn italic_toggle(is_on: bool) -> impl WidgetView<AppState> + use<> {
    let bg_color = if is_on {
        theme::item::TOGGLE_ON_BACKGROUND
    } else {
        theme::item::BACKGROUND
    };

    sized_box(
        button(
            label("Italic").text_size(13.0).color(theme::text::PRIMARY),
            |state: &mut AppState| {
                state.toggle_italic();
            },
        )
        .background_color(bg_color)
        .border_color(theme::item::TOGGLE_OUTLINE),
    )
    .padding(Padding::from_vh(0.0, 4.0))
}
