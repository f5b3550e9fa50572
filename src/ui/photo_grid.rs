// SPDX-License-Identifier: MPL-2.0
//! Demo catalog view with per-photo selection.
//!
//! Stands in for the gallery page the picker normally sits on: one row per
//! photo with its selection flag, so individual toggles can be exercised
//! alongside the bulk actions in the picker bar.

use crate::catalog::{Photo, PhotoId};
use crate::i18n::fluent::I18n;
use iced::widget::{checkbox, Column, Text};
use iced::Element;

const GRID_SPACING: f32 = 6.0;

/// Per-photo intents emitted by the grid.
#[derive(Debug, Clone)]
pub enum Message {
    PhotoToggled { id: PhotoId, selected: bool },
}

/// Renders the catalog as a checkbox list in insertion order.
pub fn view<'a>(photos: &[Photo], i18n: &I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(GRID_SPACING)
        .push(Text::new(i18n.tr("catalog-heading")).size(18));

    for photo in photos {
        let id = photo.id.clone();
        column = column.push(
            checkbox(photo.id.to_string(), photo.selected).on_toggle(move |selected| {
                Message::PhotoToggled {
                    id: id.clone(),
                    selected,
                }
            }),
        );
    }

    column.into()
}
