// SPDX-License-Identifier: MPL-2.0
//! Picker bar: the control strip rendered from the controller view model.
//!
//! Mirrors the lifecycle: while `Idle` it offers the selection toggle, the
//! selected count, and the download action; while `Requesting` it shows a
//! busy notice; once settled it shows the completion or failure toast.

use crate::i18n::fluent::I18n;
use crate::picker::{Lifecycle, ToggleAction, ViewModel};
use fluent_bundle::FluentArgs;
use iced::widget::{button, Row, Text};
use iced::{alignment, Element, Length};

const BAR_SPACING: f32 = 12.0;
const BAR_PADDING: f32 = 10.0;

/// User intents emitted by the picker bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleSelectAll,
    StartDownload,
    CloseToast,
    DismissFailure,
}

/// Renders the picker bar for the current view model.
pub fn view<'a>(view_model: &ViewModel, i18n: &I18n) -> Element<'a, Message> {
    let row = match view_model.lifecycle {
        Lifecycle::Requesting => requesting_row(i18n),
        Lifecycle::Completed if view_model.toast_visible => completed_row(i18n),
        Lifecycle::Failed if view_model.toast_visible => failed_row(view_model, i18n),
        // `Completed` with a dismissed toast keeps the idle controls
        // visible; the guard still disables the download action.
        _ => idle_row(view_model, i18n),
    };

    row.spacing(BAR_SPACING)
        .padding(BAR_PADDING)
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .into()
}

fn idle_row<'a>(view_model: &ViewModel, i18n: &I18n) -> Row<'a, Message> {
    let toggle_label = match view_model.toggle_action {
        ToggleAction::SelectAll => i18n.tr("picker-select-all"),
        ToggleAction::DeselectAll => i18n.tr("picker-deselect-all"),
    };

    let mut args = FluentArgs::new();
    args.set("count", view_model.selected_count);
    let count_label = i18n.tr_args("picker-selected-count", &args);

    let download = button(Text::new(i18n.tr("picker-download")))
        .on_press_maybe(view_model.can_download.then_some(Message::StartDownload));

    Row::new()
        .push(
            button(Text::new(toggle_label))
                .style(button::secondary)
                .on_press(Message::ToggleSelectAll),
        )
        .push(Text::new(count_label))
        .push(download)
}

fn requesting_row<'a>(i18n: &I18n) -> Row<'a, Message> {
    Row::new().push(Text::new(i18n.tr("picker-creating-queue")))
}

fn completed_row<'a>(i18n: &I18n) -> Row<'a, Message> {
    Row::new()
        .push(Text::new(i18n.tr("toast-download-started")).width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("picker-close")))
                .style(button::secondary)
                .on_press(Message::CloseToast),
        )
}

fn failed_row<'a>(view_model: &ViewModel, i18n: &I18n) -> Row<'a, Message> {
    let mut args = FluentArgs::new();
    let detail = view_model.failure_detail.clone().unwrap_or_default();
    args.set("detail", detail);

    Row::new()
        .push(Text::new(i18n.tr_args("toast-download-failed", &args)).width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("picker-dismiss")))
                .style(button::secondary)
                .on_press(Message::DismissFailure),
        )
}
