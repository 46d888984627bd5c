// SPDX-License-Identifier: MPL-2.0
//! Modal player layered over the showcase.
//!
//! Pressing the dimmed backdrop closes the modal; presses on the content do
//! not. Local entries get playback controls, embedded entries show where
//! they are hosted. Below the player sit the same details and badges as on
//! the carousel caption.

use crate::carousel::{Message, PressTarget, State};
use crate::diagnostics::PlayerSlot;
use crate::domain::media::MediaEntry;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{carousel, progress, styles, thumbnail};
use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, stack, text, Space,
};
use iced::{Alignment, Element, Length};

/// Stacks the modal over `base` when it is open.
pub fn with_modal<'a>(
    base: Element<'a, Message>,
    state: &'a State,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let Some(index) = state.modal().open_index() else {
        return base;
    };
    let Some(entry) = state.playlist().get(index) else {
        return base;
    };

    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::ModalPressed(PressTarget::Backdrop));

    let content = mouse_area(content(entry, state, i18n))
        .on_press(Message::ModalPressed(PressTarget::Content));

    let dialog = center(opaque(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG);

    stack![base, backdrop, dialog].into()
}

fn content<'a>(entry: &'a MediaEntry, state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let header = row![
        text(entry.title.clone()).size(typography::TITLE_MD),
        Space::new().width(Length::Fill),
        button(text(i18n.tr("modal-close")).size(typography::BODY))
            .on_press(Message::CloseModal)
            .style(styles::button::ghost),
    ]
    .align_y(Alignment::Center)
    .spacing(spacing::SM);

    let body = if entry.is_local() {
        local_player(entry, state, i18n)
    } else {
        embed_panel(entry, state, i18n)
    };

    let info = row![
        carousel::details(entry, i18n),
        Space::new().width(Length::Fill),
        carousel::badges(entry, i18n),
    ]
    .align_y(Alignment::Center)
    .spacing(spacing::SM);

    let mut layout = column![header, body, info].spacing(spacing::MD);
    if !entry.description.is_empty() {
        layout = layout.push(text(entry.description.clone()).size(typography::BODY));
    }

    container(layout)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

fn local_player<'a>(entry: &MediaEntry, state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let tracker = state.tracker(PlayerSlot::Modal);
    let frame = thumbnail::view(entry, state.thumbnails(), i18n, sizing::MODAL_PLAYER_HEIGHT);

    let toggle_label = if tracker.is_playing() {
        i18n.tr("modal-pause")
    } else {
        i18n.tr("modal-play")
    };
    let total = tracker
        .duration()
        .map_or_else(|| i18n.tr("modal-duration-unknown"), progress::format_time);
    let readout = format!("{} / {}", progress::format_time(tracker.position()), total);

    let controls = row![
        button(text(toggle_label).size(typography::BODY))
            .on_press_maybe(
                tracker
                    .duration()
                    .is_some()
                    .then_some(Message::TogglePlayback(PlayerSlot::Modal)),
            )
            .style(styles::button::primary),
        text(readout).size(typography::CAPTION),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center);

    column![
        container(frame).style(styles::container::stage),
        progress::view(PlayerSlot::Modal, tracker),
        controls,
    ]
    .spacing(spacing::XS)
    .into()
}

fn embed_panel<'a>(entry: &MediaEntry, state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let frame = thumbnail::view(entry, state.thumbnails(), i18n, sizing::MODAL_PLAYER_HEIGHT);

    let details = column![
        text(i18n.tr("modal-embed-heading")).size(typography::TITLE_SM),
        text(i18n.tr_with_args("modal-embed-source", &[("url", entry.source_uri.as_str())]))
            .size(typography::CAPTION),
        text(i18n.tr("modal-embed-hint")).size(typography::CAPTION),
    ]
    .spacing(spacing::XXS);

    column![
        container(frame).style(styles::container::stage),
        container(details)
            .padding(spacing::SM)
            .width(Length::Fill)
            .style(styles::container::placeholder),
    ]
    .spacing(spacing::XS)
    .into()
}
