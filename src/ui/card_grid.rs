// SPDX-License-Identifier: MPL-2.0
//! Grid of entry cards below the carousel.
//!
//! Every card opens the modal for its entry.

use crate::carousel::{Message, State};
use crate::domain::media::MediaEntry;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{styles, thumbnail};
use iced::widget::{button, column, container, stack, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let cards = state
        .playlist()
        .iter()
        .enumerate()
        .map(|(index, entry)| card(index, entry, state, i18n));

    column![
        text(i18n.tr("grid-heading")).size(typography::TITLE_SM),
        Row::with_children(cards).spacing(spacing::MD).wrap(),
    ]
    .spacing(spacing::SM)
    .into()
}

fn card<'a>(index: usize, entry: &MediaEntry, state: &State, i18n: &I18n) -> Element<'a, Message> {
    let frame = thumbnail::view(entry, state.thumbnails(), i18n, sizing::CARD_THUMBNAIL_HEIGHT);

    let mut corner = Row::new().spacing(spacing::XXS);
    if !entry.badge_label.is_empty() {
        corner = corner.push(chip(entry.badge_label.clone()));
    }
    corner = corner.push(Space::new().width(Length::Fill));
    if !entry.duration_label.is_empty() {
        corner = corner.push(chip(entry.duration_label.clone()));
    }

    let preview = stack![frame, container(corner).padding(spacing::XXS)];

    let views = i18n.tr_with_args("carousel-views", &[("count", &entry.view_count.to_string())]);
    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(text(entry.title.clone()).size(typography::BODY));
    if !entry.meta.is_empty() {
        details = details.push(text(entry.meta.clone()).size(typography::CAPTION));
    }
    details = details.push(text(views).size(typography::CAPTION));

    button(
        column![preview, details]
            .spacing(spacing::XS)
            .align_x(Alignment::Start),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH))
    .padding(spacing::XS)
    .on_press(Message::OpenEntry(index))
    .style(styles::button::card)
    .into()
}

fn chip<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .padding([spacing::XXS / 2.0, spacing::XXS])
        .style(styles::container::badge)
        .into()
}
