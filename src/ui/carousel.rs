// SPDX-License-Identifier: MPL-2.0
//! Carousel surface: current entry, arrows, counter, progress and dots.

use crate::carousel::{Message, State};
use crate::diagnostics::PlayerSlot;
use crate::domain::media::MediaEntry;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{progress, styles, thumbnail};
use iced::widget::{
    button, center, column, container, mouse_area, row, stack, text, tooltip, Row, Space,
};
use iced::{Alignment, Element, Length};

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let entry = state.current_entry();
    let frame = thumbnail::view(entry, state.thumbnails(), i18n, sizing::CAROUSEL_HEIGHT);

    let overlay = column![
        top_bar(state, entry, i18n),
        arrows(state, i18n),
        caption(entry, i18n),
        progress::view(PlayerSlot::Preview, state.tracker(PlayerSlot::Preview)),
    ]
    .spacing(spacing::XS)
    .padding(spacing::MD)
    .height(Length::Fixed(sizing::CAROUSEL_HEIGHT));

    // The whole stage is the swipe surface; buttons and the progress bar
    // capture their own presses.
    let surface = mouse_area(
        container(stack![frame, overlay])
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
            .clip(true)
            .style(styles::container::stage),
    )
    .on_move(Message::SurfaceMoved)
    .on_press(Message::SurfacePressed)
    .on_release(Message::SurfaceReleased)
    .on_exit(Message::SurfaceExited);

    column![surface, dots(state, i18n)]
        .spacing(spacing::SM)
        .align_x(Alignment::Center)
        .into()
}

fn top_bar<'a>(state: &State, entry: &MediaEntry, i18n: &I18n) -> Element<'a, Message> {
    let counter = i18n.tr_with_args(
        "carousel-counter",
        &[
            ("current", &(state.current_index() + 1).to_string()),
            ("total", &state.playlist().len().to_string()),
        ],
    );

    row![
        badges(entry, i18n),
        Space::new().width(Length::Fill),
        badge(counter, false)
    ]
        .align_y(Alignment::Center)
        .into()
}

fn arrows<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    // Presses during the cool-down still land on the arrow and are dropped
    // by the navigation guard; a disabled button would let them fall through
    // to the swipe surface as a tap.
    let ready = !state.is_transitioning();

    let arrow = |glyph: &'static str, label: String, message: Message| {
        tooltip(
            button(center(text(glyph).size(typography::TITLE_MD)))
            .width(Length::Fixed(sizing::ARROW_BUTTON))
            .height(Length::Fixed(sizing::ARROW_BUTTON))
            .on_press(message)
            .style(styles::button::arrow(ready)),
            text(label).size(typography::CAPTION),
            tooltip::Position::Bottom,
        )
    };

    row![
        arrow("‹", i18n.tr("carousel-previous"), Message::Previous),
        Space::new().width(Length::Fill),
        arrow("›", i18n.tr("carousel-next"), Message::Next),
    ]
    .align_y(Alignment::Center)
    .height(Length::Fill)
    .into()
}

fn caption<'a>(entry: &MediaEntry, i18n: &I18n) -> Element<'a, Message> {
    column![
        text(entry.title.clone()).size(typography::TITLE_MD),
        details(entry, i18n),
    ]
    .spacing(spacing::XXS)
    .into()
}

/// Meta line, view count and duration label of an entry.
pub(crate) fn details<'a>(entry: &MediaEntry, i18n: &I18n) -> Element<'a, Message> {
    Row::with_children(
        detail_labels(entry, i18n)
            .into_iter()
            .map(|label| text(label).size(typography::CAPTION).into()),
    )
    .spacing(spacing::SM)
    .into()
}

/// The entry's own badge plus the embedded marker for external entries.
pub(crate) fn badges<'a>(entry: &MediaEntry, i18n: &I18n) -> Element<'a, Message> {
    Row::with_children(
        badge_labels(entry, i18n)
            .into_iter()
            .map(|(label, accent)| badge(label, accent)),
    )
    .spacing(spacing::XS)
    .into()
}

fn detail_labels(entry: &MediaEntry, i18n: &I18n) -> Vec<String> {
    let mut labels = Vec::with_capacity(3);
    if !entry.meta.is_empty() {
        labels.push(entry.meta.clone());
    }
    labels.push(i18n.tr_with_args("carousel-views", &[("count", &entry.view_count.to_string())]));
    if !entry.duration_label.is_empty() {
        labels.push(entry.duration_label.clone());
    }
    labels
}

/// Badge texts, flagged when drawn with the accent style.
fn badge_labels(entry: &MediaEntry, i18n: &I18n) -> Vec<(String, bool)> {
    let mut labels = Vec::with_capacity(2);
    if !entry.badge_label.is_empty() {
        labels.push((entry.badge_label.clone(), false));
    }
    if !entry.is_local() {
        labels.push((i18n.tr("carousel-embedded-badge"), true));
    }
    labels
}

fn badge<'a>(label: String, accent: bool) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(if accent {
            styles::container::accent_badge
        } else {
            styles::container::badge
        })
        .into()
}

/// One dot per entry; pressing a dot jumps straight to it.
fn dots<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let current = state.current_index();

    let dots = (0..state.playlist().len()).map(|index| {
        let active = index == current;
        let width = if active {
            sizing::DOT_ACTIVE
        } else {
            sizing::DOT
        };
        tooltip(
            button(Space::new())
                .width(Length::Fixed(width))
                .height(Length::Fixed(sizing::DOT))
                .padding(0)
                .on_press(Message::JumpTo(index))
                .style(styles::button::dot(active)),
            text(i18n.tr_with_args("carousel-go-to", &[("index", &(index + 1).to_string())]))
                .size(typography::CAPTION),
            tooltip::Position::Top,
        )
        .into()
    });

    Row::with_children(dots)
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .into()
}
