// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page scrolls vertically: notice banner, carousel, card grid and the
//! optional close button. The modal is layered over all of it.

use super::Message;
use crate::carousel::{self, State};
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{card_grid, carousel as carousel_view, modal, styles};
use iced::widget::{button, column, container, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub carousel: &'a State,
    /// i18n key of a startup warning, if any.
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(carousel_view::view(ctx.carousel, ctx.i18n))
        .push(card_grid::view(ctx.carousel, ctx.i18n));

    if ctx.carousel.is_closable() {
        page = page.push(
            container(
                button(text(ctx.i18n.tr("gallery-close")).size(typography::BODY))
                    .on_press(carousel::Message::CloseGallery)
                    .style(styles::button::ghost),
            )
            .center_x(Length::Fill),
        );
    }

    let showcase: Element<'_, carousel::Message> = scrollable(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();
    let showcase = modal::with_modal(showcase, ctx.carousel, ctx.i18n).map(Message::Carousel);

    match ctx.notice {
        Some(key) => column![notice_banner(ctx.i18n, key), showcase].into(),
        None => showcase,
    }
}

fn notice_banner<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    container(
        row![
            text(i18n.tr(key)).size(typography::BODY),
            Space::new().width(Length::Fill),
            button(text(i18n.tr("notification-dismiss")).size(typography::CAPTION))
                .on_press(Message::DismissNotice)
                .style(styles::button::ghost),
        ]
        .spacing(spacing::SM)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::LG])
    .style(styles::container::accent_badge)
    .into()
}
