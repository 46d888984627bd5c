// SPDX-License-Identifier: MPL-2.0
//! Thumbnail rendering shared by the carousel, the card grid and the modal.

use crate::domain::media::{MediaEntry, Orientation};
use crate::i18n::I18n;
use crate::media::{ThumbnailCache, ThumbnailState};
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::{center, container, image, text};
use iced::{ContentFit, Degrees, Element, Length, Radians, Rotation};

/// What can be drawn for an entry right now.
#[derive(Debug, Clone)]
pub enum Source {
    Image(image::Handle),
    /// Probe still running.
    Loading,
    Unavailable,
}

/// Picks the drawable for `entry`.
///
/// Local entries use their decoded first frame. External entries use the
/// thumbnail file resolved when the playlist was loaded; remote locators are
/// not fetched.
#[must_use]
pub fn source(entry: &MediaEntry, cache: &ThumbnailCache) -> Source {
    if entry.is_local() {
        return match cache.peek(entry.id) {
            Some(ThumbnailState::Ready(handle)) => Source::Image(handle.clone()),
            Some(ThumbnailState::Unavailable) => Source::Unavailable,
            None => Source::Loading,
        };
    }

    match &entry.thumbnail_file {
        Some(path) => Source::Image(image::Handle::from_path(path)),
        None => Source::Unavailable,
    }
}

/// Rotation applied to a frame; vertical entries are turned a quarter.
#[must_use]
pub fn rotation(orientation: Orientation) -> Rotation {
    Rotation::Solid(Radians::from(Degrees(orientation.rotation_degrees())))
}

pub fn view<'a, Message: 'a>(
    entry: &MediaEntry,
    cache: &ThumbnailCache,
    i18n: &I18n,
    height: f32,
) -> Element<'a, Message> {
    match source(entry, cache) {
        Source::Image(handle) => image(handle)
            .content_fit(ContentFit::Cover)
            .rotation(rotation(entry.orientation))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into(),
        Source::Loading => placeholder(i18n.tr("carousel-loading-thumbnail"), height),
        Source::Unavailable => placeholder(i18n.tr("carousel-no-thumbnail"), height),
    }
}

fn placeholder<'a, Message: 'a>(label: String, height: f32) -> Element<'a, Message> {
    container(center(text(label).size(typography::CAPTION)))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(styles::container::placeholder)
        .into()
}
