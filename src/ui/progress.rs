// SPDX-License-Identifier: MPL-2.0
//! Clickable playback progress bar.
//!
//! The bar reports the pointer position as a ratio of its width while the
//! pointer hovers it; a press then seeks to the last reported ratio.

use crate::carousel::{Message, ProgressTracker};
use crate::diagnostics::PlayerSlot;
use crate::ui::design_tokens::sizing;
use crate::ui::styles;
use iced::widget::{container, mouse_area, progress_bar, responsive};
use iced::{mouse, Element, Length, Size};

/// Maps a pointer x offset on a bar of `width` to a seek ratio.
#[must_use]
pub fn pointer_ratio(x: f32, width: f32) -> f32 {
    if width <= 0.0 || !x.is_finite() {
        return 0.0;
    }
    (x / width).clamp(0.0, 1.0)
}

pub fn view<'a>(slot: PlayerSlot, tracker: &ProgressTracker) -> Element<'a, Message> {
    let percent = tracker.progress_percent() as f32;
    let seekable = tracker.duration().is_some();

    let bar = responsive(move |size: Size| -> Element<'a, Message> {
        let bar = container(
            progress_bar(0.0..=100.0, percent)
                .girth(sizing::PROGRESS_TRACK)
                .style(styles::progress::playback),
        )
        .width(Length::Fill)
        .center_y(Length::Fixed(sizing::PROGRESS_HIT));

        if !seekable {
            return bar.into();
        }

        let width = size.width;
        mouse_area(bar)
            .on_move(move |position| Message::SeekHover(slot, pointer_ratio(position.x, width)))
            .on_press(Message::SeekPressed(slot))
            .interaction(mouse::Interaction::Pointer)
            .into()
    });

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PROGRESS_HIT))
        .into()
}

/// Formats seconds as `MM:SS`, or `HH:MM:SS` past an hour.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
