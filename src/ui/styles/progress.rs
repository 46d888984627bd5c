// SPDX-License-Identifier: MPL-2.0
//! Progress bar styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius,
};
use iced::widget::progress_bar;
use iced::{Background, Border, Color, Theme};

/// Thin playback bar over dark video surfaces.
pub fn playback(_theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..WHITE
        }),
        bar: Background::Color(palette::PRIMARY_500),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
    }
}
