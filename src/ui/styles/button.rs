// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (close gallery).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::LG),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Round arrow buttons drawn over the carousel.
///
/// Arrows stay pressable during a cool-down so they keep capturing presses
/// from the swipe surface underneath; `ready == false` only fades them out.
pub fn arrow(ready: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (alpha, text_alpha) = match (ready, status) {
            (false, _) | (_, button::Status::Disabled) => {
                (opacity::OVERLAY_SUBTLE, opacity::OVERLAY_MEDIUM)
            }
            (true, button::Status::Hovered) => (opacity::OVERLAY_HOVER, opacity::OPAQUE),
            (true, button::Status::Pressed) => (opacity::OVERLAY_PRESSED, opacity::OPAQUE),
            (true, button::Status::Active) => (opacity::OVERLAY_MEDIUM, opacity::OPAQUE),
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: Color {
                a: text_alpha,
                ..WHITE
            },
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Dot indicator; the active dot is wider and uses the brand color.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let idle = if theme.extended_palette().is_dark {
            palette::GRAY_700
        } else {
            palette::GRAY_200
        };
        let color = match (active, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => palette::GRAY_400,
            (false, _) => idle,
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Card in the grid: transparent surface with a hover outline.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: palette.background.base.text,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Plain text-like button (modal close, play/pause).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette.background.strong.color))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
