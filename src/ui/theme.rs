// SPDX-License-Identifier: MPL-2.0
//! Theme colors and styling helpers.

use iced::widget::container;
use iced::{Background, Border, Color, Theme};

pub fn marker_fill_color() -> Color {
    Color::from_rgb(0.12, 0.46, 0.95)
}

pub fn marker_border_color() -> Color {
    Color::WHITE
}

pub fn muted_text_color() -> Color {
    Color::from_rgb(0.45, 0.45, 0.45)
}

pub fn success_text_color() -> Color {
    Color::from_rgb(0.1, 0.55, 0.25)
}

pub fn error_text_color() -> Color {
    Color::from_rgb(0.75, 0.15, 0.15)
}

/// Style for the placeholder surface shown while no image is selected.
pub fn no_image_style() -> impl Fn(&Theme) -> container::Style {
    |_theme| container::Style {
        background: Some(Background::Color(Color::from_rgb(0.94, 0.94, 0.94))),
        border: Border {
            color: Color::from_rgb(0.75, 0.75, 0.75),
            width: 1.0,
            radius: 4.0.into(),
        },
        ..container::Style::default()
    }
}

/// Style for the clickable image surface.
pub fn surface_style() -> impl Fn(&Theme) -> container::Style {
    |_theme| container::Style {
        border: Border {
            color: Color::from_rgb(0.85, 0.85, 0.85),
            width: 1.0,
            radius: 2.0.into(),
        },
        ..container::Style::default()
    }
}
