// SPDX-License-Identifier: MPL-2.0
//! View composition: optional label and description above the click surface.

use iced::widget::{container, text, Canvas, Column, Stack};
use iced::{Alignment, Element, Length};

use crate::ui::theme;

use super::overlay::SurfaceOverlay;
use super::{Inner, Message, FALLBACK_SURFACE_HEIGHT, FALLBACK_SURFACE_WIDTH};

/// Wide images are scaled down to this width so the surface stays clickable
/// without scrolling. Percent math is unaffected by the scale.
const MAX_SURFACE_WIDTH: f32 = 640.0;

pub(super) fn render(inner: &Inner) -> Element<'static, Message> {
    let mut column = Column::new().spacing(8);

    if let Some(label) = inner.field.label.clone() {
        column = column.push(text(label).size(16));
    }
    if let Some(description) = inner.field.description.clone() {
        column = column.push(text(description).size(13).color(theme::muted_text_color()));
    }

    column.push(surface(inner)).into()
}

fn surface(inner: &Inner) -> Element<'static, Message> {
    let Some(image) = &inner.image else {
        return container(text("No image selected").color(theme::muted_text_color()))
            .width(Length::Fixed(FALLBACK_SURFACE_WIDTH))
            .height(Length::Fixed(FALLBACK_SURFACE_HEIGHT))
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .style(theme::no_image_style())
            .into();
    };

    let (width, height) = display_size(image.width, image.height);
    let marker = if inner.show_marker { inner.value } else { None };

    let stacked = Stack::new()
        .push(
            iced::widget::image(image.handle.clone())
                .width(Length::Fixed(width))
                .height(Length::Fixed(height)),
        )
        .push(
            Canvas::new(SurfaceOverlay { marker })
                .width(Length::Fixed(width))
                .height(Length::Fixed(height)),
        );

    container(stacked).style(theme::surface_style()).into()
}

fn display_size(width: f32, height: f32) -> (f32, f32) {
    if width <= MAX_SURFACE_WIDTH {
        (width, height)
    } else {
        let scale = MAX_SURFACE_WIDTH / width;
        (MAX_SURFACE_WIDTH, height * scale)
    }
}
