// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo editor.

use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length};

use crate::ui::theme;

use super::{App, Message};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let toolbar = Row::new()
        .spacing(8)
        .push(button(text("Open image…")).on_press(Message::OpenImageDialog))
        .push(button(text("Clear image")).on_press(Message::ClearImage));

    let stored = *app.stored_value.borrow();
    let value_line: Element<'_, Message> = match stored {
        Some(coordinate) => text(format!(
            "Stored value: x = {}%, y = {}%",
            coordinate.x, coordinate.y
        ))
        .into(),
        None => text("Stored value: none")
            .color(theme::muted_text_color())
            .into(),
    };

    let validation_line: Element<'_, Message> = if app.selector.validate() {
        text("Valid").color(theme::success_text_color()).into()
    } else {
        text("Click the image to choose a position")
            .color(theme::error_text_color())
            .into()
    };

    let mut column = Column::new()
        .spacing(16)
        .push(text("Hotspot editor").size(22))
        .push(toolbar)
        .push(app.selector.view().map(Message::Selector))
        .push(value_line)
        .push(validation_line);

    if let Some(status) = &app.status {
        column = column.push(text(status.clone()).color(theme::muted_text_color()));
    }

    container(column)
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
