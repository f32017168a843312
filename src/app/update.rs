// SPDX-License-Identifier: MPL-2.0
//! Update loop for the demo editor.

use iced::Task;

use crate::form::ImageParams;
use crate::ui::selector;

use super::{App, Message};

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Selector(message) => {
            match app.selector.update(message) {
                selector::Event::ValueChanged(coordinate) => {
                    app.status = Some(format!(
                        "Saved hotspot at {}%, {}%",
                        coordinate.x, coordinate.y
                    ));
                }
                selector::Event::None => {}
            }
            Task::none()
        }
        Message::OpenImageDialog => Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .set_title("Choose reference image")
                    .add_filter("Images", &["png", "jpg", "jpeg"])
                    .pick_file()
                    .await
                    .map(|file| file.path().to_path_buf())
            },
            Message::ImageDialogResult,
        ),
        Message::ImageDialogResult(Some(path)) => {
            app.image_field
                .set_params(Some(ImageParams::new(path.display().to_string())));
            app.status = None;
            Task::none()
        }
        Message::ImageDialogResult(None) => Task::none(),
        Message::ClearImage => {
            app.image_field.set_params(None);
            app.status = None;
            Task::none()
        }
    }
}
