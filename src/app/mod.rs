// SPDX-License-Identifier: MPL-2.0
//! Demo editor application hosting one coordinate selector.
//!
//! The `App` plays the form-host role: it owns the field registry with a
//! single image field, constructs the selector bound to that field, stores
//! the value the selector commits, and drives the image field from an open
//! file dialog. This file keeps the wiring between field, selector, and
//! stored value in one place so the host contract is easy to audit.

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

use iced::{window, Element, Task};

use crate::config;
use crate::form::paths::ContentResolver;
use crate::form::{FieldConfig, FormContext, ImageFieldHandle, ImageParams};
use crate::ui::selector::{Coordinate, CoordinateSelector};

pub const WINDOW_DEFAULT_WIDTH: u32 = 760;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 620;

/// Root Iced application state bridging the form host and the selector.
pub struct App {
    form: FormContext,
    image_field: ImageFieldHandle,
    selector: CoordinateSelector,
    /// The form's stored value, written through the selector's commit
    /// callback.
    stored_value: Rc<RefCell<Option<Coordinate>>>,
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("form", &self.form)
            .field("stored_value", &*self.stored_value.borrow())
            .field("selector", &self.selector)
            .finish()
    }
}

impl App {
    /// Builds the form host: registers the image field, wires the selector's
    /// commit callback into the stored value, and preloads an image when one
    /// was passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let app_config = config::load().unwrap_or_default();

        let content_dir = flags
            .content_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let mut form = FormContext::new();
        let image_field = form.add_image_field("image");

        let stored_value: Rc<RefCell<Option<Coordinate>>> = Rc::default();
        let sink = stored_value.clone();

        let selector = CoordinateSelector::new(
            &form,
            FieldConfig {
                image_path: "image".into(),
                label: Some("Hotspot position".into()),
                description: Some(
                    "Click on the reference image to place the hotspot.".into(),
                ),
            },
            None,
            Box::new(move |_field, value| *sink.borrow_mut() = Some(value)),
            Rc::new(ContentResolver::new(content_dir)),
            &app_config,
        )
        .expect("image field registered above");

        let app = App {
            form,
            image_field,
            selector,
            stored_value,
            status: None,
        };

        if let Some(path) = flags.image_path {
            app.image_field.set_params(Some(ImageParams::new(path)));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Hotspot Editor")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

/// Builds the window settings
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}
