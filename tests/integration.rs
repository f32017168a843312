// SPDX-License-Identifier: MPL-2.0
use std::cell::RefCell;
use std::rc::Rc;

use iced_hotspot::config::{self, Config, InitialValuePolicy};
use iced_hotspot::form::paths::ContentResolver;
use iced_hotspot::ui::selector::Message;
use iced_hotspot::{Coordinate, CoordinateSelector, Error, FieldConfig, FormContext, ImageParams};
use tempfile::tempdir;

fn selector_for(
    form: &FormContext,
    image_path: &str,
    config: &Config,
) -> (CoordinateSelector, Rc<RefCell<Option<Coordinate>>>) {
    let stored: Rc<RefCell<Option<Coordinate>>> = Rc::default();
    let sink = stored.clone();

    let selector = CoordinateSelector::new(
        form,
        FieldConfig {
            image_path: image_path.into(),
            label: Some("Hotspot position".into()),
            description: Some("Click to place the hotspot".into()),
        },
        None,
        Box::new(move |_field, value| *sink.borrow_mut() = Some(value)),
        Rc::new(ContentResolver::new("/content")),
        config,
    )
    .expect("selector construction");

    (selector, stored)
}

#[test]
fn test_click_commits_value_to_the_form() {
    let config = Config {
        initial_value: Some(InitialValuePolicy::Unset),
        restore_marker_on_image_swap: Some(true),
    };

    let mut form = FormContext::new();
    let image_field = form.add_image_field("image");
    let (mut selector, stored) = selector_for(&form, "image", &config);

    assert!(!selector.validate());
    assert_eq!(*stored.borrow(), None);

    image_field.set_params(Some(ImageParams::new("images/reference.png")));

    selector.update(Message::SurfaceClicked {
        position: iced::Point::new(105.0, 55.0),
        bounds: iced::Rectangle::new(iced::Point::ORIGIN, iced::Size::new(200.0, 100.0)),
    });

    assert!(selector.validate());
    assert_eq!(*stored.borrow(), Some(Coordinate { x: 50, y: 50 }));
}

#[test]
fn test_image_field_notifications_drive_display_mode() {
    let config = Config::default();

    let mut form = FormContext::new();
    let image_field = form.add_image_field("image");
    let (selector, _stored) = selector_for(&form, "image", &config);

    assert!(selector.is_no_image());

    image_field.set_params(Some(ImageParams::new("images/a.png")));
    assert!(selector.has_image());
    assert_eq!(selector.image_revision(), 1);

    // Repeated notification with the same path replaces nothing.
    image_field.set_params(Some(ImageParams::new("images/a.png")));
    assert_eq!(selector.image_revision(), 1);

    image_field.set_params(None);
    assert!(selector.is_no_image());

    image_field.set_params(Some(ImageParams::new("images/a.png")));
    assert!(selector.has_image());
    assert_eq!(selector.image_revision(), 2);
}

#[test]
fn test_selector_resolves_nested_field_paths() {
    let config = Config::default();

    let mut form = FormContext::new();
    let handle = iced_hotspot::ImageFieldHandle::new();
    form.add_group(
        "media",
        vec![iced_hotspot::form::FieldNode::Image {
            name: "image".into(),
            handle: handle.clone(),
        }],
    );

    let (selector, _stored) = selector_for(&form, "../media/image", &config);

    handle.set_params(Some(ImageParams::new("images/a.png")));
    assert!(selector.has_image());
}

#[test]
fn test_missing_image_field_is_fatal() {
    let form = FormContext::new();

    let result = CoordinateSelector::new(
        &form,
        FieldConfig {
            image_path: "image".into(),
            label: None,
            description: None,
        },
        None,
        Box::new(|_, _| {}),
        Rc::new(ContentResolver::new("/content")),
        &Config::default(),
    );

    assert!(matches!(result, Err(Error::MissingImageField(_))));
}

#[test]
fn test_policy_change_via_config_file() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: centered default
    let initial_config = Config {
        initial_value: Some(InitialValuePolicy::CenterDefault),
        restore_marker_on_image_swap: Some(true),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");

    let mut form = FormContext::new();
    form.add_image_field("image");
    let (selector, stored) = selector_for(&form, "image", &loaded);
    assert_eq!(selector.value(), Some(Coordinate { x: 45, y: 45 }));
    assert_eq!(*stored.borrow(), Some(Coordinate { x: 45, y: 45 }));

    // 2. Change config to leave the value unset
    let unset_config = Config {
        initial_value: Some(InitialValuePolicy::Unset),
        restore_marker_on_image_swap: Some(true),
    };
    config::save_to_path(&unset_config, &temp_config_file_path)
        .expect("Failed to write unset config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load unset config from path");

    let mut form = FormContext::new();
    form.add_image_field("image");
    let (selector, stored) = selector_for(&form, "image", &loaded);
    assert_eq!(selector.value(), None);
    assert_eq!(*stored.borrow(), None);

    dir.close().expect("Failed to close temporary directory");
}
