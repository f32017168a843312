// SPDX-License-Identifier: MPL-2.0
//! Constructor and view entrypoint for the selector facade.

use std::cell::RefCell;
use std::rc::Rc;

use iced::Element;

use crate::config::{Config, InitialValuePolicy};
use crate::error::{Error, Result};
use crate::form::paths::ResolvePath;
use crate::form::{FieldConfig, FormContext};

use super::{
    sync_with_image_field, view, Coordinate, CoordinateSelector, Inner, Message, SetValue,
    DEFAULT_COORDINATE,
};

impl CoordinateSelector {
    /// Bind a new selector to the image field referenced by `field`.
    ///
    /// The image field is a required collaborator: if `field.image_path`
    /// resolves to nothing, construction fails with
    /// [`Error::MissingImageField`] rather than producing a partially
    /// usable widget.
    pub fn new(
        form: &FormContext,
        field: FieldConfig,
        initial_value: Option<Coordinate>,
        mut set_value: SetValue,
        resolver: Rc<dyn ResolvePath>,
        config: &Config,
    ) -> Result<Self> {
        let image_field = form
            .find_image_field(&field.image_path)
            .ok_or_else(|| Error::MissingImageField(field.image_path.clone()))?;

        let value = match initial_value {
            Some(value) => Some(value.clamped()),
            None => match config.initial_value_policy() {
                InitialValuePolicy::CenterDefault => {
                    // Commit the default right away so the stored form value
                    // and the widget agree before the first click.
                    set_value(&field, DEFAULT_COORDINATE);
                    Some(DEFAULT_COORDINATE)
                }
                InitialValuePolicy::Unset => None,
            },
        };

        let inner = Rc::new(RefCell::new(Inner {
            field,
            value,
            image_field: image_field.clone(),
            resolver,
            set_value,
            rendered_path: None,
            image: None,
            no_image: true,
            show_marker: true,
            restore_marker_on_swap: config.restores_marker_on_image_swap(),
            image_revision: 0,
        }));

        // Subscribe directly on the field's own change list. A generic
        // field-following helper misses the first element of a repeating
        // list, so the raw queue is the reliable hook.
        let weak = Rc::downgrade(&inner);
        image_field.subscribe(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                sync_with_image_field(&inner);
            }
        }));

        if image_field.params().is_some() {
            sync_with_image_field(&inner);
        }

        Ok(Self { inner })
    }

    /// Render the selector.
    pub fn view(&self) -> Element<'static, Message> {
        view::render(&self.inner.borrow())
    }
}
