// SPDX-License-Identifier: MPL-2.0
//! Hotspot coordinate selector widget.
//!
//! The selector overlays a reference image owned by a sibling form field and
//! turns clicks on that surface into an `{x, y}` percentage pair. It follows
//! the "state down, messages up" pattern: the facade owns the widget state,
//! `update` consumes [`Message`]s published by the click surface and emits an
//! [`Event`] for the parent, and the committed value flows to the hosting
//! form through the `set_value` callback supplied at construction.
//!
//! The selector's inner state is shared behind an `Rc` so the image field's
//! change listener can reach it. The listener holds only a weak reference;
//! once the selector is removed, notifications become no-ops.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::form::paths::ResolvePath;
use crate::form::{FieldConfig, ImageFieldHandle};

mod component;
mod messages;
mod overlay;
mod percent;
mod view;

pub use messages::{Event, Message};
pub use percent::{fix_percent, MARKER_CORRECTION};

/// The stored value: a hotspot position as integer percentages of the image
/// surface, both components in `0..=100`. Created and replaced atomically as
/// a pair; never partially set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: u8,
    pub y: u8,
}

impl Coordinate {
    /// Clamp both components into `0..=100`. Applied before storage so the
    /// range invariant holds even for values re-entering from persistence.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.min(100),
            y: self.y.min(100),
        }
    }
}

/// Coordinate applied when construction finds no initial value and the
/// centered-default policy is active.
pub const DEFAULT_COORDINATE: Coordinate = Coordinate { x: 45, y: 45 };

/// Callback through which the selector reports its value to the owning form.
pub type SetValue = Box<dyn FnMut(&FieldConfig, Coordinate)>;

/// Surface size used while the image's own dimensions are unknown.
pub(crate) const FALLBACK_SURFACE_WIDTH: f32 = 480.0;
pub(crate) const FALLBACK_SURFACE_HEIGHT: f32 = 270.0;

/// Image currently shown on the click surface.
pub(crate) struct RenderedImage {
    pub handle: iced::widget::image::Handle,
    pub width: f32,
    pub height: f32,
}

pub(crate) struct Inner {
    field: FieldConfig,
    value: Option<Coordinate>,
    image_field: ImageFieldHandle,
    resolver: Rc<dyn ResolvePath>,
    set_value: SetValue,
    /// Last path applied to the surface, kept to skip redundant reloads.
    rendered_path: Option<String>,
    image: Option<RenderedImage>,
    no_image: bool,
    /// Whether the marker is drawn when a value is present. Cleared on image
    /// swap when the restore-marker policy is off.
    show_marker: bool,
    restore_marker_on_swap: bool,
    /// Bumped every time the rendered image is replaced.
    image_revision: u64,
}

/// The widget facade handed to the hosting editor.
pub struct CoordinateSelector {
    inner: Rc<RefCell<Inner>>,
}

impl std::fmt::Debug for CoordinateSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("CoordinateSelector")
            .field("value", &inner.value)
            .field("rendered_path", &inner.rendered_path)
            .field("no_image", &inner.no_image)
            .finish()
    }
}

impl CoordinateSelector {
    /// Update the widget state and emit an [`Event`] for the parent.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::SurfaceClicked { position, bounds } => {
                if bounds.width <= 0.0 || bounds.height <= 0.0 {
                    return Event::None;
                }

                let inner = &mut *self.inner.borrow_mut();
                let coordinate = percent::click_to_percent(position, bounds.size());
                inner.value = Some(coordinate);
                inner.show_marker = true;
                (inner.set_value)(&inner.field, coordinate);
                Event::ValueChanged(coordinate)
            }
        }
    }

    /// Currently stored coordinate, if any.
    pub fn value(&self) -> Option<Coordinate> {
        self.inner.borrow().value
    }

    /// True iff a coordinate is stored. Storage clamps on entry, so a stored
    /// pair is always within range.
    pub fn validate(&self) -> bool {
        self.inner.borrow().value.is_some()
    }

    /// Whether an image is currently rendered on the surface.
    pub fn has_image(&self) -> bool {
        self.inner.borrow().image.is_some()
    }

    /// Whether the surface is in its "no image" display mode.
    pub fn is_no_image(&self) -> bool {
        self.inner.borrow().no_image
    }

    /// Whether the marker would be drawn right now.
    pub fn marker_visible(&self) -> bool {
        let inner = self.inner.borrow();
        inner.value.is_some() && inner.show_marker
    }

    /// Path of the image currently applied to the surface.
    pub fn rendered_path(&self) -> Option<String> {
        self.inner.borrow().rendered_path.clone()
    }

    /// Revision counter bumped on every image replacement. Repeated change
    /// notifications for an unchanged path leave it untouched.
    pub fn image_revision(&self) -> u64 {
        self.inner.borrow().image_revision
    }

    /// Tear the widget down. Dropping the shared state silences the change
    /// listener registered on the image field.
    pub fn remove(self) {
        drop(self.inner);
    }
}

impl Inner {
    fn clear_image(&mut self) {
        self.rendered_path = None;
        self.image = None;
        self.no_image = true;
    }

    fn apply_image(&mut self, path: &str) {
        if self.rendered_path.as_deref() == Some(path) {
            self.no_image = false;
            return;
        }
        self.rendered_path = Some(path.to_string());

        let resolved = self.resolver.resolve(path);
        // The probe only sizes the surface; an unreadable file is not an
        // error, the surface just falls back to a default aspect.
        let (width, height) = image_rs::image_dimensions(&resolved)
            .map(|(w, h)| (w as f32, h as f32))
            .unwrap_or((FALLBACK_SURFACE_WIDTH, FALLBACK_SURFACE_HEIGHT));

        self.image = Some(RenderedImage {
            handle: iced::widget::image::Handle::from_path(&resolved),
            width,
            height,
        });
        self.no_image = false;
        self.image_revision += 1;

        if !self.restore_marker_on_swap {
            self.show_marker = false;
        }
    }
}

/// Re-read the bound image field and bring the surface in line with it.
/// Called from the field's change listener and once at construction.
pub(crate) fn sync_with_image_field(inner: &Rc<RefCell<Inner>>) {
    let params = inner.borrow().image_field.params();
    let mut inner = inner.borrow_mut();
    match params {
        None => inner.clear_image(),
        Some(params) => inner.apply_image(&params.path),
    }
}
