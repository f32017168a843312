// SPDX-License-Identifier: MPL-2.0
//! The sibling image field the selector overlays.
//!
//! Change notification is an explicit list of zero-argument listeners on the
//! field itself. Subscribers push directly onto that list; the generic
//! field-following helpers of hosting frameworks are known to miss the first
//! element of a repeating list, so the raw queue is the contract here.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The image field's value: a content-relative path to the chosen image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageParams {
    pub path: String,
}

impl ImageParams {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

type ChangeListener = Box<dyn FnMut()>;

/// An externally managed field holding an image reference and the listener
/// queue fired whenever that reference changes.
pub struct ImageField {
    params: Option<ImageParams>,
    changes: Vec<ChangeListener>,
}

impl fmt::Debug for ImageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageField")
            .field("params", &self.params)
            .field("listeners", &self.changes.len())
            .finish()
    }
}

/// Shared handle to an [`ImageField`]. The form owns the field; the selector
/// and the hosting editor each hold clones of the handle.
#[derive(Clone)]
pub struct ImageFieldHandle(Rc<RefCell<ImageField>>);

impl fmt::Debug for ImageFieldHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0.borrow(), f)
    }
}

impl Default for ImageFieldHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageFieldHandle {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(ImageField {
            params: None,
            changes: Vec::new(),
        })))
    }

    /// Current value of the field, if any.
    pub fn params(&self) -> Option<ImageParams> {
        self.0.borrow().params.clone()
    }

    /// Replace the field's value and fire every change listener.
    pub fn set_params(&self, params: Option<ImageParams>) {
        self.0.borrow_mut().params = params;
        self.notify();
    }

    /// Push a listener directly onto the field's notification queue.
    pub fn subscribe(&self, listener: ChangeListener) {
        self.0.borrow_mut().changes.push(listener);
    }

    /// Whether two handles refer to the same underlying field.
    pub fn is_same_field(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn notify(&self) {
        // Listeners are moved out for the duration of the callbacks so they
        // can read the field (or subscribe) without hitting a live borrow.
        let mut listeners = std::mem::take(&mut self.0.borrow_mut().changes);
        for listener in listeners.iter_mut() {
            listener();
        }
        let mut field = self.0.borrow_mut();
        let added_during_notify = std::mem::take(&mut field.changes);
        field.changes = listeners;
        field.changes.extend(added_during_notify);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_params_fires_every_listener() {
        let field = ImageFieldHandle::new();
        let hits = Rc::new(RefCell::new(0));

        for _ in 0..3 {
            let hits = hits.clone();
            field.subscribe(Box::new(move || *hits.borrow_mut() += 1));
        }

        field.set_params(Some(ImageParams::new("images/cat.png")));
        assert_eq!(*hits.borrow(), 3);

        field.set_params(None);
        assert_eq!(*hits.borrow(), 6);
    }

    #[test]
    fn listener_can_read_params_during_notification() {
        let field = ImageFieldHandle::new();
        let seen = Rc::new(RefCell::new(None));

        let reader = field.clone();
        let seen_by_listener = seen.clone();
        field.subscribe(Box::new(move || {
            *seen_by_listener.borrow_mut() = reader.params();
        }));

        field.set_params(Some(ImageParams::new("a.png")));
        assert_eq!(*seen.borrow(), Some(ImageParams::new("a.png")));
    }

    #[test]
    fn listener_subscribed_during_notification_survives() {
        let field = ImageFieldHandle::new();
        let hits = Rc::new(RefCell::new(0));

        let subscriber = field.clone();
        let late_hits = hits.clone();
        field.subscribe(Box::new(move || {
            let late_hits = late_hits.clone();
            subscriber.subscribe(Box::new(move || *late_hits.borrow_mut() += 1));
        }));

        field.set_params(Some(ImageParams::new("a.png")));
        // The late listener fires from the second notification on.
        field.set_params(Some(ImageParams::new("b.png")));
        assert_eq!(*hits.borrow(), 1);
    }
}
