// SPDX-License-Identifier: MPL-2.0
//! Form-side collaborators the selector is constructed against.
//!
//! The hosting editor owns a tree of named fields. The selector never owns
//! the image field it overlays; it resolves it from the [`FormContext`] by a
//! slash-separated path taken from its [`FieldConfig`] and subscribes to its
//! change notifications.

mod image_field;
pub mod paths;

pub use image_field::{ImageField, ImageFieldHandle, ImageParams};

/// Configuration the hosting form supplies for one selector instance.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Slash-separated path locating the sibling image field in the form.
    /// Leading `../` segments are accepted; lookup always starts at the
    /// form root, so parent hops carried over from list contexts are inert.
    pub image_path: String,
    pub label: Option<String>,
    pub description: Option<String>,
}

/// A node in the form's field tree. Only the field kinds the selector
/// interacts with are modeled.
#[derive(Debug, Clone)]
pub enum FieldNode {
    Group {
        name: String,
        children: Vec<FieldNode>,
    },
    Image {
        name: String,
        handle: ImageFieldHandle,
    },
}

impl FieldNode {
    fn name(&self) -> &str {
        match self {
            FieldNode::Group { name, .. } => name,
            FieldNode::Image { name, .. } => name,
        }
    }
}

/// The hosting form's field registry.
#[derive(Debug, Default)]
pub struct FormContext {
    roots: Vec<FieldNode>,
}

impl FormContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image field at the form root and return its shared handle.
    pub fn add_image_field(&mut self, name: impl Into<String>) -> ImageFieldHandle {
        let handle = ImageFieldHandle::new();
        self.roots.push(FieldNode::Image {
            name: name.into(),
            handle: handle.clone(),
        });
        handle
    }

    /// Register a group of fields at the form root.
    pub fn add_group(&mut self, name: impl Into<String>, children: Vec<FieldNode>) {
        self.roots.push(FieldNode::Group {
            name: name.into(),
            children,
        });
    }

    /// Resolve an image field by slash-separated path, e.g. `"image"` or
    /// `"media/image"`. Returns `None` when no image field lives at the path.
    pub fn find_image_field(&self, path: &str) -> Option<ImageFieldHandle> {
        let mut segments = path
            .split('/')
            .filter(|s| !s.is_empty() && *s != "..")
            .peekable();

        let mut nodes = &self.roots;
        loop {
            let segment = segments.next()?;
            let node = nodes.iter().find(|n| n.name() == segment)?;
            match node {
                FieldNode::Image { handle, .. } => {
                    // The path must be exhausted at the field itself.
                    return if segments.peek().is_none() {
                        Some(handle.clone())
                    } else {
                        None
                    };
                }
                FieldNode::Group { children, .. } => {
                    nodes = children;
                }
            }
        }
    }
}
