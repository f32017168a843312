// SPDX-License-Identifier: MPL-2.0
//! Resolution of image field paths to fetchable locations.
//!
//! The image field stores a path relative to the content being edited. The
//! selector never interprets that string itself; it hands it to a resolver
//! so the hosting editor decides where content actually lives.

use std::path::{Path, PathBuf};

/// Maps an image field path to a location the renderer can load from.
pub trait ResolvePath {
    fn resolve(&self, path: &str) -> PathBuf;
}

/// Resolver rooted at the directory holding the content's media files.
/// Absolute paths pass through untouched.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    content_root: PathBuf,
}

impl ContentResolver {
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
        }
    }
}

impl ResolvePath for ContentResolver {
    fn resolve(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.content_root.join(candidate)
        }
    }
}
