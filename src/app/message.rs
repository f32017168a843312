// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo editor.

use std::path::PathBuf;

use crate::ui::selector;

/// Runtime flags parsed by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Image to preload into the image field.
    pub image_path: Option<String>,
    /// Directory content-relative image paths resolve against. Defaults to
    /// the current working directory.
    pub content_dir: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward the
/// selector's messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Selector(selector::Message),
    /// Trigger the open file dialog for the image field.
    OpenImageDialog,
    /// Result from the open file dialog.
    ImageDialogResult(Option<PathBuf>),
    /// Clear the image field's value.
    ClearImage,
}
