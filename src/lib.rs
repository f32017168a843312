// SPDX-License-Identifier: MPL-2.0
//! `iced_hotspot` is a click-to-place coordinate picker widget for content
//! editors, built with the Iced GUI framework.
//!
//! The widget overlays a reference image supplied by a sibling form field and
//! lets an author mark a hotspot location as an `{x, y}` percentage pair. It
//! demonstrates an explicit observer-list binding to the image field, user
//! preference management, and modular UI design.

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod ui;

pub use config::InitialValuePolicy;
pub use error::{Error, Result};
pub use form::{FieldConfig, FormContext, ImageFieldHandle, ImageParams};
pub use ui::selector::{Coordinate, CoordinateSelector};
