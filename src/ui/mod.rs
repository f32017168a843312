// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`selector`] - The hotspot coordinate selector widget
//! - [`theme`] - Theme colors and styling helpers

pub mod selector;
pub mod theme;
