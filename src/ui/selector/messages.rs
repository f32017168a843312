// SPDX-License-Identifier: MPL-2.0
//! Selector message/event types re-exported by the facade.

use iced::{Point, Rectangle};

use super::Coordinate;

/// Messages published by the selector's widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The author clicked the image surface. `position` is the cursor
    /// position relative to the surface origin; `bounds` is the surface
    /// rectangle the position was measured against.
    SurfaceClicked { position: Point, bounds: Rectangle },
}

/// Events propagated to the parent for side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// A new coordinate was stored and committed through `set_value`.
    ValueChanged(Coordinate),
}
