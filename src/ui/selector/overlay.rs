// SPDX-License-Identifier: MPL-2.0
//! Canvas overlay drawn on top of the reference image: captures clicks and
//! renders the hotspot marker at its percentage position.

use crate::ui::theme;

use super::percent::MARKER_CORRECTION;
use super::{Coordinate, Message};

const MARKER_RADIUS: f32 = 5.0;
const MARKER_BORDER_WIDTH: f32 = 2.0;

/// Canvas program for the clickable surface.
pub struct SurfaceOverlay {
    /// Marker position, when one should be drawn.
    pub marker: Option<Coordinate>,
}

impl iced::widget::canvas::Program<Message> for SurfaceOverlay {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        if let iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) =
            event
        {
            if let Some(position) = cursor.position_in(bounds) {
                return Some(
                    Action::publish(Message::SurfaceClicked { position, bounds }).and_capture(),
                );
            }
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<iced::widget::canvas::Geometry> {
        use iced::widget::canvas::{Frame, Path, Stroke};

        let mut frame = Frame::new(renderer, bounds.size());

        if let Some(marker) = self.marker {
            // The stored percentages describe the marker's top-left corner;
            // shifting by the correction puts the dot center on the point
            // the author clicked.
            let center = iced::Point::new(
                f32::from(marker.x) / 100.0 * bounds.width + MARKER_CORRECTION,
                f32::from(marker.y) / 100.0 * bounds.height + MARKER_CORRECTION,
            );

            let dot = Path::circle(center, MARKER_RADIUS);
            frame.fill(&dot, theme::marker_fill_color());
            frame.stroke(
                &dot,
                Stroke::default()
                    .with_width(MARKER_BORDER_WIDTH)
                    .with_color(theme::marker_border_color()),
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> iced::mouse::Interaction {
        if cursor.is_over(bounds) {
            iced::mouse::Interaction::Crosshair
        } else {
            iced::mouse::Interaction::default()
        }
    }
}
