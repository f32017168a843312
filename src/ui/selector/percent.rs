// SPDX-License-Identifier: MPL-2.0
//! Click-to-percentage conversion.

use iced::{Point, Size};

use super::Coordinate;

/// Fixed correction for the marker's half-size, in logical pixels. Clicks
/// are shifted by this amount per axis so the marker center lands on the
/// click point, and the drawn marker is shifted back by the same amount.
pub const MARKER_CORRECTION: f32 = 5.0;

/// Convert a raw percentage into the stored integer form: truncate toward
/// zero first, then clamp to `[0, 100]`. The order matters — clamping before
/// truncation would round values like 100.6 differently.
pub fn fix_percent(value: f32) -> u8 {
    let truncated = value.trunc();
    (truncated as i64).clamp(0, 100) as u8
}

/// Convert a click at `position` (relative to the surface origin) on a
/// surface of `size` into a coordinate pair.
pub fn click_to_percent(position: Point, size: Size) -> Coordinate {
    let rel_x = position.x - MARKER_CORRECTION;
    let rel_y = position.y - MARKER_CORRECTION;

    Coordinate {
        x: fix_percent(rel_x / size.width * 100.0),
        y: fix_percent(rel_y / size.height * 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_percent_clamps_negative_to_zero() {
        assert_eq!(fix_percent(-5.0), 0);
        assert_eq!(fix_percent(-0.4), 0);
    }

    #[test]
    fn fix_percent_clamps_overflow_to_hundred() {
        assert_eq!(fix_percent(150.0), 100);
        assert_eq!(fix_percent(100.6), 100);
    }

    #[test]
    fn fix_percent_truncates_instead_of_rounding() {
        assert_eq!(fix_percent(33.9), 33);
        assert_eq!(fix_percent(0.9), 0);
        assert_eq!(fix_percent(99.99), 99);
    }

    #[test]
    fn fix_percent_handles_non_finite_input() {
        assert_eq!(fix_percent(f32::NAN), 0);
        assert_eq!(fix_percent(f32::INFINITY), 100);
        assert_eq!(fix_percent(f32::NEG_INFINITY), 0);
    }

    #[test]
    fn click_at_surface_center_maps_to_fifty_fifty() {
        // Cursor at (105, 55) relative to a 200x100 surface: the marker
        // correction brings it to (100, 50), i.e. exactly 50% per axis.
        let coordinate = click_to_percent(Point::new(105.0, 55.0), Size::new(200.0, 100.0));
        assert_eq!(coordinate, Coordinate { x: 50, y: 50 });
    }

    #[test]
    fn clicks_inside_surface_stay_in_range() {
        let size = Size::new(320.0, 240.0);
        for (x, y) in [(0.0, 0.0), (1.0, 239.0), (319.0, 1.0), (160.0, 120.0)] {
            let c = click_to_percent(Point::new(x, y), size);
            assert!(c.x <= 100);
            assert!(c.y <= 100);
        }
    }

    #[test]
    fn clicks_far_outside_surface_clamp_to_edges() {
        let size = Size::new(200.0, 100.0);

        let low = click_to_percent(Point::new(-40.0, -40.0), size);
        assert_eq!(low, Coordinate { x: 0, y: 0 });

        let high = click_to_percent(Point::new(500.0, 400.0), size);
        assert_eq!(high, Coordinate { x: 100, y: 100 });
    }
}
