// SPDX-License-Identifier: MPL-2.0
//! Joystick-style circle control.
//!
//! The pointer's position relative to the circle's center becomes a
//! continuous movement ratio: the axis the pointer is farther along gets a
//! magnitude of 1 and the other axis is scaled by the ratio of the two
//! distances.

use super::ControlEvent;
use iced::{Point, Rectangle, Vector};

/// Movement ratio for a pointer at `pointer` over a circle with `bounds`.
///
/// Both arguments must be in the same coordinate space. A pointer exactly on
/// the center yields `(-1, -1)`: both distances are zero, so neither axis
/// dominates and both signs resolve to negative.
#[must_use]
pub fn move_ratio(pointer: Point, bounds: Rectangle) -> Vector {
    let center = bounds.center();

    let sign_x = if center.x < pointer.x { 1.0 } else { -1.0 };
    let sign_y = if center.y < pointer.y { 1.0 } else { -1.0 };

    let dx = (pointer.x - center.x).abs();
    let dy = (pointer.y - center.y).abs();

    let x = if dy > dx { dx / dy } else { 1.0 };
    let y = if dx > dy { dy / dx } else { 1.0 };

    Vector::new(x * sign_x, y * sign_y)
}

/// Pointer tracking for the circle control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Circle {
    active: bool,
}

impl Circle {
    /// Pointer pressed on the circle.
    pub fn press(&mut self, pointer: Point, bounds: Rectangle) -> ControlEvent {
        self.active = true;
        ControlEvent::Down(move_ratio(pointer, bounds), None)
    }

    /// Pointer moved anywhere; only reported while the circle is held.
    pub fn moved(&self, pointer: Point, bounds: Rectangle) -> Option<ControlEvent> {
        self.active
            .then(|| ControlEvent::Change(move_ratio(pointer, bounds), None))
    }

    /// Pointer released anywhere.
    pub fn release(&mut self) -> Option<ControlEvent> {
        std::mem::replace(&mut self.active, false).then_some(ControlEvent::Up)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::Size;

    fn circle_bounds() -> Rectangle {
        Rectangle::new(Point::new(100.0, 100.0), Size::new(80.0, 80.0))
    }

    #[test]
    fn exact_center_resolves_to_negative_unit_on_both_axes() {
        let ratio = move_ratio(Point::new(140.0, 140.0), circle_bounds());
        assert_eq!(ratio, Vector::new(-1.0, -1.0));
    }

    #[test]
    fn horizontal_axis_right_of_center_is_pure_right() {
        let ratio = move_ratio(Point::new(170.0, 140.0), circle_bounds());
        assert_abs_diff_eq!(ratio.x, 1.0);
        assert_abs_diff_eq!(ratio.y.abs(), 0.0);
    }

    #[test]
    fn dominant_axis_gets_unit_magnitude() {
        // 10 right, 20 down from center
        let ratio = move_ratio(Point::new(150.0, 160.0), circle_bounds());
        assert_abs_diff_eq!(ratio.x, 0.5);
        assert_abs_diff_eq!(ratio.y, 1.0);

        // 30 left, 15 up from center
        let ratio = move_ratio(Point::new(110.0, 125.0), circle_bounds());
        assert_abs_diff_eq!(ratio.x, -1.0);
        assert_abs_diff_eq!(ratio.y, -0.5);
    }

    #[test]
    fn ratio_stays_within_unit_square() {
        let bounds = circle_bounds();
        for x in (60..=220).step_by(7) {
            for y in (60..=220).step_by(11) {
                let ratio = move_ratio(Point::new(x as f32, y as f32), bounds);
                assert!(ratio.x.abs() <= 1.0 && ratio.y.abs() <= 1.0);
            }
        }
    }

    #[test]
    fn press_move_release_cycle() {
        let mut circle = Circle::default();
        let bounds = circle_bounds();
        assert!(circle.moved(Point::new(170.0, 140.0), bounds).is_none());

        let down = circle.press(Point::new(140.0, 100.0), bounds);
        assert_eq!(down, ControlEvent::Down(Vector::new(-0.0, -1.0), None));
        assert!(circle.is_active());

        let change = circle.moved(Point::new(170.0, 140.0), bounds);
        assert!(matches!(change, Some(ControlEvent::Change(v, None)) if v.x == 1.0));

        assert_eq!(circle.release(), Some(ControlEvent::Up));
        assert_eq!(circle.release(), None);
    }
}
