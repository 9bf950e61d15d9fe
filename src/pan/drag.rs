// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks a grab-and-drag gesture on the content and turns pointer motion into
//! incremental displacements.

use iced::{Point, Vector};

/// State of one drag gesture, from pointer-down to pointer-up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    /// Last pointer position seen during the drag, relative to the container.
    pub last_position: Option<Point>,
}

impl DragState {
    /// Starts a fresh drag with no known pointer position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pointer position and returns how far it moved since the
    /// previous call.
    ///
    /// The first call of a drag has nothing to compare against and returns a
    /// zero delta, so the content never jumps when the drag begins.
    pub fn drag_to(&mut self, position: Point) -> Vector {
        let last = self.last_position.replace(position).unwrap_or(position);
        position - last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_has_no_last_position() {
        let state = DragState::new();
        assert!(state.last_position.is_none());
    }

    #[test]
    fn first_move_yields_zero_delta() {
        let mut state = DragState::new();
        let delta = state.drag_to(Point::new(40.0, 25.0));
        assert_eq!(delta, Vector::new(0.0, 0.0));
        assert_eq!(state.last_position, Some(Point::new(40.0, 25.0)));
    }

    #[test]
    fn later_moves_yield_incremental_deltas() {
        let mut state = DragState::new();
        state.drag_to(Point::new(100.0, 100.0));

        let first = state.drag_to(Point::new(110.0, 95.0));
        assert_eq!(first, Vector::new(10.0, -5.0));

        // Deltas are measured from the previous move, not the drag origin
        let second = state.drag_to(Point::new(113.0, 98.0));
        assert_eq!(second, Vector::new(3.0, 3.0));
    }
}
