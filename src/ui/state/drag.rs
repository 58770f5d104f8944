// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning zoomed viewer content.

use crate::geometry::{Point, Size};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Position where the drag started
    pub start_position: Option<Point>,

    /// Content offset when the drag started
    pub start_offset: Option<Point>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point, offset: Point) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.start_offset = Some(offset);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_offset = None;
    }

    /// Calculates the new content offset for the cursor at `current_position`.
    ///
    /// The content follows the cursor and stays within half of `bounds` from
    /// its resting position on each axis.
    #[must_use]
    pub fn calculate_offset(&self, current_position: Point, bounds: Size) -> Option<Point> {
        if !self.is_dragging {
            return None;
        }

        let start_pos = self.start_position?;
        let start_offset = self.start_offset?;

        Some(clamp_offset(
            Point::new(
                start_offset.x + current_position.x - start_pos.x,
                start_offset.y + current_position.y - start_pos.y,
            ),
            bounds,
        ))
    }
}

/// Saturates an offset to `±bounds / 2` on each axis.
#[must_use]
pub fn clamp_offset(offset: Point, bounds: Size) -> Point {
    let half = |extent: f32| {
        if extent.is_finite() {
            (extent / 2.0).abs()
        } else {
            0.0
        }
    };
    let max_x = half(bounds.width);
    let max_y = half(bounds.height);
    Point::new(offset.x.clamp(-max_x, max_x), offset.y.clamp(-max_y, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Size = Size {
        width: 400.0,
        height: 300.0,
    };

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging);
        assert!(state.start_position.is_none());
        assert!(state.start_offset.is_none());
    }

    #[test]
    fn stop_drag_clears_state() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Point::new(20.0, 10.0));
        state.stop();

        assert_eq!(state, DragState::default());
    }

    #[test]
    fn calculate_offset_returns_none_when_not_dragging() {
        let state = DragState::default();
        assert!(state.calculate_offset(Point::new(100.0, 50.0), BOUNDS).is_none());
    }

    #[test]
    fn content_follows_the_cursor() {
        let mut state = DragState::default();
        state.start(Point::new(200.0, 150.0), Point::new(10.0, -5.0));

        let offset = state.calculate_offset(Point::new(180.0, 170.0), BOUNDS);
        assert_eq!(offset, Some(Point::new(-10.0, 15.0)));
    }

    #[test]
    fn offset_saturates_at_half_the_bounds() {
        let mut state = DragState::default();
        state.start(Point::new(0.0, 0.0), Point::ORIGIN);

        let offset = state.calculate_offset(Point::new(1000.0, -1000.0), BOUNDS);
        assert_eq!(offset, Some(Point::new(200.0, -150.0)));
    }
}
