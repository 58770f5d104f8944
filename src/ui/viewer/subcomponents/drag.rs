// SPDX-License-Identifier: MPL-2.0
//! Drag/pan sub-component with touch swipe detection.
//!
//! Mouse drags pan zoomed content. Touch gestures pan while zoomed and turn
//! into a single navigation swipe at the resting zoom level.

use super::navigation::Direction;
use crate::geometry::{Point, Size};
use crate::ui::state::drag::{clamp_offset, DragState};

/// Drag sub-component state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    /// Mouse drag in progress.
    pub inner: DragState,
    /// Current pan offset of the content.
    offset: Point,
    /// Touch gesture in progress: start position and offset at that time.
    touch: Option<(Point, Point)>,
}

/// Messages for the drag sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Mouse button pressed on the content. Ignored unless `zoomed`.
    DragStart { position: Point, zoomed: bool },
    /// Mouse moved; `bounds` is the content box size.
    DragMove { position: Point, bounds: Size },
    DragEnd,
    TouchStart(Point),
    TouchMove {
        position: Point,
        bounds: Size,
        zoomed: bool,
    },
    TouchEnd,
    /// Content went back to rest: drop the pan offset.
    Reset,
}

/// Effects produced by drag operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// New content offset to apply.
    Panned(Point),
    /// Horizontal swipe at rest.
    Swipe(Direction),
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::DragStart { position, zoomed } => {
                if zoomed {
                    self.inner.start(position, self.offset);
                } else {
                    self.inner.stop();
                }
                Effect::None
            }
            Message::DragMove { position, bounds } => {
                match self.inner.calculate_offset(position, bounds) {
                    Some(offset) => self.pan_to(offset),
                    None => Effect::None,
                }
            }
            Message::DragEnd => {
                self.inner.stop();
                Effect::None
            }
            Message::TouchStart(position) => {
                self.touch = Some((position, self.offset));
                Effect::None
            }
            Message::TouchMove {
                position,
                bounds,
                zoomed,
            } => {
                let Some((start, origin)) = self.touch else {
                    return Effect::None;
                };
                let dx = position.x - start.x;
                let dy = position.y - start.y;

                if zoomed {
                    return self.pan_to(clamp_offset(
                        Point::new(origin.x + dx, origin.y + dy),
                        bounds,
                    ));
                }

                // One swipe per gesture, decided on the first move.
                self.touch = None;
                if dx.abs() > dy.abs() {
                    Effect::Swipe(if dx > 0.0 {
                        Direction::Previous
                    } else {
                        Direction::Next
                    })
                } else {
                    Effect::None
                }
            }
            Message::TouchEnd => {
                self.touch = None;
                Effect::None
            }
            Message::Reset => {
                self.inner.stop();
                self.touch = None;
                if self.offset == Point::ORIGIN {
                    Effect::None
                } else {
                    self.pan_to(Point::ORIGIN)
                }
            }
        }
    }

    fn pan_to(&mut self, offset: Point) -> Effect {
        if offset == self.offset {
            return Effect::None;
        }
        self.offset = offset;
        Effect::Panned(offset)
    }

    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging
    }
}
