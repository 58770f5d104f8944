// SPDX-License-Identifier: MPL-2.0
//! Zoom sub-component encapsulating the viewer zoom level.

use crate::ui::state::ZoomLevel;

/// Zoom sub-component state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    pub level: ZoomLevel,
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Add a signed number of levels.
    ZoomBy(i32),
    /// Jump to an absolute level.
    ZoomTo(i32),
    /// Back to the resting level.
    Reset,
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Zoom level changed. `rested` is set when it went back to the minimum.
    ZoomChanged { rested: bool },
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        let next = match msg {
            Message::ZoomBy(delta) => self.level.zoom(delta, true),
            Message::ZoomTo(level) => self.level.zoom(level, false),
            Message::Reset => ZoomLevel::MIN,
        };
        if next == self.level {
            return Effect::None;
        }
        self.level = next;
        Effect::ZoomChanged {
            rested: !next.is_zoomed(),
        }
    }

    #[must_use]
    pub fn level(&self) -> ZoomLevel {
        self.level
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.level.is_zoomed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_in_then_out() {
        let mut state = State::default();
        assert_eq!(
            state.handle(Message::ZoomBy(1)),
            Effect::ZoomChanged { rested: false }
        );
        assert!(state.is_zoomed());

        assert_eq!(
            state.handle(Message::ZoomBy(-1)),
            Effect::ZoomChanged { rested: true }
        );
        assert!(!state.is_zoomed());
    }

    #[test]
    fn saturated_zoom_reports_no_change() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::ZoomBy(-1)), Effect::None);
        state.handle(Message::ZoomTo(2));
        assert_eq!(state.handle(Message::ZoomBy(1)), Effect::None);
        assert_eq!(state.level(), ZoomLevel::MAX);
    }

    #[test]
    fn reset_returns_to_min() {
        let mut state = State::default();
        state.handle(Message::ZoomTo(2));
        state.handle(Message::Reset);
        assert_eq!(state.level(), ZoomLevel::MIN);
    }
}
