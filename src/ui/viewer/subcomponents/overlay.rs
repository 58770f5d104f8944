// SPDX-License-Identifier: MPL-2.0
//! Chrome visibility sub-component.
//!
//! The viewer chrome (header, navigation arrows, caption) collapses after a
//! period without interaction. The timer itself belongs to the host; this
//! state only hands out tokens and remembers which one is armed, so a timer
//! is never queued behind another one.

use crate::ui::state::TimerToken;

/// Chrome visibility state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// Chrome is collapsed to the content only.
    minimal: bool,
    /// Token of the timer currently armed, if any.
    armed: Option<TimerToken>,
    /// Last token handed out.
    last_token: TimerToken,
}

/// Messages for the overlay sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Viewer opened: full chrome, fresh timer.
    Opened,
    /// Any user interaction with the open viewer.
    Activity,
    /// Viewer content changed without user interaction: fresh timer only.
    Rearm,
    /// The host reports that the timer with this token elapsed.
    TimerFired(TimerToken),
    /// Viewer closed or torn down.
    Disarm,
}

/// Effects produced by overlay changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Cancel `previous` (if any) and arm `token`.
    Rearm {
        previous: Option<TimerToken>,
        token: TimerToken,
        /// Chrome went from minimal back to full.
        restored: bool,
    },
    /// Cancel the armed timer.
    Cancel(TimerToken),
    /// Chrome collapsed to minimal.
    Collapsed,
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Opened | Message::Activity => {
                let restored = std::mem::take(&mut self.minimal);
                self.rearm(restored)
            }
            Message::Rearm => self.rearm(false),
            Message::TimerFired(token) => {
                if self.armed != Some(token) {
                    tracing::trace!(%token, "ignoring stale inactivity timer");
                    return Effect::None;
                }
                self.armed = None;
                if self.minimal {
                    return Effect::None;
                }
                self.minimal = true;
                Effect::Collapsed
            }
            Message::Disarm => {
                self.minimal = false;
                self.armed.take().map_or(Effect::None, Effect::Cancel)
            }
        }
    }

    fn rearm(&mut self, restored: bool) -> Effect {
        self.last_token = self.last_token.next();
        let previous = self.armed.replace(self.last_token);
        Effect::Rearm {
            previous,
            token: self.last_token,
            restored,
        }
    }

    #[must_use]
    pub fn is_minimal(&self) -> bool {
        self.minimal
    }

    #[must_use]
    pub fn armed(&self) -> Option<TimerToken> {
        self.armed
    }
}
