// SPDX-License-Identifier: MPL-2.0
//! Inactivity timers on a tokio runtime.
//!
//! Each gallery owns a single slot: arming aborts whatever was pending for
//! that gallery. Expiry is reported over an unbounded channel so the host's
//! event loop can feed it back as [`Event::TimerFired`].

use super::message::Event;
use crate::gallery::ElementHandle;
use crate::ui::state::TimerToken;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// An elapsed inactivity timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub gallery: ElementHandle,
    pub token: TimerToken,
}

impl TimerFired {
    /// The target gallery and the event to dispatch to it.
    #[must_use]
    pub fn into_event(self) -> (ElementHandle, Event) {
        (self.gallery, Event::TimerFired(self.token))
    }
}

#[derive(Debug)]
struct Pending {
    token: TimerToken,
    task: JoinHandle<()>,
}

/// Single-slot timers keyed by gallery.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct TokioTimers {
    sender: mpsc::UnboundedSender<TimerFired>,
    pending: HashMap<ElementHandle, Pending>,
}

impl TokioTimers {
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerFired>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                sender,
                pending: HashMap::new(),
            },
            receiver,
        )
    }

    /// Arms `gallery`'s timer, aborting the one already pending.
    pub fn arm(&mut self, gallery: ElementHandle, token: TimerToken, after: Duration) {
        let sender = self.sender.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            // The receiver may be gone during shutdown.
            let _ = sender.send(TimerFired { gallery, token });
        });
        if let Some(previous) = self.pending.insert(gallery, Pending { token, task }) {
            previous.task.abort();
        }
    }

    /// Cancels `gallery`'s timer if `token` is the one pending.
    pub fn cancel(&mut self, gallery: ElementHandle, token: TimerToken) {
        if self
            .pending
            .get(&gallery)
            .is_some_and(|pending| pending.token == token)
        {
            if let Some(pending) = self.pending.remove(&gallery) {
                pending.task.abort();
            }
        }
    }

    /// Cancels whatever is pending for `gallery`.
    pub fn cancel_gallery(&mut self, gallery: ElementHandle) {
        if let Some(pending) = self.pending.remove(&gallery) {
            pending.task.abort();
        }
    }

    /// Token pending for `gallery`, if any. A timer that already fired is
    /// no longer pending.
    #[must_use]
    pub fn pending(&self, gallery: ElementHandle) -> Option<TimerToken> {
        self.pending
            .get(&gallery)
            .filter(|pending| !pending.task.is_finished())
            .map(|pending| pending.token)
    }
}

impl Drop for TokioTimers {
    fn drop(&mut self) {
        for pending in self.pending.values() {
            pending.task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GALLERY: ElementHandle = ElementHandle::new(7);

    #[tokio::test(start_paused = true)]
    async fn armed_timer_fires_after_delay() {
        let (mut timers, mut fired) = TokioTimers::new();
        timers.arm(GALLERY, TimerToken::new(1), Duration::from_millis(3500));

        let event = fired.recv().await.expect("timer should fire");
        assert_eq!(
            event.into_event(),
            (GALLERY, Event::TimerFired(TimerToken::new(1)))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn fired_timer_is_no_longer_pending() {
        let (mut timers, mut fired) = TokioTimers::new();
        timers.arm(GALLERY, TimerToken::new(4), Duration::from_millis(100));
        assert_eq!(timers.pending(GALLERY), Some(TimerToken::new(4)));

        fired.recv().await.expect("timer should fire");
        tokio::task::yield_now().await;
        assert_eq!(timers.pending(GALLERY), None);
    }

    #[tokio::test(start_paused = true)]
    async fn rearming_replaces_the_pending_timer() {
        let (mut timers, mut fired) = TokioTimers::new();
        timers.arm(GALLERY, TimerToken::new(1), Duration::from_millis(100));
        timers.arm(GALLERY, TimerToken::new(2), Duration::from_millis(200));
        assert_eq!(timers.pending(GALLERY), Some(TimerToken::new(2)));

        let event = fired.recv().await.expect("timer should fire");
        assert_eq!(event.token, TimerToken::new(2));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(fired.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_ignores_other_tokens() {
        let (mut timers, mut fired) = TokioTimers::new();
        timers.arm(GALLERY, TimerToken::new(3), Duration::from_millis(100));

        timers.cancel(GALLERY, TimerToken::new(2));
        assert_eq!(timers.pending(GALLERY), Some(TimerToken::new(3)));

        timers.cancel(GALLERY, TimerToken::new(3));
        assert_eq!(timers.pending(GALLERY), None);
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(fired.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn galleries_have_independent_slots() {
        let (mut timers, mut fired) = TokioTimers::new();
        let other = ElementHandle::new(8);
        timers.arm(GALLERY, TimerToken::new(1), Duration::from_millis(100));
        timers.arm(other, TimerToken::new(1), Duration::from_millis(50));
        timers.cancel_gallery(GALLERY);

        let event = fired.recv().await.expect("timer should fire");
        assert_eq!(event.gallery, other);
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(fired.try_recv().is_err());
    }
}
