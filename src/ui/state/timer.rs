// SPDX-License-Identifier: MPL-2.0
//! Inactivity timer identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one arming of an instance's inactivity timer.
///
/// Every arm produces a fresh token. A fired token that no longer matches
/// the armed one belongs to a timer that was replaced and is ignored.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TimerToken(u64);

impl TimerToken {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The token following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer {}", self.0)
    }
}
