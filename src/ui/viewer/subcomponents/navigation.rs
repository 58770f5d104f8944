// SPDX-License-Identifier: MPL-2.0
//! Navigation over visible items.
//!
//! Navigation walks item ids in one direction, skipping hidden items, and
//! stops at the ends of the list. There is no wraparound.

use crate::gallery::{ItemId, ItemRecord};

/// Direction of navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Navigate to next item.
    Next,
    /// Navigate to previous item.
    Previous,
}

impl Direction {
    /// Signed step matching this direction.
    #[must_use]
    pub fn step(self) -> i64 {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }
}

/// First visible item reached from `from` by repeatedly adding `step`.
///
/// Returns `None` when the walk leaves the list first, or when `step` is 0.
#[must_use]
pub fn step_to_visible(items: &[ItemRecord], from: ItemId, step: i64) -> Option<ItemId> {
    if step == 0 {
        return None;
    }
    let len = i64::try_from(items.len()).ok()?;
    let mut id = i64::try_from(from).ok()?;
    loop {
        id = id.checked_add(step)?;
        if !(0..len).contains(&id) {
            return None;
        }
        let index = usize::try_from(id).ok()?;
        if items[index].visible {
            return Some(index);
        }
    }
}

/// Item to show after a visibility change hid `current`.
///
/// Keeps `current` while it is visible, otherwise looks forward first and
/// backward second. `None` means nothing is visible any more.
#[must_use]
pub fn resolve_visible(items: &[ItemRecord], current: ItemId) -> Option<ItemId> {
    if items.get(current).is_some_and(|item| item.visible) {
        return Some(current);
    }
    step_to_visible(items, current, Direction::Next.step())
        .or_else(|| step_to_visible(items, current, Direction::Previous.step()))
}
