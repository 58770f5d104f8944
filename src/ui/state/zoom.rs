// SPDX-License-Identifier: MPL-2.0
//! Viewer zoom level.

use crate::config::{MAX_ZOOM, MIN_ZOOM};
use serde::{Deserialize, Serialize};

/// Integer zoom level, guaranteed to be within `MIN_ZOOM..=MAX_ZOOM`.
///
/// # Example
///
/// ```
/// use gallery_lens::ui::state::ZoomLevel;
///
/// let level = ZoomLevel::default().zoom(1, true).zoom(5, true);
/// assert_eq!(level.value(), 2);
/// assert_eq!(level.zoom(-7, false).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZoomLevel(u32);

impl ZoomLevel {
    pub const MIN: ZoomLevel = ZoomLevel(MIN_ZOOM);
    pub const MAX: ZoomLevel = ZoomLevel(MAX_ZOOM);

    /// Creates a zoom level, clamping the value to the valid range.
    #[must_use]
    pub fn new(level: i64) -> Self {
        Self(level.clamp(i64::from(MIN_ZOOM), i64::from(MAX_ZOOM)) as u32)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Adds `delta` when `relative`, otherwise sets the level to `delta`.
    #[must_use]
    pub fn zoom(self, delta: i32, relative: bool) -> Self {
        if relative {
            Self::new(i64::from(self.0) + i64::from(delta))
        } else {
            Self::new(i64::from(delta))
        }
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM
    }

    /// Returns `true` above the resting level.
    #[must_use]
    pub fn is_zoomed(self) -> bool {
        !self.is_min()
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::MIN
    }
}
