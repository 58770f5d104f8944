// SPDX-License-Identifier: MPL-2.0
//! Host events routed to a single gallery.

use crate::gallery::ItemId;
use crate::geometry::{Point, Size};
use crate::layout::NaturalSize;
use crate::ui::state::TimerToken;

/// Keys the viewer reacts to. Any other key only counts as activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Maps a DOM-style key name (`"ArrowLeft"`, `"a"`, ...) to a [`Key`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// Clicks on the viewer's own buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    Close,
    Previous,
    Next,
    ZoomIn,
    ZoomOut,
    ToggleMiniatures,
    EnterFullscreen,
    ExitFullscreen,
    Download,
    SelectMiniature(ItemId),
}

/// Top-level event of one gallery instance.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The gallery container now measures `width` pixels.
    Resized { width: f32 },
    ImageReady { item: ItemId, size: NaturalSize },
    ImageFailed { item: ItemId },
    ThumbnailClicked(ItemId),
    CategorySelected(String),
    SearchChanged(String),
    SearchCleared,
    Key(Key),
    Wheel { delta_y: f32 },
    PointerMoved,
    TouchStart(Point),
    TouchMove { position: Point, bounds: Size },
    TouchEnd,
    DragStart(Point),
    DragMove { position: Point, bounds: Size },
    DragEnd,
    TimerFired(TimerToken),
    FullscreenChanged(bool),
    Viewer(ViewerAction),
}
