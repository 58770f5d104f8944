// SPDX-License-Identifier: MPL-2.0
//! Viewer and top-bar icon set.
//!
//! The host materialises these once per runtime (see
//! [`crate::app::Host::provision_assets`]) and references them by id.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Close,
    ZoomIn,
    ZoomOut,
    ChevronLeft,
    ChevronRight,
    Fullscreen,
    FullscreenExit,
    Miniatures,
    Download,
    Search,
}

impl Icon {
    pub const ALL: [Icon; 10] = [
        Icon::Close,
        Icon::ZoomIn,
        Icon::ZoomOut,
        Icon::ChevronLeft,
        Icon::ChevronRight,
        Icon::Fullscreen,
        Icon::FullscreenExit,
        Icon::Miniatures,
        Icon::Download,
        Icon::Search,
    ];

    /// Stable element id of the icon symbol.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Close => "gl-icon-close",
            Self::ZoomIn => "gl-icon-zoom-in",
            Self::ZoomOut => "gl-icon-zoom-out",
            Self::ChevronLeft => "gl-icon-chevron-left",
            Self::ChevronRight => "gl-icon-chevron-right",
            Self::Fullscreen => "gl-icon-fullscreen",
            Self::FullscreenExit => "gl-icon-fullscreen-exit",
            Self::Miniatures => "gl-icon-miniatures",
            Self::Download => "gl-icon-download",
            Self::Search => "gl-icon-search",
        }
    }
}
