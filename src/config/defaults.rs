// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Layout spacing and thumbnail sizing
//! - **Categories**: Reserved category names and markers
//! - **Viewer**: Zoom bounds and chrome auto-collapse timeout

use std::time::Duration;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default padding inside the gallery container (in pixels).
pub const DEFAULT_PADDING: u32 = 0;

/// Default gap between thumbnails (in pixels).
pub const DEFAULT_GAP: u32 = 20;

/// Default thumbnail size (in pixels). Column width for masonry/grid,
/// row height for justified rows, cell size for mosaic.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 300;

/// Default cap on displayed thumbnails. Zero means unlimited.
pub const DEFAULT_MAX_THUMBNAIL_DISPLAY: u32 = 0;

pub const DEFAULT_DISPLAY_SEARCH: bool = true;
pub const DEFAULT_DISPLAY_CATEGORIES: bool = true;
pub const DEFAULT_DISPLAY_THUMBNAIL_TEXT: bool = true;
pub const DEFAULT_DISPLAY_TITLE: bool = false;

// ==========================================================================
// Category Defaults
// ==========================================================================

/// Reserved category that selects every item.
pub const ALL_CATEGORY: &str = "All";

/// Class marker picked up by `init_all`.
pub const DEFAULT_GALLERY_CLASS: &str = "gallery-lens";

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Minimum (and initial) viewer zoom level.
pub const MIN_ZOOM: u32 = 1;

/// Maximum viewer zoom level.
pub const MAX_ZOOM: u32 = 2;

/// Inactivity delay before the viewer collapses to minimal chrome (in milliseconds).
pub const INACTIVITY_TIMEOUT_MS: u64 = 3500;

/// Inactivity delay as a [`Duration`].
pub const INACTIVITY_TIMEOUT: Duration = Duration::from_millis(INACTIVITY_TIMEOUT_MS);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_THUMBNAIL_SIZE > 0);
    assert!(MIN_ZOOM >= 1);
    assert!(MAX_ZOOM >= MIN_ZOOM);
    assert!(INACTIVITY_TIMEOUT_MS > 0);
};
