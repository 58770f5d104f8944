// SPDX-License-Identifier: MPL-2.0
//! Gallery configuration: the per-gallery JSON attribute, its validated form,
//! and the manifest files the CLI reads.
//!
//! # Examples
//!
//! ```
//! use gallery_lens::config::GalleryConfig;
//! use gallery_lens::layout::LayoutStyle;
//!
//! // One bad field falls back to its default without touching the others.
//! let config = GalleryConfig::from_attribute(Some(r#"{"style": "Mosaic", "gap": -3}"#));
//! assert_eq!(config.style, LayoutStyle::Mosaic);
//! assert_eq!(config.gap, 20);
//!
//! // Unparsable input behaves like an empty object.
//! let config = GalleryConfig::from_attribute(Some("{oops"));
//! assert_eq!(config, GalleryConfig::default());
//! ```

pub mod attrs;
mod defaults;
pub mod manifest;

pub use defaults::*;

use crate::gallery::ItemRecord;
use crate::layout::LayoutStyle;
use attrs::Attributes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Validated gallery configuration. Set once at init, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub style: LayoutStyle,
    pub padding: u32,
    pub gap: u32,
    pub thumbnail_size: u32,
    /// Recorded for completeness; layout does not enforce it.
    pub max_thumbnail_display: u32,
    pub display_search: bool,
    pub display_categories: bool,
    pub display_thumbnail_text: bool,
    pub display_title: bool,
    /// Sorted distinct non-empty item categories, excluding [`ALL_CATEGORY`].
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            style: LayoutStyle::default(),
            padding: DEFAULT_PADDING,
            gap: DEFAULT_GAP,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            max_thumbnail_display: DEFAULT_MAX_THUMBNAIL_DISPLAY,
            display_search: DEFAULT_DISPLAY_SEARCH,
            display_categories: DEFAULT_DISPLAY_CATEGORIES,
            display_thumbnail_text: DEFAULT_DISPLAY_THUMBNAIL_TEXT,
            display_title: DEFAULT_DISPLAY_TITLE,
            categories: Vec::new(),
        }
    }
}

impl GalleryConfig {
    /// Builds a configuration from the raw gallery attribute.
    ///
    /// Never fails: malformed JSON is logged and treated as `{}`.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>) -> Self {
        Self::from_attributes(&attrs::parse_object(raw, "gallery"))
    }

    /// Builds a configuration from an already-parsed attribute object.
    #[must_use]
    pub fn from_attributes(map: &Attributes) -> Self {
        let style = attrs::string_field(map, "style")
            .map(|name| LayoutStyle::from_name(&name))
            .unwrap_or_default();

        Self {
            style,
            padding: attrs::non_negative_field(map, "padding").unwrap_or(DEFAULT_PADDING),
            gap: attrs::non_negative_field(map, "gap").unwrap_or(DEFAULT_GAP),
            thumbnail_size: attrs::non_negative_field(map, "thumbnailSize")
                .filter(|size| *size > 0)
                .unwrap_or(DEFAULT_THUMBNAIL_SIZE),
            max_thumbnail_display: attrs::non_negative_field(map, "maxThumbnailDisplay")
                .unwrap_or(DEFAULT_MAX_THUMBNAIL_DISPLAY),
            display_search: attrs::bool_field(map, "displaySearch")
                .unwrap_or(DEFAULT_DISPLAY_SEARCH),
            display_categories: attrs::bool_field(map, "displayCategories")
                .unwrap_or(DEFAULT_DISPLAY_CATEGORIES),
            display_thumbnail_text: attrs::bool_field(map, "displayThumbnailText")
                .unwrap_or(DEFAULT_DISPLAY_THUMBNAIL_TEXT),
            display_title: attrs::bool_field(map, "displayTitle").unwrap_or(DEFAULT_DISPLAY_TITLE),
            categories: Vec::new(),
        }
    }

    /// Derives [`GalleryConfig::categories`] from the item list.
    pub fn collect_categories(&mut self, items: &[ItemRecord]) {
        let set: BTreeSet<&str> = items
            .iter()
            .map(|item| item.category.as_str())
            .filter(|category| !category.is_empty() && *category != ALL_CATEGORY)
            .collect();
        self.categories = set.into_iter().map(str::to_owned).collect();
    }
}
