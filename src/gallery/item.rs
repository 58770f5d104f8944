// SPDX-License-Identifier: MPL-2.0
//! Item records: one per source child, created at init.

use crate::config::attrs::{self, Attributes};
use serde::{Deserialize, Serialize};

/// Creation-order index of an item. Stable for the instance's lifetime.
pub type ItemId = usize;

/// What the viewer shows for an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ItemContent {
    /// No payload: the viewer shows the item's `src` as a plain image.
    #[default]
    Source,
    /// A payload made of exactly one plain image.
    Image(String),
    /// Rich embedded content (video, iframe, mixed markup).
    Rich(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub src: String,
    pub category: String,
    pub title: String,
    pub description: String,
    /// Mosaic cell span. Zero means "not applicable" for non-mosaic styles.
    pub span_x: u32,
    pub span_y: u32,
    pub content: ItemContent,
    /// Written only by the filter.
    pub visible: bool,
    pub css_class: String,
}

impl ItemRecord {
    /// Creates a visible item with empty metadata.
    #[must_use]
    pub fn new(id: ItemId, src: impl Into<String>, content: ItemContent) -> Self {
        Self {
            id,
            src: src.into(),
            category: String::new(),
            title: String::new(),
            description: String::new(),
            span_x: 0,
            span_y: 0,
            content,
            visible: true,
            css_class: String::new(),
        }
    }

    /// Builds an item from its raw per-item attribute.
    ///
    /// Missing or invalid numeric fields default to 0, missing strings to "".
    #[must_use]
    pub fn from_attribute(id: ItemId, raw: Option<&str>, content: ItemContent) -> Self {
        Self::from_attributes(id, &attrs::parse_object(raw, "thumbnail"), content)
    }

    #[must_use]
    pub fn from_attributes(id: ItemId, map: &Attributes, content: ItemContent) -> Self {
        let text = |key: &str| attrs::string_field(map, key).unwrap_or_default();

        Self {
            id,
            src: text("src"),
            category: text("category"),
            title: text("title"),
            description: text("description"),
            span_x: attrs::non_negative_field(map, "spanX").unwrap_or(0),
            span_y: attrs::non_negative_field(map, "spanY").unwrap_or(0),
            content,
            visible: true,
            css_class: text("class"),
        }
    }

    /// Returns `true` when the viewer would show a single plain image.
    #[must_use]
    pub fn is_plain_image(&self) -> bool {
        !matches!(self.content, ItemContent::Rich(_))
    }

    /// URL of the image the viewer shows, if the content is a plain image.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        match &self.content {
            ItemContent::Source => Some(self.src.as_str()).filter(|src| !src.is_empty()),
            ItemContent::Image(url) => Some(url.as_str()),
            ItemContent::Rich(_) => None,
        }
    }

    /// Whether there is any caption text to show.
    #[must_use]
    pub fn has_caption(&self) -> bool {
        !self.title.is_empty() || !self.description.is_empty()
    }
}
