// SPDX-License-Identifier: MPL-2.0
//! Derived gallery output: top bar and thumbnails.
//!
//! Thumbnail positions come from the layout engine; this view only carries
//! what the host draws around them.

use crate::config::{GalleryConfig, ALL_CATEGORY};
use crate::gallery::filter::ItemFilter;
use crate::gallery::{ItemId, ItemRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryButton {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub id: ItemId,
    pub src: String,
    pub css_class: String,
    /// Title overlay, when enabled and non-empty.
    pub title: Option<String>,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryView {
    /// `None` when the search box is disabled.
    pub search_text: Option<String>,
    /// `"All"` first, then the sorted categories. Empty when disabled.
    pub categories: Vec<CategoryButton>,
    pub thumbnails: Vec<Thumbnail>,
}

impl GalleryView {
    #[must_use]
    pub fn build(config: &GalleryConfig, items: &[ItemRecord], filter: &ItemFilter) -> Self {
        let selected = filter.category.label();

        let categories = if config.display_categories {
            std::iter::once(ALL_CATEGORY)
                .chain(config.categories.iter().map(String::as_str))
                .map(|label| CategoryButton {
                    label: label.to_string(),
                    selected: label == selected,
                })
                .collect()
        } else {
            Vec::new()
        };

        let thumbnails = items
            .iter()
            .map(|item| Thumbnail {
                id: item.id,
                src: item.src.clone(),
                css_class: item.css_class.clone(),
                title: (config.display_title && !item.title.is_empty())
                    .then(|| item.title.clone()),
                visible: item.visible,
            })
            .collect();

        Self {
            search_text: config
                .display_search
                .then(|| filter.search.text().to_string()),
            categories,
            thumbnails,
        }
    }

    /// Label of the selected category button, if the bar is shown.
    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.categories
            .iter()
            .find(|button| button.selected)
            .map(|button| button.label.as_str())
    }
}
