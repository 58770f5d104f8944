// SPDX-License-Identifier: MPL-2.0
//! Item filtering by category and search text.
//!
//! Filters are combined with AND logic - both the category filter and the
//! search filter must match for an item to be visible. Visibility is a plain
//! boolean partition recomputed from scratch on every call.
//!
//! # Available Filters
//!
//! - [`CategoryFilter`]: Exact match on the item category, or everything
//! - [`SearchFilter`]: Any whitespace-separated token found in the category,
//!   title or description (case-insensitive)
//!
//! # Example
//!
//! ```
//! use gallery_lens::gallery::filter::{CategoryFilter, ItemFilter, SearchFilter};
//!
//! let filter = ItemFilter {
//!     category: CategoryFilter::from_selection("birds"),
//!     search: SearchFilter::new("heron egret"),
//! };
//!
//! assert!(filter.is_active());
//! assert_eq!(filter.active_count(), 2);
//! ```

use super::ItemRecord;
use crate::config::ALL_CATEGORY;
use serde::{Deserialize, Serialize};

// =============================================================================
// Category Filter
// =============================================================================

/// Filter by item category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryFilter {
    /// Show every category.
    #[default]
    All,
    /// Show only items whose category equals this value exactly.
    Only(String),
}

impl CategoryFilter {
    /// Maps a selection label to a filter. The reserved label selects all.
    #[must_use]
    pub fn from_selection(label: &str) -> Self {
        if label == ALL_CATEGORY {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    /// The selection label this filter corresponds to.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORY,
            Self::Only(category) => category,
        }
    }

    #[must_use]
    pub fn matches(&self, item: &ItemRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == *category,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

// =============================================================================
// Search Filter
// =============================================================================

/// Filter by free search text.
///
/// The text is split on whitespace into lower-cased tokens. An item matches
/// when any token is a substring of its category, title or description.
/// Empty text matches everything; text made only of whitespace has no tokens
/// and matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub struct SearchFilter {
    text: String,
    tokens: Vec<String>,
}

impl From<String> for SearchFilter {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<SearchFilter> for String {
    fn from(filter: SearchFilter) -> Self {
        filter.text
    }
}

impl SearchFilter {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = text.split_whitespace().map(str::to_lowercase).collect();
        Self { text, tokens }
    }

    /// The raw search text as typed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn matches(&self, item: &ItemRecord) -> bool {
        if self.text.is_empty() {
            return true;
        }
        [&item.category, &item.title, &item.description]
            .into_iter()
            .any(|field| self.matches_text(field))
    }

    fn matches_text(&self, text: &str) -> bool {
        let haystack = text.trim().to_lowercase();
        if haystack.is_empty() {
            return false;
        }
        self.tokens.iter().any(|token| haystack.contains(token.as_str()))
    }

    /// Returns `true` unless the text is empty.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.text.is_empty()
    }
}

// =============================================================================
// Composite Item Filter
// =============================================================================

/// Combined item filter with AND logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ItemFilter {
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub search: SearchFilter,
}

impl ItemFilter {
    /// Creates a new filter with no active criteria (matches all items).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the item matches all active filters.
    #[must_use]
    pub fn matches(&self, item: &ItemRecord) -> bool {
        self.category.matches(item) && self.search.matches(item)
    }

    /// Writes each item's visibility flag. Returns the number of visible items.
    pub fn apply(&self, items: &mut [ItemRecord]) -> usize {
        let mut visible = 0;
        for item in items.iter_mut() {
            item.visible = self.matches(item);
            visible += usize::from(item.visible);
        }
        visible
    }

    /// Returns `true` if any filter is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.category.is_active() || self.search.is_active()
    }

    /// Returns the number of active filter criteria.
    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(self.category.is_active()) + usize::from(self.search.is_active())
    }

    /// Resets all filters to their default (inactive) state.
    pub fn clear(&mut self) {
        self.category = CategoryFilter::default();
        self.search = SearchFilter::default();
    }
}

/// Recomputes visibility for `items` from a category label and search text.
///
/// Returns the number of visible items.
pub fn apply(items: &mut [ItemRecord], selected_category: &str, search_text: &str) -> usize {
    ItemFilter {
        category: CategoryFilter::from_selection(selected_category),
        search: SearchFilter::new(search_text),
    }
    .apply(items)
}

// =============================================================================
// Tests
// =============================================================================
