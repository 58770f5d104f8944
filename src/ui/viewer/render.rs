// SPDX-License-Identifier: MPL-2.0
//! Derived viewer output.
//!
//! Nothing here is state: a [`ViewerView`] is recomputed from the viewer
//! state, the items and the configuration on every render and handed to the
//! host as-is.

use super::component::State;
use crate::config::GalleryConfig;
use crate::gallery::{ItemContent, ItemId, ItemRecord};
use crate::geometry::Point;
use crate::ui::state::ZoomLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the content area shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum ViewerContent {
    Image(String),
    Rich(String),
}

/// Caption panel below the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caption {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Miniature {
    pub id: ItemId,
    pub src: String,
    pub selected: bool,
}

/// Strip of visible items below the content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MiniatureStrip {
    pub visible: bool,
    pub entries: Vec<Miniature>,
}

impl MiniatureStrip {
    /// Horizontal translation that centers the selected miniature in a
    /// viewer `viewer_width` wide, given its left edge and width.
    #[must_use]
    pub fn centering_offset(viewer_width: f32, selected_left: f32, selected_width: f32) -> f32 {
        viewer_width / 2.0 - selected_left - selected_width / 2.0
    }
}

/// 1-based position of the current item among visible items.
///
/// `position` is 0 when the current item is not among them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageIndex {
    pub position: usize,
    pub count: usize,
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.position, self.count)
    }
}

/// Which fullscreen affordance is offered. The two are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FullscreenButton {
    Enter,
    Exit,
}

/// Everything the host needs to draw the open viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerView {
    pub item: ItemId,
    pub content: ViewerContent,
    pub zoom: ZoomLevel,
    pub pan: Point,
    /// Header, arrows and caption are shown (opacity 1) rather than collapsed.
    pub chrome_visible: bool,
    pub caption: Option<Caption>,
    pub zoom_in_visible: bool,
    pub zoom_out_visible: bool,
    pub fullscreen_button: FullscreenButton,
    pub download_visible: bool,
    pub miniatures: MiniatureStrip,
    pub page_index: PageIndex,
}

impl ViewerView {
    /// Builds the view of an open viewer. Returns `None` while closed.
    #[must_use]
    pub fn build(state: &State, items: &[ItemRecord], config: &GalleryConfig) -> Option<Self> {
        let id = state.current()?;
        let item = items.get(id)?;
        let zoom = state.zoom_level();
        let chrome_visible = !state.is_minimal();

        let caption = (config.display_thumbnail_text
            && item.has_caption()
            && chrome_visible
            && !zoom.is_zoomed())
        .then(|| Caption {
            title: non_empty(&item.title),
            description: non_empty(&item.description),
        });

        let entries: Vec<Miniature> = items
            .iter()
            .filter(|candidate| candidate.visible)
            .map(|candidate| Miniature {
                id: candidate.id,
                src: candidate.src.clone(),
                selected: candidate.id == id,
            })
            .collect();
        let page_index = PageIndex {
            position: entries
                .iter()
                .position(|entry| entry.selected)
                .map_or(0, |index| index + 1),
            count: entries.len(),
        };

        Some(Self {
            item: id,
            content: content_of(item),
            zoom,
            pan: if zoom.is_zoomed() {
                state.pan_offset()
            } else {
                Point::ORIGIN
            },
            chrome_visible,
            caption,
            zoom_in_visible: !zoom.is_max(),
            zoom_out_visible: zoom.is_zoomed(),
            fullscreen_button: if state.is_fullscreen() {
                FullscreenButton::Exit
            } else {
                FullscreenButton::Enter
            },
            download_visible: item.is_plain_image() && item.image_url().is_some(),
            miniatures: MiniatureStrip {
                visible: state.show_miniatures(),
                entries,
            },
            page_index,
        })
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

fn content_of(item: &ItemRecord) -> ViewerContent {
    match &item.content {
        ItemContent::Source => ViewerContent::Image(item.src.clone()),
        ItemContent::Image(url) => ViewerContent::Image(url.clone()),
        ItemContent::Rich(markup) => ViewerContent::Rich(markup.clone()),
    }
}
