// SPDX-License-Identifier: MPL-2.0
//! Gallery layout engine.
//!
//! [`layout`] is a pure function: given the configuration, the item list
//! (with visibility already computed), a container width and a [`Measurer`]
//! it returns a [`Layout`] holding one rectangle per placed item and the total
//! content height. Pushing those rectangles to the screen is the host's job.
//!
//! Items that are filtered out or not measured yet are left out entirely:
//! they take no slot and are picked up again by the next pass.
//!
//! ## Strategies
//!
//! ```text
//! masonry     fixed-width columns, round-robin assignment, natural heights
//! grid        same columns, square cells
//! horizontal  justified rows of constant height spanning the full width
//! mosaic      first-fit bin packing of spanX x spanY cell blocks
//! ```

mod columns;
mod justified;
pub mod measure;
mod mosaic;

pub use measure::{FileMeasurer, Measurer, NaturalSize, SizeTable};
pub use mosaic::{CellRect, OccupancyGrid};

use crate::config::GalleryConfig;
use crate::gallery::{ItemId, ItemRecord};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Space-filling strategy of a gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStyle {
    #[default]
    Masonry,
    Grid,
    Horizontal,
    Mosaic,
}

impl LayoutStyle {
    pub const ALL: [LayoutStyle; 4] = [
        LayoutStyle::Masonry,
        LayoutStyle::Grid,
        LayoutStyle::Horizontal,
        LayoutStyle::Mosaic,
    ];

    /// Parses a style name case-insensitively. Unknown names map to masonry.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "grid" => Self::Grid,
            "horizontal" => Self::Horizontal,
            "mosaic" => Self::Mosaic,
            _ => Self::Masonry,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Masonry => "masonry",
            Self::Grid => "grid",
            Self::Horizontal => "horizontal",
            Self::Mosaic => "mosaic",
        }
    }
}

impl fmt::Display for LayoutStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    pub style: LayoutStyle,
    /// Pixel rectangle of every placed item, keyed by item id.
    pub placements: BTreeMap<ItemId, Rect>,
    /// Mosaic cell blocks of every placed item. Empty for other styles.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cells: BTreeMap<ItemId, CellRect>,
    /// Column count for column-based styles, `None` for justified rows.
    pub columns: Option<usize>,
    pub content_height: f32,
}

impl Layout {
    /// Layout of a gallery with nothing to place.
    #[must_use]
    pub fn empty(style: LayoutStyle, padding: f32) -> Self {
        Self {
            style,
            content_height: 2.0 * padding,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn placement(&self, id: ItemId) -> Option<&Rect> {
        self.placements.get(&id)
    }

    #[must_use]
    pub fn is_placed(&self, id: ItemId) -> bool {
        self.placements.contains_key(&id)
    }

    /// Ids of `items` that the host must hide.
    pub fn hidden_ids<'a>(&'a self, items: &'a [ItemRecord]) -> impl Iterator<Item = ItemId> + 'a {
        items
            .iter()
            .map(|item| item.id)
            .filter(move |id| !self.is_placed(*id))
    }
}

/// Numeric parameters shared by every strategy, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Metrics {
    pub container_width: f32,
    pub padding: f32,
    pub gap: f32,
    pub thumbnail_size: f32,
}

impl Metrics {
    fn new(config: &GalleryConfig, container_width: f32) -> Self {
        Self {
            container_width: if container_width.is_finite() {
                container_width
            } else {
                0.0
            },
            padding: config.padding as f32,
            gap: config.gap as f32,
            thumbnail_size: config.thumbnail_size.max(1) as f32,
        }
    }

    /// Width available inside the padding. Never negative.
    pub fn inner_width(&self) -> f32 {
        (self.container_width - 2.0 * self.padding).max(0.0)
    }

    /// `max(1, floor(inner / thumbnailSize))`.
    pub fn column_count(&self) -> usize {
        column_count(self.container_width, self.padding, self.thumbnail_size)
    }

    /// Width of one column (or mosaic cell) for `columns` columns.
    pub fn column_width(&self, columns: usize) -> f32 {
        let columns = columns.max(1) as f32;
        ((self.container_width - 2.0 * self.padding - (columns - 1.0) * self.gap) / columns)
            .max(0.0)
    }
}

/// Column count used by masonry, grid and mosaic.
///
/// Non-positive or degenerate widths clamp to a single column.
#[must_use]
pub fn column_count(container_width: f32, padding: f32, thumbnail_size: f32) -> usize {
    let raw = ((container_width - 2.0 * padding) / thumbnail_size).floor();
    if raw.is_finite() && raw >= 1.0 {
        raw as usize
    } else {
        1
    }
}

/// An item that passed the visibility and readiness checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Eligible<'a> {
    pub item: &'a ItemRecord,
    pub size: NaturalSize,
}

impl Eligible<'_> {
    /// Width over height. Always finite and positive for eligible items.
    pub fn aspect_ratio(&self) -> f32 {
        self.size.width / self.size.height
    }
}

/// Visible, measured items in list order.
fn eligible_items<'a, M>(items: &'a [ItemRecord], measurer: &mut M) -> Vec<Eligible<'a>>
where
    M: Measurer + ?Sized,
{
    items
        .iter()
        .filter(|item| item.visible)
        .filter_map(|item| {
            measurer
                .measure(item)
                .filter(NaturalSize::is_usable)
                .map(|size| Eligible { item, size })
        })
        .collect()
}

/// Computes placements for every visible, measured item.
///
/// The style comes from `config.style`; [`layout_with_style`] overrides it.
pub fn layout<M>(
    config: &GalleryConfig,
    items: &[ItemRecord],
    container_width: f32,
    measurer: &mut M,
) -> Layout
where
    M: Measurer + ?Sized,
{
    layout_with_style(config.style, config, items, container_width, measurer)
}

/// Same as [`layout`] with an explicit style.
pub fn layout_with_style<M>(
    style: LayoutStyle,
    config: &GalleryConfig,
    items: &[ItemRecord],
    container_width: f32,
    measurer: &mut M,
) -> Layout
where
    M: Measurer + ?Sized,
{
    let metrics = Metrics::new(config, container_width);
    let eligible = eligible_items(items, measurer);

    let layout = match style {
        LayoutStyle::Masonry => columns::masonry(&metrics, &eligible),
        LayoutStyle::Grid => columns::grid(&metrics, &eligible),
        LayoutStyle::Horizontal => justified::rows(&metrics, &eligible),
        LayoutStyle::Mosaic => mosaic::pack(&metrics, &eligible),
    };

    tracing::debug!(
        %style,
        container_width,
        eligible = eligible.len(),
        content_height = layout.content_height,
        "layout pass"
    );

    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::ItemContent;

    fn items(count: usize) -> Vec<ItemRecord> {
        (0..count)
            .map(|id| ItemRecord::new(id, format!("{id}.jpg"), ItemContent::Source))
            .collect()
    }

    fn square(_: &ItemRecord) -> Option<NaturalSize> {
        Some(NaturalSize::new(100.0, 100.0))
    }

    #[test]
    fn style_names_parse_case_insensitively() {
        assert_eq!(LayoutStyle::from_name("Horizontal"), LayoutStyle::Horizontal);
        assert_eq!(LayoutStyle::from_name(" MOSAIC "), LayoutStyle::Mosaic);
        assert_eq!(LayoutStyle::from_name("grid"), LayoutStyle::Grid);
        assert_eq!(LayoutStyle::from_name(""), LayoutStyle::Masonry);
        assert_eq!(LayoutStyle::from_name("spiral"), LayoutStyle::Masonry);
    }

    #[test]
    fn column_count_clamps_to_one() {
        assert_eq!(column_count(0.0, 0.0, 300.0), 1);
        assert_eq!(column_count(-50.0, 10.0, 300.0), 1);
        assert_eq!(column_count(100.0, 80.0, 300.0), 1);
        assert_eq!(column_count(f32::NAN, 0.0, 300.0), 1);
    }

    #[test]
    fn column_count_is_monotonic_in_width() {
        let mut previous = 0;
        for width in (0..4000).step_by(7) {
            let count = column_count(width as f32, 12.0, 250.0);
            assert!(count >= previous, "width {width}");
            previous = count;
        }
    }

    #[test]
    fn hidden_and_unmeasured_items_take_no_slot() {
        let mut list = items(4);
        list[1].visible = false;
        let mut measurer = |item: &ItemRecord| (item.id != 2).then(|| NaturalSize::new(10.0, 10.0));

        let config = GalleryConfig {
            thumbnail_size: 100,
            gap: 0,
            ..GalleryConfig::default()
        };
        let result = layout(&config, &list, 300.0, &mut measurer);

        assert_eq!(result.placements.keys().copied().collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(result.hidden_ids(&list).collect::<Vec<_>>(), vec![1, 2]);
        // Item 3 takes the second column, not the third.
        assert_eq!(result.placement(3).map(|r| r.x), Some(100.0));
    }

    #[test]
    fn empty_gallery_is_two_paddings_tall_in_every_style() {
        let config = GalleryConfig {
            padding: 15,
            ..GalleryConfig::default()
        };
        for style in LayoutStyle::ALL {
            let result = layout_with_style(style, &config, &[], 900.0, &mut square);
            assert_eq!(result.content_height, 30.0, "{style}");
            assert!(result.placements.is_empty());
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let list = items(12);
        let mut measurer =
            |item: &ItemRecord| Some(NaturalSize::new(100.0 + item.id as f32 * 13.0, 120.0));
        for style in LayoutStyle::ALL {
            let config = GalleryConfig {
                style,
                ..GalleryConfig::default()
            };
            let first = layout(&config, &list, 1024.0, &mut measurer);
            let second = layout(&config, &list, 1024.0, &mut measurer);
            assert_eq!(first, second, "{style}");
        }
    }

    #[test]
    fn non_positive_width_does_not_panic() {
        let list = items(5);
        for style in LayoutStyle::ALL {
            let config = GalleryConfig {
                style,
                padding: 10,
                ..GalleryConfig::default()
            };
            for width in [0.0, -100.0] {
                let result = layout(&config, &list, width, &mut square);
                assert!(result.content_height.is_finite());
                assert!(result
                    .placements
                    .values()
                    .all(|r| r.width >= 0.0 && r.height >= 0.0 && r.x.is_finite()));
            }
        }
    }
}
