// SPDX-License-Identifier: MPL-2.0
//! Column layouts: masonry and grid.
//!
//! Items go to columns strictly round-robin in list order, whatever the
//! current column heights. Changing this to shortest-column-first would move
//! every thumbnail of existing galleries.

use super::{Eligible, Layout, LayoutStyle, Metrics};
use crate::geometry::Rect;

/// Fixed-width columns, heights from each item's aspect ratio.
pub(super) fn masonry(metrics: &Metrics, items: &[Eligible<'_>]) -> Layout {
    place(metrics, items, LayoutStyle::Masonry, |item, width| {
        width / item.aspect_ratio()
    })
}

/// Fixed-width columns of square cells.
pub(super) fn grid(metrics: &Metrics, items: &[Eligible<'_>]) -> Layout {
    place(metrics, items, LayoutStyle::Grid, |_, width| width)
}

fn place<F>(metrics: &Metrics, items: &[Eligible<'_>], style: LayoutStyle, height_of: F) -> Layout
where
    F: Fn(&Eligible<'_>, f32) -> f32,
{
    let columns = metrics.column_count();
    let column_width = metrics.column_width(columns);

    let mut layout = Layout {
        style,
        columns: Some(columns),
        ..Layout::default()
    };
    // Running Y offset of each column, and whether it holds an item yet.
    let mut offsets = vec![metrics.padding; columns];
    let mut filled = vec![false; columns];

    for (index, eligible) in items.iter().enumerate() {
        let column = index % columns;
        if filled[column] {
            offsets[column] += metrics.gap;
        }
        filled[column] = true;

        let height = height_of(eligible, column_width);
        let x = metrics.padding + column as f32 * (column_width + metrics.gap);
        layout.placements.insert(
            eligible.item.id,
            Rect::new(x, offsets[column], column_width, height),
        );
        offsets[column] += height;
    }

    let tallest = offsets.iter().copied().fold(metrics.padding, f32::max);
    layout.content_height = tallest.ceil() + metrics.padding;
    layout
}

#[cfg(test)]
mod tests {
    use crate::config::GalleryConfig;
    use crate::gallery::{ItemContent, ItemRecord};
    use crate::layout::{layout_with_style, LayoutStyle, NaturalSize};
    use crate::test_utils::assert_abs_diff_eq;

    fn config(padding: u32, gap: u32, thumbnail_size: u32) -> GalleryConfig {
        GalleryConfig {
            padding,
            gap,
            thumbnail_size,
            ..GalleryConfig::default()
        }
    }

    fn items(count: usize) -> Vec<ItemRecord> {
        (0..count)
            .map(|id| ItemRecord::new(id, format!("{id}.jpg"), ItemContent::Source))
            .collect()
    }

    /// Items alternate between landscape (2:1) and portrait (1:2).
    fn alternating(item: &ItemRecord) -> Option<NaturalSize> {
        Some(if item.id % 2 == 0 {
            NaturalSize::new(200.0, 100.0)
        } else {
            NaturalSize::new(100.0, 200.0)
        })
    }

    #[test]
    fn masonry_assigns_columns_round_robin() {
        let list = items(5);
        let result = layout_with_style(
            LayoutStyle::Masonry,
            &config(10, 20, 100),
            &list,
            360.0,
            &mut alternating,
        );

        // (360 - 20) / 100 = 3 columns of (340 - 40) / 3 = 100.
        assert_eq!(result.columns, Some(3));
        let xs: Vec<f32> = (0..5).map(|id| result.placements[&id].x).collect();
        assert_eq!(xs, vec![10.0, 130.0, 250.0, 10.0, 130.0]);

        // Column 0: item 0 (50 tall) then gap then item 3 (200 tall).
        let first = result.placements[&0];
        let fourth = result.placements[&3];
        assert_abs_diff_eq!(first.y, 10.0);
        assert_abs_diff_eq!(first.height, 50.0);
        assert_abs_diff_eq!(fourth.y, 80.0);
        assert_abs_diff_eq!(fourth.height, 200.0);

        // Tallest column ends at 280, plus bottom padding.
        assert_abs_diff_eq!(result.content_height, 290.0);
    }

    #[test]
    fn masonry_ignores_column_heights() {
        // Column 1 becomes far taller, but item 2 still goes to column 0
        // of a two-column layout and item 3 to column 1.
        let list = items(4);
        let mut sizes = |item: &ItemRecord| {
            Some(match item.id {
                1 => NaturalSize::new(10.0, 1000.0),
                _ => NaturalSize::new(100.0, 100.0),
            })
        };
        let result =
            layout_with_style(LayoutStyle::Masonry, &config(0, 0, 100), &list, 200.0, &mut sizes);
        assert_eq!(result.placements[&2].x, 0.0);
        assert_eq!(result.placements[&3].x, 100.0);
        assert!(result.placements[&3].y > 1000.0);
    }

    #[test]
    fn grid_cells_are_square() {
        let list = items(7);
        let result =
            layout_with_style(LayoutStyle::Grid, &config(0, 10, 150), &list, 640.0, &mut alternating);

        // (640 - 30) / 4 = 152.5
        assert_eq!(result.columns, Some(4));
        for rect in result.placements.values() {
            assert_abs_diff_eq!(rect.width, 152.5);
            assert_abs_diff_eq!(rect.height, 152.5);
        }
        let second_row = result.placements[&4];
        assert_abs_diff_eq!(second_row.y, 162.5);
        assert_abs_diff_eq!(result.content_height, 315.0);
    }

    #[test]
    fn column_placements_do_not_overlap() {
        let list = items(30);
        for style in [LayoutStyle::Masonry, LayoutStyle::Grid] {
            let result = layout_with_style(style, &config(5, 8, 120), &list, 700.0, &mut alternating);
            let rects: Vec<_> = result.placements.values().collect();
            for (i, a) in rects.iter().enumerate() {
                for b in &rects[i + 1..] {
                    assert!(!a.intersects(b), "{style}: {a:?} overlaps {b:?}");
                }
            }
        }
    }
}
