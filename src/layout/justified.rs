// SPDX-License-Identifier: MPL-2.0
//! Justified rows ("horizontal" style).
//!
//! Every item is first scaled to the target row height (`thumbnailSize`) and
//! dropped into the first row with room left. Each row is then rescaled so
//! its items plus gaps span the inner width exactly.

use super::{Eligible, Layout, LayoutStyle, Metrics};
use crate::geometry::Rect;

/// A row under construction.
#[derive(Debug, Default)]
struct Row {
    /// Indices into the eligible list, in placement order.
    members: Vec<usize>,
    /// Start X of the next item: widths plus one gap per member.
    cursor: f32,
    /// Sum of member widths at the target height.
    widths: f32,
}

impl Row {
    fn fits(&self, width: f32, row_width: f32) -> bool {
        self.cursor + width < row_width
    }

    fn push(&mut self, index: usize, width: f32, gap: f32) {
        self.members.push(index);
        self.cursor += width + gap;
        self.widths += width;
    }

    /// Height at which members plus gaps span `row_width` exactly.
    fn justified_height(&self, row_width: f32, target: f32, gap: f32) -> f32 {
        if self.widths <= 0.0 {
            return 0.0;
        }
        let gaps = self.members.len().saturating_sub(1) as f32 * gap;
        (target * (row_width - gaps) / self.widths).max(0.0)
    }
}

pub(super) fn rows(metrics: &Metrics, items: &[Eligible<'_>]) -> Layout {
    let target = metrics.thumbnail_size;
    let row_width = metrics.inner_width();
    let gap = metrics.gap;

    let mut rows: Vec<Row> = Vec::new();
    for (index, eligible) in items.iter().enumerate() {
        let width = target * eligible.aspect_ratio();
        match rows.iter_mut().find(|row| row.fits(width, row_width)) {
            Some(row) => row.push(index, width, gap),
            None => {
                let mut row = Row::default();
                row.push(index, width, gap);
                rows.push(row);
            }
        }
    }

    let mut layout = Layout {
        style: LayoutStyle::Horizontal,
        ..Layout::default()
    };
    if rows.is_empty() {
        layout.content_height = 2.0 * metrics.padding;
        return layout;
    }

    let mut top = 0.0;
    for row in &rows {
        let height = row.justified_height(row_width, target, gap);
        let mut left = 0.0;
        for &index in &row.members {
            let eligible = &items[index];
            let width = height * eligible.aspect_ratio();
            layout.placements.insert(
                eligible.item.id,
                Rect::new(metrics.padding + left, metrics.padding + top, width, height),
            );
            left += width + gap;
        }
        top += height + gap;
    }

    // The last row carries no trailing gap.
    layout.content_height = 2.0 * metrics.padding + top - gap;
    layout
}
