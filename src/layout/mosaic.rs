// SPDX-License-Identifier: MPL-2.0
//! Mosaic bin packing.
//!
//! The gallery is cut into square cells `cols` wide. Each item claims a
//! `spanX x spanY` block at the first free position in row-major order. The
//! grid grows one row at a time until the block fits, so allocation always
//! succeeds.

use super::{Eligible, Layout, LayoutStyle, Metrics};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// A block of mosaic cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRect {
    pub col: usize,
    pub row: usize,
    pub span_x: usize,
    pub span_y: usize,
}

impl CellRect {
    #[must_use]
    pub fn new(col: usize, row: usize, span_x: usize, span_y: usize) -> Self {
        Self {
            col,
            row,
            span_x,
            span_y,
        }
    }

    /// Last column covered (inclusive).
    #[must_use]
    pub fn last_col(&self) -> usize {
        self.col + self.span_x.saturating_sub(1)
    }

    /// Last row covered (inclusive).
    #[must_use]
    pub fn last_row(&self) -> usize {
        self.row + self.span_y.saturating_sub(1)
    }

    #[must_use]
    pub fn intersects(&self, other: &CellRect) -> bool {
        self.col < other.col + other.span_x
            && other.col < self.col + self.span_x
            && self.row < other.row + other.span_y
            && other.row < self.row + self.span_y
    }
}

/// Growable occupancy grid with a fixed number of columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    cols: usize,
    cells: Vec<Vec<bool>>,
}

impl OccupancyGrid {
    /// Creates a grid with one empty row. `cols` is clamped to at least 1.
    #[must_use]
    pub fn new(cols: usize) -> Self {
        let cols = cols.max(1);
        Self {
            cols,
            cells: vec![vec![false; cols]],
        }
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_occupied(&self, col: usize, row: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Clamps a requested span to `1..=cols` on both axes.
    #[must_use]
    pub fn clamp_span(&self, span: u32) -> usize {
        (span as usize).clamp(1, self.cols)
    }

    fn fits(&self, col: usize, row: usize, span_x: usize, span_y: usize) -> bool {
        col + span_x <= self.cols
            && row + span_y <= self.rows()
            && (row..row + span_y)
                .all(|r| (col..col + span_x).all(|c| !self.cells[r][c]))
    }

    fn first_fit(&self, span_x: usize, span_y: usize) -> Option<(usize, usize)> {
        (0..self.rows())
            .flat_map(|row| (0..self.cols).map(move |col| (col, row)))
            .find(|&(col, row)| self.fits(col, row, span_x, span_y))
    }

    /// Claims the first free block of the given span, growing the grid as
    /// needed. Spans are clamped with [`Self::clamp_span`].
    pub fn allocate(&mut self, span_x: u32, span_y: u32) -> CellRect {
        let span_x = self.clamp_span(span_x);
        let span_y = self.clamp_span(span_y);

        let (col, row) = loop {
            if let Some(position) = self.first_fit(span_x, span_y) {
                break position;
            }
            self.cells.push(vec![false; self.cols]);
        };

        for cells in &mut self.cells[row..row + span_y] {
            for cell in &mut cells[col..col + span_x] {
                *cell = true;
            }
        }
        CellRect::new(col, row, span_x, span_y)
    }
}

pub(super) fn pack(metrics: &Metrics, items: &[Eligible<'_>]) -> Layout {
    let cols = metrics.column_count();
    let cell = metrics.column_width(cols);
    let stride = cell + metrics.gap;

    let mut layout = Layout {
        style: LayoutStyle::Mosaic,
        columns: Some(cols),
        ..Layout::default()
    };
    if items.is_empty() {
        layout.content_height = 2.0 * metrics.padding;
        return layout;
    }

    let extent = |span: usize| span as f32 * cell + span.saturating_sub(1) as f32 * metrics.gap;

    let mut grid = OccupancyGrid::new(cols);
    for eligible in items {
        let block = grid.allocate(eligible.item.span_x, eligible.item.span_y);
        layout.placements.insert(
            eligible.item.id,
            Rect::new(
                metrics.padding + block.col as f32 * stride,
                metrics.padding + block.row as f32 * stride,
                extent(block.span_x),
                extent(block.span_y),
            ),
        );
        layout.cells.insert(eligible.item.id, block);
    }

    layout.content_height = 2.0 * metrics.padding + extent(grid.rows());
    layout
}
