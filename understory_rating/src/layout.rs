// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell layout and hit testing.
//!
//! ## Geometry
//!
//! Cells are square, `cell_size` on a side, in one row at `y = 0`.
//! The first starts `spacing` from the left edge and consecutive cells are one
//! pitch (`cell_size + spacing`) apart, so cell `i` (1-based) spans
//! `x ∈ [spacing + (i-1)·pitch, spacing + (i-1)·pitch + cell_size)`.
//!
//! ## Hit testing
//!
//! Containment is half-open, like [`Rect::contains`].
//! Points in the gaps between cells, or outside every cell, hit nothing.
//! [`CellLayout::hit_test_scan`] tests cells in order.
//! [`CellLayout::hit_test_pitch`] estimates the cell from the x coordinate and
//! confirms it (and its neighbors, to absorb rounding at cell edges) against the
//! same bounds, so the two always agree.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::config::{HitTest, RatingConfig};

/// One selectable position in the row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cell {
    index: usize,
    bounds: Rect,
}

impl Cell {
    /// Rating this cell stands for, from 1.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Bounds in the control's coordinate space.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Where the glyph is centered.
    pub fn anchor(&self) -> Point {
        self.bounds.center()
    }
}

/// The fixed row of cells for one control.
#[derive(Clone, Debug, PartialEq)]
pub struct CellLayout {
    cells: Vec<Cell>,
    cell_size: f64,
    spacing: f64,
    strategy: HitTest,
}

impl CellLayout {
    /// Place the cells described by `config`.
    ///
    /// Expects a configuration that passed [`RatingConfig::validate`].
    pub fn new(config: &RatingConfig) -> Self {
        let pitch = config.pitch();
        let cells = (0..config.cell_count)
            .map(|slot| {
                let x0 = config.spacing + slot as f64 * pitch;
                Cell {
                    index: slot + 1,
                    bounds: Rect::new(x0, 0.0, x0 + config.cell_size, config.cell_size),
                }
            })
            .collect();
        Self {
            cells,
            cell_size: config.cell_size,
            spacing: config.spacing,
            strategy: config.hit_test,
        }
    }

    /// All cells, ordered by index.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell for rating `index` (1-based).
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        index.checked_sub(1).and_then(|slot| self.cells.get(slot))
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the layout has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Distance between the left edges of consecutive cells.
    pub fn pitch(&self) -> f64 {
        self.cell_size + self.spacing
    }

    /// Size that fits every cell with spacing on both ends.
    pub fn preferred_size(&self) -> Size {
        let width = self
            .cells
            .last()
            .map_or(self.spacing, |last| last.bounds.x1 + self.spacing);
        Size::new(width, self.cell_size)
    }

    /// The cell containing `pt`, using the configured strategy.
    pub fn hit_test(&self, pt: Point) -> Option<&Cell> {
        match self.strategy {
            HitTest::Scan => self.hit_test_scan(pt),
            HitTest::Pitch => self.hit_test_pitch(pt),
        }
    }

    /// The cell containing `pt`, testing every cell in order.
    pub fn hit_test_scan(&self, pt: Point) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.bounds.contains(pt))
    }

    /// The cell containing `pt`, computed from the x coordinate.
    pub fn hit_test_pitch(&self, pt: Point) -> Option<&Cell> {
        let last = self.cells.len().checked_sub(1)?;
        // `max` also maps NaN to slot 0; the bounds check below rejects it.
        let estimate = ((pt.x - self.spacing) / self.pitch()).max(0.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "truncation toward zero is the slot computation; the cast saturates"
        )]
        let slot = (estimate as usize).min(last);
        let lo = slot.saturating_sub(1);
        let hi = (slot + 1).min(last);
        self.cells[lo..=hi]
            .iter()
            .find(|cell| cell.bounds.contains(pt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> CellLayout {
        CellLayout::new(&RatingConfig::default())
    }

    #[test]
    fn cells_are_placed_left_to_right() {
        let layout = layout();
        assert_eq!(layout.len(), 6);
        let xs: Vec<f64> = layout.cells().iter().map(|c| c.bounds().x0).collect();
        assert_eq!(xs, [8.0, 56.0, 104.0, 152.0, 200.0, 248.0]);
        for (slot, cell) in layout.cells().iter().enumerate() {
            assert_eq!(cell.index(), slot + 1);
            assert_eq!(cell.bounds().size(), Size::new(40.0, 40.0));
            assert_eq!(cell.bounds().y0, 0.0);
        }
    }

    #[test]
    fn preferred_size_matches_config() {
        let config = RatingConfig::default();
        assert_eq!(layout().preferred_size(), config.preferred_size());
        let dense = config.with_cell_count(11).with_spacing(3.5);
        assert_eq!(
            CellLayout::new(&dense).preferred_size(),
            dense.preferred_size()
        );
    }

    #[test]
    fn cell_lookup_is_one_based() {
        let layout = layout();
        assert!(layout.cell(0).is_none());
        assert_eq!(layout.cell(1).map(Cell::index), Some(1));
        assert_eq!(layout.cell(6).map(Cell::index), Some(6));
        assert!(layout.cell(7).is_none());
        assert_eq!(layout.cell(4).map(Cell::anchor), Some(Point::new(172.0, 20.0)));
    }

    #[test]
    fn centers_hit_their_cells() {
        let layout = layout();
        for cell in layout.cells() {
            assert_eq!(layout.hit_test_scan(cell.anchor()), Some(cell));
            assert_eq!(layout.hit_test_pitch(cell.anchor()), Some(cell));
        }
    }

    #[test]
    fn gaps_and_outside_hit_nothing() {
        let layout = layout();
        for pt in [
            Point::new(4.0, 20.0),    // leading spacing
            Point::new(52.0, 20.0),   // gap between 1 and 2
            Point::new(48.0, 20.0),   // right edge of 1 is exclusive
            Point::new(292.0, 20.0),  // trailing spacing
            Point::new(500.0, 20.0),  // far right
            Point::new(20.0, -1.0),   // above
            Point::new(20.0, 40.0),   // bottom edge is exclusive
            Point::new(-30.0, 20.0),  // far left
            Point::new(f64::NAN, 20.0),
        ] {
            assert_eq!(layout.hit_test_scan(pt), None, "scan hit at {pt:?}");
            assert_eq!(layout.hit_test_pitch(pt), None, "pitch hit at {pt:?}");
        }
    }

    #[test]
    fn left_edges_are_inclusive() {
        let layout = layout();
        let edge = Point::new(56.0, 0.0);
        assert_eq!(layout.hit_test_pitch(edge).map(Cell::index), Some(2));
        assert_eq!(layout.hit_test_scan(edge).map(Cell::index), Some(2));
    }

    #[test]
    fn strategies_agree_on_a_dense_sweep() {
        for config in [
            RatingConfig::default(),
            RatingConfig::default().with_spacing(0.0),
            RatingConfig::default()
                .with_cell_count(37)
                .with_cell_size(7.3)
                .with_spacing(0.1),
        ] {
            let layout = CellLayout::new(&config);
            let width = config.preferred_size().width;
            let mut x = -5.0;
            while x < width + 5.0 {
                for y in [0.0, 3.0, config.cell_size - 1e-9, config.cell_size] {
                    let pt = Point::new(x, y);
                    assert_eq!(
                        layout.hit_test_scan(pt),
                        layout.hit_test_pitch(pt),
                        "strategies disagree at {pt:?}"
                    );
                }
                x += 0.05;
            }
        }
    }

    #[test]
    fn zero_spacing_edges_belong_to_the_right_cell() {
        let config = RatingConfig::default().with_spacing(0.0);
        let layout = CellLayout::new(&config);
        let index_at = |x| layout.hit_test_pitch(Point::new(x, 1.0)).map(Cell::index);
        assert_eq!(index_at(40.0), Some(2));
        assert_eq!(index_at(39.999), Some(1));
        assert_eq!(index_at(0.0), Some(1));
    }

    #[test]
    fn configured_strategy_is_used() {
        let scan = CellLayout::new(&RatingConfig::default().with_hit_test(HitTest::Scan));
        let pt = Point::new(130.0, 10.0);
        assert_eq!(scan.hit_test(pt).map(Cell::index), Some(3));
        assert_eq!(layout().hit_test(pt).map(Cell::index), Some(3));
    }
}
