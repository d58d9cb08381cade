// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The star rating control.
//!
//! ## Value update
//!
//! Every accepted pointer location goes through one rule: find the cell under
//! the pointer, and if it exists and differs from the current value, flare it,
//! take its index as the new value, and report [`ControlEvents::VALUE_CHANGED`].
//! Anything else (a gap, outside every cell, the current cell again) changes nothing.
//!
//! ## Tracking
//!
//! [`StarRating`] implements [`GestureResponsive`]:
//! - press: value update at the press location;
//! - move inside the bounds: drag-inside, then value update;
//! - move outside: drag-outside only;
//! - release inside: up-inside, then value update;
//! - release outside: up-outside only;
//! - cancel: cancel only.

use kurbo::{Point, Rect, Size};
use understory_tracking::control::Control;
use understory_tracking::types::{ControlEvents, GestureResponsive, Response, Touch};

use crate::config::{Color, ConfigError, FontSpec, RatingConfig};
use crate::flare::{Animator, Flares, perform_flare};
use crate::layout::{Cell, CellLayout};

/// What the host draws for one cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellStyle {
    /// Glyph, centered on [`Cell::anchor`].
    pub glyph: char,
    /// Text color.
    pub color: Color,
    /// Font.
    pub font: FontSpec,
}

/// A row of cells that records an integer rating from 1 to the cell count.
///
/// The value starts at 1 and only changes through tracking.
/// Whether a cell is active is derived from the value on every read.
#[derive(Clone, Debug)]
pub struct StarRating<A = Flares> {
    config: RatingConfig,
    layout: CellLayout,
    value: usize,
    bounds: Rect,
    animator: A,
}

/// A [`StarRating`] composed with its tracker and actions.
pub type RatingControl<A = Flares> = Control<StarRating<A>>;

impl<A: Animator> StarRating<A> {
    /// Lay out a control from `config`, sending flares to `animator`.
    pub fn new(config: RatingConfig, animator: A) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = CellLayout::new(&config);
        let bounds = Rect::from_origin_size(Point::ORIGIN, layout.preferred_size());
        tracing::debug!(
            cells = config.cell_count,
            width = bounds.width(),
            height = bounds.height(),
            "rating control laid out"
        );
        Ok(Self {
            config,
            layout,
            value: 1,
            bounds,
            animator,
        })
    }

    /// Current rating, in `1..=cell_count`.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.layout.len()
    }

    /// Configuration the control was built from.
    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Cell geometry.
    pub fn layout(&self) -> &CellLayout {
        &self.layout
    }

    /// All cells, ordered by index.
    pub fn cells(&self) -> &[Cell] {
        self.layout.cells()
    }

    /// The cell for rating `index` (1-based).
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.layout.cell(index)
    }

    /// Returns true if the cell for rating `index` exists and is at or below the value.
    pub fn is_active(&self, index: usize) -> bool {
        (1..=self.value).contains(&index)
    }

    /// How to draw the cell for rating `index`.
    pub fn style(&self, index: usize) -> Option<CellStyle> {
        self.layout.cell(index)?;
        let (glyph, color) = if self.is_active(index) {
            (self.config.glyphs.active, self.config.active_color)
        } else {
            (self.config.glyphs.inactive, self.config.inactive_color)
        };
        Some(CellStyle {
            glyph,
            color,
            font: self.config.font,
        })
    }

    /// Text color of the cell for rating `index`.
    pub fn text_color(&self, index: usize) -> Option<Color> {
        self.style(index).map(|s| s.color)
    }

    /// Glyph of the cell for rating `index`.
    pub fn glyph(&self, index: usize) -> Option<char> {
        self.style(index).map(|s| s.glyph)
    }

    /// Size the host should give the control when it has no explicit frame.
    pub fn preferred_size(&self) -> Size {
        self.layout.preferred_size()
    }

    /// Replace the bounds used for inside/outside decisions.
    ///
    /// Cells keep their positions; this only moves the edge a drag crosses.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// The animator receiving flares.
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// The animator receiving flares, mutably (for example to tick [`Flares`]).
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    fn update_value(&mut self, location: Point) -> ControlEvents {
        let Some(cell) = self.layout.hit_test(location) else {
            tracing::trace!(x = location.x, y = location.y, "no cell under pointer");
            return ControlEvents::empty();
        };
        let index = cell.index();
        if index == self.value {
            return ControlEvents::empty();
        }
        perform_flare(&mut self.animator, index, cell.bounds(), &self.config.flare);
        let previous = core::mem::replace(&mut self.value, index);
        tracing::debug!(from = previous, to = index, "rating changed");
        ControlEvents::VALUE_CHANGED
    }
}

impl<A: Animator> GestureResponsive for StarRating<A> {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn begin_tracking(&mut self, touch: &Touch) -> Response {
        Response::track(self.update_value(touch.location))
    }

    fn continue_tracking(&mut self, touch: &Touch) -> Response {
        if self.bounds.contains(touch.location) {
            tracing::trace!(x = touch.location.x, y = touch.location.y, "drag inside");
            Response::track(ControlEvents::TOUCH_DRAG_INSIDE | self.update_value(touch.location))
        } else {
            tracing::trace!(x = touch.location.x, y = touch.location.y, "drag outside");
            Response::track(ControlEvents::TOUCH_DRAG_OUTSIDE)
        }
    }

    fn end_tracking(&mut self, touch: Option<&Touch>) -> ControlEvents {
        let Some(touch) = touch else {
            return ControlEvents::empty();
        };
        if self.bounds.contains(touch.location) {
            ControlEvents::TOUCH_UP_INSIDE | self.update_value(touch.location)
        } else {
            ControlEvents::TOUCH_UP_OUTSIDE
        }
    }
}
