// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control configuration: cell count and geometry, glyphs, font, colors, flare, hit testing.
//!
//! [`RatingConfig::default`] reproduces the classic six-star control:
//! 40×40 cells 8 apart, a bold 32 pt outline star, black when active and gray otherwise.

use kurbo::Size;

use crate::flare::Flare;

/// An sRGB color with straight alpha.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);
    /// Opaque mid gray.
    pub const GRAY: Self = Self::rgb8(128, 128, 128);

    /// An opaque color.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// A color with explicit alpha.
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Font weight for cell glyphs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    /// Regular weight.
    Regular,
    /// Bold weight.
    #[default]
    Bold,
}

/// Font used to draw cell glyphs, in the host's system face.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontSpec {
    /// Point size.
    pub size: f64,
    /// Weight.
    pub weight: FontWeight,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size: 32.0,
            weight: FontWeight::Bold,
        }
    }
}

/// Glyphs drawn for active and inactive cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyphs {
    /// Glyph for cells at or below the current value.
    pub active: char,
    /// Glyph for cells above the current value.
    pub inactive: char,
}

impl Glyphs {
    /// White star.
    pub const OUTLINE_STAR: char = '\u{2606}';
    /// Black star.
    pub const FILLED_STAR: char = '\u{2605}';

    /// Outline star in both states; only the color tells them apart.
    pub const fn outline() -> Self {
        Self {
            active: Self::OUTLINE_STAR,
            inactive: Self::OUTLINE_STAR,
        }
    }

    /// Filled star when active, outline star otherwise.
    pub const fn filled() -> Self {
        Self {
            active: Self::FILLED_STAR,
            inactive: Self::OUTLINE_STAR,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::outline()
    }
}

/// How a pointer location is resolved to a cell.
///
/// Both strategies return the same cell for every location.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitTest {
    /// Test each cell's bounds in order. Linear in the cell count.
    Scan,
    /// Derive the candidate cell from the x coordinate and the cell pitch. Constant time.
    #[default]
    Pitch,
}

/// Reasons a [`RatingConfig`] cannot build a control.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The control needs at least one cell.
    #[error("cell count must be at least 1")]
    NoCells,
    /// Cells must have a positive, finite size.
    #[error("cell size must be positive and finite, got {0}")]
    CellSize(f64),
    /// Spacing must be non-negative and finite.
    #[error("cell spacing must be non-negative and finite, got {0}")]
    Spacing(f64),
    /// The flare peak must be positive and finite.
    #[error("flare peak scale must be positive and finite, got {0}")]
    FlarePeak(f64),
}

/// Everything that shapes a rating control.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RatingConfig {
    /// Number of cells, which is also the highest rating.
    pub cell_count: usize,
    /// Side of each square cell.
    pub cell_size: f64,
    /// Gap before the first cell, between cells, and after the last cell.
    pub spacing: f64,
    /// Glyph font.
    pub font: FontSpec,
    /// Glyphs per state.
    pub glyphs: Glyphs,
    /// Text color of active cells.
    pub active_color: Color,
    /// Text color of inactive cells.
    pub inactive_color: Color,
    /// Flare played on a newly selected cell.
    pub flare: Flare,
    /// Hit-testing strategy.
    pub hit_test: HitTest,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            cell_count: 6,
            cell_size: 40.0,
            spacing: 8.0,
            font: FontSpec::default(),
            glyphs: Glyphs::default(),
            active_color: Color::BLACK,
            inactive_color: Color::GRAY,
            flare: Flare::default(),
            hit_test: HitTest::default(),
        }
    }
}

impl RatingConfig {
    /// Set the number of cells.
    pub fn with_cell_count(mut self, cell_count: usize) -> Self {
        self.cell_count = cell_count;
        self
    }

    /// Set the cell side.
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Set the spacing.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the glyph font.
    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }

    /// Set the glyphs.
    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Set the active and inactive colors.
    pub fn with_colors(mut self, active: Color, inactive: Color) -> Self {
        self.active_color = active;
        self.inactive_color = inactive;
        self
    }

    /// Set the flare.
    pub fn with_flare(mut self, flare: Flare) -> Self {
        self.flare = flare;
        self
    }

    /// Set the hit-testing strategy.
    pub fn with_hit_test(mut self, hit_test: HitTest) -> Self {
        self.hit_test = hit_test;
        self
    }

    /// Check that the configuration can lay out a control.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_count == 0 {
            return Err(ConfigError::NoCells);
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return Err(ConfigError::Spacing(self.spacing));
        }
        let peak = self.flare.peak_scale;
        if !(peak.is_finite() && peak > 0.0) {
            return Err(ConfigError::FlarePeak(peak));
        }
        Ok(())
    }

    /// Distance between the left edges of consecutive cells.
    pub fn pitch(&self) -> f64 {
        self.cell_size + self.spacing
    }

    /// Size that fits every cell with spacing on both ends.
    ///
    /// Width is `n·size + (n+1)·spacing`; height is one cell.
    pub fn preferred_size(&self) -> Size {
        let n = self.cell_count as f64;
        Size::new(n * self.cell_size + (n + 1.0) * self.spacing, self.cell_size)
    }
}
