//! Rasterizer: samples shapes onto a character grid.
//!
//! This module is pure (no I/O). Cell `(col, row)` is sampled at the continuous
//! point `(col * x_scale, row * y_scale)`. The outermost rows and columns are
//! always border glyphs, whatever the shapes cover there.

use crate::core::Shape;
use crate::fb::FrameBuffer;
use crate::types::{
    Point, GLYPH_BLANK, GLYPH_BORDER_HORIZONTAL, GLYPH_BORDER_VERTICAL, GLYPH_FILL, GRID_COLUMNS,
    GRID_ROWS, X_SCALE, Y_SCALE,
};

/// Grid dimensions and sampling steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterConfig {
    pub columns: u16,
    pub rows: u16,
    pub x_scale: f32,
    pub y_scale: f32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            x_scale: X_SCALE,
            y_scale: Y_SCALE,
        }
    }
}

/// Draws a list of shapes into a bordered framebuffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rasterizer {
    config: RasterConfig,
}

impl Rasterizer {
    pub fn new(config: RasterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Continuous-space sample point for a grid cell.
    #[inline]
    pub fn sample_point(&self, col: u16, row: u16) -> Point {
        Point::new(
            col as f32 * self.config.x_scale,
            row as f32 * self.config.y_scale,
        )
    }

    /// Glyph for a single cell.
    ///
    /// Borders win over fill. Interior cells are filled when any shape contains
    /// the sample point (union of all shapes).
    #[inline]
    pub fn glyph_at(&self, shapes: &[Shape], col: u16, row: u16) -> char {
        let RasterConfig { columns, rows, .. } = self.config;

        if row == 0 || row + 1 == rows {
            return GLYPH_BORDER_HORIZONTAL;
        }
        if col == 0 || col + 1 == columns {
            return GLYPH_BORDER_VERTICAL;
        }

        let p = self.sample_point(col, row);
        if shapes.iter().any(|s| s.contains(p)) {
            GLYPH_FILL
        } else {
            GLYPH_BLANK
        }
    }

    /// Render `shapes` into an existing framebuffer.
    ///
    /// The framebuffer is resized to the configured grid, so callers can reuse
    /// one buffer across frames.
    pub fn draw_into(&self, shapes: &[Shape], fb: &mut FrameBuffer) {
        let RasterConfig { columns, rows, .. } = self.config;
        fb.resize(columns, rows);

        for row in 0..rows {
            for col in 0..columns {
                fb.set(col, row, self.glyph_at(shapes, col, row));
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn draw(&self, shapes: &[Shape]) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.config.columns, self.config.rows);
        self.draw_into(shapes, &mut fb);
        fb
    }
}
