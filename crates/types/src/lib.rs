//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (geometry, rasterization, animation).
//!
//! # Grid Dimensions
//!
//! The output grid models a classic terminal window:
//!
//! - **Columns**: 80 (indexed 0-79)
//! - **Rows**: 25 (indexed 0-24)
//!
//! # Sampling Scale
//!
//! Each grid cell is mapped to a point in continuous space. A terminal glyph is
//! roughly 1.9 times taller than it is wide, so rows are sampled further apart
//! than columns:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `X_SCALE` | 1.0 | Horizontal distance between column samples |
//! | `Y_SCALE` | 1.9 | Vertical distance between row samples |
//!
//! # Animation Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_COUNT` | 40 | Frames in one run of the animation |
//! | `FRAME_INTERVAL_MS` | 70 | Pause after each frame |
//!
//! # Examples
//!
//! ```
//! use term_shapes_types::{Point, GRID_COLUMNS, GRID_ROWS};
//!
//! let a = Point::new(0.0, 0.0);
//! let b = Point::new(3.0, 4.0);
//! assert_eq!(a.distance(b), 5.0);
//!
//! assert_eq!(GRID_COLUMNS, 80);
//! assert_eq!(GRID_ROWS, 25);
//! ```

/// Grid width in character cells (80 columns)
pub const GRID_COLUMNS: u16 = 80;

/// Grid height in character cells (25 rows)
pub const GRID_ROWS: u16 = 25;

/// Continuous-space distance between two adjacent columns
pub const X_SCALE: f32 = 1.0;

/// Continuous-space distance between two adjacent rows
pub const Y_SCALE: f32 = 1.9;

/// Number of frames rendered by one run of the animation
pub const FRAME_COUNT: u32 = 40;

/// Pause between frames in milliseconds
pub const FRAME_INTERVAL_MS: u64 = 70;

/// Maximum number of shapes drawn in a single frame
pub const MAX_SHAPES: usize = 8;

/// Top and bottom border glyph
pub const GLYPH_BORDER_HORIZONTAL: char = '-';

/// Left and right border glyph
pub const GLYPH_BORDER_VERTICAL: char = '|';

/// Glyph for a cell covered by at least one shape
pub const GLYPH_FILL: char = '*';

/// Glyph for an uncovered interior cell
pub const GLYPH_BLANK: char = ' ';


/// A position in the continuous coordinate space shapes live in.
///
/// `x` grows to the right and `y` grows downward, matching the order in which
/// the grid is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin, `(0, 0)`
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    /// Create a point from its coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    ///
    /// # Examples
    ///
    /// ```
    /// use term_shapes_types::Point;
    ///
    /// let center = Point::ORIGIN;
    /// assert_eq!(center.distance(Point::new(0.0, 7.0)), 7.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
