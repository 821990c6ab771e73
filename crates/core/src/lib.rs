//! Core geometry module - pure, deterministic, and testable
//!
//! This module contains the shape model: a closed set of shape variants, each
//! with a containment predicate over a [`Point`](crate::types::Point).
//! It has **zero dependencies** on rendering, timing, or I/O, making it:
//!
//! - **Total**: every predicate is defined for every point, with no error path
//! - **Stateless**: shapes are `Copy` values with no identity across frames
//! - **Testable**: containment is a plain function of its inputs
//!
//! # Module Structure
//!
//! - [`shapes`]: `Rectangle`, `Square`, `Ellipse`, `Circle` and the `Shape` sum type
//!
//! # Containment Rules
//!
//! All boundaries are inclusive:
//!
//! - **Rectangle**: `anchor.x <= x <= anchor.x + width` and likewise for `y`
//! - **Square**: a rectangle with `width = height = side`
//! - **Ellipse**: `d(p, f1) + d(p, f2) <= string_length`
//! - **Circle**: `d(p, center) <= radius`
//!
//! # Example
//!
//! ```
//! use term_shapes_core::{Circle, Rectangle, Shape};
//! use term_shapes_types::Point;
//!
//! let shapes: [Shape; 2] = [
//!     Rectangle::new(Point::new(5.0, 5.0), 2.0, 8.0).into(),
//!     Circle::new(Point::new(50.0, 35.0), 15.0).into(),
//! ];
//!
//! let p = Point::new(6.0, 10.0);
//! assert!(shapes.iter().any(|s| s.contains(p)));
//! ```

pub mod shapes;

pub use term_shapes_types as types;

pub use shapes::{Circle, Ellipse, Rectangle, Shape, ShapeKind, Square};
