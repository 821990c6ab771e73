//! Terminal "shape renderer" module.
//!
//! Shapes are rasterized into a plain character framebuffer which is then
//! streamed to any `Write` sink as lines of text.
//!
//! Goals:
//! - Keep `core` geometry free of any notion of cells or glyphs
//! - Keep rasterization pure (no I/O) so it can be unit-tested
//! - Compensate for the terminal glyph aspect ratio when sampling

pub mod fb;
pub mod raster;
pub mod renderer;

pub use term_shapes_core as core;
pub use term_shapes_types as types;

pub use fb::FrameBuffer;
pub use raster::{RasterConfig, Rasterizer};
pub use renderer::{encode_frame_into, render_to_string, FrameWriter};
