//! Terminal shapes animation (default binary).
//!
//! Draws 40 frames of moving rectangles, squares, ellipses and circles to
//! stdout, pausing 70ms between frames. Logs go to stderr (`RUST_LOG`).

use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use term_shapes::app;
use term_shapes::engine::AnimationConfig;
use term_shapes::term::{FrameWriter, Rasterizer};

fn main() -> Result<()> {
    // stdout carries the frames; keep diagnostics on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let mut out = FrameWriter::new(io::stdout().lock());
    app::run(
        &AnimationConfig::default(),
        &Rasterizer::default(),
        &mut out,
    )?;
    Ok(())
}
