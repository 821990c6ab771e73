//! Animation driver: build each frame's scene, draw it, write it, pause.

use std::io::Write;
use std::thread;

use anyhow::Result;
use tracing::{debug, info, trace};

use crate::engine::AnimationConfig;
use crate::term::{FrameBuffer, FrameWriter, Rasterizer};

/// Run the animation to completion, writing one block per frame to `out`.
///
/// Returns the number of frames written. The pause after each frame is a plain
/// blocking sleep; a zero `frame_interval` skips it.
pub fn run<W: Write>(
    config: &AnimationConfig,
    raster: &Rasterizer,
    out: &mut FrameWriter<W>,
) -> Result<u32> {
    info!(
        frames = config.frames,
        interval_ms = config.frame_interval.as_millis() as u64,
        "starting animation"
    );

    let grid = raster.config();
    let mut fb = FrameBuffer::new(grid.columns, grid.rows);
    let mut written = 0;

    for (frame, scene) in config.frames() {
        debug!(frame, shapes = scene.len(), "drawing frame");
        for shape in &scene {
            trace!(frame, kind = shape.kind().as_str(), "shape");
        }

        raster.draw_into(&scene, &mut fb);
        out.write_frame(&fb)?;
        written += 1;

        if !config.frame_interval.is_zero() {
            thread::sleep(config.frame_interval);
        }
    }

    info!(frames = written, "animation finished");
    Ok(written)
}
