//! FrameWriter: streams framebuffers to an output sink as plain text.
//!
//! Every row is written followed by `\n`. No cursor movement or styling is
//! emitted, so consecutive frames simply follow each other in the stream.

use std::io::Write;

use anyhow::Result;

use crossterm::{style::Print, QueueableCommand};

use crate::fb::FrameBuffer;

/// Writes whole frames to `W`, one `write_all` + `flush` per frame.
pub struct FrameWriter<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Encode and flush one frame.
    ///
    /// The frame is assembled in an internal buffer first, so a frame is never
    /// interleaved with other output written through this writer.
    pub fn write_frame(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, &mut self.buf)?;
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Encode a full frame into `out`.
///
/// This builds a sequence of crossterm commands without writing to the sink.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    for row in fb.rows() {
        for &ch in row {
            out.queue(Print(ch))?;
        }
        out.queue(Print('\n'))?;
    }
    Ok(())
}

/// Render a frame as a `String`, one `\n`-terminated line per row.
pub fn render_to_string(fb: &FrameBuffer) -> String {
    let mut s = String::with_capacity((fb.width() as usize + 1) * fb.height() as usize);
    for row in fb.rows() {
        s.extend(row.iter());
        s.push('\n');
    }
    s
}
