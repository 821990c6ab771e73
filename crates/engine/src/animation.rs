//! Animation run configuration and the frame sequence.

use std::iter::FusedIterator;
use std::ops::Range;
use std::time::Duration;

use crate::scene::{scene_for_frame, Scene};
use crate::types::{FRAME_COUNT, FRAME_INTERVAL_MS};

/// How many frames to produce and how long to pause after each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    pub frames: u32,
    pub frame_interval: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: FRAME_COUNT,
            frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
        }
    }
}

impl AnimationConfig {
    pub fn new(frames: u32, frame_interval: Duration) -> Self {
        Self {
            frames,
            frame_interval,
        }
    }

    /// The frame sequence for this configuration, starting at frame 0.
    pub fn frames(&self) -> Frames {
        Frames { range: 0..self.frames }
    }
}

/// Ordered, finite sequence of `(frame_index, scene)` pairs.
///
/// Once exhausted it stays exhausted; start a new run with
/// [`AnimationConfig::frames`].
#[derive(Debug, Clone)]
pub struct Frames {
    range: Range<u32>,
}

impl Iterator for Frames {
    type Item = (u32, Scene);

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|f| (f, scene_for_frame(f)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for Frames {}

impl FusedIterator for Frames {}
