//! Animation engine - frame-indexed scene construction.
//!
//! Each frame's shapes are rebuilt from nothing but the frame index, so a frame
//! can be reproduced in isolation and no state carries over between frames.
//!
//! - [`scene`]: the motion profile mapping a frame index to its shapes
//! - [`animation`]: run length and pacing, plus the frame sequence itself

pub mod animation;
pub mod scene;

pub use term_shapes_core as core;
pub use term_shapes_types as types;

pub use animation::{AnimationConfig, Frames};
pub use scene::{scene_for_frame, Scene};
