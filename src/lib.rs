//! Terminal shapes (workspace facade crate).
//!
//! This package exposes the `term_shapes::{core,engine,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`, and hosts
//! the animation driver in [`app`].

pub mod app;

pub use term_shapes_core as core;
pub use term_shapes_engine as engine;
pub use term_shapes_term as term;
pub use term_shapes_types as types;
