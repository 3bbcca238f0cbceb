//! Move selection: material scoring and a sampled picker on top of it.
//!
//! - [`eval`]: material differential after a move, computed on an owned scratch board.
//! - [`picker`]: draws a handful of random pseudo-legal moves and keeps the best scoring one.

pub mod eval;
pub mod picker;
