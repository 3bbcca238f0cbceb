//! An 8×8 chess rules engine: board model, pseudo-legal move generation and
//! move-legality checks, plus a material-sampling computer player and a simple
//! game driver.
//!
//! Known gaps, kept on purpose: moves that leave the mover's own king
//! capturable are not filtered, the game ends only when a king is actually
//! captured, and en passant, promotion and draw rules are absent. Castling is a
//! shortcut: an unmoved king may move onto an unmoved same-color rook along a
//! clear rank, displacing it.

pub mod chess;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod game;
