//! Chess rules on the standard 8×8 board.

pub mod board;
pub mod legality;
pub mod movegen;
pub mod moves;
pub mod piece;
