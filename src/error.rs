use std::fmt;

use crate::core::square::Square;

/// Structured errors returned by board, game and configuration routines.
///
/// Queries that merely find nothing to move (an empty origin handed to move
/// generation or the legality check) are not errors: they answer with an empty
/// list or `false`. Only operations that would otherwise corrupt state, such as
/// committing a move from an empty square, report [`ChessError::EmptyOrigin`].
#[derive(Debug)]
pub enum ChessError {
    /// File outside `A..=H` or rank outside `1..=8`, or a malformed label.
    InvalidSquare { label: String },
    /// Unknown piece kind or color code.
    InvalidPiece { code: String },
    /// A move string that is not two whitespace-separated squares.
    InvalidMove { text: String },
    /// Commit requested from a square with no piece on it.
    EmptyOrigin { square: Square },
    /// The game configuration is internally inconsistent.
    Config { reason: String },
    /// I/O failure while reading a configuration file.
    Io { path: String, error: String },
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidSquare { label } => write!(f, "invalid square: {label:?}"),
            ChessError::InvalidPiece { code } => write!(f, "invalid piece code: {code:?}"),
            ChessError::InvalidMove { text } => {
                write!(f, "invalid move {text:?} (expected two squares, e.g. \"E2 E4\")")
            }
            ChessError::EmptyOrigin { square } => write!(f, "no piece on {square}"),
            ChessError::Config { reason } => write!(f, "invalid config: {reason}"),
            ChessError::Io { path, error } => write!(f, "io error for {path}: {error}"),
        }
    }
}

impl std::error::Error for ChessError {}
