use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::offset::{Offset, BISHOP_DIRS, KING_STEPS, KNIGHT_DELTAS, QUEEN_DIRS, ROOK_DIRS};
use crate::error::ChessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// How a piece kind moves: a set of offsets, applied once or repeated along a ray.
///
/// Pawns have no pattern here; their moves depend on color and occupancy.
#[derive(Debug, Clone, Copy)]
pub struct MovePattern {
    pub offsets: &'static [Offset],
    pub sliding: bool,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value used by the evaluator.
    #[inline]
    pub fn point_value(self) -> i32 {
        use PieceKind::*;
        match self {
            Pawn => 1,
            Knight => 3,
            Bishop => 3,
            Rook => 5,
            Queen => 9,
            King => 100,
        }
    }

    pub fn pattern(self) -> Option<MovePattern> {
        use PieceKind::*;
        let pattern = match self {
            Pawn => return None,
            Knight => MovePattern {
                offsets: &KNIGHT_DELTAS,
                sliding: false,
            },
            Bishop => MovePattern {
                offsets: &BISHOP_DIRS,
                sliding: true,
            },
            Rook => MovePattern {
                offsets: &ROOK_DIRS,
                sliding: true,
            },
            Queen => MovePattern {
                offsets: &QUEEN_DIRS,
                sliding: true,
            },
            King => MovePattern {
                offsets: &KING_STEPS,
                sliding: false,
            },
        };
        Some(pattern)
    }

    pub fn code(self) -> char {
        use PieceKind::*;
        match self {
            Pawn => 'P',
            Knight => 'N',
            Bishop => 'B',
            Rook => 'R',
            Queen => 'Q',
            King => 'K',
        }
    }

    pub fn from_code(code: char) -> Option<PieceKind> {
        PieceKind::ALL.into_iter().find(|k| k.code() == code)
    }
}

impl FromStr for PieceKind {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(c), None) => PieceKind::from_code(c),
            _ => None,
        };
        kind.ok_or_else(|| ChessError::InvalidPiece {
            code: s.to_string(),
        })
    }
}

impl TryFrom<String> for PieceKind {
    type Error = ChessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PieceKind> for String {
    fn from(kind: PieceKind) -> String {
        kind.code().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step of a pawn of this color. White pawns head towards rank 8.
    #[inline]
    pub fn pawn_dir(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    pub fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

impl FromStr for Color {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w" => Ok(Color::White),
            "b" => Ok(Color::Black),
            _ => Err(ChessError::InvalidPiece {
                code: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ChessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.code().to_string()
    }
}

/// A piece on the board. `has_moved` flips once, on its first committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    has_moved: bool,
}

impl Piece {
    #[inline]
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[inline]
    pub fn point_value(&self) -> i32 {
        self.kind.point_value()
    }

    #[inline]
    pub(crate) fn mark_moved(&mut self) {
        self.has_moved = true;
    }

    /// Single-character symbol: uppercase for White, lowercase for Black.
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.code(),
            Color::Black => self.kind.code().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.code(), self.kind.code())
    }
}
