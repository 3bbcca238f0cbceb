use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::offset::Offset;
use crate::error::ChessError;

/// Board edge length.
pub const SIZE: usize = 8;

/// File letters, indexed by column.
pub const FILES: [char; SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// A board square packed into a single `u8` as `row * 8 + column`.
///
/// `row = 8 - rank` and `column` is the file index (`A = 0`), so the derived
/// ordering walks the board from A8 to H1, rank by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(u8);

impl Square {
    /// Build from internal coordinates, `None` when off the board.
    #[inline]
    pub fn from_row_col(row: i8, col: i8) -> Option<Square> {
        if (0..SIZE as i8).contains(&row) && (0..SIZE as i8).contains(&col) {
            Some(Square((row as u8) * SIZE as u8 + col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn row(self) -> i8 {
        (self.0 / SIZE as u8) as i8
    }

    #[inline]
    pub fn col(self) -> i8 {
        (self.0 % SIZE as u8) as i8
    }

    /// Rank number, `1..=8`.
    #[inline]
    pub fn rank(self) -> u8 {
        SIZE as u8 - self.row() as u8
    }

    #[inline]
    pub fn file(self) -> char {
        FILES[self.col() as usize]
    }

    /// Index into a row-major 64-cell array.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The square `delta` away, if it is still on the board.
    #[inline]
    pub fn offset(self, delta: Offset) -> Option<Square> {
        Square::from_row_col(self.row() + delta.dr, self.col() + delta.dc)
    }

    /// Displacement from `self` to `to`.
    #[inline]
    pub fn delta_to(self, to: Square) -> Offset {
        Offset::new(to.row() - self.row(), to.col() - self.col())
    }

    /// All 64 squares in scan order (A8 first, H1 last).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..(SIZE * SIZE) as u8).map(Square)
    }

    /// Parse a two-character label such as `"E4"`.
    ///
    /// Files are uppercase only; anything outside `A..=H` / `1..=8` is rejected.
    pub fn parse(label: &str) -> Result<Square, ChessError> {
        let invalid = || ChessError::InvalidSquare {
            label: label.to_string(),
        };
        let bytes = label.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let col = FILES
            .iter()
            .position(|&f| f as u8 == bytes[0])
            .ok_or_else(invalid)?;
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => b - b'0',
            _ => return Err(invalid()),
        };
        let row = SIZE as i8 - rank as i8;
        Square::from_row_col(row, col as i8).ok_or_else(invalid)
    }

    /// Two-character label, inverse of [`Square::parse`].
    pub fn label(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::parse(s)
    }
}

impl TryFrom<String> for Square {
    type Error = ChessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Square::parse(&value)
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> String {
        sq.label()
    }
}
