use std::fmt;

use crate::chess::piece::{Color, Piece, PieceKind};
use crate::core::square::{Square, FILES, SIZE};
use crate::error::ChessError;

/// Back rank from file A to file H.
const BACK_RANK: [PieceKind; SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8×8 grid, at most one piece per cell.
///
/// The board owns its pieces by value, so `clone()` yields a fully independent
/// copy (including every `has_moved` flag). Simulations run on such a copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; SIZE * SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [None; SIZE * SIZE],
        }
    }

    /// A board in the standard initial position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// Clear every cell and set up the standard initial position.
    pub fn reset(&mut self) {
        self.cells = [None; SIZE * SIZE];
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            self.put(0, col, Piece::new(kind, Color::Black));
            self.put(1, col, Piece::new(PieceKind::Pawn, Color::Black));
            self.put(6, col, Piece::new(PieceKind::Pawn, Color::White));
            self.put(7, col, Piece::new(kind, Color::White));
        }
    }

    fn put(&mut self, row: i8, col: i8, piece: Piece) {
        if let Some(sq) = Square::from_row_col(row, col) {
            self.cells[sq.index()] = Some(piece);
        }
    }

    /// Insert a fresh (unmoved) piece, replacing any occupant. No rules are checked.
    pub fn place(&mut self, kind: PieceKind, color: Color, sq: Square) {
        self.cells[sq.index()] = Some(Piece::new(kind, color));
    }

    /// Remove and return the occupant of `sq`.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Color of the occupant of `sq`, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.cells[sq.index()].map(|p| p.color())
    }

    /// Move the piece on `from` to `to` and return whatever stood on `to`.
    ///
    /// The mover is marked as moved. Legality is the caller's business; the only
    /// failure is an empty `from`, which leaves the board untouched.
    pub fn commit_move(&mut self, from: Square, to: Square) -> Result<Option<Piece>, ChessError> {
        let mut piece = self.cells[from.index()]
            .take()
            .ok_or(ChessError::EmptyOrigin { square: from })?;
        piece.mark_moved();
        let captured = self.cells[to.index()].replace(piece);
        Ok(captured)
    }

    /// Occupied squares with their pieces, in scan order (A8 .. H1).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces()
            .filter(|(_, p)| p.kind() == kind && p.color() == color)
            .count()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind() == PieceKind::King && p.color() == color)
            .map(|(sq, _)| sq)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let files: String = FILES.iter().map(|c| format!(" {c}")).collect();
        writeln!(f, " {files}")?;
        for row in 0..SIZE as i8 {
            let rank = SIZE as i8 - row;
            write!(f, "{rank}")?;
            for col in 0..SIZE as i8 {
                let symbol = Square::from_row_col(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |p| p.symbol());
                write!(f, " {symbol}")?;
            }
            writeln!(f, " {rank}")?;
        }
        write!(f, " {files}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::parse(s).unwrap()
    }

    #[test]
    fn standard_position_layout() {
        let board = Board::standard();
        assert_eq!(board.pieces().count(), 32);

        let e1 = board.piece_at(sq("E1")).unwrap();
        assert_eq!((e1.kind(), e1.color()), (PieceKind::King, Color::White));
        let d8 = board.piece_at(sq("D8")).unwrap();
        assert_eq!((d8.kind(), d8.color()), (PieceKind::Queen, Color::Black));
        assert_eq!(board.count(PieceKind::Pawn, Color::Black), 8);
        assert!(board.piece_at(sq("E4")).is_none());
        assert!(board.pieces().all(|(_, p)| !p.has_moved()));
    }

    #[test]
    fn reset_discards_previous_state() {
        let mut board = Board::standard();
        board.commit_move(sq("E2"), sq("E4")).unwrap();
        board.place(PieceKind::Queen, Color::White, sq("D5"));
        board.reset();
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn place_overwrites_occupant() {
        let mut board = Board::empty();
        board.place(PieceKind::Rook, Color::White, sq("C3"));
        board.place(PieceKind::Knight, Color::Black, sq("C3"));
        let p = board.piece_at(sq("C3")).unwrap();
        assert_eq!((p.kind(), p.color()), (PieceKind::Knight, Color::Black));
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn rendering_has_labels() {
        let text = Board::standard().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
        assert_eq!(lines[0], "  A B C D E F G H");
    }
}
