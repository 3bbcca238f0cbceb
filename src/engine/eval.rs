use crate::chess::board::Board;
use crate::chess::moves::Move;
use crate::chess::piece::{Color, PieceKind};
use crate::error::ChessError;

/// Weight of each piece kind in the material differential.
///
/// Kings dominate so that losing one outweighs any other trade.
#[inline]
pub fn weight(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::King => 200,
        PieceKind::Queen => 9,
        PieceKind::Rook => 5,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Pawn => 1,
    }
}

/// Weighted piece count of `side` minus that of its opponent.
pub fn material_balance(board: &Board, side: Color) -> i32 {
    board
        .pieces()
        .map(|(_, p)| {
            let w = weight(p.kind());
            if p.color() == side {
                w
            } else {
                -w
            }
        })
        .sum()
}

/// Score `mv` for `side` by playing it on `scratch` and measuring the material left.
///
/// The board is taken by value: callers hand in a clone, so the live game
/// position can never be touched by a simulation.
pub fn score_move(mut scratch: Board, mv: Move, side: Color) -> Result<i32, ChessError> {
    scratch.commit_move(mv.from, mv.to)?;
    Ok(material_balance(&scratch, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::square::Square;

    fn sq(s: &str) -> Square {
        Square::parse(s).unwrap()
    }

    #[test]
    fn standard_position_is_balanced() {
        let board = Board::standard();
        assert_eq!(material_balance(&board, Color::White), 0);
        assert_eq!(material_balance(&board, Color::Black), 0);
    }

    #[test]
    fn capture_raises_score_without_touching_the_original() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, sq("E1"));
        board.place(PieceKind::King, Color::Black, sq("E8"));
        board.place(PieceKind::Rook, Color::White, sq("D2"));
        board.place(PieceKind::Queen, Color::Black, sq("D7"));

        let before = board.clone();
        let capture = Move::new(sq("D2"), sq("D7"));
        let quiet = Move::new(sq("D2"), sq("D3"));
        let capture = score_move(board.clone(), capture, Color::White).unwrap();
        let quiet = score_move(board.clone(), quiet, Color::White).unwrap();
        assert_eq!(capture, 5);
        assert_eq!(quiet, 5 - 9);
        assert_eq!(board, before);
    }

    #[test]
    fn capturing_the_king_dominates() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, sq("A1"));
        board.place(PieceKind::Queen, Color::White, sq("B1"));
        board.place(PieceKind::King, Color::Black, sq("B8"));
        let score = score_move(board, Move::new(sq("B1"), sq("B8")), Color::White).unwrap();
        assert_eq!(score, 200 + 9);
    }

    #[test]
    fn empty_origin_is_an_error() {
        let board = Board::standard();
        let err = score_move(board, Move::new(sq("E4"), sq("E5")), Color::White).unwrap_err();
        assert!(matches!(err, ChessError::EmptyOrigin { .. }));
    }
}
