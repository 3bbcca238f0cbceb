//! Direct geometric check of a single claimed move.
//!
//! Answers the same question as membership in [`crate::chess::movegen::destinations`]
//! without enumerating: the raw delta is matched against the piece's pattern and,
//! for sliders, only the ray towards `to` is walked.
//!
//! As with generation, a move that leaves the mover's own king capturable is
//! still reported as legal.

use crate::chess::board::Board;
use crate::chess::movegen::castle_partner;
use crate::chess::piece::{MovePattern, Piece, PieceKind};
use crate::core::offset::{Offset, CASTLE_DIRS};
use crate::core::square::Square;

/// Is `from -> to` a pseudo-legal move for the piece on `from`?
pub fn is_legal_move(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if from == to {
        return false;
    }

    match piece.kind() {
        PieceKind::Pawn => pawn_legal(board, from, to, piece),
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            pattern_legal(board, from, to, piece)
        }
        PieceKind::King => {
            pattern_legal(board, from, to, piece) || castle_legal(board, from, to, piece)
        }
    }
}

fn pattern_legal(board: &Board, from: Square, to: Square, piece: Piece) -> bool {
    let Some(MovePattern { offsets, sliding }) = piece.kind().pattern() else {
        return false;
    };
    if board.color_at(to) == Some(piece.color()) {
        return false;
    }

    let delta = from.delta_to(to);
    if !sliding {
        return offsets.contains(&delta);
    }

    let Some((dir, dist)) = delta.unit_and_distance() else {
        return false;
    };
    offsets.contains(&dir) && ray_clear(board, from, dir, dist)
}

/// Every cell strictly between `from` and `from + dir * dist` is empty.
fn ray_clear(board: &Board, from: Square, dir: Offset, dist: i8) -> bool {
    (1..dist).all(|k| match from.offset(dir * k) {
        Some(sq) => board.is_empty_at(sq),
        None => false,
    })
}

fn pawn_legal(board: &Board, from: Square, to: Square, piece: Piece) -> bool {
    let fwd = piece.color().pawn_dir();
    let delta = from.delta_to(to);

    if delta == Offset::new(fwd, 0) {
        return board.is_empty_at(to);
    }
    if delta == Offset::new(2 * fwd, 0) {
        return !piece.has_moved()
            && ray_clear(board, from, Offset::new(fwd, 0), 2)
            && board.is_empty_at(to);
    }
    if delta.dr == fwd && delta.dc.abs() == 1 {
        return board.color_at(to) == Some(piece.color().other());
    }
    false
}

fn castle_legal(board: &Board, from: Square, to: Square, king: Piece) -> bool {
    let Some((dir, _)) = from.delta_to(to).unit_and_distance() else {
        return false;
    };
    CASTLE_DIRS.contains(&dir) && castle_partner(board, from, dir, king) == Some(to)
}
