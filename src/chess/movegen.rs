//! Pseudo-legal move generation.
//!
//! Destinations respect piece patterns and occupancy only; whether the mover's
//! own king is left capturable is never considered.

use std::collections::BTreeMap;

use crate::chess::board::Board;
use crate::chess::piece::{Color, Piece, PieceKind};
use crate::core::offset::{Offset, CASTLE_DIRS};
use crate::core::square::Square;

/// Origin square → destinations, ordered by origin in scan order.
pub type MoveMap = BTreeMap<Square, Vec<Square>>;

/// All pseudo-legal destinations of the piece on `from` (empty if `from` is empty).
pub fn destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    match piece.kind() {
        PieceKind::Pawn => pawn_moves(board, from, piece, &mut out),
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            pattern_moves(board, from, piece, &mut out)
        }
        PieceKind::King => {
            pattern_moves(board, from, piece, &mut out);
            castle_moves(board, from, piece, &mut out);
        }
    }
    out
}

/// Every piece of `color` that has at least one destination.
pub fn find_all_moves(board: &Board, color: Color) -> MoveMap {
    let mut out = MoveMap::new();
    for (sq, piece) in board.pieces() {
        if piece.color() != color {
            continue;
        }
        let dests = destinations(board, sq);
        if !dests.is_empty() {
            out.insert(sq, dests);
        }
    }
    out
}

/// Total number of (origin, destination) pairs in a move map.
pub fn move_count(moves: &MoveMap) -> usize {
    moves.values().map(Vec::len).sum()
}

fn pattern_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    let Some(pattern) = piece.kind().pattern() else {
        return;
    };
    for &dir in pattern.offsets {
        if pattern.sliding {
            slide(board, from, dir, piece.color(), out);
        } else {
            step(board, from, dir, piece.color(), out);
        }
    }
}

fn step(board: &Board, from: Square, delta: Offset, color: Color, out: &mut Vec<Square>) {
    let Some(to) = from.offset(delta) else {
        return;
    };
    if board.color_at(to) != Some(color) {
        out.push(to);
    }
}

fn slide(board: &Board, from: Square, dir: Offset, color: Color, out: &mut Vec<Square>) {
    let mut cur = from;
    while let Some(next) = cur.offset(dir) {
        match board.color_at(next) {
            None => out.push(next),
            Some(c) => {
                if c != color {
                    out.push(next);
                }
                return;
            }
        }
        cur = next;
    }
}

fn pawn_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    let fwd = piece.color().pawn_dir();

    if let Some(one) = from.offset(Offset::new(fwd, 0)) {
        if board.is_empty_at(one) {
            out.push(one);
            if !piece.has_moved() {
                if let Some(two) = one.offset(Offset::new(fwd, 0)) {
                    if board.is_empty_at(two) {
                        out.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(diag) = from.offset(Offset::new(fwd, dc)) {
            if board.color_at(diag) == Some(piece.color().other()) {
                out.push(diag);
            }
        }
    }
}

/// The first piece met walking from `from` along `dir`, if it is an unmoved
/// same-color rook and the king itself has not moved.
///
/// Attacked squares and check are not considered.
pub(crate) fn castle_partner(
    board: &Board,
    from: Square,
    dir: Offset,
    king: Piece,
) -> Option<Square> {
    if king.has_moved() {
        return None;
    }
    let mut cur = from.offset(dir)?;
    while board.is_empty_at(cur) {
        cur = cur.offset(dir)?;
    }
    let rook = board.piece_at(cur)?;
    let eligible =
        rook.kind() == PieceKind::Rook && rook.color() == king.color() && !rook.has_moved();
    eligible.then_some(cur)
}

fn castle_moves(board: &Board, from: Square, king: Piece, out: &mut Vec<Square>) {
    for dir in CASTLE_DIRS {
        if let Some(rook_sq) = castle_partner(board, from, dir, king) {
            out.push(rook_sq);
        }
    }
}
