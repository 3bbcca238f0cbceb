//! Turn-by-turn game driver around a single live [`Board`].
//!
//! The game owns the live board. Move generation and scoring only ever see
//! `&Board` or an owned clone of it; commits happen here and nowhere else.

use crate::chess::board::Board;
use crate::chess::legality::is_legal_move;
use crate::chess::moves::Move;
use crate::chess::piece::{Color, Piece, PieceKind};
use crate::error::ChessError;

/// What happened to a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The move was played; `captured` is whatever stood on the destination.
    Moved { captured: Option<Piece> },
    /// The move was rejected and the board left unchanged.
    Illegal,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Color,
    history: Vec<Move>,
    captured: [Vec<Piece>; 2],
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard initial position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    pub fn from_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Every submitted move in order, including rejected ones.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Pieces `color` has taken from the opponent, in capture order.
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    /// Submit a move for the side to move.
    ///
    /// A move is rejected when `from` does not hold one of the mover's pieces or
    /// the piece cannot reach `to`. Either way it is logged and the turn passes.
    pub fn play(&mut self, mv: Move) -> Result<TurnOutcome, ChessError> {
        let mover = self.to_move;
        let owns_origin = self.board.color_at(mv.from) == Some(mover);

        let outcome = if owns_origin && is_legal_move(&self.board, mv.from, mv.to) {
            let captured = self.board.commit_move(mv.from, mv.to)?;
            if let Some(piece) = captured {
                self.captured[mover.index()].push(piece);
            }
            TurnOutcome::Moved { captured }
        } else {
            TurnOutcome::Illegal
        };

        self.history.push(mv);
        self.to_move = mover.other();
        Ok(outcome)
    }

    /// The game ends once the side to move has lost its king.
    ///
    /// Checkmate and stalemate are not detected.
    pub fn is_over(&self) -> bool {
        self.board.king_square(self.to_move).is_none()
    }

    /// The side still holding its king, once the game is over.
    pub fn winner(&self) -> Option<Color> {
        if !self.is_over() {
            return None;
        }
        let other = self.to_move.other();
        self.board.king_square(other).map(|_| other)
    }

    /// Back to the standard position with an empty history.
    pub fn restart(&mut self) {
        self.board.reset();
        self.to_move = Color::White;
        self.history.clear();
        self.captured = [Vec::new(), Vec::new()];
    }

    /// Point value of everything `color` has captured so far.
    pub fn captured_points(&self, color: Color) -> i32 {
        self.captured_by(color)
            .iter()
            .filter(|p| p.kind() != PieceKind::King)
            .map(Piece::point_value)
            .sum()
    }
}
