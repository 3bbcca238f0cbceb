use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::chess::board::Board;
use crate::chess::movegen::find_all_moves;
use crate::chess::moves::Move;
use crate::chess::piece::Color;
use crate::core::square::SIZE;
use crate::engine::eval::score_move;
use crate::error::ChessError;

/// Default number of candidate moves drawn per turn.
pub const DEFAULT_SAMPLES: usize = 3 * SIZE;

/// A chosen move together with its material score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    pub mv: Move,
    pub score: i32,
}

/// Sampled-and-scored move picker.
///
/// Each turn it draws `samples` random pseudo-legal moves (first an origin
/// square uniformly, then one of its destinations), scores each on a cloned
/// board and keeps the first best. Samples may repeat. This is not a search:
/// the opponent's reply is never looked at.
#[derive(Debug, Clone)]
pub struct Picker {
    side: Color,
    samples: usize,
    rng: SmallRng,
}

impl Picker {
    pub fn new(side: Color, samples: usize) -> Self {
        Self::with_rng(side, samples, SmallRng::from_entropy())
    }

    /// Reproducible picker.
    pub fn seeded(side: Color, samples: usize, seed: u64) -> Self {
        Self::with_rng(side, samples, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(side: Color, samples: usize, rng: SmallRng) -> Self {
        Self {
            side,
            samples: samples.max(1),
            rng,
        }
    }

    #[inline]
    pub fn side(&self) -> Color {
        self.side
    }

    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Pick a move for this picker's side, or `None` when it has no moves at all.
    pub fn choose(&mut self, board: &Board) -> Result<Option<Scored>, ChessError> {
        let moves: Vec<(_, Vec<_>)> = find_all_moves(board, self.side).into_iter().collect();
        if moves.is_empty() {
            return Ok(None);
        }

        let mut best: Option<Scored> = None;
        for _ in 0..self.samples {
            let (from, dests) = &moves[self.rng.gen_range(0..moves.len())];
            let to = dests[self.rng.gen_range(0..dests.len())];
            let mv = Move::new(*from, to);
            let score = score_move(board.clone(), mv, self.side)?;
            if best.map_or(true, |b| score > b.score) {
                best = Some(Scored { mv, score });
            }
        }
        Ok(best)
    }
}
