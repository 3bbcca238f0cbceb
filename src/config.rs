//! Game configuration, loaded from JSON.
//!
//! ```json
//! {
//!   "white": "human",
//!   "black": "computer",
//!   "samples": 24,
//!   "seed": 7,
//!   "max_plies": 200,
//!   "setup": [
//!     { "kind": "K", "color": "w", "square": "E1" },
//!     { "kind": "R", "color": "w", "square": "D2" },
//!     { "kind": "K", "color": "b", "square": "E8" }
//!   ]
//! }
//! ```
//!
//! Every field is optional. Without `setup` the game starts from the standard position.

use std::fs;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chess::board::Board;
use crate::chess::piece::{Color, PieceKind};
use crate::core::square::Square;
use crate::engine::picker::DEFAULT_SAMPLES;
use crate::error::ChessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    Human,
    Computer,
}

/// One piece of a custom starting position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Placement {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
}

fn default_player() -> PlayerKind {
    PlayerKind::Computer
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

fn default_max_plies() -> usize {
    200
}

fn default_to_move() -> Color {
    Color::White
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameConfig {
    #[serde(default = "default_player")]
    pub white: PlayerKind,
    #[serde(default = "default_player")]
    pub black: PlayerKind,
    /// Candidate moves drawn per computer turn.
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// RNG seed for computer players; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_max_plies")]
    pub max_plies: usize,
    #[serde(default = "default_to_move")]
    pub to_move: Color,
    #[serde(default)]
    pub setup: Option<Vec<Placement>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white: default_player(),
            black: default_player(),
            samples: default_samples(),
            seed: None,
            max_plies: default_max_plies(),
            to_move: default_to_move(),
            setup: None,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<GameConfig, ChessError> {
        let f = fs::File::open(path).map_err(|e| ChessError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let cfg: GameConfig =
            serde_json::from_reader(BufReader::new(f)).map_err(|e| ChessError::Config {
                reason: format!("{}: {e}", path.display()),
            })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json(text: &str) -> Result<GameConfig, ChessError> {
        let cfg: GameConfig = serde_json::from_str(text).map_err(|e| ChessError::Config {
            reason: e.to_string(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ChessError> {
        if self.samples == 0 {
            return Err(ChessError::Config {
                reason: "samples must be at least 1".to_string(),
            });
        }
        if self.max_plies == 0 {
            return Err(ChessError::Config {
                reason: "max_plies must be at least 1".to_string(),
            });
        }
        if let Some(setup) = &self.setup {
            for (i, a) in setup.iter().enumerate() {
                if setup[..i].iter().any(|b| b.square == a.square) {
                    return Err(ChessError::Config {
                        reason: format!("setup places two pieces on {}", a.square),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn player(&self, color: Color) -> PlayerKind {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// The configured starting board.
    pub fn initial_board(&self) -> Board {
        match &self.setup {
            None => Board::standard(),
            Some(setup) => {
                let mut board = Board::empty();
                for p in setup {
                    board.place(p.kind, p.color, p.square);
                }
                board
            }
        }
    }
}
