use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::square::Square;
use crate::error::ChessError;

/// A claimed transition `from -> to`. Nothing about legality is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// Parses two whitespace-separated labels, e.g. `"E2 E4"`.
impl FromStr for Move {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ChessError::InvalidMove {
                text: s.to_string(),
            });
        };
        Ok(Move::new(Square::parse(from)?, Square::parse(to)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_labels() {
        let mv: Move = "  E2   E4 ".parse().unwrap();
        assert_eq!(mv.to_string(), "E2 E4");
        assert!(matches!(
            "E2".parse::<Move>(),
            Err(ChessError::InvalidMove { .. })
        ));
        assert!(matches!(
            "E2 E4 E5".parse::<Move>(),
            Err(ChessError::InvalidMove { .. })
        ));
        assert!(matches!(
            "E2 J4".parse::<Move>(),
            Err(ChessError::InvalidSquare { .. })
        ));
    }
}
