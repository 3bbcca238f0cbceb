use std::ops::{Add, Mul, Neg};

/// A `(row, column)` displacement on the board.
///
/// Rows grow towards rank 1, columns towards file H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dr: i8,
    pub dc: i8,
}

impl Offset {
    pub const ZERO: Offset = Offset { dr: 0, dc: 0 };

    #[inline]
    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }

    #[inline]
    pub fn chebyshev_norm(self) -> i8 {
        self.dr.abs().max(self.dc.abs())
    }

    /// Unit step and distance if `self` lies on a rank, file or diagonal.
    pub fn unit_and_distance(self) -> Option<(Offset, i8)> {
        if self == Offset::ZERO {
            return None;
        }
        let aligned = self.dr == 0 || self.dc == 0 || self.dr.abs() == self.dc.abs();
        if !aligned {
            return None;
        }
        Some((
            Offset::new(self.dr.signum(), self.dc.signum()),
            self.chebyshev_norm(),
        ))
    }
}

impl Add for Offset {
    type Output = Offset;

    #[inline]
    fn add(self, rhs: Offset) -> Self::Output {
        Offset::new(self.dr + rhs.dr, self.dc + rhs.dc)
    }
}

impl Neg for Offset {
    type Output = Offset;

    #[inline]
    fn neg(self) -> Self::Output {
        Offset::new(-self.dr, -self.dc)
    }
}

impl Mul<i8> for Offset {
    type Output = Offset;

    #[inline]
    fn mul(self, rhs: i8) -> Offset {
        Offset {
            dr: self.dr * rhs,
            dc: self.dc * rhs,
        }
    }
}

pub const ROOK_DIRS: [Offset; 4] = [
    Offset { dr: 0, dc: 1 },
    Offset { dr: 0, dc: -1 },
    Offset { dr: 1, dc: 0 },
    Offset { dr: -1, dc: 0 },
];

pub const BISHOP_DIRS: [Offset; 4] = [
    Offset { dr: 1, dc: 1 },
    Offset { dr: 1, dc: -1 },
    Offset { dr: -1, dc: 1 },
    Offset { dr: -1, dc: -1 },
];

pub const QUEEN_DIRS: [Offset; 8] = [
    Offset { dr: 0, dc: 1 },
    Offset { dr: 0, dc: -1 },
    Offset { dr: 1, dc: 0 },
    Offset { dr: -1, dc: 0 },
    Offset { dr: 1, dc: 1 },
    Offset { dr: 1, dc: -1 },
    Offset { dr: -1, dc: 1 },
    Offset { dr: -1, dc: -1 },
];

/// The 8 king steps around a square.
pub const KING_STEPS: [Offset; 8] = QUEEN_DIRS;

pub const KNIGHT_DELTAS: [Offset; 8] = [
    Offset { dr: 1, dc: 2 },
    Offset { dr: 1, dc: -2 },
    Offset { dr: -1, dc: 2 },
    Offset { dr: -1, dc: -2 },
    Offset { dr: 2, dc: 1 },
    Offset { dr: 2, dc: -1 },
    Offset { dr: -2, dc: 1 },
    Offset { dr: -2, dc: -1 },
];

/// Directions a king looks along for an unmoved rook to castle with.
pub const CASTLE_DIRS: [Offset; 2] = [Offset { dr: 0, dc: 1 }, Offset { dr: 0, dc: -1 }];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_and_distance_on_lines() {
        assert_eq!(
            Offset::new(0, -5).unit_and_distance(),
            Some((Offset::new(0, -1), 5))
        );
        assert_eq!(
            Offset::new(-3, 3).unit_and_distance(),
            Some((Offset::new(-1, 1), 3))
        );
        assert_eq!(Offset::new(1, 2).unit_and_distance(), None);
        assert_eq!(Offset::ZERO.unit_and_distance(), None);
    }
}
