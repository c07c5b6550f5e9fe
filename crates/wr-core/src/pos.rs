//! Integer grid coordinates.

use std::fmt;

/// A cell coordinate.  `x` grows to the right (towards the red zone).
///
/// Signed so that neighbour arithmetic never underflows; bounds are checked
/// by the grid, not here.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one column to the right.
    #[inline]
    pub fn right(self) -> Pos {
        Pos::new(self.x + 1, self.y)
    }

    /// One greedy step towards `target`: each axis independently moves by the
    /// sign of its delta, so diagonal steps are taken while both axes differ.
    /// Returns `self` when already at `target`.
    #[inline]
    pub fn step_toward(self, target: Pos) -> Pos {
        Pos::new(
            self.x + (target.x - self.x).signum(),
            self.y + (target.y - self.y).signum(),
        )
    }

    /// Chessboard distance (8-connected step count).
    #[inline]
    pub fn chebyshev(self, other: Pos) -> u32 {
        (self.x - other.x)
            .unsigned_abs()
            .max((self.y - other.y).unsigned_abs())
    }

    /// `true` if `other` is this cell or one of its eight neighbours.
    #[inline]
    pub fn is_adjacent_or_same(self, other: Pos) -> bool {
        self.chebyshev(other) <= 1
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
