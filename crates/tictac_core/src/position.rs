//! Board coordinates.

use super::error::MoveError;
use serde::{Deserialize, Serialize};

/// A cell coordinate on the 3x3 board.
///
/// Both `row` and `col` are always in `0..3`; the only way to build a
/// `Move` from outside the crate is through the checked constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[usize; 2]", into = "[usize; 2]")]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Board edge length.
    pub const SIZE: usize = 3;

    /// All nine cells in row-major order.
    pub const ALL: [Move; 9] = [
        Move::at(0, 0),
        Move::at(0, 1),
        Move::at(0, 2),
        Move::at(1, 0),
        Move::at(1, 1),
        Move::at(1, 2),
        Move::at(2, 0),
        Move::at(2, 1),
        Move::at(2, 2),
    ];

    /// Creates a move, rejecting coordinates off the board.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row < Self::SIZE && col < Self::SIZE {
            Ok(Self::at(row, col))
        } else {
            Err(MoveError::OutOfBounds { row, col })
        }
    }

    /// Unchecked constructor for in-crate constants.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a move from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * Self::SIZE + self.col
    }

    /// Row, counted from the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, counted from the left.
    pub fn col(self) -> usize {
        self.col
    }
}

impl TryFrom<[usize; 2]> for Move {
    type Error = MoveError;

    fn try_from([row, col]: [usize; 2]) -> Result<Self, Self::Error> {
        Move::new(row, col)
    }
}

impl From<Move> for [usize; 2] {
    fn from(at: Move) -> Self {
        [at.row, at.col]
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
