//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A side in the game.
///
/// The human is always [`Mark::Player`] and moves first; the computer is
/// [`Mark::Opponent`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// The human side (X).
    #[display("X")]
    Player,
    /// The computer side (O).
    #[display("O")]
    Opponent,
}

impl Mark {
    /// Returns the opposing side.
    pub fn other(self) -> Self {
        match self {
            Mark::Player => Mark::Opponent,
            Mark::Opponent => Mark::Player,
        }
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Occupied by the human.
    Player,
    /// Occupied by the computer.
    Opponent,
}

impl Cell {
    /// Returns the mark occupying this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Player => Some(Mark::Player),
            Cell::Opponent => Some(Mark::Opponent),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character symbol used by the text board format.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Player => 'X',
            Cell::Opponent => 'O',
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Player => Cell::Player,
            Mark::Opponent => Cell::Opponent,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
