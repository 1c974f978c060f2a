//! Game outcome.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    #[default]
    #[display("in progress")]
    InProgress,
    /// The human completed a line.
    #[display("player wins")]
    PlayerWin,
    /// The computer completed a line.
    #[display("opponent wins")]
    OpponentWin,
    /// The board filled up without a line.
    #[display("draw")]
    Draw,
}

impl Outcome {
    /// The outcome in which `mark` has won.
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::Player => Outcome::PlayerWin,
            Mark::Opponent => Outcome::OpponentWin,
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winning side, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::PlayerWin => Some(Mark::Player),
            Outcome::OpponentWin => Some(Mark::Opponent),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}
