//! Error types for moves and move selection.

use super::outcome::Outcome;
use super::position::Move;
use super::types::Mark;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The targeted cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Move),

    /// The game has reached a terminal state.
    #[display("Game is already over")]
    GameOver,

    /// The mark is not the side to move.
    #[display("It's not {_0}'s turn")]
    WrongTurn(Mark),

    /// The coordinates are off the board.
    #[display("({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The opponent strategy could not produce a move.
    #[display("Opponent could not move: {_0}")]
    NoReply(SearchError),
}

impl std::error::Error for MoveError {}

/// Error returned when asking for a move on a board that has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// Every cell is occupied.
    #[display("Board is full")]
    BoardFull,

    /// The position already has a winner.
    #[display("Game is already decided: {_0}")]
    Decided(Outcome),
}

impl std::error::Error for SearchError {}

impl From<SearchError> for MoveError {
    fn from(err: SearchError) -> Self {
        MoveError::NoReply(err)
    }
}
