//! Move-picking strategies.

use super::board::Board;
use super::engine::{find_best_move, find_best_reply};
use super::error::SearchError;
use super::position::Move;
use super::types::Mark;
use tracing::debug;

/// Something that can pick a move for one side.
pub trait Strategy: std::fmt::Debug {
    /// Chooses a move for `mark` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the board has no legal moves.
    fn choose(&mut self, board: &Board, mark: Mark) -> Result<Move, SearchError>;

    /// Returns the strategy's display name.
    fn name(&self) -> &str;
}

/// Perfect play by exhaustive minimax.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Strategy for Minimax {
    fn choose(&mut self, board: &Board, mark: Mark) -> Result<Move, SearchError> {
        match mark {
            Mark::Opponent => find_best_move(board),
            Mark::Player => find_best_reply(board),
        }
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Picks the first empty cell in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEmpty;

impl Strategy for FirstEmpty {
    fn choose(&mut self, board: &Board, mark: Mark) -> Result<Move, SearchError> {
        let outcome = board.evaluate_outcome();
        if outcome.winner().is_some() {
            return Err(SearchError::Decided(outcome));
        }
        let at = board.empty_cells().next().ok_or(SearchError::BoardFull)?;
        debug!(%mark, %at, "First empty cell");
        Ok(at)
    }

    fn name(&self) -> &str {
        "First empty"
    }
}
