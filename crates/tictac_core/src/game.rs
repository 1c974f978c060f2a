//! Board plus turn and activity flags.

use super::board::Board;
use super::error::MoveError;
use super::outcome::Outcome;
use super::position::Move;
use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
///
/// Mutated only through [`GameState::place_mark`] and [`GameState::reset`].
/// Once a terminal outcome is reached the state is frozen: every further
/// placement is rejected with [`MoveError::GameOver`].
///
/// Deserialization replays `history` from an empty board and rejects the
/// state unless board, turn and activity match the replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedState")]
pub struct GameState {
    board: Board,
    turn: Mark,
    active: bool,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with the player to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::Player,
            active: true,
            history: Vec::new(),
        }
    }

    /// Empties the board, reactivates the game and gives the player the move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Mark::Player;
        self.active = true;
        self.history.clear();
        debug!("Game state reset");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns true while no terminal outcome has been reached.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Classifies the current board.
    pub fn outcome(&self) -> Outcome {
        self.board.evaluate_outcome()
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// Returns the outcome after the move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has ended
    /// - [`MoveError::OutOfBounds`] if the coordinates are off the board
    /// - [`MoveError::WrongTurn`] if `mark` is not the side to move
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    pub fn place_mark(&mut self, row: usize, col: usize, mark: Mark) -> Result<Outcome, MoveError> {
        if !self.active {
            return Err(MoveError::GameOver);
        }
        self.place(Move::new(row, col)?, mark)
    }

    /// Places `mark` at an already validated coordinate.
    ///
    /// # Errors
    ///
    /// Same as [`GameState::place_mark`], minus the bounds check.
    #[instrument(skip(self), fields(at = %at, mark = %mark))]
    pub fn place(&mut self, at: Move, mark: Mark) -> Result<Outcome, MoveError> {
        if !self.active {
            return Err(MoveError::GameOver);
        }
        if mark != self.turn {
            return Err(MoveError::WrongTurn(mark));
        }

        self.board.place(at, mark)?;
        self.history.push(at);

        let outcome = self.board.evaluate_outcome();
        if outcome.is_terminal() {
            self.active = false;
            debug!(%outcome, "Game finished");
        } else {
            self.turn = mark.other();
        }
        Ok(outcome)
    }
}

/// Error restoring a [`GameState`] that play could not have produced.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameStateError {
    /// A recorded move is illegal when replayed.
    #[display("Move {_0} of the history cannot be replayed: {_1}")]
    Replay(usize, MoveError),
    /// Board, turn or activity disagree with the replayed history.
    #[display("Saved state does not match its move history")]
    Mismatch,
}

impl std::error::Error for GameStateError {}

#[derive(Deserialize)]
struct SavedState {
    board: Board,
    turn: Mark,
    active: bool,
    history: Vec<Move>,
}

impl TryFrom<SavedState> for GameState {
    type Error = GameStateError;

    fn try_from(saved: SavedState) -> Result<Self, Self::Error> {
        let mut replayed = GameState::new();
        for (i, &at) in saved.history.iter().enumerate() {
            let mark = replayed.turn;
            replayed
                .place(at, mark)
                .map_err(|e| GameStateError::Replay(i, e))?;
        }

        if replayed.board != saved.board
            || replayed.turn != saved.turn
            || replayed.active != saved.active
        {
            return Err(GameStateError::Mismatch);
        }
        Ok(replayed)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
