//! Human-versus-computer game controller.
//!
//! This is the surface a frontend drives: it forwards cell selections,
//! renders [`Game::board`] and [`Game::outcome`], and polls
//! [`Game::drain_events`] for what changed.

use super::board::Board;
use super::error::MoveError;
use super::game::GameState;
use super::outcome::Outcome;
use super::position::Move;
use super::strategy::{Minimax, Strategy};
use super::types::{Cell, Mark};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Something observable that happened to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed.
    MarkPlaced {
        /// Side that moved.
        mark: Mark,
        /// Where it moved.
        at: Move,
    },
    /// The game reached a terminal outcome.
    GameOver {
        /// How it ended.
        outcome: Outcome,
    },
    /// A new game was started.
    Reset,
}

/// Result of one accepted player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Turn {
    /// The player's move.
    pub player_move: Move,
    /// The computer's answer, absent if the player's move ended the game.
    pub reply: Option<Move>,
    /// Outcome after both moves.
    pub outcome: Outcome,
}

/// A game of the human against a computer strategy.
#[derive(Debug)]
pub struct Game {
    state: GameState,
    opponent: Box<dyn Strategy>,
    events: Vec<GameEvent>,
}

impl Game {
    /// Creates a game against the minimax opponent.
    pub fn new() -> Self {
        Self::with_opponent(Box::new(Minimax))
    }

    /// Creates a game against any strategy.
    #[instrument(skip(opponent), fields(opponent = opponent.name()))]
    pub fn with_opponent(opponent: Box<dyn Strategy>) -> Self {
        info!("Creating game");
        Self {
            state: GameState::new(),
            opponent,
            events: Vec::new(),
        }
    }

    /// Plays the human's move at `(row, col)` and, if the game goes on,
    /// the computer's reply.
    ///
    /// Both moves are applied together: on error the game is unchanged and
    /// no events are queued.
    ///
    /// # Errors
    ///
    /// Any [`MoveError`] from the player's placement, or
    /// [`MoveError::NoReply`] if the opponent strategy fails.
    #[instrument(skip(self), fields(opponent = self.opponent.name()))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<Turn, MoveError> {
        let mut next = self.state.clone();
        let mut events = Vec::new();

        let player_move = Move::new(row, col)?;
        let mut outcome = next.place(player_move, Mark::Player)?;
        events.push(GameEvent::MarkPlaced {
            mark: Mark::Player,
            at: player_move,
        });

        let mut reply = None;
        if !outcome.is_terminal() {
            let at = self.opponent.choose(next.board(), Mark::Opponent)?;
            outcome = next.place(at, Mark::Opponent)?;
            events.push(GameEvent::MarkPlaced {
                mark: Mark::Opponent,
                at,
            });
            reply = Some(at);
        }

        if outcome.is_terminal() {
            info!(%outcome, "Game over");
            events.push(GameEvent::GameOver { outcome });
        }

        self.state = next;
        self.events.extend(events);
        debug!(%player_move, ?reply, %outcome, "Turn complete");
        Ok(Turn::new(player_move, reply, outcome))
    }

    /// Entry point for a cell selection from the frontend.
    ///
    /// Illegal selections (occupied cell, finished game) are ignored.
    pub fn on_cell_selected(&mut self, row: usize, col: usize) -> Option<Turn> {
        match self.attempt_move(row, col) {
            Ok(turn) => Some(turn),
            Err(e) => {
                debug!(row, col, error = %e, "Ignoring selection");
                None
            }
        }
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.reset();
        self.events.push(GameEvent::Reset);
        info!("New game");
    }

    /// Takes every event queued since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Gets the cell at `(row, col)`, or `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.state.board().cell(row, col)
    }

    /// Classifies the current board.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Mark {
        self.state.turn()
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.state.last_move()
    }

    /// Returns the opponent's display name.
    pub fn opponent_name(&self) -> &str {
        self.opponent.name()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FirstEmpty, SearchError};

    /// Always answers with the same cell, legal or not.
    #[derive(Debug)]
    struct Stubborn(Move);

    impl Strategy for Stubborn {
        fn choose(&mut self, _board: &Board, _mark: Mark) -> Result<Move, SearchError> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "Stubborn"
        }
    }

    fn at(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_move_gets_reply() {
        let mut game = Game::new();
        let turn = game.attempt_move(0, 0).unwrap();

        assert_eq!(turn.player_move, at(0, 0));
        assert_eq!(turn.reply, Some(at(1, 1)));
        assert_eq!(turn.outcome, Outcome::InProgress);
        assert_eq!(game.cell(0, 0), Some(Cell::Player));
        assert_eq!(game.cell(1, 1), Some(Cell::Opponent));
        assert_eq!(game.turn(), Mark::Player);
        assert_eq!(game.last_move(), Some(at(1, 1)));
    }

    #[test]
    fn test_events_in_order() {
        let mut game = Game::new();
        game.attempt_move(0, 0).unwrap();

        assert_eq!(
            game.drain_events(),
            vec![
                GameEvent::MarkPlaced { mark: Mark::Player, at: at(0, 0) },
                GameEvent::MarkPlaced { mark: Mark::Opponent, at: at(1, 1) },
            ]
        );
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_occupied_selection_ignored() {
        let mut game = Game::new();
        game.attempt_move(0, 0).unwrap();
        game.drain_events();
        let before = game.state().clone();

        assert_eq!(game.on_cell_selected(1, 1), None);
        assert_eq!(game.on_cell_selected(0, 0), None);
        assert_eq!(game.state(), &before);
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_off_board_selection_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.attempt_move(3, 1),
            Err(MoveError::OutOfBounds { row: 3, col: 1 })
        );
    }

    #[test]
    fn test_player_win_skips_reply() {
        let mut game = Game::with_opponent(Box::new(FirstEmpty));
        // FirstEmpty answers (0, 0), (0, 1), ... so the bottom row stays free.
        game.attempt_move(2, 0).unwrap();
        game.attempt_move(2, 1).unwrap();
        let turn = game.attempt_move(2, 2).unwrap();

        assert_eq!(turn.reply, None);
        assert_eq!(turn.outcome, Outcome::PlayerWin);
        assert!(!game.is_active());
        assert_eq!(
            game.drain_events().last(),
            Some(&GameEvent::GameOver { outcome: Outcome::PlayerWin })
        );
        assert_eq!(game.on_cell_selected(1, 2), None);
    }

    #[test]
    fn test_failed_reply_leaves_game_untouched() {
        let mut game = Game::with_opponent(Box::new(Stubborn(at(1, 1))));
        let result = game.attempt_move(1, 1);

        assert_eq!(result, Err(MoveError::CellOccupied(at(1, 1))));
        assert_eq!(game.state(), &GameState::new());
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new();
        game.attempt_move(0, 0).unwrap();
        game.reset();

        assert_eq!(game.state(), &GameState::new());
        assert_eq!(game.drain_events().last(), Some(&GameEvent::Reset));
        assert!(game.attempt_move(0, 0).is_ok());
    }
}
