//! Headless games between two strategies.

use super::board::Board;
use super::error::MoveError;
use super::game::GameState;
use super::outcome::Outcome;
use super::position::Move;
use super::strategy::Strategy;
use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Moves in order; the player's are at even indices.
    pub moves: Vec<Move>,
    /// Final board.
    pub board: Board,
    /// How it ended.
    pub outcome: Outcome,
}

/// Plays `player` against `opponent` from an empty board until the game ends.
///
/// # Errors
///
/// Returns [`MoveError::NoReply`] if a strategy cannot move, or the
/// placement error if a strategy picks an illegal cell.
#[instrument(skip_all, fields(player = player.name(), opponent = opponent.name()))]
pub fn play_out(
    player: &mut dyn Strategy,
    opponent: &mut dyn Strategy,
) -> Result<Record, MoveError> {
    let mut state = GameState::new();

    while state.is_active() {
        let mark = state.turn();
        let strategy: &mut dyn Strategy = match mark {
            Mark::Player => &mut *player,
            Mark::Opponent => &mut *opponent,
        };
        let at = strategy.choose(state.board(), mark)?;
        debug!(%mark, %at, "Self-play move");
        state.place(at, mark)?;
    }

    Ok(Record {
        moves: state.history().to_vec(),
        board: *state.board(),
        outcome: state.outcome(),
    })
}
