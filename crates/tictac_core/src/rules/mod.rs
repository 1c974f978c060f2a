//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board
//! storage so the search and the controller share one definition of
//! "won" and "full".

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_win, winning_line};

use crate::{Board, Mark, Outcome};

/// Classifies a board.
///
/// The opponent's lines are checked first, then the player's, then
/// fullness. Under legal alternating play both sides can never hold a
/// line at once, so the order only matters for hand-built boards.
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if check_win(board, Mark::Opponent) {
        Outcome::OpponentWin
    } else if check_win(board, Mark::Player) {
        Outcome::PlayerWin
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
