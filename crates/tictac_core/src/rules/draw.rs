//! Draw detection logic for tic-tac-toe.

use crate::{Board, Cell};

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board
        .rows()
        .iter()
        .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
}
