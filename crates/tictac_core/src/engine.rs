//! Exhaustive minimax move selection.
//!
//! The search explores the whole remaining game tree with no pruning and
//! no transposition cache. At nine cells that is at most 9! leaves, so a
//! full search finishes well within a UI event. Do not reuse this on
//! larger boards.
//!
//! Scores are from the opponent's point of view: a win found `depth` plies
//! below the root scores `WIN_SCORE - depth`, a loss `depth - WIN_SCORE`, a
//! draw `0`. Faster wins and slower losses therefore rank higher.

use super::board::Board;
use super::error::SearchError;
use super::outcome::Outcome;
use super::position::Move;
use super::types::{Cell, Mark};
use tracing::{debug, instrument, trace};

/// Score of an immediate opponent win before depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// Scores `board` by full-depth search.
///
/// `maximizing` is true when the opponent is to move. Marks are placed
/// and retracted in place; `board` is unchanged on return.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    if board.check_win(Mark::Opponent) {
        return WIN_SCORE - depth;
    }
    if board.check_win(Mark::Player) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    let (mark, mut best) = if maximizing {
        (Mark::Opponent, i32::MIN)
    } else {
        (Mark::Player, i32::MAX)
    };

    for at in Move::ALL {
        if !board.is_empty_at(at) {
            continue;
        }
        board.set(at, mark.into());
        let score = minimax(board, depth + 1, !maximizing);
        board.set(at, Cell::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Picks the opponent's move.
///
/// Every empty cell is scored in row-major order and the strictly highest
/// score wins, so ties go to the first cell encountered.
///
/// # Errors
///
/// Returns [`SearchError`] if the board is already won or full.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn find_best_move(board: &Board) -> Result<Move, SearchError> {
    select(board, Mark::Opponent)
}

/// Picks the player's move: the mirror of [`find_best_move`].
///
/// Minimizes the same opponent-relative score, ties again going to the
/// first cell in row-major order.
///
/// # Errors
///
/// Returns [`SearchError`] if the board is already won or full.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn find_best_reply(board: &Board) -> Result<Move, SearchError> {
    select(board, Mark::Player)
}

/// Scores every opponent move in row-major order.
///
/// These are exactly the values [`find_best_move`] compares.
///
/// # Errors
///
/// Returns [`SearchError`] if the board is already won or full.
pub fn score_moves(board: &Board) -> Result<Vec<(Move, i32)>, SearchError> {
    score_for(board, Mark::Opponent)
}

fn select(board: &Board, mark: Mark) -> Result<Move, SearchError> {
    let scored = score_for(board, mark)?;

    let mut best: Option<(Move, i32)> = None;
    for (at, score) in scored {
        let improves = match best {
            None => true,
            Some((_, best_score)) => match mark {
                Mark::Opponent => score > best_score,
                Mark::Player => score < best_score,
            },
        };
        if improves {
            best = Some((at, score));
        }
    }

    let (at, score) = best.ok_or(SearchError::BoardFull)?;
    debug!(%mark, %at, score, "Selected move");
    Ok(at)
}

fn score_for(board: &Board, mark: Mark) -> Result<Vec<(Move, i32)>, SearchError> {
    match board.evaluate_outcome() {
        Outcome::InProgress => {}
        Outcome::Draw => return Err(SearchError::BoardFull),
        decided => return Err(SearchError::Decided(decided)),
    }

    // The caller's board is never touched mid-search.
    let mut scratch = *board;
    let next_maximizing = mark == Mark::Player;

    let scored = Move::ALL
        .into_iter()
        .filter(|at| board.is_empty_at(*at))
        .map(|at| {
            scratch.set(at, mark.into());
            let score = minimax(&mut scratch, 1, next_maximizing);
            scratch.set(at, Cell::Empty);
            trace!(%mark, %at, score, "Scored candidate");
            (at, score)
        })
        .collect();

    Ok(scored)
}
