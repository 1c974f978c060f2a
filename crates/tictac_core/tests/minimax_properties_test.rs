//! Whole-game properties of the minimax opponent.

use tictac_core::{
    Board, GameState, Mark, Minimax, Move, Outcome, find_best_move, find_best_reply, play_out,
};

/// Plays every possible player line against `find_best_move` and collects
/// the terminal outcomes.
fn explore(state: &GameState, outcomes: &mut Vec<Outcome>) {
    if !state.is_active() {
        outcomes.push(state.outcome());
        return;
    }

    for at in state.board().empty_cells() {
        let mut next = state.clone();
        next.place(at, Mark::Player).expect("empty cell");
        if next.is_active() {
            let reply = find_best_move(next.board()).expect("game in progress");
            next.place(reply, Mark::Opponent).expect("reply is legal");
        }
        explore(&next, outcomes);
    }
}

#[test]
fn test_opponent_never_loses() {
    let mut outcomes = Vec::new();
    explore(&GameState::new(), &mut outcomes);

    assert!(!outcomes.is_empty());
    assert!(
        outcomes.iter().all(|o| *o != Outcome::PlayerWin),
        "player found a winning line"
    );
    assert!(outcomes.contains(&Outcome::Draw));
    assert!(outcomes.contains(&Outcome::OpponentWin));
}

#[test]
fn test_minimax_self_play_is_a_draw() {
    let first = play_out(&mut Minimax, &mut Minimax).unwrap();
    assert_eq!(first.outcome, Outcome::Draw);
    assert_eq!(first.moves.len(), 9);

    for _ in 0..3 {
        let again = play_out(&mut Minimax, &mut Minimax).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn test_self_play_opening_follows_tie_break() {
    let record = play_out(&mut Minimax, &mut Minimax).unwrap();
    // All openings draw, so the player takes the first cell; the only
    // non-losing answer to a corner is the center.
    assert_eq!(record.moves[0], Move::new(0, 0).unwrap());
    assert_eq!(record.moves[1], Move::new(1, 1).unwrap());
}

#[test]
fn test_empty_board_tie_break() {
    assert_eq!(find_best_move(&Board::new()), Ok(Move::new(0, 0).unwrap()));
    assert_eq!(find_best_reply(&Board::new()), Ok(Move::new(0, 0).unwrap()));
}

#[test]
fn test_completes_own_row_before_blocking() {
    let board: Board = "XX. OO. ...".parse().unwrap();
    assert_eq!(find_best_move(&board), Ok(Move::new(1, 2).unwrap()));
}

#[test]
fn test_search_does_not_touch_callers_board() {
    let board: Board = "X.. .O. ..X".parse().unwrap();
    let copy = board;
    find_best_move(&board).unwrap();
    assert_eq!(board, copy);
}
