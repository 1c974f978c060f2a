//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Move};

/// The eight winning lines as `(row, col)` triples.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns true if any line is entirely `mark`.
pub fn check_win(board: &Board, mark: Mark) -> bool {
    let target = Cell::from(mark);
    LINES.iter().any(|line| is_line_of(board, line, target))
}

/// Returns the first complete line of `mark`, if any.
pub fn winning_line(board: &Board, mark: Mark) -> Option<[Move; 3]> {
    let target = Cell::from(mark);
    LINES
        .iter()
        .find(|line| is_line_of(board, line, target))
        .map(|line| line.map(|(row, col)| Move::at(row, col)))
}

fn is_line_of(board: &Board, line: &[(usize, usize); 3], target: Cell) -> bool {
    line.iter()
        .all(|&(row, col)| board.rows()[row][col] == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!check_win(&board, Mark::Player));
        assert!(!check_win(&board, Mark::Opponent));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            for mark in [Mark::Player, Mark::Opponent] {
                let mut board = Board::new();
                for (row, col) in line {
                    board.place(Move::at(row, col), mark).unwrap();
                }
                assert!(check_win(&board, mark), "line {line:?} for {mark}");
                assert!(!check_win(&board, mark.other()));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XXO OOX XOX".parse().unwrap();
        assert!(!check_win(&board, Mark::Player));
        assert!(!check_win(&board, Mark::Opponent));
    }

    #[test]
    fn test_winning_line_reports_cells() {
        let board: Board = "O.X .OX X.O".parse().unwrap();
        let line = winning_line(&board, Mark::Opponent).unwrap();
        let indices: Vec<usize> = line.iter().map(|at| at.index()).collect();
        assert_eq!(indices, vec![0, 4, 8]);
        assert_eq!(winning_line(&board, Mark::Player), None);
    }
}
