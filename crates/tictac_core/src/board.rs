//! The 3x3 grid.

use super::error::MoveError;
use super::outcome::Outcome;
use super::position::Move;
use super::rules;
use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 3x3 tic-tac-toe board in row-major order.
///
/// The board alone determines whether the game is in progress, won or drawn;
/// see [`Board::evaluate_outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; Move::SIZE]; Move::SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit rows.
    pub fn from_rows(cells: [[Cell; Move::SIZE]; Move::SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; Move::SIZE]; Move::SIZE] {
        &self.cells
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, at: Move) -> Cell {
        self.cells[at.row()][at.col()]
    }

    /// Gets the cell at `(row, col)`, or `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Checks if a cell is empty.
    pub fn is_empty_at(&self, at: Move) -> bool {
        self.get(at).is_empty()
    }

    /// Places `mark` on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellOccupied`] if the cell already holds a mark.
    pub fn place(&mut self, at: Move, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty_at(at) {
            return Err(MoveError::CellOccupied(at));
        }
        self.set(at, mark.into());
        Ok(())
    }

    /// Overwrites a cell. Used by the search to place and retract marks.
    pub(crate) fn set(&mut self, at: Move, cell: Cell) {
        self.cells[at.row()][at.col()] = cell;
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; Move::SIZE]; Move::SIZE];
    }

    /// Iterates over the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL.into_iter().filter(move |at| self.is_empty_at(*at))
    }

    /// Returns true if any row, column or diagonal is entirely `mark`.
    pub fn check_win(&self, mark: Mark) -> bool {
        rules::check_win(self, mark)
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Classifies the board. Opponent lines are checked before player lines.
    pub fn evaluate_outcome(&self) -> Outcome {
        rules::evaluate_outcome(self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// Error parsing the text board format.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character other than `X`, `O`, `.` or whitespace.
    #[display("Unexpected character {_0:?}")]
    UnexpectedChar(char),
    /// Not exactly nine cells.
    #[display("Expected 9 cells, found {_0}")]
    WrongCellCount(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells of `X`, `O` or `.`; whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' | 'x' => Ok(Cell::Player),
                'O' | 'o' => Ok(Cell::Opponent),
                '.' | '_' => Ok(Cell::Empty),
                other => Err(BoardParseError::UnexpectedChar(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != Move::ALL.len() {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }

        let mut board = Board::new();
        for (at, cell) in Move::ALL.into_iter().zip(cells) {
            board.set(at, cell);
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        assert_eq!(board.get(Move::new(0, 1).unwrap()), Cell::Player);
        assert_eq!(board.get(Move::new(1, 0).unwrap()), Cell::Opponent);
        assert_eq!(board.to_string(), "XX.\nOO.\n...");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("XX".parse::<Board>(), Err(BoardParseError::WrongCellCount(2)));
        assert_eq!(
            "XX.OO.Z..".parse::<Board>(),
            Err(BoardParseError::UnexpectedChar('Z'))
        );
    }

    #[test]
    fn test_place_never_overwrites() {
        let mut board = Board::new();
        let center = Move::new(1, 1).unwrap();
        board.place(center, Mark::Player).unwrap();

        let result = board.place(center, Mark::Opponent);
        assert_eq!(result, Err(MoveError::CellOccupied(center)));
        assert_eq!(board.get(center), Cell::Player);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board: Board = "X.O ... O.X".parse().unwrap();
        let empty: Vec<usize> = board.empty_cells().map(Move::index).collect();
        assert_eq!(empty, vec![1, 3, 4, 5, 7]);
    }

    #[test]
    fn test_clear() {
        let mut board: Board = "XOX OXO OXO".parse().unwrap();
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_cell_off_board() {
        let board = Board::new();
        assert_eq!(board.cell(2, 2), Some(Cell::Empty));
        assert_eq!(board.cell(3, 0), None);
    }
}
