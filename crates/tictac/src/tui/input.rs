//! Keyboard navigation over the board.

use crossterm::event::KeyCode;
use tictac_core::Move;

/// Moves the cursor one cell for an arrow key, stopping at the edges.
pub fn move_cursor(cursor: Move, key: KeyCode) -> Move {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Move::new(r, c).ok())
        .unwrap_or(cursor)
}

/// Maps keys `1`-`9` to cells in reading order.
pub fn digit_cell(c: char) -> Option<Move> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Move::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_arrows_move_one_cell() {
        assert_eq!(move_cursor(at(1, 1), KeyCode::Up), at(0, 1));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Down), at(2, 1));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Left), at(1, 0));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Right), at(1, 2));
    }

    #[test]
    fn test_edges_stop_cursor() {
        assert_eq!(move_cursor(at(0, 0), KeyCode::Up), at(0, 0));
        assert_eq!(move_cursor(at(0, 0), KeyCode::Left), at(0, 0));
        assert_eq!(move_cursor(at(2, 2), KeyCode::Down), at(2, 2));
        assert_eq!(move_cursor(at(2, 2), KeyCode::Right), at(2, 2));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(at(1, 2), KeyCode::Enter), at(1, 2));
        assert_eq!(move_cursor(at(1, 2), KeyCode::Char('k')), at(1, 2));
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit_cell('1'), Some(at(0, 0)));
        assert_eq!(digit_cell('6'), Some(at(1, 2)));
        assert_eq!(digit_cell('9'), Some(at(2, 2)));
        assert_eq!(digit_cell('0'), None);
        assert_eq!(digit_cell('x'), None);
    }
}
