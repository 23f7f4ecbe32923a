//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the cursor one cell with the arrow keys, staying on the board.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let row = cursor / 3;
    let col = cursor % 3;

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    row * 3 + col
}
