//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves a row-major cursor on a board of edge `size` based on arrow keys.
///
/// The cursor stops at the edges; other keys leave it unchanged.
pub fn move_cursor(cursor: usize, key: KeyCode, size: usize) -> usize {
    if size == 0 {
        return cursor;
    }
    let (row, col) = (cursor / size, cursor % size);

    match key {
        KeyCode::Right if col + 1 < size => cursor + 1,
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Down if row + 1 < size => cursor + size,
        KeyCode::Up if row > 0 => cursor - size,
        _ => cursor,
    }
}
