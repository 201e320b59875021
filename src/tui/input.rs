//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use gridtoe_core::Coord;

/// Moves the cursor one cell for an arrow key, stopping at the board edge.
///
/// Any other key leaves the cursor where it is.
pub fn move_cursor(cursor: Coord, key: KeyCode, size: usize) -> Coord {
    let last = size.saturating_sub(1);
    match key {
        KeyCode::Left => Coord::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right => Coord::new(cursor.row, (cursor.col + 1).min(last)),
        KeyCode::Up => Coord::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down => Coord::new((cursor.row + 1).min(last), cursor.col),
        _ => cursor,
    }
}
