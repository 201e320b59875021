//! Per-cell commands and board geometry for the game screen.
//!
//! Every board cell gets a [`CellCommand`] in a [`CommandGrid`] keyed by
//! `(row, col)`. Keyboard activation looks the command up by cursor
//! position; mouse clicks go through [`BoardGeometry::cell_at`] first.

use gridtoe_core::{Coord, GameSession, MoveResult};
use ratatui::layout::Rect;
use tracing::{debug, instrument};

/// Width of the row-label column ("19 ").
pub const LABEL_WIDTH: u16 = 3;

/// Width of one rendered cell ("[x]").
pub const CELL_WIDTH: u16 = 3;

/// Horizontal distance between the starts of adjacent cells.
pub const CELL_STRIDE: u16 = CELL_WIDTH + 1;

/// The action bound to one board cell: mark it for the current player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCommand {
    coord: Coord,
}

impl CellCommand {
    /// Cell this command marks.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Attempts the move on `session`.
    #[instrument(skip(session))]
    pub fn execute(&self, session: &mut GameSession) -> MoveResult {
        session.attempt_move(self.coord.row, self.coord.col)
    }
}

/// One [`CellCommand`] per cell, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGrid {
    size: usize,
    commands: Vec<CellCommand>,
}

impl CommandGrid {
    /// Builds the command table for a `size × size` board.
    pub fn new(size: usize) -> Self {
        let commands = (0..size)
            .flat_map(|row| (0..size).map(move |col| CellCommand { coord: Coord::new(row, col) }))
            .collect();
        Self { size, commands }
    }

    /// Side length of the board this grid covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Command bound to `coord`, if it is on the board.
    pub fn command(&self, coord: Coord) -> Option<&CellCommand> {
        if coord.row >= self.size || coord.col >= self.size {
            return None;
        }
        self.commands.get(coord.row * self.size + coord.col)
    }
}

/// Where the board was last drawn, for translating mouse positions to cells.
///
/// Layout: one header line of column indices, then one line per row made of
/// a [`LABEL_WIDTH`] row label followed by cells every [`CELL_STRIDE`]
/// columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    origin_x: u16,
    origin_y: u16,
    size: usize,
}

impl BoardGeometry {
    /// Geometry for a board whose top-left corner (header included) is at
    /// `(origin_x, origin_y)`.
    pub fn new(origin_x: u16, origin_y: u16, size: usize) -> Self {
        Self {
            origin_x,
            origin_y,
            size,
        }
    }

    /// Terminal columns needed to draw a board of `size`.
    pub fn width(size: usize) -> u16 {
        LABEL_WIDTH + CELL_STRIDE * size as u16
    }

    /// Terminal rows needed to draw a board of `size`.
    pub fn height(size: usize) -> u16 {
        1 + size as u16
    }

    /// Centers a board of `size` inside `area`.
    pub fn centered(area: Rect, size: usize) -> Self {
        let x = area.x + area.width.saturating_sub(Self::width(size)) / 2;
        let y = area.y + area.height.saturating_sub(Self::height(size)) / 2;
        Self::new(x, y, size)
    }

    /// The area the board occupies, clipped to `bounds`.
    pub fn rect(&self, bounds: Rect) -> Rect {
        Rect::new(
            self.origin_x,
            self.origin_y,
            Self::width(self.size),
            Self::height(self.size),
        )
        .intersection(bounds)
    }

    /// Cell under terminal position `(column, row)`, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        let first_row = self.origin_y + 1;
        let first_col = self.origin_x + LABEL_WIDTH;
        if row < first_row || column < first_col {
            return None;
        }

        let dx = column - first_col;
        if dx % CELL_STRIDE >= CELL_WIDTH {
            return None;
        }

        let coord = Coord::new((row - first_row) as usize, (dx / CELL_STRIDE) as usize);
        let hit = coord.row < self.size && coord.col < self.size;
        debug!(column, row, hit, "Hit test");
        hit.then_some(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtoe_core::Player;

    #[test]
    fn test_grid_has_command_per_cell() {
        let grid = CommandGrid::new(4);
        assert_eq!(grid.command(Coord::new(3, 2)).unwrap().coord(), Coord::new(3, 2));
        assert!(grid.command(Coord::new(4, 0)).is_none());
    }

    #[test]
    fn test_command_marks_its_cell() {
        let mut session = GameSession::new(
            3,
            Player::new("A", 'x').unwrap(),
            Player::new("B", 'o').unwrap(),
        )
        .unwrap();
        let grid = CommandGrid::new(3);
        let result = grid.command(Coord::new(2, 1)).unwrap().execute(&mut session);
        assert!(result.accepted);
        assert_eq!(session.renderable_board().get(2, 1), Some('x'));
    }

    #[test]
    fn test_hit_test() {
        let geometry = BoardGeometry::new(10, 5, 3);
        // header line
        assert_eq!(geometry.cell_at(14, 5), None);
        // row label
        assert_eq!(geometry.cell_at(11, 6), None);
        // first cell spans columns 13..16
        assert_eq!(geometry.cell_at(13, 6), Some(Coord::new(0, 0)));
        assert_eq!(geometry.cell_at(15, 6), Some(Coord::new(0, 0)));
        // gap between cells
        assert_eq!(geometry.cell_at(16, 6), None);
        assert_eq!(geometry.cell_at(21, 8), Some(Coord::new(2, 2)));
        // past the last row
        assert_eq!(geometry.cell_at(13, 9), None);
    }

    #[test]
    fn test_centered_geometry() {
        let geometry = BoardGeometry::centered(Rect::new(0, 0, 40, 10), 3);
        assert_eq!(geometry, BoardGeometry::new(12, 3, 3));
    }
}
