//! Render-ready copies of board state.

use super::{Board, Coord, GameError};
use serde::{Deserialize, Serialize};

/// Board size plus each cell's mark (or `None`), row-major.
///
/// Shells render from a snapshot instead of holding on to the board.
/// Deserialized snapshots are checked: `size` is at least 1 and there are
/// exactly `size * size` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SnapshotParts")]
pub struct BoardSnapshot {
    size: usize,
    cells: Vec<Option<char>>,
}

#[derive(Deserialize)]
struct SnapshotParts {
    size: usize,
    cells: Vec<Option<char>>,
}

impl TryFrom<SnapshotParts> for BoardSnapshot {
    type Error = GameError;

    fn try_from(parts: SnapshotParts) -> Result<Self, Self::Error> {
        if parts.size == 0 {
            return Err(GameError::InvalidBoardSize(parts.size));
        }
        if parts.size.checked_mul(parts.size) != Some(parts.cells.len()) {
            return Err(GameError::SnapshotMismatch {
                size: parts.size,
                cells: parts.cells.len(),
            });
        }
        Ok(Self {
            size: parts.size,
            cells: parts.cells,
        })
    }
}

impl BoardSnapshot {
    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Every cell, row-major.
    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    /// Mark at `(row, col)`; `None` if unmarked or out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied().flatten()
    }

    /// Mark at a coordinate.
    pub fn at(&self, coord: Coord) -> Option<char> {
        self.get(coord.row, coord.col)
    }

    /// Iterates over rows, each a slice of `size` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.size.max(1))
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self {
            size: board.size(),
            cells: board.cells().iter().map(|cell| cell.mark()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_snapshot_row_major() {
        let mut board = Board::new(2).unwrap();
        board.mark(0, 1, &Player::new("X", 'x').unwrap());
        let snapshot = BoardSnapshot::from(&board);
        assert_eq!(snapshot.cells(), &[None, Some('x'), None, None]);
        assert_eq!(snapshot.get(0, 1), Some('x'));
        assert_eq!(snapshot.get(2, 0), None);
        assert_eq!(snapshot.rows().count(), 2);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut board = Board::new(2).unwrap();
        board.mark(1, 0, &Player::new("O", 'o').unwrap());
        let json = serde_json::to_value(BoardSnapshot::from(&board)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "size": 2, "cells": [null, null, "o", null] })
        );
    }

    #[test]
    fn test_deserialize_checks_shape() {
        let snapshot: BoardSnapshot =
            serde_json::from_str(r#"{"size":2,"cells":[null,"x",null,null]}"#).unwrap();
        assert_eq!(snapshot.get(0, 1), Some('x'));

        assert!(serde_json::from_str::<BoardSnapshot>(r#"{"size":3,"cells":[]}"#).is_err());
        assert!(serde_json::from_str::<BoardSnapshot>(r#"{"size":0,"cells":[]}"#).is_err());
        assert!(
            serde_json::from_str::<BoardSnapshot>(r#"{"size":1,"cells":[null,null]}"#).is_err()
        );
    }
}
