//! Error types for board and session operations.
//!
//! Every error here is recoverable: a rejected operation leaves the board
//! and session exactly as they were.

use serde::Serialize;

/// Reason a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum MoveError {
    /// Row or column lies outside `[0, size)`.
    #[display("Cell ({}, {}) is outside the {}x{} board", row, col, size, size)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board size.
        size: usize,
    },

    /// The target cell already carries a mark.
    #[display("Cell ({}, {}) is already marked", row, col)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The session already has a winner or ended in a tie.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Error configuring a board or session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum GameError {
    /// Board size must be a positive integer.
    #[display("Board size must be a positive integer, got {}", _0)]
    InvalidBoardSize(usize),

    /// Both players were given the same mark.
    #[display("Both players use the mark '{}'", _0)]
    DuplicateMark(char),

    /// A mark must be a visible character.
    #[display("Player marks must be visible characters")]
    BlankMark,

    /// Players can only be changed before the first move.
    #[display("Players cannot be changed once the game has started")]
    SessionStarted,

    /// Player index is not 0 or 1.
    #[display("No player at index {}", _0)]
    UnknownPlayer(usize),

    /// A snapshot's cell count does not match its size.
    #[display("Snapshot of a {}x{} board has {} cells", size, size, cells)]
    SnapshotMismatch {
        /// Declared board size.
        size: usize,
        /// Number of cells supplied.
        cells: usize,
    },
}

impl std::error::Error for GameError {}
