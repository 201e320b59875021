//! gridtoe - N×N tic-tac-toe with console and terminal UI front ends.
//!
//! # Architecture
//!
//! - **Core** (`gridtoe_core`): board, line extraction, win detection, sessions
//! - **Config**: TOML game configuration with command-line overrides
//! - **Console**: text turn loop reading `row col` moves
//! - **TUI**: full-screen terminal UI with keyboard and mouse input
//!
//! # Example
//!
//! ```
//! use gridtoe::{GameConfig, Outcome};
//!
//! # fn main() -> Result<(), gridtoe::ConfigError> {
//! let mut session = GameConfig::default().with_board_size(Some(3)).start_session()?;
//! session.attempt_move(1, 1);
//! assert_eq!(session.outcome(), &Outcome::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod console;
mod input;
pub mod tui;

pub use config::{ConfigError, GameConfig, PlayerConfig};
pub use console::{ConsoleShell, MatchReport};
pub use input::{InputError, parse_move};

// Re-exports - core game types
pub use gridtoe_core::{
    Board, BoardSnapshot, Cell, Coord, GameError, GameSession, Line, LineFamily, Move,
    MoveError, MoveResult, Outcome, Player, WinningLine, check_line, rules, win_threshold,
};
