//! gridtoe core - N×N tic-tac-toe game logic.
//!
//! Pure, synchronous game logic with no I/O:
//!
//! - **Board**: an N×N grid of [`Cell`]s with row, column and diagonal
//!   [`Line`] views
//! - **Rules**: consecutive-run win detection (3 in a row on boards up to
//!   5×5, 5 in a row beyond) and tie detection
//! - **Session**: turn order and outcome tracking via [`GameSession`]
//!
//! # Example
//!
//! ```
//! use gridtoe_core::{GameSession, Outcome, Player};
//!
//! # fn main() -> Result<(), gridtoe_core::GameError> {
//! let mut game = GameSession::new(3, Player::new("Hai", 'x')?, Player::new("Ha", 'o')?)?;
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.attempt_move(row, col);
//! }
//! assert!(matches!(game.outcome(), Outcome::Win(p) if p.mark() == 'x'));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod line;
pub mod rules;
mod session;
mod snapshot;
mod types;

pub use action::Move;
pub use board::Board;
pub use error::{GameError, MoveError};
pub use line::{Line, LineFamily};
pub use rules::{WinningLine, check_line, win_threshold};
pub use session::{GameSession, MoveResult, Outcome};
pub use snapshot::BoardSnapshot;
pub use types::{Cell, Coord, Player};
