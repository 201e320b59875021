//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage so the session can compose them.

pub mod draw;
pub mod win;

pub use draw::is_tie;
pub use win::{
    LARGE_BOARD_RUN, Run, SMALL_BOARD_MAX, SMALL_BOARD_RUN, WinningLine, check_line,
    check_winner, find_run, find_winning_line, win_threshold,
};
