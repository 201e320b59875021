//! Tie detection for N×N tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// A tie: every cell is marked and no line holds a winning run.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_tie(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
