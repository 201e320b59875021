//! Win detection: consecutive-run scanning over board lines.

use super::super::{Board, Cell, Coord, Line, LineFamily};
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// Largest board size that uses the short run length.
pub const SMALL_BOARD_MAX: usize = 5;

/// Run length needed to win on boards up to [`SMALL_BOARD_MAX`].
pub const SMALL_BOARD_RUN: usize = 3;

/// Run length needed to win on larger boards.
pub const LARGE_BOARD_RUN: usize = 5;

/// Run length required to win on a board of the given size.
pub fn win_threshold(board_size: usize) -> usize {
    if board_size <= SMALL_BOARD_MAX {
        SMALL_BOARD_RUN
    } else {
        LARGE_BOARD_RUN
    }
}

/// A qualifying run of identical marks within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// The repeated mark.
    pub mark: char,
    /// Index of the first cell of the run within the line.
    pub start: usize,
    /// Number of cells in the run (equal to the threshold).
    pub len: usize,
}

/// Scans `cells` left to right for the first run of `threshold` identical marks.
///
/// Unmarked cells break a run and never start one. The scan stops at the
/// first run that reaches the threshold, so the earliest run wins.
pub fn find_run(cells: &[&Cell], threshold: usize) -> Option<Run> {
    if threshold == 0 || cells.len() < threshold {
        return None;
    }

    let mut current: Option<char> = None;
    let mut start = 0;
    let mut len = 0;

    for (idx, cell) in cells.iter().enumerate() {
        match cell.mark() {
            None => {
                current = None;
                len = 0;
            }
            Some(mark) if current == Some(mark) => len += 1,
            Some(mark) => {
                current = Some(mark);
                start = idx;
                len = 1;
            }
        }

        if len >= threshold
            && let Some(mark) = current
        {
            return Some(Run { mark, start, len });
        }
    }

    None
}

/// Checks a single line, returning the winning mark if it holds a qualifying run.
pub fn check_line(line: &Line<'_>, board_size: usize) -> Option<char> {
    find_run(line.cells(), win_threshold(board_size)).map(|run| run.mark)
}

/// The cells that decided a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinningLine {
    /// Family of the line the run was found on.
    pub family: LineFamily,
    /// The winning mark.
    pub mark: char,
    /// Coordinates of the run's cells, in line order.
    pub coords: Vec<Coord>,
}

impl WinningLine {
    /// True if `coord` is part of the winning run.
    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }
}

/// Scans every line of the board for a winner.
///
/// Lines are extracted fresh and scanned in the order rows, columns,
/// descending diagonals, ascending diagonals. The first qualifying run ends
/// the scan.
#[instrument(skip(board), fields(size = board.size()))]
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    let threshold = win_threshold(board.size());

    for family in LineFamily::iter() {
        for line in board.lines(family) {
            if let Some(run) = find_run(line.cells(), threshold) {
                trace!(%family, mark = %run.mark, start = run.start, "Winning run found");
                return Some(WinningLine {
                    family,
                    mark: run.mark,
                    coords: line.coords()[run.start..run.start + run.len].to_vec(),
                });
            }
        }
    }

    None
}

/// Returns the winning mark on the board, if any.
pub fn check_winner(board: &Board) -> Option<char> {
    find_winning_line(board).map(|line| line.mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn cells(pattern: &str) -> Vec<Cell> {
        pattern
            .chars()
            .map(|c| if c == ' ' { Cell::Unmarked } else { Cell::Marked(c) })
            .collect()
    }

    fn scan(pattern: &str, threshold: usize) -> Option<Run> {
        let owned = cells(pattern);
        let refs: Vec<&Cell> = owned.iter().collect();
        find_run(&refs, threshold)
    }

    #[test]
    fn test_threshold_scales_with_size() {
        assert_eq!(win_threshold(1), 3);
        assert_eq!(win_threshold(3), 3);
        assert_eq!(win_threshold(5), 3);
        assert_eq!(win_threshold(6), 5);
        assert_eq!(win_threshold(10), 5);
    }

    #[test]
    fn test_full_run_wins() {
        assert_eq!(
            scan("xxx", 3),
            Some(Run {
                mark: 'x',
                start: 0,
                len: 3
            })
        );
    }

    #[test]
    fn test_run_in_middle() {
        let run = scan("ox ooo x", 3).unwrap();
        assert_eq!(run.mark, 'o');
        assert_eq!(run.start, 3);
    }

    #[test]
    fn test_broken_run_does_not_win() {
        assert_eq!(scan("xx xx", 3), None);
        assert_eq!(scan("xxoxx", 3), None);
    }

    #[test]
    fn test_blank_run_never_wins() {
        assert_eq!(scan("     ", 3), None);
        assert_eq!(scan("  x  ", 3), None);
    }

    #[test]
    fn test_short_line_cannot_win() {
        assert_eq!(scan("xx", 3), None);
        assert_eq!(scan("xxxx", 5), None);
    }

    #[test]
    fn test_earliest_run_wins() {
        let run = scan("xxxooo", 3).unwrap();
        assert_eq!(run.mark, 'x');
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_on_ascending_diagonal() {
        let mut board = Board::new(3).unwrap();
        let o = Player::new("O", 'o').unwrap();
        board.mark(0, 2, &o);
        board.mark(1, 1, &o);
        board.mark(2, 0, &o);
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.family, LineFamily::DiagonalsB);
        assert_eq!(
            line.coords,
            vec![Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        let mut board = Board::new(3).unwrap();
        let x = Player::new("X", 'x').unwrap();
        for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)] {
            board.mark(row, col, &x);
        }
        assert_eq!(find_winning_line(&board).unwrap().family, LineFamily::Rows);
    }
}
