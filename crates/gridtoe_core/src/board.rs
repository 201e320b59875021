//! The N×N board and its line extraction views.

use super::error::{GameError, MoveError};
use super::line::{Line, LineFamily};
use super::types::{Cell, Coord, Player};
use tracing::{debug, instrument};

/// Square board of `size × size` cells.
///
/// Cells are stored in row-major order: `(row, col)` lives at
/// `row * size + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] when `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Unmarked; size * size],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Marks `(row, col)` for `player`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if either coordinate is outside the board.
    /// - [`MoveError::CellOccupied`] if the cell is already marked.
    ///
    /// The board is unchanged on error.
    #[instrument(skip(self, player), fields(mark = %player.mark()))]
    pub fn try_mark(&mut self, row: usize, col: usize, player: &Player) -> Result<(), MoveError> {
        let idx = self.index(row, col).ok_or(MoveError::OutOfRange {
            row,
            col,
            size: self.size,
        })?;
        if self.cells[idx].is_marked() {
            return Err(MoveError::CellOccupied { row, col });
        }
        self.cells[idx] = Cell::Marked(player.mark());
        debug!("Cell marked");
        Ok(())
    }

    /// Marks `(row, col)` for `player`, returning false if the move was rejected.
    pub fn mark(&mut self, row: usize, col: usize, player: &Player) -> bool {
        self.try_mark(row, col, player).is_ok()
    }

    /// Clears every cell; the size is unchanged.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Unmarked);
    }

    /// True once every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_marked())
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_marked()).count()
    }

    fn line<I>(&self, family: LineFamily, coords: I) -> Line<'_>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut line = Line::new(family);
        for coord in coords {
            line.push(coord, &self.cells[coord.row * self.size + coord.col]);
        }
        line
    }

    /// The `size` rows, each left to right.
    pub fn rows(&self) -> Vec<Line<'_>> {
        let n = self.size;
        (0..n)
            .map(|row| self.line(LineFamily::Rows, (0..n).map(move |col| Coord::new(row, col))))
            .collect()
    }

    /// The `size` columns, each top to bottom.
    pub fn columns(&self) -> Vec<Line<'_>> {
        let n = self.size;
        (0..n)
            .map(|col| self.line(LineFamily::Columns, (0..n).map(move |row| Coord::new(row, col))))
            .collect()
    }

    /// The `2 * size - 1` descending diagonals (`row - col` constant).
    ///
    /// Starts at the bottom-left corner and walks up the left edge to the
    /// main diagonal, then along the top edge to the top-right corner. Each
    /// line runs top to bottom, so lengths go `1, 2, .., size, .., 2, 1`.
    pub fn diagonals_a(&self) -> Vec<Line<'_>> {
        let n = self.size;
        let left_edge = (0..n).rev().map(|start_row| {
            self.line(
                LineFamily::DiagonalsA,
                (0..n - start_row).map(move |k| Coord::new(start_row + k, k)),
            )
        });
        let top_edge = (1..n).map(|start_col| {
            self.line(
                LineFamily::DiagonalsA,
                (0..n - start_col).map(move |k| Coord::new(k, start_col + k)),
            )
        });
        left_edge.chain(top_edge).collect()
    }

    /// The `2 * size - 1` ascending diagonals (`row + col` constant).
    ///
    /// Ordered by increasing `row + col` starting at the top-left corner;
    /// each line runs top to bottom, so lengths go `1, 2, .., size, .., 2, 1`.
    pub fn diagonals_b(&self) -> Vec<Line<'_>> {
        let n = self.size;
        (0..2 * n - 1)
            .map(|sum| {
                let first = sum.saturating_sub(n - 1);
                let last = sum.min(n - 1);
                self.line(
                    LineFamily::DiagonalsB,
                    (first..=last).map(move |row| Coord::new(row, sum - row)),
                )
            })
            .collect()
    }

    /// Extracts one family of lines.
    pub fn lines(&self, family: LineFamily) -> Vec<Line<'_>> {
        match family {
            LineFamily::Rows => self.rows(),
            LineFamily::Columns => self.columns(),
            LineFamily::DiagonalsA => self.diagonals_a(),
            LineFamily::DiagonalsB => self.diagonals_b(),
        }
    }
}

impl std::fmt::Display for Board {
    /// Column indices across the top, then one `[c]` per cell with the row
    /// index in front.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.size.saturating_sub(1).to_string().len();
        write!(f, "{:width$} ", "", width = width)?;
        for col in 0..self.size {
            write!(f, " {:>width$} ", col, width = width)?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            write!(f, "{:>width$} ", row, width = width)?;
            for cell in cells {
                write!(f, "[{:^width$}]", cell.symbol(), width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
