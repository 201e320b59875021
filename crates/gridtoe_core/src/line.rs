//! Line views over the board.
//!
//! A [`Line`] borrows the cells it covers, so it always reflects the board
//! at the moment it was extracted. Lines are never cached; callers extract
//! a fresh set for every win check.

use super::types::{Cell, Coord};
use serde::{Deserialize, Serialize};

/// The four families of candidate winning lines, in scan order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum LineFamily {
    /// Full rows, left to right.
    Rows,
    /// Full columns, top to bottom.
    Columns,
    /// Descending diagonals (top-left to bottom-right, `row - col` constant).
    ///
    /// A run such as `(2,2)..(6,6)` on a 10×10 board belongs to this family;
    /// the `row + col` diagonals are [`LineFamily::DiagonalsB`].
    DiagonalsA,
    /// Ascending diagonals (top-right to bottom-left).
    DiagonalsB,
}

/// An ordered run of board cells forming a row, column or diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    family: LineFamily,
    coords: Vec<Coord>,
    cells: Vec<&'a Cell>,
}

impl<'a> Line<'a> {
    pub(crate) fn new(family: LineFamily) -> Self {
        Self {
            family,
            coords: Vec::new(),
            cells: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, coord: Coord, cell: &'a Cell) {
        self.coords.push(coord);
        self.cells.push(cell);
    }

    /// Family this line belongs to.
    pub fn family(&self) -> LineFamily {
        self.family
    }

    /// Cells of the line, in order.
    pub fn cells(&self) -> &[&'a Cell] {
        &self.cells
    }

    /// Board coordinates of each cell, parallel to [`Line::cells`].
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Number of cells on the line.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a line with no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Renders the line as a string of cell symbols (blank cells as spaces).
    pub fn symbols(&self) -> String {
        self.cells.iter().map(|cell| cell.symbol()).collect()
    }
}
