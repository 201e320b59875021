//! Core domain types: cells, players and coordinates.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single slot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has marked this cell yet.
    #[default]
    Unmarked,
    /// Cell carries a player's mark.
    Marked(char),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<char> {
        match self {
            Cell::Unmarked => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Returns true once a player has marked the cell.
    pub fn is_marked(self) -> bool {
        matches!(self, Cell::Marked(_))
    }

    /// Character used when rendering the cell (a space when unmarked).
    pub fn symbol(self) -> char {
        self.mark().unwrap_or(' ')
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A participant in a session: a display name and a single-character mark.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Player {
    name: String,
    mark: char,
}

impl Player {
    /// Creates a player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BlankMark`] if the mark is whitespace or a
    /// control character, since it could not be told apart from an empty cell.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>, mark: char) -> Result<Self, GameError> {
        if mark.is_whitespace() || mark.is_control() {
            return Err(GameError::BlankMark);
        }
        Ok(Self {
            name: name.into(),
            mark,
        })
    }

    /// Returns the player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's mark.
    pub fn mark(&self) -> char {
        self.mark
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Name: {}\nCharacter: {}", self.name, self.mark)
    }
}

/// A zero-indexed `(row, col)` position on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Coord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
