//! First-class move records.

use super::Coord;
use serde::{Deserialize, Serialize};

/// A mark placed at a coordinate, as recorded in the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Mark of the player who moved.
    pub mark: char,
    /// Where the mark was placed.
    pub coord: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coord)
    }
}
