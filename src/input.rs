//! Parsing of console move input.

use tracing::instrument;

/// Console input that could not be read as a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Input was not two non-negative integers.
    #[display("Expected \"row col\", got {:?}", _0)]
    Malformed(String),
}

impl std::error::Error for InputError {}

/// Parses `"row col"`: exactly two whitespace-separated, zero-indexed integers.
///
/// Range checking is left to the board; only the shape of the input is
/// validated here.
#[instrument]
pub fn parse_move(input: &str) -> Result<(usize, usize), InputError> {
    let malformed = || InputError::Malformed(input.trim().to_string());
    let mut parts = input.split_whitespace();

    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let row = row.parse::<usize>().map_err(|_| malformed())?;
    let col = col.parse::<usize>().map_err(|_| malformed())?;
    Ok((row, col))
}
