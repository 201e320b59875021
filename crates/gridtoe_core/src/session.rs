//! Game session: turn order, move application and outcome tracking.
//!
//! A [`GameSession`] owns one board and two players. Moves go through
//! [`GameSession::attempt_move`], which validates the move, marks the board,
//! rescans every line and settles the outcome:
//!
//! - `InProgress` → `Win(player)` when the move completes a run
//! - `InProgress` → `Tie` when the move fills the board without a run
//! - `InProgress` → `InProgress` otherwise; the turn passes only on a valid move
//!
//! Once the outcome is terminal every further move is rejected until
//! [`GameSession::reset`].

use super::action::Move;
use super::error::{GameError, MoveError};
use super::rules::{self, WinningLine};
use super::snapshot::BoardSnapshot;
use super::{Board, Coord, Player};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// State of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Moves are still accepted.
    InProgress,
    /// A player completed a run.
    Win(Player),
    /// Board filled without a run.
    Tie,
}

impl Outcome {
    /// True for `Win` and `Tie`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "{} wins", player.name()),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Result of a move attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Whether the board changed.
    pub accepted: bool,
    /// Outcome after the attempt.
    pub outcome: Outcome,
    /// Why the move was refused, if it was.
    pub rejection: Option<MoveError>,
}

impl MoveResult {
    fn accepted(outcome: Outcome) -> Self {
        Self {
            accepted: true,
            outcome,
            rejection: None,
        }
    }

    fn rejected(error: MoveError, outcome: Outcome) -> Self {
        Self {
            accepted: false,
            outcome,
            rejection: Some(error),
        }
    }
}

/// One match between two players on an N×N board.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    turn_index: usize,
    outcome: Outcome,
    history: Vec<Move>,
    winning_line: Option<WinningLine>,
}

impl GameSession {
    /// Starts a new game on a `size × size` board. `first` moves first.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidBoardSize`] if `size` is zero.
    /// - [`GameError::DuplicateMark`] if both players share a mark.
    #[instrument(skip(first, second), fields(first = %first.name(), second = %second.name()))]
    pub fn new(size: usize, first: Player, second: Player) -> Result<Self, GameError> {
        if first.mark() == second.mark() {
            return Err(GameError::DuplicateMark(first.mark()));
        }
        let board = Board::new(size)?;
        info!(size, threshold = rules::win_threshold(size), "New game");
        Ok(Self {
            board,
            players: [first, second],
            turn_index: 0,
            outcome: Outcome::InProgress,
            history: Vec::new(),
            winning_line: None,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Number of valid moves made since the last reset.
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the moves made since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The run that won the game, once there is one.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Run length required to win on this board.
    pub fn threshold(&self) -> usize {
        rules::win_threshold(self.board.size())
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn_index % 2]
    }

    /// Attempts to mark `(row, col)` for the current player.
    ///
    /// An out-of-range or occupied cell leaves the session untouched and the
    /// same player keeps the turn. After a valid move every line is scanned
    /// fresh, in the order rows, columns, descending diagonals, ascending
    /// diagonals; the first qualifying run decides the winner.
    #[instrument(skip(self), fields(turn = self.turn_index))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> MoveResult {
        if self.outcome.is_terminal() {
            warn!("Move attempted after game over");
            return MoveResult::rejected(MoveError::GameOver, self.outcome.clone());
        }

        let player = self.current_player().clone();
        if let Err(error) = self.board.try_mark(row, col, &player) {
            debug!(%error, "Move rejected");
            return MoveResult::rejected(error, self.outcome.clone());
        }

        self.history.push(Move::new(player.mark(), Coord::new(row, col)));
        self.turn_index += 1;

        if let Some(line) = rules::find_winning_line(&self.board) {
            let winner = self
                .players
                .iter()
                .find(|p| p.mark() == line.mark)
                .cloned()
                .unwrap_or(player);
            info!(winner = %winner.name(), family = %line.family, "Game won");
            self.winning_line = Some(line);
            self.outcome = Outcome::Win(winner);
        } else if self.board.is_full() {
            info!("Game tied");
            self.outcome = Outcome::Tie;
        }

        MoveResult::accepted(self.outcome.clone())
    }

    /// Size plus per-cell marks, row-major.
    pub fn renderable_board(&self) -> BoardSnapshot {
        BoardSnapshot::from(&self.board)
    }

    /// Clears the board and starts over with the same players and size.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn_index = 0;
        self.outcome = Outcome::InProgress;
        self.history.clear();
        self.winning_line = None;
        debug!("Session reset");
    }

    /// Replaces the board with an empty one of a new size and starts over.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] for a zero size; the session
    /// keeps its current board.
    #[instrument(skip(self))]
    pub fn resize(&mut self, size: usize) -> Result<(), GameError> {
        self.board = Board::new(size)?;
        self.reset();
        Ok(())
    }

    /// Renames a player (0 = first, 1 = second) before any move is made.
    ///
    /// # Errors
    ///
    /// - [`GameError::UnknownPlayer`] for an index other than 0 or 1.
    /// - [`GameError::SessionStarted`] once a move has been made.
    #[instrument(skip(self, name))]
    pub fn rename_player(&mut self, index: usize, name: impl Into<String>) -> Result<(), GameError> {
        if index >= self.players.len() {
            return Err(GameError::UnknownPlayer(index));
        }
        if self.turn_index > 0 {
            return Err(GameError::SessionStarted);
        }
        self.players[index].set_name(name.into());
        Ok(())
    }
}
