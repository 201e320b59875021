//! Text console turn loop.
//!
//! Prints the board, prompts the current player for `row col`, and applies
//! the move. Rejected moves re-prompt the same player. Unparsable input or
//! end of input ends the match with no winner.

use crate::input::parse_move;
use anyhow::{Context, Result};
use gridtoe_core::{GameSession, Outcome};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// How a console match ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReport {
    /// The session reached a win or a tie.
    Finished(Outcome),
    /// Input ended or could not be parsed before the game finished.
    Aborted,
}

/// Console front end driving one [`GameSession`].
pub struct ConsoleShell<R, W> {
    session: GameSession,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleShell<R, W> {
    /// Creates a shell reading moves from `input` and printing to `output`.
    pub fn new(session: GameSession, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Consumes the shell, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays matches until input ends or the players decline a rematch.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.play_match()? == MatchReport::Aborted {
                return Ok(());
            }
            if !self.confirm("Play again? [y/N]: ")? {
                info!("Players left after the match");
                return Ok(());
            }
            self.session.reset();
        }
    }

    /// Plays the current session to a win, a tie or aborted input.
    #[instrument(skip(self), fields(size = self.session.board().size()))]
    pub fn play_match(&mut self) -> Result<MatchReport> {
        loop {
            write!(self.output, "{}", self.session.board())?;

            if self.session.outcome().is_terminal() {
                let outcome = self.session.outcome().clone();
                self.report(&outcome)?;
                return Ok(MatchReport::Finished(outcome));
            }

            let prompt = format!("{} box: ", self.session.current_player().name());
            let Some(line) = self.read_line(&prompt)? else {
                info!("Input ended before the game finished");
                writeln!(self.output, "No winner")?;
                return Ok(MatchReport::Aborted);
            };

            let (row, col) = match parse_move(&line) {
                Ok(coords) => coords,
                Err(e) => {
                    warn!(error = %e, "Malformed move, ending match");
                    writeln!(self.output, "No winner")?;
                    return Ok(MatchReport::Aborted);
                }
            };

            let result = self.session.attempt_move(row, col);
            if let Some(rejection) = result.rejection {
                debug!(%rejection, "Re-prompting same player");
                writeln!(self.output, "{}. Try again.", rejection)?;
            }
        }
    }

    fn report(&mut self, outcome: &Outcome) -> Result<()> {
        match outcome {
            Outcome::Win(player) => writeln!(self.output, "Winner:\n{}", player)?,
            Outcome::Tie => writeln!(self.output, "Tie")?,
            Outcome::InProgress => {}
        }
        Ok(())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self
            .read_line(prompt)?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")))
    }

    /// Prints `prompt` and reads one line; `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so such a
    /// line fails to parse as a move instead of failing the read.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("Failed to read from input")?;
        Ok((read > 0).then(|| String::from_utf8_lossy(&line).into_owned()))
    }
}
