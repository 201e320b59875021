//! Game setup chosen on the welcome screen.

use gridtoe_core::{GameError, GameSession, Player};
use tracing::{info, instrument};

use crate::GameConfig;

/// Largest board the terminal UI offers.
pub const MAX_BOARD_SIZE: usize = 20;

/// Player names, marks and board size for the next game.
///
/// The welcome screen edits a setup; the controller turns it into a fresh
/// [`GameSession`]. Nothing else carries game configuration between screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSetup {
    /// Player names in turn order.
    pub names: [String; 2],
    /// Player marks in turn order.
    pub marks: [char; 2],
    /// Board side length.
    pub size: usize,
}

impl GameSetup {
    /// Builds a setup from the loaded configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Self {
        let [first, second] = config.players();
        Self {
            names: [first.name().clone(), second.name().clone()],
            marks: [*first.mark(), *second.mark()],
            size: (*config.board_size()).clamp(1, MAX_BOARD_SIZE),
        }
    }

    /// Name for a player, falling back to "Player N" when left blank.
    pub fn display_name(&self, index: usize) -> String {
        let name = self.names[index].trim();
        if name.is_empty() {
            format!("Player {}", index + 1)
        } else {
            name.to_string()
        }
    }

    /// Grows the board by one, up to [`MAX_BOARD_SIZE`].
    pub fn grow(&mut self) {
        self.size = (self.size + 1).min(MAX_BOARD_SIZE);
    }

    /// Shrinks the board by one, down to 1.
    pub fn shrink(&mut self) {
        self.size = self.size.saturating_sub(1).max(1);
    }

    /// Starts a new session from this setup.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn start(&self) -> Result<GameSession, GameError> {
        let first = Player::new(self.display_name(0), self.marks[0])?;
        let second = Player::new(self.display_name(1), self.marks[1])?;
        let session = GameSession::new(self.size, first, second)?;
        info!("Session created from setup");
        Ok(session)
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_fall_back() {
        let mut setup = GameSetup::default();
        setup.names[1] = "   ".to_string();
        let session = setup.start().unwrap();
        assert_eq!(session.players()[1].name(), "Player 2");
    }

    #[test]
    fn test_size_bounds() {
        let mut setup = GameSetup::default();
        setup.size = 1;
        setup.shrink();
        assert_eq!(setup.size, 1);
        setup.size = MAX_BOARD_SIZE;
        setup.grow();
        assert_eq!(setup.size, MAX_BOARD_SIZE);
    }

    #[test]
    fn test_config_size_clamped() {
        let config = GameConfig::default().with_board_size(Some(50));
        assert_eq!(GameSetup::from_config(&config).size, MAX_BOARD_SIZE);
    }
}
