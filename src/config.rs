//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridtoe_core::{GameError, GameSession, Player};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Name and mark for one player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    name: String,

    /// Single-character mark.
    mark: char,
}

impl PlayerConfig {
    /// Creates a player entry.
    pub fn new(name: impl Into<String>, mark: char) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

/// Configuration for a game: board size and the two players, in turn order.
///
/// ```toml
/// board_size = 10
///
/// [[players]]
/// name = "Hai"
/// mark = "x"
///
/// [[players]]
/// name = "Ha"
/// mark = "o"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// The two players; the first one moves first.
    #[serde(default = "default_players")]
    players: [PlayerConfig; 2],
}

fn default_board_size() -> usize {
    3
}

fn default_players() -> [PlayerConfig; 2] {
    [
        PlayerConfig::new("Player 1", 'x'),
        PlayerConfig::new("Player 2", 'o'),
    ]
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            players: default_players(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks the configuration can start a session.
    ///
    /// # Errors
    ///
    /// Fails for a zero board size, a blank mark or two identical marks.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(GameError::InvalidBoardSize(self.board_size).into());
        }
        self.session_players()?;
        Ok(())
    }

    /// Overrides the board size. A zero size is ignored with a warning and
    /// the current size is kept.
    #[instrument(skip(self))]
    pub fn with_board_size(mut self, size: Option<usize>) -> Self {
        match size {
            Some(0) => {
                warn!(
                    kept = self.board_size,
                    "Ignoring invalid board size override"
                );
            }
            Some(size) => self.board_size = size,
            None => {}
        }
        self
    }

    /// Overrides a player's name (0 = first, 1 = second). Out-of-range
    /// indices and `None` leave the configuration unchanged.
    #[instrument(skip(self))]
    pub fn with_player_name(mut self, index: usize, name: Option<String>) -> Self {
        if let (Some(player), Some(name)) = (self.players.get_mut(index), name) {
            player.name = name;
        }
        self
    }

    /// Builds the two session players.
    pub fn session_players(&self) -> Result<(Player, Player), ConfigError> {
        let [first, second] = &self.players;
        let first = Player::new(first.name.clone(), first.mark)?;
        let second = Player::new(second.name.clone(), second.mark)?;
        if first.mark() == second.mark() {
            return Err(GameError::DuplicateMark(first.mark()).into());
        }
        Ok((first, second))
    }

    /// Starts a new session with this configuration.
    #[instrument(skip(self))]
    pub fn start_session(&self) -> Result<GameSession, ConfigError> {
        let (first, second) = self.session_players()?;
        Ok(GameSession::new(self.board_size, first, second)?)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<GameError> for ConfigError {
    #[track_caller]
    fn from(err: GameError) -> Self {
        Self::new(err.to_string())
    }
}
