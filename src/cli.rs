//! Command-line interface for gridtoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gridtoe - tic-tac-toe on boards of any size
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "N-by-N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game configuration file
    #[arg(short, long, global = true, default_value = "gridtoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the text console, entering moves as "row col"
    Console {
        /// Board size (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,

        /// Name of the first player
        #[arg(long)]
        player1: Option<String>,

        /// Name of the second player
        #[arg(long)]
        player2: Option<String>,
    },

    /// Play in the full-screen terminal UI
    Tui {
        /// Initial board size (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,

        /// File to write logs to while the UI owns the terminal
        #[arg(long, default_value = "gridtoe_tui.log")]
        log_file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_flags() {
        let cli = Cli::parse_from(["gridtoe", "console", "--size", "10", "--player1", "Hai"]);
        match cli.command {
            Command::Console { size, player1, player2 } => {
                assert_eq!(size, Some(10));
                assert_eq!(player1.as_deref(), Some("Hai"));
                assert_eq!(player2, None);
            }
            Command::Tui { .. } => panic!("expected console"),
        }
        assert_eq!(cli.config, PathBuf::from("gridtoe.toml"));
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::parse_from(["gridtoe", "tui", "--config", "custom.toml"]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
    }
}
