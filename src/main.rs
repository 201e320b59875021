//! gridtoe - unified CLI
//!
//! Plays N×N tic-tac-toe in the text console or the terminal UI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use gridtoe::cli::{Cli, Command};
use gridtoe::{ConsoleShell, GameConfig};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Console {
            size,
            player1,
            player2,
        } => {
            init_console_tracing();
            let config = GameConfig::load_or_default(&cli.config)?
                .with_board_size(size)
                .with_player_name(0, player1)
                .with_player_name(1, player2);
            run_console(config)
        }
        Command::Tui { size, log_file } => {
            let config = GameConfig::load_or_default(&cli.config)?.with_board_size(size);
            run_tui(config, &log_file)
        }
    }
}

/// Logs to stderr so it does not interleave with the board on stdout.
fn init_console_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the text console game
#[instrument(skip(config), fields(board_size = config.board_size()))]
fn run_console(config: GameConfig) -> Result<()> {
    info!("Starting console game");

    let session = config
        .start_session()
        .context("Invalid game configuration")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = ConsoleShell::new(session, stdin.lock(), stdout.lock());
    shell.run()
}

/// Run the terminal UI
fn run_tui(config: GameConfig, log_file: &Path) -> Result<()> {
    gridtoe::tui::run_tui(config, log_file)
}
