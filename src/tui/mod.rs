//! Terminal UI for gridtoe.
//!
//! A welcome screen collects player names and the board size, then the game
//! screen plays matches with keyboard or mouse input.

mod controller;
mod grid;
mod input;
mod screen;
pub mod screens;
mod setup;
mod ui;

pub use controller::TuiController;
pub use grid::{BoardGeometry, CellCommand, CommandGrid};
pub use input::move_cursor;
pub use screen::{Screen, ScreenTransition};
pub use setup::{GameSetup, MAX_BOARD_SIZE};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use tracing::{error, info, instrument};

use crate::GameConfig;

/// Runs the terminal UI until the user quits.
///
/// Logs go to `log_file` so they do not draw over the screen.
#[instrument(skip(config), fields(log_file = %log_file.display()))]
pub fn run_tui(config: GameConfig, log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting gridtoe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = TuiController::new(GameSetup::from_config(&config));
    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}
