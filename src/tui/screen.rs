//! Screen trait and transition type for the terminal UI state machine.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;

use super::setup::GameSetup;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] and
/// [`Screen::handle_mouse`] to drive the
/// [`TuiController`](super::TuiController) state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Start a new game with the given setup.
    StartGame(GameSetup),
    /// Return to the welcome screen, pre-filled with the given setup.
    GoToWelcome(GameSetup),
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the state machine.
///
/// Each screen owns its own state, renders its UI, and handles input events.
/// The controller calls these methods one at a time from its event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key press and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;

    /// Handles a mouse event. Screens without clickable regions ignore it.
    fn handle_mouse(&mut self, _mouse: MouseEvent) -> ScreenTransition {
        ScreenTransition::Stay
    }
}
