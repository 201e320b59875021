//! TUI controller: the state machine moving between the welcome and game screens.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use tracing::{debug, info, instrument, warn};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{GameScreen, WelcomeScreen};
use crate::tui::setup::GameSetup;

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    Welcome(WelcomeScreen),
    Game(GameScreen),
}

/// Controller that drives the terminal UI.
///
/// Starts on the welcome screen. Call [`TuiController::run`] to start the
/// event loop, or feed events through [`TuiController::handle_event`].
#[derive(Debug)]
pub struct TuiController {
    screen: Option<ActiveScreen>,
}

impl TuiController {
    /// Creates a controller showing the welcome screen pre-filled with `setup`.
    #[instrument(skip(setup))]
    pub fn new(setup: GameSetup) -> Self {
        info!("Creating TuiController");
        Self {
            screen: Some(ActiveScreen::Welcome(WelcomeScreen::new(setup))),
        }
    }

    /// Whether the game screen is showing.
    pub fn in_game(&self) -> bool {
        matches!(self.screen, Some(ActiveScreen::Game(_)))
    }

    /// The game screen, while a game is showing.
    pub fn game(&self) -> Option<&GameScreen> {
        match &self.screen {
            Some(ActiveScreen::Game(game)) => Some(game),
            _ => None,
        }
    }

    /// The welcome screen, while it is showing.
    pub fn welcome(&self) -> Option<&WelcomeScreen> {
        match &self.screen {
            Some(ActiveScreen::Welcome(welcome)) => Some(welcome),
            _ => None,
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting TUI event loop");
        loop {
            terminal.draw(|f| self.render(f))?;

            // Poll with a short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))? && !self.handle_event(event::read()?) {
                info!("TUI quitting");
                return Ok(());
            }
        }
    }

    /// Renders the active screen.
    pub fn render(&self, frame: &mut Frame) {
        match &self.screen {
            Some(ActiveScreen::Welcome(s)) => s.render(frame),
            Some(ActiveScreen::Game(s)) => s.render(frame),
            None => {}
        }
    }

    /// Dispatches one terminal event. Returns `false` once the user quits.
    #[instrument(skip(self, event))]
    pub fn handle_event(&mut self, event: Event) -> bool {
        let Some(screen) = self.screen.as_mut() else {
            return false;
        };

        let transition = match event {
            // crossterm fires both press and release on some platforms.
            Event::Key(key) if key.kind == KeyEventKind::Release => ScreenTransition::Stay,
            Event::Key(key) => match screen {
                ActiveScreen::Welcome(s) => s.handle_key(key),
                ActiveScreen::Game(s) => s.handle_key(key),
            },
            Event::Mouse(mouse) => match screen {
                ActiveScreen::Welcome(s) => s.handle_mouse(mouse),
                ActiveScreen::Game(s) => s.handle_mouse(mouse),
            },
            _ => ScreenTransition::Stay,
        };

        self.apply_transition(transition)
    }

    /// Applies a screen transition. Returns `false` to quit.
    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: ScreenTransition) -> bool {
        if transition != ScreenTransition::Stay {
            debug!(transition = ?transition, "Applying screen transition");
        }
        match transition {
            ScreenTransition::Stay => true,
            ScreenTransition::StartGame(setup) => {
                let next = match setup.start() {
                    Ok(session) => {
                        info!(size = setup.size, "Navigating to game");
                        ActiveScreen::Game(GameScreen::new(session, setup))
                    }
                    Err(e) => {
                        warn!(error = %e, "Could not start game");
                        let mut welcome = WelcomeScreen::new(setup);
                        welcome.set_error(e.to_string());
                        ActiveScreen::Welcome(welcome)
                    }
                };
                self.screen = Some(next);
                true
            }
            ScreenTransition::GoToWelcome(setup) => {
                info!("Navigating to welcome");
                self.screen = Some(ActiveScreen::Welcome(WelcomeScreen::new(setup)));
                true
            }
            ScreenTransition::Quit => {
                self.screen = None;
                false
            }
        }
    }
}
