//! Welcome screen: player names and board size for the next game.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridtoe_core::win_threshold;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::setup::GameSetup;
use crate::tui::ui;

/// Longest player name the form accepts.
const MAX_NAME_LEN: usize = 16;

/// Field of the welcome form that has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeField {
    /// First player's name.
    FirstName,
    /// Second player's name.
    SecondName,
    /// Board size selector.
    BoardSize,
}

impl WelcomeField {
    fn next(self) -> Self {
        match self {
            Self::FirstName => Self::SecondName,
            Self::SecondName => Self::BoardSize,
            Self::BoardSize => Self::FirstName,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::FirstName => Self::BoardSize,
            Self::SecondName => Self::FirstName,
            Self::BoardSize => Self::SecondName,
        }
    }

    fn player_index(self) -> Option<usize> {
        match self {
            Self::FirstName => Some(0),
            Self::SecondName => Some(1),
            Self::BoardSize => None,
        }
    }
}

/// State for the welcome screen.
#[derive(Debug)]
pub struct WelcomeScreen {
    setup: GameSetup,
    focus: WelcomeField,
    error: Option<String>,
}

impl WelcomeScreen {
    /// Creates the screen pre-filled with `setup`.
    #[instrument(skip(setup))]
    pub fn new(setup: GameSetup) -> Self {
        debug!("Initializing WelcomeScreen");
        Self {
            setup,
            focus: WelcomeField::FirstName,
            error: None,
        }
    }

    /// The setup as currently edited.
    pub fn setup(&self) -> &GameSetup {
        &self.setup
    }

    /// Field with focus.
    pub fn focus(&self) -> WelcomeField {
        self.focus
    }

    /// Shows an error returned while starting a game.
    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    fn field_line(&self, field: WelcomeField, label: &str, value: String) -> Line<'static> {
        let focused = self.focus == field;
        let marker = if focused { "> " } else { "  " };
        let style = if focused {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(format!("{}{:<14}", marker, label)),
            Span::styled(format!(" {} ", value), style),
        ])
    }
}

impl Screen for WelcomeScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let [title, body, status, help] = ui::frame_layout(frame.area());
        ui::draw_title(frame, title, "gridtoe - N×N Tic-Tac-Toe");

        let [first, second] = &self.setup.names;
        let threshold = win_threshold(self.setup.size);
        let lines = vec![
            self.field_line(
                WelcomeField::FirstName,
                &format!("Player 1 ({})", self.setup.marks[0]),
                format!("{:<width$}", first, width = MAX_NAME_LEN),
            ),
            Line::raw(""),
            self.field_line(
                WelcomeField::SecondName,
                &format!("Player 2 ({})", self.setup.marks[1]),
                format!("{:<width$}", second, width = MAX_NAME_LEN),
            ),
            Line::raw(""),
            self.field_line(
                WelcomeField::BoardSize,
                "Board size",
                format!("< {:>2} x {:<2} >", self.setup.size, self.setup.size),
            ),
            Line::raw(""),
            Line::styled(
                format!("  {} in a row wins", threshold),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::ITALIC),
            ),
        ];

        let form_area = ui::center_rect(body, 44, lines.len() as u16 + 2);
        let form = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("New game"));
        frame.render_widget(form, form_area);

        match &self.error {
            Some(error) => ui::draw_status(frame, status, error, Color::Red),
            None => ui::draw_status(frame, status, "Press Enter to start", Color::Yellow),
        }
        ui::draw_help(
            frame,
            help,
            "Tab/↑↓ switch field  ←→ board size  Enter start  Esc quit",
        );
    }

    #[instrument(skip(self, key), fields(code = ?key.code))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Esc => return ScreenTransition::Quit,
            KeyCode::Enter => {
                info!(size = self.setup.size, "Starting game from welcome screen");
                return ScreenTransition::StartGame(self.setup.clone());
            }
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Left if self.focus == WelcomeField::BoardSize => self.setup.shrink(),
            KeyCode::Right if self.focus == WelcomeField::BoardSize => self.setup.grow(),
            // Chords like Ctrl+C are not text.
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                if let Some(idx) = self.focus.player_index() {
                    let name = &mut self.setup.names[idx];
                    if name.chars().count() < MAX_NAME_LEN {
                        name.push(c);
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(idx) = self.focus.player_index() {
                    self.setup.names[idx].pop();
                }
            }
            _ => {}
        }
        self.error = None;
        ScreenTransition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(screen: &mut WelcomeScreen, code: KeyCode) -> ScreenTransition {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_typing_edits_focused_name() {
        let mut setup = GameSetup::default();
        setup.names = [String::new(), String::new()];
        let mut screen = WelcomeScreen::new(setup);
        for c in "Hai".chars() {
            press(&mut screen, KeyCode::Char(c));
        }
        press(&mut screen, KeyCode::Tab);
        for c in "Hax".chars() {
            press(&mut screen, KeyCode::Char(c));
        }
        press(&mut screen, KeyCode::Backspace);
        assert_eq!(screen.setup().names, ["Hai".to_string(), "Ha".to_string()]);
    }

    #[test]
    fn test_control_chords_not_typed() {
        let mut setup = GameSetup::default();
        setup.names = [String::new(), String::new()];
        let mut screen = WelcomeScreen::new(setup);
        screen.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        screen.handle_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::ALT));
        screen.handle_key(KeyEvent::new(KeyCode::Char('H'), KeyModifiers::SHIFT));
        assert_eq!(screen.setup().names[0], "H");
    }

    #[test]
    fn test_arrows_change_size_only_on_size_field() {
        let mut screen = WelcomeScreen::new(GameSetup::default());
        press(&mut screen, KeyCode::Right);
        assert_eq!(screen.setup().size, 3);
        press(&mut screen, KeyCode::Up);
        assert_eq!(screen.focus(), WelcomeField::BoardSize);
        press(&mut screen, KeyCode::Right);
        press(&mut screen, KeyCode::Right);
        assert_eq!(screen.setup().size, 5);
        press(&mut screen, KeyCode::Left);
        assert_eq!(screen.setup().size, 4);
    }

    #[test]
    fn test_enter_starts_game_with_setup() {
        let mut screen = WelcomeScreen::new(GameSetup::default());
        match press(&mut screen, KeyCode::Enter) {
            ScreenTransition::StartGame(setup) => assert_eq!(setup, GameSetup::default()),
            other => panic!("unexpected transition {:?}", other),
        }
    }

    #[test]
    fn test_escape_quits() {
        let mut screen = WelcomeScreen::new(GameSetup::default());
        assert_eq!(press(&mut screen, KeyCode::Esc), ScreenTransition::Quit);
    }
}
