//! Game screen: the board, cursor and turn status for a running session.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use gridtoe_core::{Coord, GameSession, MoveResult, Outcome};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::{debug, info, instrument};

use crate::tui::grid::{BoardGeometry, CELL_STRIDE, CommandGrid, LABEL_WIDTH};
use crate::tui::input::move_cursor;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::setup::GameSetup;
use crate::tui::ui;

const PLAYER_COLORS: [Color; 2] = [Color::Blue, Color::Red];

/// State for the game screen.
///
/// Owns the session for the current match. The last drawn board position is
/// kept so mouse clicks can be mapped back to cells.
#[derive(Debug)]
pub struct GameScreen {
    session: GameSession,
    setup: GameSetup,
    commands: CommandGrid,
    cursor: Coord,
    status: String,
    geometry: std::cell::Cell<Option<BoardGeometry>>,
}

impl GameScreen {
    /// Creates the screen for a freshly started session.
    #[instrument(skip(session, setup), fields(size = session.board().size()))]
    pub fn new(session: GameSession, setup: GameSetup) -> Self {
        debug!("Initializing GameScreen");
        let size = session.board().size();
        let mut screen = Self {
            commands: CommandGrid::new(size),
            cursor: Coord::new(size / 2, size / 2),
            status: String::new(),
            geometry: std::cell::Cell::new(None),
            session,
            setup,
        };
        screen.status = screen.turn_status();
        screen
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Board position from the last render, if the screen has been drawn.
    pub fn geometry(&self) -> Option<BoardGeometry> {
        self.geometry.get()
    }

    fn turn_status(&self) -> String {
        let player = self.session.current_player();
        format!(
            "{}'s turn ({}). {} in a row wins.",
            player.name(),
            player.mark(),
            self.session.threshold()
        )
    }

    /// Runs the command bound to `coord` and updates the status line.
    #[instrument(skip(self))]
    fn activate(&mut self, coord: Coord) {
        let Some(command) = self.commands.command(coord).copied() else {
            return;
        };
        let player = self.session.current_player().name().to_string();
        let result = command.execute(&mut self.session);
        self.status = self.describe(&player, &result);
    }

    fn describe(&self, player: &str, result: &MoveResult) -> String {
        if let Some(rejection) = &result.rejection {
            if result.outcome.is_terminal() {
                return format!("{}. Press 'r' to play again.", rejection);
            }
            return format!("{}. {}, try again.", rejection, player);
        }
        match &result.outcome {
            Outcome::InProgress => self.turn_status(),
            Outcome::Win(winner) => format!(
                "{} wins! Press 'r' to play again, 'n' for a new board or 'q' to quit.",
                winner.name()
            ),
            Outcome::Tie => {
                "Tie! Press 'r' to play again, 'n' for a new board or 'q' to quit.".to_string()
            }
        }
    }

    fn player_style(&self, mark: char) -> Style {
        let color = self
            .session
            .players()
            .iter()
            .position(|p| p.mark() == mark)
            .map(|idx| PLAYER_COLORS[idx])
            .unwrap_or(Color::White);
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    fn board_lines(&self) -> Vec<Line<'static>> {
        let snapshot = self.session.renderable_board();
        let size = snapshot.size();
        let winning = self.session.winning_line();
        let dim = Style::default().fg(Color::DarkGray);

        let mut header = " ".repeat(LABEL_WIDTH as usize);
        for col in 0..size {
            header.push_str(&format!("{:^width$}", col, width = CELL_STRIDE as usize));
        }
        let mut lines = vec![Line::styled(header, dim)];

        for (row, cells) in snapshot.rows().enumerate() {
            let mut spans = vec![Span::styled(format!("{:>2} ", row), dim)];
            for (col, mark) in cells.iter().enumerate() {
                let coord = Coord::new(row, col);
                let mut style = match mark {
                    Some(mark) => self.player_style(*mark),
                    None => dim,
                };
                if winning.is_some_and(|line| line.contains(coord)) {
                    style = style.bg(Color::Green);
                }
                if coord == self.cursor && !self.session.outcome().is_terminal() {
                    style = style.bg(Color::White).fg(Color::Black);
                }
                let symbol = mark.unwrap_or('·');
                spans.push(Span::styled(format!("[{}]", symbol), style));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let [title, body, status, help] = ui::frame_layout(frame.area());
        let [first, second] = self.session.players();
        ui::draw_title(
            frame,
            title,
            &format!(
                "{} ({}) vs {} ({})",
                first.name(),
                first.mark(),
                second.name(),
                second.mark()
            ),
        );

        let size = self.session.board().size();
        let geometry = BoardGeometry::centered(body, size);
        frame.render_widget(Paragraph::new(self.board_lines()), geometry.rect(body));
        self.geometry.set(Some(geometry));

        let color = match self.session.outcome() {
            Outcome::InProgress => Color::Yellow,
            Outcome::Win(_) => Color::Green,
            Outcome::Tie => Color::Cyan,
        };
        ui::draw_status(frame, status, &self.status, color);
        ui::draw_help(
            frame,
            help,
            "Arrows move  Enter/Space/click mark  r restart  n new board  q quit",
        );
    }

    #[instrument(skip(self, key), fields(code = ?key.code))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Char('n') | KeyCode::Char('N') => {
                info!("Returning to welcome screen");
                ScreenTransition::GoToWelcome(self.setup.clone())
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.session.reset();
                self.status = self.turn_status();
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate(self.cursor);
                ScreenTransition::Stay
            }
            code => {
                self.cursor = move_cursor(self.cursor, code, self.session.board().size());
                ScreenTransition::Stay
            }
        }
    }

    #[instrument(skip(self, mouse), fields(column = mouse.column, row = mouse.row))]
    fn handle_mouse(&mut self, mouse: MouseEvent) -> ScreenTransition {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return ScreenTransition::Stay;
        }
        let hit = self
            .geometry
            .get()
            .and_then(|geometry| geometry.cell_at(mouse.column, mouse.row));
        if let Some(coord) = hit {
            self.cursor = coord;
            self.activate(coord);
        }
        ScreenTransition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use gridtoe_core::Player;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(size: usize) -> GameScreen {
        let setup = GameSetup {
            names: ["Hai".to_string(), "Ha".to_string()],
            marks: ['x', 'o'],
            size,
        };
        let session = GameSession::new(
            size,
            Player::new("Hai", 'x').unwrap(),
            Player::new("Ha", 'o').unwrap(),
        )
        .unwrap();
        GameScreen::new(session, setup)
    }

    fn press(screen: &mut GameScreen, code: KeyCode) -> ScreenTransition {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(screen: &mut GameScreen, column: u16, row: u16) {
        screen.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn test_cursor_starts_in_center() {
        assert_eq!(screen(3).cursor(), Coord::new(1, 1));
    }

    #[test]
    fn test_enter_marks_cursor_cell() {
        let mut screen = screen(3);
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.session().renderable_board().get(1, 1), Some('x'));
        assert!(screen.status().starts_with("Ha's turn (o)"));
    }

    #[test]
    fn test_occupied_cell_reports_and_keeps_turn() {
        let mut screen = screen(3);
        press(&mut screen, KeyCode::Enter);
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.status(), "Cell (1, 1) is already marked. Ha, try again.");
        assert_eq!(screen.session().turn_index(), 1);
    }

    #[test]
    fn test_keyboard_win_then_reset() {
        let mut screen = screen(3);
        // x takes the middle column.
        press(&mut screen, KeyCode::Enter); // x (1,1)
        press(&mut screen, KeyCode::Left);
        press(&mut screen, KeyCode::Enter); // o (1,0)
        press(&mut screen, KeyCode::Right);
        press(&mut screen, KeyCode::Up);
        press(&mut screen, KeyCode::Enter); // x (0,1)
        press(&mut screen, KeyCode::Left);
        press(&mut screen, KeyCode::Enter); // o (0,0)
        press(&mut screen, KeyCode::Right);
        press(&mut screen, KeyCode::Down);
        press(&mut screen, KeyCode::Down);
        press(&mut screen, KeyCode::Enter); // x (2,1)
        assert!(matches!(screen.session().outcome(), Outcome::Win(p) if p.name() == "Hai"));
        assert!(screen.status().starts_with("Hai wins!"));

        press(&mut screen, KeyCode::Char('r'));
        assert_eq!(screen.session().outcome(), &Outcome::InProgress);
        assert_eq!(screen.session().board().marked_count(), 0);
    }

    #[test]
    fn test_new_board_returns_setup() {
        let mut screen = screen(4);
        match press(&mut screen, KeyCode::Char('n')) {
            ScreenTransition::GoToWelcome(setup) => assert_eq!(setup.size, 4),
            other => panic!("unexpected transition {:?}", other),
        }
    }

    #[test]
    fn test_click_marks_cell_after_render() {
        let mut screen = screen(3);
        // Without a render there is nothing to hit.
        click(&mut screen, 0, 0);
        assert_eq!(screen.session().turn_index(), 0);

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| screen.render(f)).unwrap();
        let geometry = screen.geometry().unwrap();

        let (x, y) = (0..60u16)
            .flat_map(|x| (0..20u16).map(move |y| (x, y)))
            .find(|&(x, y)| geometry.cell_at(x, y) == Some(Coord::new(0, 2)))
            .unwrap();
        click(&mut screen, x, y);
        assert_eq!(screen.session().renderable_board().get(0, 2), Some('x'));
        assert_eq!(screen.cursor(), Coord::new(0, 2));
    }
}
