//! TUI application state and logic

use super::rendering;
use crate::core::Coord;
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;

/// Application state
pub struct App {
    pub session: Session,
    pub rng: StdRng,
    pub cursor: Coord,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Area of the last drawn frame, used to map mouse clicks to cells
    pub frame_area: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub puzzles_started: usize,
    pub puzzles_completed: usize,
    pub words_found: usize,
    pub wrong_guesses: usize,
}

impl App {
    #[must_use]
    pub fn new(session: Session, rng: StdRng) -> Self {
        let mut app = Self {
            session,
            rng,
            cursor: Coord::new(0, 0),
            input_mode: InputMode::Playing,
            messages: Vec::new(),
            stats: Statistics {
                puzzles_started: 1,
                ..Statistics::default()
            },
            should_quit: false,
            frame_area: Rect::default(),
        };

        app.add_message(
            "Welcome! Select letters with Space or the mouse, then press 'c' to check.",
            MessageStyle::Info,
        );
        app.announce_puzzle();
        app
    }

    fn announce_puzzle(&mut self) {
        if self.session.is_complete() {
            self.input_mode = InputMode::WinCelebration;
            self.add_message("No words fit in this grid. Press 'r' for another.", MessageStyle::Error);
            return;
        }

        let unplaced = self.session.puzzle().unplaced().len();
        if unplaced > 0 {
            self.add_message(
                &format!("{unplaced} word(s) did not fit and were left out"),
                MessageStyle::Info,
            );
        }
    }

    /// Move the cursor, clamped to the grid
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let last = self.session.grid().size().saturating_sub(1);
        self.cursor.row = self.cursor.row.saturating_add_signed(d_row).min(last);
        self.cursor.col = self.cursor.col.saturating_add_signed(d_col).min(last);
    }

    /// Select the cell under the cursor
    pub fn select_at_cursor(&mut self) {
        let Coord { row, col } = self.cursor;
        self.select_cell(row, col);
    }

    /// Select a raw coordinate from the input layer
    ///
    /// Out-of-range coordinates never reach the session.
    pub fn select_cell(&mut self, row: usize, col: usize) {
        if self.input_mode != InputMode::Playing {
            return;
        }

        if let Some(coord) = self.session.grid().coord(row, col) {
            self.cursor = coord;
            self.session.select_cell(coord);
        }
    }

    /// Select the cell under a mouse click, if the click hit the grid
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let size = self.session.grid().size();
        if let Some(coord) = rendering::cell_at(self.frame_area, size, column, row) {
            self.select_cell(coord.row, coord.col);
        }
    }

    pub fn check(&mut self) {
        if self.input_mode != InputMode::Playing {
            return;
        }

        let candidate = self.session.candidate().to_string();
        if candidate.is_empty() {
            self.add_message("Select some letters first.", MessageStyle::Info);
            return;
        }

        let outcome = self.session.check();
        if outcome.matched {
            self.stats.words_found += 1;
            self.add_message(&format!("Found {candidate}!"), MessageStyle::Success);
        } else {
            self.stats.wrong_guesses += 1;
            self.add_message(&format!("{candidate} is not on the list"), MessageStyle::Error);
        }

        if outcome.completed {
            self.stats.puzzles_completed += 1;
            self.input_mode = InputMode::WinCelebration;
            self.add_message("🎉 Congratulations! You found all words. 🎉", MessageStyle::Success);
            self.add_message("Press 'r' for a new puzzle or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn clear_selection(&mut self) {
        self.session.clear_selection();
    }

    pub fn reset(&mut self) {
        self.session.reset(&mut self.rng);
        self.cursor = Coord::new(0, 0);
        self.input_mode = InputMode::Playing;
        self.stats.puzzles_started += 1;
        self.messages.clear();
        self.add_message("New puzzle started!", MessageStyle::Info);
        self.announce_puzzle();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r' | 'n') => self.reset(),
            _ if self.input_mode == InputMode::WinCelebration => {
                // In celebration mode, ignore other keys
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Char(' ') | KeyCode::Enter => self.select_at_cursor(),
            KeyCode::Char('c') => self.check(),
            KeyCode::Backspace | KeyCode::Char('x') => self.clear_selection(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let frame_area = terminal.draw(|f| rendering::ui(f, &app))?.area;
        app.frame_area = frame_area;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => app.handle_click(column, row),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Grid, Placement, Word};
    use crate::generator::{Generator, Puzzle};
    use crate::wordlists::WordSource;
    use rand::SeedableRng;

    fn cat_app() -> App {
        let grid = Grid::from_rows(&["CATX", "XXXX", "XXXX", "XXXX"]).unwrap();
        let cat = Word::new("cat").unwrap();
        let placement = Placement::new(cat, Coord::new(0, 0), Direction::Across, 4).unwrap();
        let puzzle = Puzzle::new(grid, vec![placement], Vec::new());
        let session = Session::from_puzzle(Generator::new(4), WordSource::Default, puzzle);
        App::new(session, StdRng::seed_from_u64(0))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn keyboard_selection_and_check() {
        let mut app = cat_app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.candidate(), "CAT");

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.words_found, 1);
        assert_eq!(app.stats.puzzles_completed, 1);
    }

    #[test]
    fn wrong_guess_counts() {
        let mut app = cat_app();
        app.select_cell(1, 1);
        app.check();

        assert_eq!(app.stats.wrong_guesses, 1);
        assert_eq!(app.input_mode, InputMode::Playing);
        assert!(app.session.selection().is_empty());
    }

    #[test]
    fn cursor_is_clamped() {
        let mut app = cat_app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, Coord::new(0, 0));

        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.cursor, Coord::new(3, 0));
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut app = cat_app();
        app.select_cell(4, 0);
        assert!(app.session.selection().is_empty());
    }

    #[test]
    fn clear_key_drops_selection() {
        let mut app = cat_app();
        app.select_cell(0, 0);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.session.candidate(), "");
    }

    #[test]
    fn reset_starts_new_puzzle() {
        let mut app = cat_app();
        app.select_cell(0, 0);
        press(&mut app, KeyCode::Char('r'));

        assert_eq!(app.stats.puzzles_started, 2);
        assert!(app.session.selection().is_empty());
        assert_eq!(app.session.grid().size(), 4);
    }

    #[test]
    fn quit_keys() {
        let mut app = cat_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = cat_app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
