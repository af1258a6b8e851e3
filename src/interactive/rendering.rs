//! TUI rendering with ratatui
//!
//! Draws the letter grid, the word list and progress for the word search
//! interface. Layout is computed by one function so that mouse clicks can be
//! mapped back to the cell that was drawn under them.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Coord;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};
use rustc_hash::FxHashSet;

/// Terminal columns used per grid cell (" X ")
const CELL_WIDTH: u16 = 3;

/// Screen regions for one frame
struct Areas {
    header: Rect,
    grid: Rect,
    info: Rect,
    input: Rect,
    status: Rect,
}

fn layout(area: Rect, size: usize) -> Areas {
    let size = u16::try_from(size).unwrap_or(u16::MAX);
    let grid_width = size.saturating_mul(CELL_WIDTH).saturating_add(2);
    let grid_height = size.saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),        // Header
            Constraint::Min(grid_height), // Main content
            Constraint::Length(3),        // Input area
            Constraint::Length(3),        // Status bar
        ])
        .split(area);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(grid_width), // Grid
            Constraint::Min(24),            // Word list and messages
        ])
        .split(chunks[1]);

    let grid = Rect {
        height: main_chunks[0].height.min(grid_height),
        ..main_chunks[0]
    };

    Areas {
        header: chunks[0],
        grid,
        info: main_chunks[1],
        input: chunks[2],
        status: chunks[3],
    }
}

/// Map a terminal position to the grid cell drawn there
///
/// `area` is the full frame area the UI was last drawn into.
#[must_use]
pub fn cell_at(area: Rect, size: usize, column: u16, row: u16) -> Option<Coord> {
    let grid = layout(area, size).grid;
    let inner = Block::default().borders(Borders::ALL).inner(grid);

    let inside = column >= inner.x
        && row >= inner.y
        && column < inner.x.saturating_add(inner.width)
        && row < inner.y.saturating_add(inner.height);
    if !inside {
        return None;
    }

    let cell_row = usize::from(row - inner.y);
    let cell_col = usize::from((column - inner.x) / CELL_WIDTH);
    (cell_row < size && cell_col < size).then_some(Coord::new(cell_row, cell_col))
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let areas = layout(f.area(), app.session.grid().size());

    render_header(f, areas.header);
    render_grid(f, app, areas.grid);
    render_info_panel(f, app, areas.info);
    render_input(f, app, areas.input);
    render_status(f, app, areas.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔎 WORD SEARCH - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let found: FxHashSet<Coord> = session
        .found_words()
        .iter()
        .filter_map(|word| session.found_path(word))
        .flat_map(|placement| placement.cells().iter().copied())
        .collect();

    let lines: Vec<Line> = session
        .grid()
        .rows()
        .enumerate()
        .map(|(row, letters)| {
            let spans: Vec<Span> = letters
                .iter()
                .enumerate()
                .map(|(col, &letter)| {
                    let coord = Coord::new(row, col);
                    let mut style = if session.is_selected(coord) {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    } else if found.contains(&coord) {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    if coord == app.cursor && app.input_mode == InputMode::Playing {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!(" {} ", char::from(letter)), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Grid ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Word list
            Constraint::Length(3), // Progress gauge
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_words(f, app, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut items: Vec<ListItem> = session
        .visible_remaining()
        .iter()
        .map(|word| {
            ListItem::new(format!("  {}", word.text())).style(Style::default().fg(Color::Yellow))
        })
        .collect();

    let hidden = session.remaining_words().len() - session.visible_remaining().len();
    if hidden > 0 {
        items.push(
            ListItem::new(format!("  … {hidden} more"))
                .style(Style::default().fg(Color::DarkGray)),
        );
    }

    items.extend(session.found_words().iter().map(|word| {
        ListItem::new(format!("✓ {}", word.text())).style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    }));

    let words = List::new(items).block(
        Block::default()
            .title(" Find Words ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(words, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let found = app.session.found_words().len();
    let total = app.session.total_words();
    let percent = if total == 0 {
        100
    } else {
        (found * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{found}/{total} words found"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 PUZZLE COMPLETE! 🎉 | Press 'r' for a new puzzle or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Playing => (
            " Selected Letters | Space/Enter/click: select  c: check  x: clear ",
            app.session.candidate(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let generator = app.session.generator();
    let mode_text = format!(
        "{0}×{0} | {1}",
        generator.size(),
        generator.mode()
    );
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Puzzles: {}/{}",
        app.stats.puzzles_completed, app.stats.puzzles_started
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let words_text = format!(
        "Found: {} | Misses: {}",
        app.stats.words_found, app.stats.wrong_guesses
    );
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[2]);

    let help_text = "q: Quit | r: Reset | arrows/hjkl: Move";
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
