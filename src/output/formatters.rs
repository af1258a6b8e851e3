//! Formatting utilities for terminal output

use crate::core::{Coord, Grid, Word};
use colored::Colorize;

/// How a grid cell should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    /// Part of the player's current selection
    Selected,
    /// Part of a word the player has found
    Found,
    /// Part of a placed word (answer key)
    Answer,
}

/// Render a grid with row/column indices and colored highlights
///
/// `mark` is asked about every cell; `None` leaves the letter plain.
#[must_use]
pub fn format_grid(grid: &Grid, mark: impl Fn(Coord) -> Option<CellMark>) -> String {
    let width = grid.size().saturating_sub(1).to_string().len();
    let mut out = String::new();

    out.push_str(&" ".repeat(width + 1));
    for col in 0..grid.size() {
        out.push_str(&format!(" {:>width$}", col).bright_black().to_string());
    }
    out.push('\n');

    for (row, letters) in grid.rows().enumerate() {
        out.push_str(&format!("{row:>width$} ").bright_black().to_string());
        for (col, &letter) in letters.iter().enumerate() {
            let cell = format!(" {:>width$}", char::from(letter));
            let styled = match mark(Coord::new(row, col)) {
                Some(CellMark::Selected) => cell.black().on_yellow().bold(),
                Some(CellMark::Found) => cell.bright_green().bold(),
                Some(CellMark::Answer) => cell.bright_cyan().bold(),
                None => cell.normal(),
            };
            out.push_str(&styled.to_string());
        }
        out.push('\n');
    }

    out
}

/// Join words for display, noting how many were left out
#[must_use]
pub fn word_list_line(shown: &[Word], total: usize) -> String {
    let mut line = shown
        .iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(", ");

    let hidden = total.saturating_sub(shown.len());
    if hidden > 0 {
        line.push_str(&format!(" (+{hidden} more)"));
    }
    line
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
