//! Fit checks for word placement
//!
//! `valid_starts` answers "where could this word go at all" (bounds only),
//! while `can_place` also requires every cell on the path to be blank or to
//! already hold the needed letter.

use crate::core::{Coord, Direction, Grid, Word, path};

/// Every start from which `len` letters in `direction` stay inside the grid
///
/// Starts are listed row-major. Returns an empty list when the word cannot
/// fit in this direction at all (including `len == 0`).
#[must_use]
pub fn valid_starts(len: usize, direction: Direction, size: usize) -> Vec<Coord> {
    if len == 0 || len > size {
        return Vec::new();
    }

    let span = len - 1;
    let (row_range, col_range) = match direction {
        Direction::Across => (0..size, 0..size - span),
        Direction::Down => (0..size - span, 0..size),
        Direction::DiagonalDownRight => (0..size - span, 0..size - span),
        Direction::DiagonalDownLeft => (0..size - span, span..size),
    };

    row_range
        .flat_map(|row| col_range.clone().map(move |col| Coord::new(row, col)))
        .collect()
}

/// Check whether `word` can be written from `start` without conflicts
///
/// True iff every cell on the path is within the grid and is either blank
/// or already holds the letter that would be written there.
#[must_use]
pub fn can_place(grid: &Grid, word: &Word, start: Coord, direction: Direction) -> bool {
    let Some(cells) = path(start, direction, word.len(), grid.size()) else {
        return false;
    };

    cells
        .iter()
        .zip(word.letters())
        .all(|(&coord, &letter)| match grid.get(coord) {
            Some(existing) => existing == Grid::BLANK || existing == letter,
            None => false,
        })
}
