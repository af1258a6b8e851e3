//! Square letter grid
//!
//! Cells are stored row-major as ASCII bytes. A freshly generated grid only
//! holds `A..=Z`; [`Grid::BLANK`] appears only while words are being laid
//! out on an empty grid.

use super::Word;
use rand::Rng;
use std::fmt;

/// Letters used for noise cells
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A grid coordinate, zero-based from the top-left cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An N×N matrix of single uppercase letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Marker for a cell no word or noise has been written to yet
    pub const BLANK: u8 = b' ';

    /// Create a grid where every cell is [`Grid::BLANK`]
    #[must_use]
    pub fn blank(size: usize) -> Self {
        Self {
            size,
            cells: vec![Self::BLANK; size * size],
        }
    }

    /// Create a grid where every cell is an independent uniform letter
    pub fn noise<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut grid = Self::blank(size);
        grid.fill_blanks(rng);
        grid
    }

    /// Build a grid from rows of letters
    ///
    /// Returns `None` unless the rows form a square.
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }

        let cells = rows
            .iter()
            .flat_map(|row| row.bytes().map(|b| b.to_ascii_uppercase()))
            .collect();
        Some(Self { size, cells })
    }

    /// Side length of the grid
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Validate a raw coordinate from the input layer
    ///
    /// This is the boundary check: anything outside the grid is rejected here
    /// so the session only ever sees in-range cells.
    #[must_use]
    pub fn coord(&self, row: usize, col: usize) -> Option<Coord> {
        (row < self.size && col < self.size).then_some(Coord::new(row, col))
    }

    /// Whether a coordinate lies within the grid
    #[inline]
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Letter at a coordinate, or `None` when out of bounds
    #[inline]
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<u8> {
        self.contains(coord)
            .then(|| self.cells[coord.row * self.size + coord.col])
    }

    /// Overwrite one cell
    ///
    /// # Panics
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn set(&mut self, coord: Coord, letter: u8) {
        assert!(self.contains(coord), "coordinate {coord} outside grid");
        self.cells[coord.row * self.size + coord.col] = letter;
    }

    /// Whether a cell is still blank
    #[inline]
    #[must_use]
    pub fn is_blank(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Self::BLANK)
    }

    /// Replace every blank cell with a uniform random letter
    pub fn fill_blanks<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut().filter(|c| **c == Self::BLANK) {
            *cell = ALPHABET[rng.random_range(0..ALPHABET.len())];
        }
    }

    /// Write a word's letters along a path, overwriting whatever is there
    ///
    /// # Panics
    /// Panics if the path is shorter than the word or leaves the grid.
    pub fn write(&mut self, word: &Word, path: &[Coord]) {
        assert!(path.len() >= word.len(), "path shorter than word");
        for (&coord, &letter) in path.iter().zip(word.letters()) {
            self.set(coord, letter);
        }
    }

    /// Read the letters along a path
    ///
    /// Returns `None` if any coordinate is out of bounds.
    #[must_use]
    pub fn read(&self, path: &[Coord]) -> Option<String> {
        path.iter()
            .map(|&coord| self.get(coord).map(char::from))
            .collect()
    }

    /// Iterate over rows as byte slices
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks(0) panics, and a 0×0 grid has no rows anyway
        self.cells.chunks(self.size.max(1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|&b| char::from(b).to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
