//! Grid generation
//!
//! Lays a word list into an N×N grid along randomly drawn directions and
//! fills everything else with noise letters.

use super::fit::{can_place, valid_starts};
use super::puzzle::Puzzle;
use crate::core::{Direction, Grid, Placement, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::{debug, info};

/// Default side length of a puzzle grid
pub const DEFAULT_GRID_SIZE: usize = 10;

/// How a word is committed to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementMode {
    /// Fill with noise first, then write each word over whatever is there.
    /// A later word may clobber an earlier one's letters.
    Overwrite,
    /// Lay words on a blank grid, only at starts where [`can_place`] holds,
    /// then fill the leftover cells with noise. Every placed word stays
    /// readable.
    #[default]
    Checked,
}

impl PlacementMode {
    /// Parse a mode from its name
    ///
    /// Supported names: "overwrite", "checked". Returns `None` otherwise.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Some(Self::Overwrite),
            "checked" | "safe" => Some(Self::Checked),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Overwrite => "overwrite",
            Self::Checked => "checked",
        }
    }
}

impl fmt::Display for PlacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Word search grid generator
///
/// Holds the generation settings; randomness is supplied per call so that a
/// seeded RNG reproduces the same puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    size: usize,
    mode: PlacementMode,
    directions: Vec<Direction>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl Generator {
    /// Create a generator for `size`×`size` grids using all four directions
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            mode: PlacementMode::default(),
            directions: Direction::ALL.to_vec(),
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: PlacementMode) -> Self {
        self.mode = mode;
        self
    }

    /// Restrict the directions words may be drawn along
    ///
    /// An empty list falls back to all four directions.
    #[must_use]
    pub fn with_directions(mut self, directions: &[Direction]) -> Self {
        let mut unique = Vec::with_capacity(directions.len());
        for &direction in directions {
            if !unique.contains(&direction) {
                unique.push(direction);
            }
        }
        self.directions = if unique.is_empty() {
            Direction::ALL.to_vec()
        } else {
            unique
        };
        self
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> PlacementMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Generate a puzzle from a word list
    ///
    /// Words are tried in order. Each gets one uniformly drawn direction and,
    /// if any start fits, one uniformly drawn start. Words with no fitting
    /// start in their drawn direction are reported in [`Puzzle::unplaced`].
    /// Repeated words are only tried once.
    pub fn generate<R: Rng + ?Sized>(&self, words: &[Word], rng: &mut R) -> Puzzle {
        let mut grid = match self.mode {
            PlacementMode::Overwrite => Grid::noise(self.size, rng),
            PlacementMode::Checked => Grid::blank(self.size),
        };
        let mut placed = Vec::new();
        let mut unplaced = Vec::new();
        let mut seen: FxHashSet<&Word> = FxHashSet::default();

        for word in words {
            if !seen.insert(word) {
                debug!(word = %word, "skipping duplicate word");
                continue;
            }

            match self.place_word(&mut grid, word, rng) {
                Some(placement) => {
                    debug!(
                        word = %word,
                        start = %placement.start(),
                        direction = %placement.direction(),
                        "placed word"
                    );
                    placed.push(placement);
                }
                None => {
                    debug!(word = %word, "no room for word");
                    unplaced.push(word.clone());
                }
            }
        }

        if self.mode == PlacementMode::Checked {
            grid.fill_blanks(rng);
        }

        info!(
            size = self.size,
            mode = %self.mode,
            placed = placed.len(),
            unplaced = unplaced.len(),
            "generated puzzle"
        );

        Puzzle::new(grid, placed, unplaced)
    }

    /// Draw a direction and a start for one word and write it
    fn place_word<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        word: &Word,
        rng: &mut R,
    ) -> Option<Placement> {
        let direction = *self.directions.choose(rng)?;

        let mut starts = valid_starts(word.len(), direction, self.size);
        if self.mode == PlacementMode::Checked {
            starts.retain(|&start| can_place(grid, word, start, direction));
        }

        let start = *starts.choose(rng)?;
        let placement = Placement::new(word.clone(), start, direction, self.size)?;
        grid.write(word, placement.cells());
        Some(placement)
    }
}
