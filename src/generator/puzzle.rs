//! Generated puzzle
//!
//! The output of one generation run: the finished grid, the placements that
//! were committed, and the words that could not be placed.

use crate::core::{Grid, Placement, Word};

/// A finished grid plus the placed/unplaced partition of its word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    placed: Vec<Placement>,
    unplaced: Vec<Word>,
}

impl Puzzle {
    /// Assemble a puzzle from already-written parts
    ///
    /// The caller is responsible for the grid actually containing the
    /// placements' letters; [`Puzzle::is_readable`] reports when it does not.
    #[must_use]
    pub const fn new(grid: Grid, placed: Vec<Placement>, unplaced: Vec<Word>) -> Self {
        Self {
            grid,
            placed,
            unplaced,
        }
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placements in the order they were committed
    #[inline]
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placed
    }

    /// Words that could not be placed (too long for the drawn direction, or
    /// no conflict-free start in checked mode)
    #[inline]
    #[must_use]
    pub fn unplaced(&self) -> &[Word] {
        &self.unplaced
    }

    /// The findable word set, in placement order
    #[must_use]
    pub fn placed_words(&self) -> Vec<Word> {
        self.placed.iter().map(|p| p.word().clone()).collect()
    }

    /// Find the placement recorded for a word
    #[must_use]
    pub fn placement_of(&self, word: &Word) -> Option<&Placement> {
        self.placed.iter().find(|p| p.word() == word)
    }

    /// Whether the grid still spells the placement's word along its path
    ///
    /// Always true in checked mode. In overwrite mode a later word may have
    /// replaced one of the cells.
    #[must_use]
    pub fn is_readable(&self, placement: &Placement) -> bool {
        self.grid.read(placement.cells()).as_deref() == Some(placement.word().text())
    }

    /// Placements whose letters were partly overwritten by later words
    #[must_use]
    pub fn corrupted(&self) -> Vec<&Placement> {
        self.placed.iter().filter(|p| !self.is_readable(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, Direction};

    fn cat_puzzle() -> Puzzle {
        let grid = Grid::from_rows(&["CATX", "QRST", "UVWY", "ZZZZ"]).unwrap();
        let cat = Placement::new(Word::new("cat").unwrap(), Coord::new(0, 0), Direction::Across, 4)
            .unwrap();
        let dog = Placement::new(Word::new("dog").unwrap(), Coord::new(1, 0), Direction::Across, 4)
            .unwrap();
        Puzzle::new(grid, vec![cat, dog], vec![Word::new("elephant").unwrap()])
    }

    #[test]
    fn placed_words_in_order() {
        let puzzle = cat_puzzle();
        let words: Vec<_> = puzzle.placed_words().iter().map(|w| w.to_string()).collect();
        assert_eq!(words, ["CAT", "DOG"]);
        assert_eq!(puzzle.unplaced()[0].text(), "ELEPHANT");
    }

    #[test]
    fn readability_detects_overwritten_cells() {
        let puzzle = cat_puzzle();
        let cat = &puzzle.placements()[0];
        let dog = &puzzle.placements()[1];

        assert!(puzzle.is_readable(cat));
        assert!(!puzzle.is_readable(dog));
        assert_eq!(puzzle.corrupted().len(), 1);
    }

    #[test]
    fn placement_lookup() {
        let puzzle = cat_puzzle();
        let cat = Word::new("CAT").unwrap();
        assert!(puzzle.placement_of(&cat).is_some());
        assert!(puzzle.placement_of(&Word::new("COW").unwrap()).is_none());
    }
}
