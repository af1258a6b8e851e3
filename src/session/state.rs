//! Puzzle session state machine
//!
//! A session owns one generated puzzle plus the player's progress through
//! it. Every transition is total: a wrong guess is an ordinary outcome.

use crate::core::{Coord, Grid, Placement, Word};
use crate::generator::{Generator, Puzzle};
use crate::wordlists::WordSource;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

/// Default number of remaining words shown at once
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Result of checking the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckOutcome {
    /// The candidate was one of the remaining words
    pub matched: bool,
    /// This check found the last remaining word
    pub completed: bool,
}

/// One game: a puzzle and the player's progress through it
#[derive(Debug, Clone)]
pub struct Session {
    generator: Generator,
    source: WordSource,
    display_limit: usize,
    puzzle: Puzzle,
    selection: Vec<Coord>,
    candidate: String,
    remaining: Vec<Word>,
    found: Vec<Word>,
}

impl Session {
    /// Load words from `source`, generate a puzzle and start playing it
    pub fn start<R: Rng + ?Sized>(generator: Generator, source: WordSource, rng: &mut R) -> Self {
        let words = source.load();
        let puzzle = generator.generate(&words, rng);
        Self::from_puzzle(generator, source, puzzle)
    }

    /// Start playing an already generated puzzle
    ///
    /// `generator` and `source` are only used by [`Session::reset`].
    #[must_use]
    pub fn from_puzzle(generator: Generator, source: WordSource, puzzle: Puzzle) -> Self {
        let remaining = puzzle.placed_words();
        Self {
            generator,
            source,
            display_limit: DEFAULT_DISPLAY_LIMIT,
            puzzle,
            selection: Vec::new(),
            candidate: String::new(),
            remaining,
            found: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    /// Append a cell to the current selection
    ///
    /// Returns `false` and leaves the session untouched if the coordinate is
    /// outside the grid; the input layer is expected to have rejected it via
    /// [`Grid::coord`] already. Selecting the same cell twice appends its
    /// letter twice.
    pub fn select_cell(&mut self, coord: Coord) -> bool {
        let Some(letter) = self.puzzle.grid().get(coord) else {
            return false;
        };

        self.selection.push(coord);
        self.candidate.push(char::from(letter));
        debug!(cell = %coord, candidate = %self.candidate, "selected cell");
        true
    }

    /// Check the accumulated candidate against the remaining words
    ///
    /// The selection is cleared in every case. A match moves the word from
    /// remaining to found; `completed` is only reported by the check that
    /// finds the last word.
    pub fn check(&mut self) -> CheckOutcome {
        let candidate = std::mem::take(&mut self.candidate);
        self.selection.clear();

        let Some(index) = self.remaining.iter().position(|w| w.text() == candidate) else {
            debug!(candidate = %candidate, "no match");
            return CheckOutcome::default();
        };

        let word = self.remaining.remove(index);
        info!(word = %word, remaining = self.remaining.len(), "found word");
        self.found.push(word);

        let completed = self.remaining.is_empty();
        if completed {
            info!(words = self.found.len(), "puzzle complete");
        }

        CheckOutcome {
            matched: true,
            completed,
        }
    }

    /// Drop the current selection without checking it
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.candidate.clear();
    }

    /// Throw away all progress and play a fresh puzzle
    ///
    /// The word source is reloaded and shuffled before generating.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut words = self.source.load();
        words.shuffle(rng);
        let puzzle = self.generator.generate(&words, rng);

        info!(words = puzzle.placements().len(), "reset session");
        *self = Self::from_puzzle(self.generator.clone(), self.source.clone(), puzzle)
            .with_display_limit(self.display_limit);
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        self.puzzle.grid()
    }

    #[inline]
    #[must_use]
    pub const fn generator(&self) -> &Generator {
        &self.generator
    }

    /// Selected cells, in selection order
    #[inline]
    #[must_use]
    pub fn selection(&self) -> &[Coord] {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, coord: Coord) -> bool {
        self.selection.contains(&coord)
    }

    /// Letters of the current selection
    #[inline]
    #[must_use]
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    /// Words still to find, in placement order
    #[inline]
    #[must_use]
    pub fn remaining_words(&self) -> &[Word] {
        &self.remaining
    }

    /// The first `display_limit` remaining words
    #[must_use]
    pub fn visible_remaining(&self) -> &[Word] {
        let end = self.remaining.len().min(self.display_limit);
        &self.remaining[..end]
    }

    #[inline]
    #[must_use]
    pub const fn display_limit(&self) -> usize {
        self.display_limit
    }

    /// Words found so far, in the order they were found
    #[inline]
    #[must_use]
    pub fn found_words(&self) -> &[Word] {
        &self.found
    }

    /// Size of the findable set for this puzzle
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.remaining.len() + self.found.len()
    }

    /// Whether every word has been found
    ///
    /// A puzzle with nothing placed starts out complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    /// The placement of a word that has already been found
    #[must_use]
    pub fn found_path(&self, word: &Word) -> Option<&Placement> {
        self.found
            .contains(word)
            .then(|| self.puzzle.placement_of(word))
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::wordlists::default_words;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    /// 4x4 puzzle with CAT forced across from (0, 0)
    fn cat_session() -> Session {
        let mut rng = StdRng::seed_from_u64(17);
        let mut grid = Grid::noise(4, &mut rng);
        let cat = Word::new("CAT").unwrap();
        let placement = Placement::new(cat, Coord::new(0, 0), Direction::Across, 4).unwrap();
        grid.write(placement.word(), placement.cells());

        let puzzle = Puzzle::new(grid, vec![placement], Vec::new());
        Session::from_puzzle(Generator::new(4), WordSource::Default, puzzle)
    }

    fn select_all(session: &mut Session, cells: &[(usize, usize)]) {
        for &(row, col) in cells {
            assert!(session.select_cell(Coord::new(row, col)));
        }
    }

    fn word_set(words: &[Word]) -> BTreeSet<Word> {
        words.iter().cloned().collect()
    }

    #[test]
    fn forced_cat_grid_starts_with_cat() {
        let session = cat_session();
        let row0: Vec<u8> = session.grid().rows().next().unwrap().to_vec();
        assert_eq!(&row0[..3], b"CAT");
        assert!(row0[3].is_ascii_uppercase());
    }

    #[test]
    fn selecting_cat_completes_puzzle() {
        let mut session = cat_session();
        select_all(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(session.candidate(), "CAT");

        let outcome = session.check();

        assert_eq!(
            outcome,
            CheckOutcome {
                matched: true,
                completed: true
            }
        );
        assert!(session.remaining_words().is_empty());
        assert_eq!(session.found_words(), &[Word::new("CAT").unwrap()]);
        assert!(session.selection().is_empty());
        assert!(session.is_complete());
    }

    #[test]
    fn partial_selection_does_not_match() {
        let mut session = cat_session();
        select_all(&mut session, &[(0, 0), (0, 1)]);

        let outcome = session.check();

        assert!(!outcome.matched);
        assert!(!outcome.completed);
        assert!(session.selection().is_empty());
        assert_eq!(session.candidate(), "");
        assert_eq!(session.remaining_words(), &[Word::new("CAT").unwrap()]);
        assert!(session.found_words().is_empty());
    }

    #[test]
    fn completion_is_reported_once() {
        let mut session = cat_session();
        select_all(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        assert!(session.check().completed);

        select_all(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        let again = session.check();
        assert_eq!(again, CheckOutcome::default());
        assert_eq!(session.found_words().len(), 1);
    }

    #[test]
    fn found_word_cannot_be_found_twice() {
        let list: Vec<Word> = ["cat", "dog"].iter().map(|w| Word::new(w).unwrap()).collect();
        let grid = Grid::from_rows(&["CATX", "DOGX", "XXXX", "XXXX"]).unwrap();
        let placements = vec![
            Placement::new(list[0].clone(), Coord::new(0, 0), Direction::Across, 4).unwrap(),
            Placement::new(list[1].clone(), Coord::new(1, 0), Direction::Across, 4).unwrap(),
        ];
        let puzzle = Puzzle::new(grid, placements, Vec::new());
        let mut session = Session::from_puzzle(Generator::new(4), WordSource::Default, puzzle);

        select_all(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(
            session.check(),
            CheckOutcome {
                matched: true,
                completed: false
            }
        );

        select_all(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        assert!(!session.check().matched);
        assert_eq!(session.remaining_words(), &list[1..]);
    }

    #[test]
    fn same_cell_twice_repeats_letter() {
        let mut session = cat_session();
        select_all(&mut session, &[(0, 1), (0, 1)]);
        assert_eq!(session.candidate(), "AA");
        assert_eq!(session.selection().len(), 2);
    }

    #[test]
    fn out_of_range_cell_is_ignored() {
        let mut session = cat_session();
        assert!(!session.select_cell(Coord::new(4, 0)));
        assert!(session.selection().is_empty());
        assert_eq!(session.candidate(), "");
    }

    #[test]
    fn is_selected_and_clear_selection() {
        let mut session = cat_session();
        select_all(&mut session, &[(1, 1)]);
        assert!(session.is_selected(Coord::new(1, 1)));
        assert!(!session.is_selected(Coord::new(0, 0)));

        session.clear_selection();
        assert!(session.selection().is_empty());
        assert_eq!(session.remaining_words().len(), 1);
    }

    #[test]
    fn found_path_only_for_found_words() {
        let mut session = cat_session();
        let cat = Word::new("CAT").unwrap();
        assert!(session.found_path(&cat).is_none());

        select_all(&mut session, &[(0, 0), (0, 1), (0, 2)]);
        session.check();
        assert_eq!(session.found_path(&cat).unwrap().start(), Coord::new(0, 0));
    }

    #[test]
    fn empty_puzzle_starts_complete() {
        let source = WordSource::Words(Vec::new());
        let mut session = Session::start(Generator::new(5), source, &mut StdRng::seed_from_u64(1));

        assert!(session.is_complete());
        assert_eq!(session.total_words(), 0);
        assert_eq!(session.check(), CheckOutcome::default());
    }

    #[test]
    fn visible_remaining_is_capped() {
        let words: Vec<Word> = ["ant", "bee", "cow", "doe", "eel"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let session = Session::start(
            Generator::new(10),
            WordSource::Words(words),
            &mut StdRng::seed_from_u64(4),
        )
        .with_display_limit(2);

        assert_eq!(session.visible_remaining().len(), 2);
        assert_eq!(session.visible_remaining(), &session.remaining_words()[..2]);
    }

    #[test]
    fn reset_discards_progress() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut session = Session::start(Generator::new(10), WordSource::Default, &mut rng)
            .with_display_limit(3);

        let placement = session.puzzle().placements()[0].clone();
        for &cell in placement.cells() {
            session.select_cell(cell);
        }
        assert!(session.check().matched);
        session.select_cell(Coord::new(0, 0));

        session.reset(&mut rng);

        assert!(session.found_words().is_empty());
        assert!(session.selection().is_empty());
        assert_eq!(session.candidate(), "");
        assert_eq!(session.display_limit(), 3);
        assert_eq!(session.remaining_words(), &session.puzzle().placed_words()[..]);
    }

    #[test]
    fn reset_is_deterministic_for_seed() {
        let start = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut session = Session::start(Generator::new(10), WordSource::Default, &mut rng);
            session.reset(&mut rng);
            session
        };

        assert_eq!(start(99).puzzle(), start(99).puzzle());
    }

    #[test]
    fn finding_every_placed_word() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut session = Session::start(Generator::new(10), WordSource::Default, &mut rng);
        let placements = session.puzzle().placements().to_vec();
        let total = placements.len();

        let mut completions = 0;
        for placement in &placements {
            for &cell in placement.cells() {
                session.select_cell(cell);
            }
            let outcome = session.check();
            assert!(outcome.matched, "{} not readable", placement.word());
            completions += usize::from(outcome.completed);
        }

        assert_eq!(session.found_words().len(), total);
        assert_eq!(completions, usize::from(total > 0));
    }

    proptest! {
        #[test]
        fn word_sets_stay_partitioned(
            seed in any::<u64>(),
            moves in prop::collection::vec((0usize..10, 0usize..10, any::<bool>()), 0..80),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut session = Session::start(Generator::new(10), WordSource::Default, &mut rng);
            let all = word_set(session.remaining_words());

            for (row, col, check) in moves {
                session.select_cell(Coord::new(row, col));
                if check {
                    session.check();
                }

                let remaining = word_set(session.remaining_words());
                let found = word_set(session.found_words());
                prop_assert!(remaining.is_disjoint(&found));
                prop_assert_eq!(&remaining | &found, all.clone());
            }
        }

        #[test]
        fn failed_checks_change_nothing(
            seed in any::<u64>(),
            cells in prop::collection::vec((0usize..10, 0usize..10), 0..12),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut session = Session::start(Generator::new(10), WordSource::Default, &mut rng);
            for (row, col) in cells {
                session.select_cell(Coord::new(row, col));
            }

            let before_remaining = session.remaining_words().to_vec();
            let before_found = session.found_words().to_vec();
            let candidate = session.candidate().to_string();
            let expected_match = before_remaining.iter().any(|w| w.text() == candidate);

            let outcome = session.check();
            prop_assert_eq!(outcome.matched, expected_match);
            if !outcome.matched {
                prop_assert_eq!(session.remaining_words(), &before_remaining[..]);
                prop_assert_eq!(session.found_words(), &before_found[..]);
            }
            prop_assert!(session.selection().is_empty());
        }
    }

    #[test]
    fn default_list_session_has_findable_words() {
        let mut rng = StdRng::seed_from_u64(5);
        let session = Session::start(Generator::new(10), WordSource::Default, &mut rng);
        let placed = session.puzzle().placements().len();
        let unplaced = session.puzzle().unplaced().len();

        assert_eq!(placed + unplaced, default_words().len());
        assert_eq!(session.total_words(), placed);
    }
}
