//! Word placements
//!
//! A placement is a word together with the in-bounds path its letters were
//! written along.

use super::{Coord, Direction, Word};

/// Compute the cells a word of `len` letters visits from `start`
///
/// Returns `None` if any step leaves an N×N grid of the given `size`.
/// There is no wraparound.
#[must_use]
pub fn path(start: Coord, direction: Direction, len: usize, size: usize) -> Option<Vec<Coord>> {
    let (dr, dc) = direction.delta();

    (0..len)
        .map(|step| {
            let step = step as isize;
            let row = start.row.checked_add_signed(dr * step)?;
            let col = start.col.checked_add_signed(dc * step)?;
            (row < size && col < size).then_some(Coord::new(row, col))
        })
        .collect()
}

/// A word written into a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    word: Word,
    start: Coord,
    direction: Direction,
    cells: Vec<Coord>,
}

impl Placement {
    /// Create a placement for an N×N grid
    ///
    /// Returns `None` when the path would leave the grid.
    #[must_use]
    pub fn new(word: Word, start: Coord, direction: Direction, size: usize) -> Option<Self> {
        let cells = path(start, direction, word.len(), size)?;
        Some(Self {
            word,
            start,
            direction,
            cells,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Cells visited, in letter order
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_across() {
        let cells = path(Coord::new(2, 1), Direction::Across, 3, 5).unwrap();
        assert_eq!(
            cells,
            vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]
        );
    }

    #[test]
    fn path_diagonal_down_left() {
        let cells = path(Coord::new(0, 3), Direction::DiagonalDownLeft, 4, 4).unwrap();
        assert_eq!(
            cells,
            vec![
                Coord::new(0, 3),
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(3, 0)
            ]
        );
    }

    #[test]
    fn path_rejects_running_off_the_edge() {
        assert!(path(Coord::new(0, 2), Direction::Across, 3, 4).is_some());
        assert!(path(Coord::new(0, 3), Direction::Across, 3, 4).is_none());
        assert!(path(Coord::new(3, 0), Direction::Down, 2, 4).is_none());
        assert!(path(Coord::new(0, 1), Direction::DiagonalDownLeft, 3, 4).is_none());
        assert!(path(Coord::new(2, 2), Direction::DiagonalDownRight, 3, 4).is_none());
    }

    #[test]
    fn placement_records_cells() {
        let word = Word::new("game").unwrap();
        let placement = Placement::new(word, Coord::new(0, 0), Direction::Down, 4).unwrap();

        assert_eq!(placement.cells().len(), 4);
        assert_eq!(placement.cells()[3], Coord::new(3, 0));
        assert_eq!(placement.direction(), Direction::Down);
    }

    #[test]
    fn placement_too_long_is_none() {
        let word = Word::new("development").unwrap();
        assert!(Placement::new(word, Coord::new(0, 0), Direction::Across, 10).is_none());
    }
}
