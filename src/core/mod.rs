//! Core domain types for word search puzzles
//!
//! Pure value types with no I/O: words, coordinates, directions, grids and
//! the placements that tie a word to a path through a grid.

mod direction;
mod grid;
mod placement;
mod word;

pub use direction::Direction;
pub use grid::{ALPHABET, Coord, Grid};
pub use placement::{Placement, path};
pub use word::{Word, WordError};
