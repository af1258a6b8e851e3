//! Word search grid generation
//!
//! This module turns a word list into a [`Puzzle`].

mod engine;
pub mod fit;
mod puzzle;

pub use engine::{DEFAULT_GRID_SIZE, Generator, PlacementMode};
pub use fit::{can_place, valid_starts};
pub use puzzle::Puzzle;
