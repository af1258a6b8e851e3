//! Placement directions
//!
//! Words only ever read forward: left to right, top to bottom, or along one
//! of the two downward diagonals.

use std::fmt;

/// A straight line a word can be laid along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Left to right along a row
    Across,
    /// Top to bottom along a column
    Down,
    /// Toward the bottom-right corner
    DiagonalDownRight,
    /// Toward the bottom-left corner
    DiagonalDownLeft,
}

impl Direction {
    /// Every direction, in the order used for random draws
    pub const ALL: [Self; 4] = [
        Self::Across,
        Self::Down,
        Self::DiagonalDownRight,
        Self::DiagonalDownLeft,
    ];

    /// Row and column step taken for each letter
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
            Self::DiagonalDownRight => (1, 1),
            Self::DiagonalDownLeft => (1, -1),
        }
    }

    /// Short lowercase name, as accepted on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Across => "across",
            Self::Down => "down",
            Self::DiagonalDownRight => "down-right",
            Self::DiagonalDownLeft => "down-left",
        }
    }

    /// Parse a direction from its name
    ///
    /// Accepts the names from [`Direction::name`] plus a few common aliases.
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "across" | "right" | "horizontal" => Some(Self::Across),
            "down" | "vertical" => Some(Self::Down),
            "down-right" | "diagonal-down-right" | "dr" => Some(Self::DiagonalDownRight),
            "down-left" | "diagonal-down-left" | "dl" => Some(Self::DiagonalDownLeft),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
