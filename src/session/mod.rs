//! Player progress through a puzzle
//!
//! The session is the only mutable game state. Presentation and input layers
//! call its transitions one at a time and read its accessors to draw.

mod state;

pub use state::{CheckOutcome, DEFAULT_DISPLAY_LIMIT, Session};
