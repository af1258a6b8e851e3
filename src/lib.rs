//! Word Search
//!
//! Generates square letter grids with hidden words and tracks a player's
//! progress finding them.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordsearch::generator::Generator;
//! use wordsearch::session::Session;
//! use wordsearch::wordlists::WordSource;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut session = Session::start(Generator::new(10), WordSource::Default, &mut rng);
//!
//! // Select the letters of the first hidden word and check them
//! let placement = session.puzzle().placements()[0].clone();
//! for &cell in placement.cells() {
//!     session.select_cell(cell);
//! }
//! assert!(session.check().matched);
//! ```

// Core domain types
pub mod core;

// Grid generation
pub mod generator;

// Player progress state machine
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
