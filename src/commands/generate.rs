//! Puzzle generation command
//!
//! Generates a single puzzle, reporting the seed so it can be reproduced.

use crate::core::Word;
use crate::generator::{Generator, Puzzle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for generating a puzzle
pub struct GenerateConfig {
    /// Seed for the random source; a fresh one is drawn when `None`
    pub seed: Option<u64>,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

/// Result of generating a puzzle
pub struct GenerateResult {
    pub puzzle: Puzzle,
    pub seed: u64,
    pub generator: Generator,
}

/// Generate one puzzle from a word list
#[must_use]
pub fn generate_puzzle(config: &GenerateConfig, generator: &Generator, words: &[Word]) -> GenerateResult {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    let puzzle = generator.generate(words, &mut rng);

    GenerateResult {
        puzzle,
        seed,
        generator: generator.clone(),
    }
}
