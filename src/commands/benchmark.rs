//! Benchmark command
//!
//! Generates many puzzles over consecutive seeds and reports how well the
//! word list fits: placement rate, overwritten words, direction mix.

use crate::core::{Direction, Word};
use crate::generator::{Generator, Puzzle};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of puzzles to generate
    pub count: usize,
    /// Seed of the first puzzle; puzzle `i` uses `base_seed + i`
    pub base_seed: u64,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize, base_seed: u64) -> Self {
        Self {
            count,
            base_seed,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub puzzles: usize,
    pub words_per_puzzle: usize,
    pub total_placed: usize,
    pub total_unplaced: usize,
    /// Placed words no longer readable because a later word overwrote them
    pub total_corrupted: usize,
    pub min_placed: usize,
    pub max_placed: usize,
    pub direction_counts: FxHashMap<Direction, usize>,
    /// How often each word ended up unplaced
    pub unplaced_counts: FxHashMap<Word, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

impl BenchmarkResult {
    /// Share of attempted words that were placed, in percent
    #[must_use]
    pub fn placement_rate(&self) -> f64 {
        let attempted = self.total_placed + self.total_unplaced;
        if attempted == 0 {
            return 0.0;
        }
        self.total_placed as f64 / attempted as f64 * 100.0
    }

    /// Words most often left out, most frequent first
    #[must_use]
    pub fn most_unplaced(&self, limit: usize) -> Vec<(&Word, usize)> {
        let mut counts: Vec<(&Word, usize)> =
            self.unplaced_counts.iter().map(|(w, &n)| (w, n)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts.truncate(limit);
        counts
    }
}

/// Per-puzzle numbers gathered in parallel before merging
struct PuzzleStats {
    placed: usize,
    unplaced: Vec<Word>,
    corrupted: usize,
    directions: Vec<Direction>,
}

impl From<&Puzzle> for PuzzleStats {
    fn from(puzzle: &Puzzle) -> Self {
        Self {
            placed: puzzle.placements().len(),
            unplaced: puzzle.unplaced().to_vec(),
            corrupted: puzzle.corrupted().len(),
            directions: puzzle.placements().iter().map(|p| p.direction()).collect(),
        }
    }
}

/// Generate `config.count` puzzles and summarize them
pub fn run_benchmark(config: &BenchmarkConfig, generator: &Generator, words: &[Word]) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.count as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░");
        pb.set_style(style);
        pb.set_message(format!("{} grid, {} placement", generator.size(), generator.mode()));
        pb
    } else {
        ProgressBar::hidden()
    };

    let stats: Vec<PuzzleStats> = (0..config.count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.base_seed.wrapping_add(i as u64));
            let puzzle = generator.generate(words, &mut rng);
            pb.inc(1);
            PuzzleStats::from(&puzzle)
        })
        .collect();

    pb.finish_and_clear();

    let mut total_placed = 0;
    let mut total_unplaced = 0;
    let mut total_corrupted = 0;
    let mut min_placed = usize::MAX;
    let mut max_placed = 0;
    let mut direction_counts: FxHashMap<Direction, usize> = FxHashMap::default();
    let mut unplaced_counts: FxHashMap<Word, usize> = FxHashMap::default();

    for puzzle in stats {
        total_placed += puzzle.placed;
        total_unplaced += puzzle.unplaced.len();
        total_corrupted += puzzle.corrupted;
        min_placed = min_placed.min(puzzle.placed);
        max_placed = max_placed.max(puzzle.placed);

        for direction in puzzle.directions {
            *direction_counts.entry(direction).or_insert(0) += 1;
        }
        for word in puzzle.unplaced {
            *unplaced_counts.entry(word).or_insert(0) += 1;
        }
    }

    let duration = start.elapsed();
    let puzzles = config.count;

    info!(
        puzzles,
        placed = total_placed,
        unplaced = total_unplaced,
        corrupted = total_corrupted,
        "benchmark finished"
    );

    BenchmarkResult {
        puzzles,
        words_per_puzzle: words.len(),
        total_placed,
        total_unplaced,
        total_corrupted,
        min_placed: if puzzles == 0 { 0 } else { min_placed },
        max_placed,
        direction_counts,
        unplaced_counts,
        duration,
        puzzles_per_second: puzzles as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
