//! Display functions for command results

use super::formatters::{CellMark, create_progress_bar, format_grid, word_list_line};
use crate::commands::{BenchmarkResult, GenerateResult};
use crate::core::Direction;
use crate::session::Session;
use colored::Colorize;
use rustc_hash::FxHashSet;

/// Print the banner and controls for simple mode
pub fn print_welcome() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Word Search - Text Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find the hidden words. They run across, down, or diagonally downward.\n");
    println!("  - Type cells as zero-based 'row col' pairs: 0 0 0 1 0 2");
    println!("  - Press Enter (or type 'check') to check the selected letters");
    println!("  - 'clear' drops the selection, 'reset' starts a new puzzle\n");
}

/// Print the grid with the current selection and found words highlighted
pub fn print_session(session: &Session) {
    let found: FxHashSet<_> = session
        .found_words()
        .iter()
        .filter_map(|word| session.found_path(word))
        .flat_map(|placement| placement.cells().iter().copied())
        .collect();

    let grid = format_grid(session.grid(), |coord| {
        if session.is_selected(coord) {
            Some(CellMark::Selected)
        } else if found.contains(&coord) {
            Some(CellMark::Found)
        } else {
            None
        }
    });

    println!("{grid}");
    println!(
        "{} {}",
        "Find words:".bright_cyan().bold(),
        word_list_line(session.visible_remaining(), session.remaining_words().len())
    );
    if !session.found_words().is_empty() {
        println!(
            "{} {}",
            "Found:".green().bold(),
            word_list_line(session.found_words(), session.found_words().len())
        );
    }
    println!(
        "Progress:   [{}] {}/{}",
        create_progress_bar(
            session.found_words().len() as f64,
            session.total_words() as f64,
            20
        )
        .green(),
        session.found_words().len(),
        session.total_words()
    );
    if !session.candidate().is_empty() {
        println!(
            "Selected:   {}",
            session.candidate().bright_yellow().bold()
        );
    }
    println!();
}

/// Print a generated puzzle, optionally with its answer key
pub fn print_generate_result(result: &GenerateResult, show_answers: bool) {
    let puzzle = &result.puzzle;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle {}×{} | seed {} | {} placement",
        result.generator.size(),
        result.generator.size(),
        result.seed.to_string().bright_yellow(),
        result.generator.mode()
    );
    println!("{}\n", "─".repeat(60).cyan());

    let answers: FxHashSet<_> = if show_answers {
        puzzle
            .placements()
            .iter()
            .flat_map(|p| p.cells().iter().copied())
            .collect()
    } else {
        FxHashSet::default()
    };

    println!(
        "{}",
        format_grid(puzzle.grid(), |coord| {
            answers.contains(&coord).then_some(CellMark::Answer)
        })
    );

    let placed = puzzle.placed_words();
    println!(
        "{} {}",
        "Find words:".bright_cyan().bold(),
        word_list_line(&placed, placed.len())
    );

    if !puzzle.unplaced().is_empty() {
        println!(
            "{} {}",
            "Did not fit:".yellow().bold(),
            word_list_line(puzzle.unplaced(), puzzle.unplaced().len())
        );
    }

    if show_answers {
        println!("\n📋 {}", "Answer key:".bright_cyan().bold());
        for placement in puzzle.placements() {
            let status = if puzzle.is_readable(placement) {
                String::new()
            } else {
                " (overwritten)".red().to_string()
            };
            println!(
                "   {:<12} {} {}{status}",
                placement.word().text().bright_white().bold(),
                placement.start(),
                placement.direction()
            );
        }
    }
    println!();
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Placement:".bright_cyan().bold());
    println!("   Puzzles:          {}", result.puzzles);
    println!("   Words per puzzle: {}", result.words_per_puzzle);
    println!(
        "   Placement rate:   {}",
        format!("{:.1}%", result.placement_rate())
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest placed:    {}",
        format!("{}", result.min_placed).yellow()
    );
    println!(
        "   Most placed:      {}",
        format!("{}", result.max_placed).green()
    );
    println!(
        "   Overwritten:      {}",
        if result.total_corrupted == 0 {
            "0".green()
        } else {
            result.total_corrupted.to_string().red()
        }
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    println!("\n📈 {}", "Directions:".bright_cyan().bold());
    for direction in Direction::ALL {
        let count = result.direction_counts.get(&direction).copied().unwrap_or(0);
        let pct = if result.total_placed == 0 {
            0.0
        } else {
            count as f64 / result.total_placed as f64 * 100.0
        };
        println!(
            "   {:<10} {} {count:6} ({pct:5.1}%)",
            direction.name(),
            create_progress_bar(pct, 100.0, 30).green()
        );
    }

    let left_out = result.most_unplaced(5);
    if !left_out.is_empty() {
        println!("\n🚫 {}", "Most often left out:".bright_cyan().bold());
        for (word, count) in left_out {
            let pct = count as f64 / result.puzzles.max(1) as f64 * 100.0;
            println!("   {:<12} {count:6} ({pct:5.1}%)", word.text());
        }
    }
}
