//! Word Search - CLI
//!
//! Word search puzzle game with TUI and text modes, plus puzzle generation
//! and benchmarking commands.

use anyhow::{Context, Result, bail, ensure};
use clap::{ArgAction, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use wordsearch::{
    commands::{BenchmarkConfig, GenerateConfig, generate_puzzle, run_benchmark, run_simple},
    core::Direction,
    generator::{DEFAULT_GRID_SIZE, Generator, PlacementMode},
    logging::{LogConfig, LogTarget, init_logging},
    output::{print_benchmark_result, print_generate_result},
    session::{DEFAULT_DISPLAY_LIMIT, Session},
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "wordsearch",
    about = "Word search puzzles: find words hidden across, down and diagonally",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Grid side length
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Newline-delimited word list (the built-in list is used if it cannot be read)
    #[arg(short = 'w', long, global = true, default_value = "wordlist.txt")]
    wordlist: PathBuf,

    /// Seed for reproducible puzzles
    #[arg(short = 's', long, global = true)]
    seed: Option<u64>,

    /// Placement: checked (default, words never clobber each other) or overwrite
    #[arg(short = 'p', long, global = true, default_value = "checked")]
    placement: String,

    /// Allowed directions: across, down, down-right, down-left
    #[arg(
        short = 'd',
        long,
        global = true,
        value_delimiter = ',',
        default_value = "across,down,down-right,down-left"
    )]
    directions: Vec<String>,

    /// Number of remaining words shown at once
    #[arg(long, global = true, default_value_t = DEFAULT_DISPLAY_LIMIT)]
    display_limit: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (type coordinates instead of using the TUI)
    Simple,

    /// Generate and print one puzzle
    Generate {
        /// Highlight the hidden words and list where they are
        #[arg(short, long)]
        answers: bool,
    },

    /// Generate many puzzles and report placement statistics
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'c', long, default_value = "1000")]
        count: usize,
    },
}

/// Build the generator from the global flags
fn build_generator(cli: &Cli) -> Result<Generator> {
    ensure!(cli.size >= 1, "grid size must be at least 1");

    let Some(mode) = PlacementMode::from_name(&cli.placement) else {
        bail!(
            "unknown placement mode '{}' (expected 'checked' or 'overwrite')",
            cli.placement
        );
    };

    let directions = cli
        .directions
        .iter()
        .map(|name| {
            Direction::from_name(name).with_context(|| format!("unknown direction '{name}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Generator::new(cli.size)
        .with_mode(mode)
        .with_directions(&directions))
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    // The TUI owns the terminal, so it only logs when given a file
    let target = match (&cli.log_file, command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Commands::Play) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    init_logging(&LogConfig::from_verbosity(cli.verbose).with_target(target))?;

    let generator = build_generator(&cli)?;
    let source = WordSource::File(cli.wordlist.clone());

    match command {
        Commands::Play => run_play_command(generator, source, cli.seed, cli.display_limit),
        Commands::Simple => run_simple_command(generator, source, cli.seed, cli.display_limit),
        Commands::Generate { answers } => {
            run_generate_command(&generator, &source, cli.seed, *answers);
            Ok(())
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&generator, &source, cli.seed, *count);
            Ok(())
        }
    }
}

fn run_play_command(
    generator: Generator,
    source: WordSource,
    seed: Option<u64>,
    display_limit: usize,
) -> Result<()> {
    use wordsearch::interactive::{App, run_tui};

    let mut rng = make_rng(seed);
    let session = Session::start(generator, source, &mut rng).with_display_limit(display_limit);
    run_tui(App::new(session, rng))
}

fn run_simple_command(
    generator: Generator,
    source: WordSource,
    seed: Option<u64>,
    display_limit: usize,
) -> Result<()> {
    let mut rng = make_rng(seed);
    let mut session =
        Session::start(generator, source, &mut rng).with_display_limit(display_limit);
    run_simple(&mut session, &mut rng)
}

fn run_generate_command(
    generator: &Generator,
    source: &WordSource,
    seed: Option<u64>,
    answers: bool,
) {
    let words = source.load();
    let result = generate_puzzle(&GenerateConfig::new(seed), generator, &words);
    print_generate_result(&result, answers);
}

fn run_benchmark_command(
    generator: &Generator,
    source: &WordSource,
    seed: Option<u64>,
    count: usize,
) {
    let words = source.load();
    let base_seed = seed.unwrap_or_else(|| rand::rng().random());

    println!(
        "Generating {count} puzzles ({0}×{0}, {1} placement, {2} words) from seed {base_seed}...",
        generator.size(),
        generator.mode(),
        words.len()
    );

    let result = run_benchmark(&BenchmarkConfig::new(count, base_seed), generator, &words);
    print_benchmark_result(&result);
}
