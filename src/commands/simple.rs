//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type cell coordinates, then check.

use crate::output::display::{print_session, print_welcome};
use crate::session::Session;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    /// Raw `(row, col)` pairs, not yet bounds-checked
    Select(Vec<(usize, usize)>),
    Check,
    Clear,
    Reset,
    Help,
    Quit,
}

/// Parse a line of input
///
/// Coordinates are pairs of zero-based numbers separated by spaces or
/// commas, e.g. `0 0 0 1 0 2` or `0,0 0,1`. Returns `None` for anything
/// unrecognized, including an odd number of coordinates.
#[must_use]
pub fn parse_command(input: &str) -> Option<SimpleCommand> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "check" | "c" | "" => return Some(SimpleCommand::Check),
        "clear" | "x" => return Some(SimpleCommand::Clear),
        "reset" | "new" | "n" | "r" => return Some(SimpleCommand::Reset),
        "help" | "h" | "?" => return Some(SimpleCommand::Help),
        "quit" | "q" | "exit" => return Some(SimpleCommand::Quit),
        _ => {}
    }

    let numbers: Vec<usize> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse::<usize>)
        .collect::<Result<_, _>>()
        .ok()?;

    if numbers.len() % 2 != 0 {
        return None;
    }

    let cells = numbers.chunks(2).map(|pair| (pair[0], pair[1])).collect();
    Some(SimpleCommand::Select(cells))
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng + ?Sized>(session: &mut Session, rng: &mut R) -> Result<()> {
    print_welcome();

    loop {
        print_session(session);

        let input = get_user_input("Cells, 'check', 'clear', 'reset' or 'quit'")?;
        let Some(command) = parse_command(&input) else {
            println!("{}\n", "❌ Enter row/column pairs like '0 0 0 1', or a command".red());
            continue;
        };

        match command {
            SimpleCommand::Select(cells) => {
                for (row, col) in cells {
                    match session.grid().coord(row, col) {
                        Some(coord) => {
                            session.select_cell(coord);
                        }
                        None => {
                            println!("{}", format!("Cell ({row}, {col}) is outside the grid").red());
                        }
                    }
                }
            }
            SimpleCommand::Check => {
                if session.candidate().is_empty() {
                    println!("Select some cells first.\n");
                    continue;
                }

                let candidate = session.candidate().to_string();
                let outcome = session.check();
                if outcome.matched {
                    println!("{}", format!("✓ Found {candidate}!").green().bold());
                } else {
                    println!("{}", format!("✗ {candidate} is not on the list").yellow());
                }

                if outcome.completed {
                    println!("\n{}", "═".repeat(60).bright_cyan());
                    println!(
                        "{}",
                        "      🎉  Congratulations! You found all words.  🎉"
                            .bright_green()
                            .bold()
                    );
                    println!("{}", "═".repeat(60).bright_cyan());

                    match get_user_input("Play again? (yes/no)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            session.reset(rng);
                            println!("\n🔄 New puzzle!\n");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
            SimpleCommand::Clear => session.clear_selection(),
            SimpleCommand::Reset => {
                session.reset(rng);
                println!("\n🔄 New puzzle!\n");
            }
            SimpleCommand::Help => print_welcome(),
            SimpleCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
