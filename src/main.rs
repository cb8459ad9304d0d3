//! Advent of Code 2017, days 1 to 3.
//!
//! Solves the embedded puzzle inputs (or an input file), answers single spiral
//! memory queries, and draws the spiral around the access port.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::info;

use advent2017::{day, grid, spiral, Day, Error, Part, Result, DAYS};

/// Solves the first three days of Advent of Code 2017.
#[derive(Parser)]
#[command(name = "advent2017")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one day's puzzles.
    Solve {
        /// Day number.
        #[arg(value_parser = clap::value_parser!(u8).range(1..=3))]
        day: u8,
        /// Only solve this part.
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
        part: Option<u8>,
        /// Read the puzzle input from a file instead of the embedded input.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Steps needed to carry data from a spiral square to the access port.
    Distance {
        #[arg(allow_hyphen_values = true)]
        target: String,
    },
    /// Draw the spiral around the access port.
    Render {
        /// Number of rings around the center.
        #[arg(long, default_value_t = 2)]
        rings: u64,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Solve { day, part, input }) => run_solve(day, part, input),
        Some(Command::Distance { target }) => run_distance(&target),
        Some(Command::Render { rings }) => run_render(rings),
        // default: every day on its embedded input
        None => report(&DAYS).map(|output| print!("{output}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Solves one day, printing one answer per line.
fn run_solve(number: u8, part: Option<u8>, input: Option<PathBuf>) -> Result<()> {
    let solver = day(number)?;
    let input = match input {
        Some(path) => {
            std::fs::read_to_string(&path).map_err(|source| Error::Io { path, source })?
        }
        None => solver.input().to_owned(),
    };

    let parts = match part {
        Some(1) => vec![Part::One],
        Some(_) => vec![Part::Two],
        None => Part::BOTH.to_vec(),
    };

    for part in parts {
        let time = Instant::now();
        let answer = solver.solve(part, &input)?;
        info!(day = number, %part, elapsed = ?time.elapsed(), "solved");
        println!("{answer}");
    }
    Ok(())
}

/// Prints the spiral distance of a single square.
fn run_distance(target: &str) -> Result<()> {
    let target = spiral::parse_target(target)?;
    println!("{}", spiral::distance(target)?);
    Ok(())
}

fn run_render(rings: u64) -> Result<()> {
    print!("{}", grid::render(rings)?);
    Ok(())
}

/// Solves both parts of every day on its embedded input.
fn report(days: &[&dyn Day]) -> Result<String> {
    let mut output = String::new();
    for solver in days {
        output.push_str(&format!("Day {}: {}\n", solver.number(), solver.title()));
        for part in Part::BOTH {
            let answer = solver.solve(part, solver.input())?;
            output.push_str(&format!("  {part}: {answer}\n"));
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_snapshot() {
        let output = report(&DAYS).unwrap();
        insta::assert_snapshot!(output);
    }

    #[test]
    fn test_report_line_count() {
        let output = report(&DAYS).unwrap();
        assert_eq!(output.lines().count(), DAYS.len() * 3);
    }

    #[test]
    fn test_cli_parses_negative_distance() {
        let cli = Cli::try_parse_from(["advent2017", "distance", "-3"]).unwrap();
        let Some(Command::Distance { target }) = cli.command else {
            panic!("expected the distance command");
        };
        assert!(matches!(run_distance(&target), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_cli_rejects_unknown_day() {
        assert!(Cli::try_parse_from(["advent2017", "solve", "4"]).is_err());
        assert!(Cli::try_parse_from(["advent2017", "solve", "1", "--part", "3"]).is_err());
    }

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
