#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::use_self
)]
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Error, Result};
use aoc_harness::PartLabel;
use aoc_harness::registry;
use aoc_harness::runner::Report;
use clap::{ArgAction, Parser};

mod solutions;

/// Advent of Code 2023 puzzle solver.
#[derive(Parser, Debug)]
struct Cli {
    /// The day's solution to run (e.g. 1, 2, etc).
    ///
    /// Optional when listing available days.
    day: Option<u8>,

    /// Sets an alternative input file to use over the default input.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Measure and print the durations of parsing and solving parts.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// List the days with a registered solution and exit.
    #[arg(short, long, action = ArgAction::SetTrue)]
    list: bool,
}

/// Read the default input file for a day to a string.
fn read_default_input(day: u8) -> Result<String> {
    let path = PathBuf::from("inputs").join(format!("day{day:02}.txt"));

    fs::read_to_string(&path).with_context(|| {
        format!(
            "default input file missing: {}\n\n\
            please create the file or pass --input",
            path.display()
        )
    })
}

/// A [`Report`] that prints to stdout.
struct ConsoleReport;

impl ConsoleReport {
    fn print_elapsed(prefix: &str, elapsed: Option<Duration>) {
        if let Some(elapsed) = elapsed {
            // Duration's debug form already picks a sensible unit
            println!("{prefix} in {elapsed:?}");
        }
    }
}

impl Report for ConsoleReport {
    fn title(&mut self, title: &str) {
        println!("= {title} =");
    }

    fn parsed(&mut self, elapsed: Option<Duration>) {
        Self::print_elapsed("input parsed", elapsed);
    }

    fn answer(&mut self, part: PartLabel, answer: &dyn Display, elapsed: Option<Duration>) {
        println!("{part}: {answer}");
        Self::print_elapsed("  solved", elapsed);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();

    if args.list {
        for entry in registry::registered_days() {
            println!("{:2}  {}", entry.day(), entry.title());
        }
        return Ok(());
    }

    let day = args
        .day
        .context("a day to run is required (or pass --list)")?;
    let entry =
        registry::find_day(day).with_context(|| format!("no solution available for day {day}"))?;

    let input = match args.input {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("could not read input file at: {}", path.display()))?,
        None => read_default_input(day)?,
    };
    log::debug!("read {} bytes of input for day {day}", input.len());

    entry
        .run(&input, &mut ConsoleReport, args.timed)
        .map_err(|boxed| {
            Error::from_boxed(boxed).context(format!("failed to run solution for day {day}"))
        })
}
