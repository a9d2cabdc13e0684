//! Harness of traits and utilities for running daily puzzle solutions.
//!
//! A solution implements [`Puzzle`] (parsing its input through [`FromInput`])
//! and registers itself with the
//! [`#[register_puzzle]`][crate::registry::register_puzzle] attribute. The
//! binary then looks solutions up by day through [`registry`] and executes
//! them through [`runner`].
//!
//! ```
//! use aoc_harness::{FromInput, Puzzle, PuzzleResult};
//!
//! struct Lines(Vec<String>);
//!
//! impl FromInput for Lines {
//!     fn from_input(input: &str) -> PuzzleResult<Self> {
//!         Ok(Self(input.lines().map(String::from).collect()))
//!     }
//! }
//!
//! struct Day01;
//!
//! impl Puzzle for Day01 {
//!     type Parsed = Lines;
//!     type Answer1 = usize;
//!     type Answer2 = usize;
//!
//!     fn part_one(parsed: &Lines) -> PuzzleResult<usize> {
//!         Ok(parsed.0.len())
//!     }
//!
//!     fn part_two(parsed: &Lines) -> PuzzleResult<usize> {
//!         Ok(parsed.0.iter().map(String::len).sum())
//!     }
//! }
//! ```

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::use_self
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod parsing;
pub mod registry;
pub mod runner;

/// A dynamically dispatched error, boxed so solutions can raise any error
/// type through one seam.
pub type BoxedError = Box<dyn Error + Send + Sync + 'static>;
/// A result carrying a [`BoxedError`].
pub type PuzzleResult<T> = Result<T, BoxedError>;

/// Identifies which half of a day's puzzle an answer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartLabel {
    One,
    Two,
}

impl Display for PartLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// A type constructed by parsing a puzzle's input text.
pub trait FromInput: Sized {
    /// Parse the raw input into an instance of self.
    ///
    /// # Errors
    ///
    /// Any parsing failure is returned as a boxed dynamic error.
    fn from_input(input: &str) -> PuzzleResult<Self>;
}

/// Raw input passed through untouched, for days that work on the text
/// directly.
impl FromInput for String {
    fn from_input(input: &str) -> PuzzleResult<Self> {
        Ok(input.to_owned())
    }
}

/// A day's puzzle: one parsed input shared by two answer computations.
pub trait Puzzle {
    /// The parsed form of the day's input.
    type Parsed: FromInput;

    /// The answer type for part one.
    type Answer1: Display;

    /// The answer type for part two.
    type Answer2: Display;

    /// Solve part one against the parsed input.
    ///
    /// # Errors
    ///
    /// Solving can fail on inputs that parse but break the puzzle's
    /// assumptions; such failures surface as boxed dynamic errors.
    fn part_one(parsed: &Self::Parsed) -> PuzzleResult<Self::Answer1>;

    /// Solve part two against the parsed input.
    ///
    /// # Errors
    ///
    /// As for [`Puzzle::part_one`].
    fn part_two(parsed: &Self::Parsed) -> PuzzleResult<Self::Answer2>;
}
