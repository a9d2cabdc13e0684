//! A distributed registry of runnable puzzles.
//!
//! Solution modules submit a [`PuzzleEntry`] at link time through
//! [`inventory`]; the binary resolves a day to its entry with [`find_day`]
//! instead of maintaining a match table by hand.
//!
//! The [`#[register_puzzle]`][register_puzzle] attribute writes the
//! submission for you:
//!
//! ```ignore
//! #[register_puzzle(day = 1, title = "Day 1: Trebuchet?!")]
//! struct Day01;
//!
//! impl Puzzle for Day01 { /* ... */ }
//! ```

use crate::PuzzleResult;
use crate::runner::Report;

// re-export so solutions only import the harness
pub use aoc_harness_macros::register_puzzle;

/// The runnable glue for one registered day.
pub type RunFn = fn(&str, &mut dyn Report, bool) -> PuzzleResult<()>;

/// One registered day: its number, display title, and run function.
pub struct PuzzleEntry {
    day: u8,
    title: &'static str,
    run: RunFn,
}

inventory::collect!(PuzzleEntry);

impl PuzzleEntry {
    /// Create an entry; intended to be called from generated
    /// `inventory::submit!` blocks.
    #[must_use]
    pub const fn new(day: u8, title: &'static str, run: RunFn) -> Self {
        Self { day, title, run }
    }

    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Run this day's solution against the given input.
    ///
    /// # Errors
    ///
    /// Any boxed dynamic error from parsing or solving is propagated.
    pub fn run(&self, input: &str, report: &mut dyn Report, timed: bool) -> PuzzleResult<()> {
        (self.run)(input, report, timed)
    }
}

/// Look up the registered entry for a day, if any.
#[must_use]
pub fn find_day(day: u8) -> Option<&'static PuzzleEntry> {
    inventory::iter::<PuzzleEntry>
        .into_iter()
        .find(|entry| entry.day == day)
}

/// All registered entries, sorted by day.
#[must_use]
pub fn registered_days() -> Vec<&'static PuzzleEntry> {
    let mut entries: Vec<_> = inventory::iter::<PuzzleEntry>.into_iter().collect();
    entries.sort_by_key(|entry| entry.day);
    entries
}
