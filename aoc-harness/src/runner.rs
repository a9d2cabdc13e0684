//! Executes a puzzle's parse and solve steps, reporting progress and answers
//! through a [`Report`] implementation.

use std::fmt::Display;
use std::time::{Duration, Instant};

use crate::{FromInput, PartLabel, Puzzle, PuzzleResult};

/// A sink for the events produced while running a puzzle.
///
/// The binary implements this over stdout; tests can implement it over a
/// buffer.
pub trait Report {
    /// Called once at the start with the puzzle's display title.
    fn title(&mut self, title: &str);

    /// Called after input parsing succeeds.
    ///
    /// The elapsed parse duration is passed when timing is enabled.
    fn parsed(&mut self, elapsed: Option<Duration>);

    /// Called with each part's answer.
    ///
    /// The elapsed solve duration is passed when timing is enabled.
    fn answer(&mut self, part: PartLabel, answer: &dyn Display, elapsed: Option<Duration>);
}

/// Evaluate a closure, measuring its wall time when `timed` is set.
fn measure<T>(timed: bool, f: impl FnOnce() -> T) -> (T, Option<Duration>) {
    if timed {
        let start = Instant::now();
        let value = f();
        (value, Some(start.elapsed()))
    } else {
        (f(), None)
    }
}

/// Parse the input and run both parts of a puzzle.
///
/// # Errors
///
/// Any boxed dynamic error from parsing or either part is propagated; later
/// steps are skipped once a step fails.
pub fn run_puzzle<P: Puzzle>(
    title: &str,
    input: &str,
    report: &mut dyn Report,
    timed: bool,
) -> PuzzleResult<()> {
    report.title(title);

    let (parse_result, parse_elapsed) = measure(timed, || P::Parsed::from_input(input));
    let parsed = parse_result?;
    report.parsed(parse_elapsed);

    let (one_result, one_elapsed) = measure(timed, || P::part_one(&parsed));
    report.answer(PartLabel::One, &one_result?, one_elapsed);

    let (two_result, two_elapsed) = measure(timed, || P::part_two(&parsed));
    report.answer(PartLabel::Two, &two_result?, two_elapsed);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler(Vec<u32>);

    impl FromInput for Doubler {
        fn from_input(input: &str) -> PuzzleResult<Self> {
            let values = input
                .lines()
                .map(str::parse)
                .collect::<Result<Vec<u32>, _>>()?;
            Ok(Self(values))
        }
    }

    impl Puzzle for Doubler {
        type Parsed = Self;
        type Answer1 = u32;
        type Answer2 = u32;

        fn part_one(parsed: &Self) -> PuzzleResult<u32> {
            Ok(parsed.0.iter().sum())
        }

        fn part_two(parsed: &Self) -> PuzzleResult<u32> {
            Ok(parsed.0.iter().sum::<u32>() * 2)
        }
    }

    #[derive(Default)]
    struct Captured {
        title: String,
        answers: Vec<(PartLabel, String)>,
    }

    impl Report for Captured {
        fn title(&mut self, title: &str) {
            self.title = title.to_owned();
        }

        fn parsed(&mut self, _elapsed: Option<Duration>) {}

        fn answer(&mut self, part: PartLabel, answer: &dyn Display, _elapsed: Option<Duration>) {
            self.answers.push((part, answer.to_string()));
        }
    }

    #[test]
    fn runs_both_parts_in_order() -> PuzzleResult<()> {
        let mut report = Captured::default();
        run_puzzle::<Doubler>("Example", "1\n2\n3\n", &mut report, false)?;

        assert_eq!(report.title, "Example");
        assert_eq!(
            report.answers,
            vec![
                (PartLabel::One, "6".to_owned()),
                (PartLabel::Two, "12".to_owned()),
            ]
        );
        Ok(())
    }

    #[test]
    fn parse_failure_stops_the_run() {
        let mut report = Captured::default();
        let result = run_puzzle::<Doubler>("Example", "1\nnope\n", &mut report, false);

        assert!(result.is_err());
        assert!(report.answers.is_empty());
    }
}
