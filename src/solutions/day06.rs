use aoc_harness::parsing::parse_field;
use aoc_harness::registry::register_puzzle;
use aoc_harness::{FromInput, Puzzle, PuzzleResult};
use thiserror::Error;

/*
Input is a table of toy boat races:

    Time:      7  15   30
    Distance:  9  40  200

Holding the button for t milliseconds of a T millisecond race moves the
boat t * (T - t) millimeters. A race is won by beating the record distance.

Part 1 multiplies together each race's count of winning hold times.

Part 2 ignores the column spacing: the digits join into one long race.
*/

#[derive(Error, Debug)]
enum Day06Error {
    #[error("expected a '{0}' line")]
    MissingLine(&'static str),

    #[error("times and distances differ in count: {times} vs {distances}")]
    MismatchedColumns { times: usize, distances: usize },
}

/// Times and record distances fit u64 even after part 2 joins the digits.
type Number = u64;

struct Races {
    times: Vec<Number>,
    distances: Vec<Number>,
}

fn parse_number_line(
    lines: &mut std::str::Lines,
    prefix: &'static str,
) -> PuzzleResult<Vec<Number>> {
    let line = lines.next().ok_or(Day06Error::MissingLine(prefix))?;
    let numbers = line
        .strip_prefix(prefix)
        .ok_or(Day06Error::MissingLine(prefix))?;
    numbers
        .split_whitespace()
        .map(|field| Ok(parse_field(field)?))
        .collect()
}

impl FromInput for Races {
    fn from_input(input: &str) -> PuzzleResult<Self> {
        let mut lines = input.lines();
        let times = parse_number_line(&mut lines, "Time:")?;
        let distances = parse_number_line(&mut lines, "Distance:")?;

        if times.len() != distances.len() {
            return Err(Day06Error::MismatchedColumns {
                times: times.len(),
                distances: distances.len(),
            }
            .into());
        }

        Ok(Self { times, distances })
    }
}

/// Count the hold times that beat the record: the integers strictly between
/// the roots of t * (time - t) = record.
///
/// The roots come from the quadratic formula in floating point, then get
/// nudged with exact integer checks so precision loss on large races cannot
/// shift a boundary.
fn winning_hold_times(time: Number, record: Number) -> Number {
    let beats = |hold: Number| hold * (time - hold) > record;

    #[expect(clippy::cast_precision_loss, reason = "roots are re-checked exactly")]
    let discriminant = (time as f64).mul_add(time as f64, -4.0 * record as f64);
    if discriminant <= 0.0 {
        return 0;
    }
    let root_gap = discriminant.sqrt();

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        reason = "roots are re-checked exactly"
    )]
    let (mut first, mut last) = {
        let first = (((time as f64) - root_gap) / 2.0).ceil().max(1.0) as Number;
        let last = ((((time as f64) + root_gap) / 2.0).floor() as Number).min(time - 1);
        (first, last)
    };

    // nudge either bound across any floating point error
    while first <= last && !beats(first) {
        first += 1;
    }
    while first > 1 && beats(first - 1) {
        first -= 1;
    }
    while last >= first && !beats(last) {
        last -= 1;
    }
    while last < time - 1 && beats(last + 1) {
        last += 1;
    }

    if first > last { 0 } else { last - first + 1 }
}

/// Join the digits of several numbers into one, part 2's reading.
fn join_digits(numbers: &[Number]) -> PuzzleResult<Number> {
    let digits: String = numbers.iter().map(Number::to_string).collect();
    Ok(parse_field(&digits)?)
}

#[register_puzzle(day = 6, title = "Day 6: Wait For It")]
struct Day06;

impl Puzzle for Day06 {
    type Parsed = Races;
    type Answer1 = Number;
    type Answer2 = Number;

    fn part_one(parsed: &Races) -> PuzzleResult<Number> {
        Ok(parsed
            .times
            .iter()
            .zip(&parsed.distances)
            .map(|(&time, &record)| winning_hold_times(time, record))
            .product())
    }

    fn part_two(parsed: &Races) -> PuzzleResult<Number> {
        let time = join_digits(&parsed.times)?;
        let record = join_digits(&parsed.distances)?;
        Ok(winning_hold_times(time, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "Time:      7  15   30\nDistance:  9  40  200\n";

    #[test]
    fn counts_match_brute_force_per_race() {
        for (time, record) in [(7, 9), (15, 40), (30, 200), (71530, 940_200)] {
            let brute_force = (1..time).filter(|hold| hold * (time - hold) > record).count();
            assert_eq!(
                winning_hold_times(time, record),
                brute_force as Number,
                "time {time}, record {record}"
            );
        }
    }

    #[test]
    fn unbeatable_record_has_no_wins() {
        // the best distance for time 10 is 25
        assert_eq!(winning_hold_times(10, 25), 0);
        assert_eq!(winning_hold_times(10, 1_000), 0);
    }

    #[test]
    fn part_one_solves_example() -> PuzzleResult<()> {
        let parsed = Races::from_input(EXAMPLE_INPUT)?;
        assert_eq!(Day06::part_one(&parsed)?, 288);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> PuzzleResult<()> {
        let parsed = Races::from_input(EXAMPLE_INPUT)?;
        assert_eq!(Day06::part_two(&parsed)?, 71503);
        Ok(())
    }
}
