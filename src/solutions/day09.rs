use aoc_harness::parsing::{parse_field, parse_lines};
use aoc_harness::registry::register_puzzle;
use aoc_harness::{FromInput, Puzzle, PuzzleResult};
use thiserror::Error;

/*
Input is an environmental report: one history of numbers per line.

Each history extrapolates by building rows of pairwise differences until a
row is all zeros, then summing back up the pyramid.

Part 1 predicts the value after each history; part 2 predicts the value
before it. Both answer with the sum of predictions.
*/

#[derive(Error, Debug)]
enum Day09Error {
    #[error("history line has no numbers")]
    EmptyHistory,
}

struct Report(Vec<Vec<i64>>);

impl FromInput for Report {
    fn from_input(input: &str) -> PuzzleResult<Self> {
        let histories = parse_lines(input, |line| {
            let history = line
                .split_whitespace()
                .map(|field| Ok(parse_field(field)?))
                .collect::<PuzzleResult<Vec<i64>>>()?;
            if history.is_empty() {
                return Err(Day09Error::EmptyHistory.into());
            }
            Ok(history)
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(histories))
    }
}

/// The difference pyramid: the history, then each row of pairwise
/// differences, down to (and excluding) the first all-zero row.
fn difference_rows(history: &[i64]) -> Vec<Vec<i64>> {
    let mut rows = vec![history.to_vec()];

    while rows
        .last()
        .is_some_and(|row| row.iter().any(|&value| value != 0))
    {
        let next = rows
            .last()
            .expect("rows always holds at least the history")
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .collect();
        rows.push(next);
    }

    rows
}

/// Predict the value after the end of a history.
fn forecast_next(history: &[i64]) -> i64 {
    difference_rows(history)
        .iter()
        .rev()
        .fold(0, |below, row| row.last().copied().unwrap_or(0) + below)
}

/// Predict the value before the start of a history.
fn forecast_previous(history: &[i64]) -> i64 {
    difference_rows(history)
        .iter()
        .rev()
        .fold(0, |below, row| row.first().copied().unwrap_or(0) - below)
}

#[register_puzzle(day = 9, title = "Day 9: Mirage Maintenance")]
struct Day09;

impl Puzzle for Day09 {
    type Parsed = Report;
    type Answer1 = i64;
    type Answer2 = i64;

    fn part_one(parsed: &Report) -> PuzzleResult<i64> {
        Ok(parsed.0.iter().map(|history| forecast_next(history)).sum())
    }

    fn part_two(parsed: &Report) -> PuzzleResult<i64> {
        Ok(parsed
            .0
            .iter()
            .map(|history| forecast_previous(history))
            .sum())
    }
}
