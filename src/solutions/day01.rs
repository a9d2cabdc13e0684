use aoc_harness::parsing::parse_lines;
use aoc_harness::registry::register_puzzle;
use aoc_harness::{Puzzle, PuzzleResult};
use thiserror::Error;

/*
Input is a calibration document. Each line hides a calibration value: the
first and last digit on the line combined into a two-digit number (a lone
digit counts as both).

For part 2 some digits are spelled out ("one" through "nine"), and spellings
may overlap, like "twone". The first and last match still decide the value.

Both parts answer with the sum of calibration values.
*/

#[derive(Error, Debug)]
enum Day01Error {
    #[error("no digit found in line")]
    NoDigitInLine,
}

/// A two-digit calibration value.
type CalibrationValue = u32;

const DIGIT_NAMES: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// The digit starting at a byte position, if any.
///
/// Checking every position independently handles overlapping spelled names
/// for free: "twone" yields 2 at position 0 and 1 at position 2.
fn digit_at(line: &str, index: usize, spelled: bool) -> Option<u32> {
    let rest = &line[index..];
    let first = rest.chars().next()?;

    if let Some(digit) = first.to_digit(10) {
        return Some(digit);
    }

    if spelled {
        DIGIT_NAMES
            .iter()
            .find(|(name, _)| rest.starts_with(name))
            .map(|&(_, digit)| digit)
    } else {
        None
    }
}

fn calibration_value(line: &str, spelled: bool) -> Result<CalibrationValue, Day01Error> {
    let mut digits = line
        .char_indices()
        .filter_map(|(index, _)| digit_at(line, index, spelled));

    let first = digits.next().ok_or(Day01Error::NoDigitInLine)?;
    // with no separate last digit, the first is also the last
    let last = digits.last().unwrap_or(first);

    Ok(first * 10 + last)
}

fn sum_calibration_values(input: &str, spelled: bool) -> PuzzleResult<u32> {
    let mut total: u32 = 0;
    for line_result in parse_lines(input, |line| Ok(calibration_value(line, spelled)?)) {
        total = total
            .checked_add(line_result?)
            .expect("summing calibration values should not overflow");
    }
    Ok(total)
}

#[register_puzzle(day = 1, title = "Day 1: Trebuchet?!")]
struct Day01;

impl Puzzle for Day01 {
    type Parsed = String;
    type Answer1 = u32;
    type Answer2 = u32;

    fn part_one(parsed: &String) -> PuzzleResult<u32> {
        sum_calibration_values(parsed, false)
    }

    fn part_two(parsed: &String) -> PuzzleResult<u32> {
        sum_calibration_values(parsed, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_one_solves_example() -> PuzzleResult<()> {
        let input = "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n";
        assert_eq!(Day01::part_one(&input.to_owned())?, 142);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> PuzzleResult<()> {
        let input = "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n\
                     4nineeightseven2\nzoneight234\n7pqrstsixteen\n";
        assert_eq!(Day01::part_two(&input.to_owned())?, 281);
        Ok(())
    }

    #[test]
    fn overlapping_names_both_count() {
        assert_eq!(calibration_value("twone", true).ok(), Some(21));
        assert_eq!(calibration_value("eighthree", true).ok(), Some(83));
    }

    #[test]
    fn line_without_digits_fails() {
        assert!(calibration_value("nodigits", false).is_err());
    }
}
