use aoc_harness::registry::register_puzzle;
use aoc_harness::{FromInput, Puzzle, PuzzleResult};
use nalgebra::Point2;
use thiserror::Error;

/*
Input is an engine schematic: a grid of digits, symbols, and `.` filler.
Runs of digits form part numbers.

Part 1 sums every number adjacent (including diagonally) to a symbol.

Part 2 looks at `*` symbols specifically: one is a gear if exactly two
numbers are adjacent to it, and its ratio is their product. The answer is
the sum of gear ratios.
*/

/// Grid coordinates; schematics are around 140 cells square.
type Coord = i32;
type Point = Point2<Coord>;

#[derive(Error, Debug)]
enum Day03Error {
    #[error("schematic dimensions overflow the coordinate type")]
    DimensionOverflow,

    #[error("digit run failed to parse as a number")]
    BadNumber(#[source] std::num::ParseIntError),
}

/// A run of digits with where it starts and how many cells it spans.
#[derive(Debug, Clone, Copy)]
struct PartNumber {
    value: u32,
    start: Point,
    length: Coord,
}

impl PartNumber {
    /// Whether a point touches this number, diagonals included.
    fn is_adjacent(&self, point: Point) -> bool {
        let row_touches = (self.start.y - 1..=self.start.y + 1).contains(&point.y);
        let column_touches = (self.start.x - 1..=self.start.x + self.length).contains(&point.x);
        row_touches && column_touches
    }
}

#[derive(Debug)]
struct Schematic {
    numbers: Vec<PartNumber>,
    symbols: Vec<(Point, char)>,
}

impl FromInput for Schematic {
    fn from_input(input: &str) -> PuzzleResult<Self> {
        let mut numbers = Vec::new();
        let mut symbols = Vec::new();

        for (line_index, line) in input.lines().enumerate() {
            let y = Coord::try_from(line_index).map_err(|_| Day03Error::DimensionOverflow)?;

            // a digit run being built, as (start x, digits so far)
            let mut run: Option<(Coord, String)> = None;
            for (char_index, symbol) in line.char_indices() {
                let x = Coord::try_from(char_index).map_err(|_| Day03Error::DimensionOverflow)?;

                if symbol.is_ascii_digit() {
                    match &mut run {
                        Some((_, digits)) => digits.push(symbol),
                        None => run = Some((x, symbol.to_string())),
                    }
                    continue;
                }

                if let Some((start_x, digits)) = run.take() {
                    numbers.push(part_number(start_x, y, &digits)?);
                }

                if symbol != '.' {
                    symbols.push((Point::new(x, y), symbol));
                }
            }

            if let Some((start_x, digits)) = run.take() {
                numbers.push(part_number(start_x, y, &digits)?);
            }
        }

        Ok(Self { numbers, symbols })
    }
}

fn part_number(start_x: Coord, y: Coord, digits: &str) -> PuzzleResult<PartNumber> {
    let value = digits.parse().map_err(Day03Error::BadNumber)?;
    let length = Coord::try_from(digits.len()).map_err(|_| Day03Error::DimensionOverflow)?;
    Ok(PartNumber {
        value,
        start: Point::new(start_x, y),
        length,
    })
}

#[register_puzzle(day = 3, title = "Day 3: Gear Ratios")]
struct Day03;

impl Puzzle for Day03 {
    type Parsed = Schematic;
    type Answer1 = u32;
    type Answer2 = u32;

    fn part_one(parsed: &Schematic) -> PuzzleResult<u32> {
        Ok(parsed
            .numbers
            .iter()
            .filter(|number| {
                parsed
                    .symbols
                    .iter()
                    .any(|&(point, _)| number.is_adjacent(point))
            })
            .map(|number| number.value)
            .sum())
    }

    fn part_two(parsed: &Schematic) -> PuzzleResult<u32> {
        let mut ratio_sum: u32 = 0;

        for &(point, symbol) in &parsed.symbols {
            if symbol != '*' {
                continue;
            }

            let mut adjacent = parsed
                .numbers
                .iter()
                .filter(|number| number.is_adjacent(point));

            // a gear is a `*` with exactly two adjacent numbers
            if let (Some(first), Some(second), None) =
                (adjacent.next(), adjacent.next(), adjacent.next())
            {
                let ratio = first
                    .value
                    .checked_mul(second.value)
                    .expect("gear ratio should fit the answer type");
                ratio_sum = ratio_sum
                    .checked_add(ratio)
                    .expect("summing gear ratios should not overflow");
            }
        }

        Ok(ratio_sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn numbers_and_symbols_are_located() -> PuzzleResult<()> {
        let parsed = Schematic::from_input(EXAMPLE_INPUT)?;
        assert_eq!(parsed.numbers.len(), 10);
        assert_eq!(parsed.symbols.len(), 6);
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> PuzzleResult<()> {
        let parsed = Schematic::from_input(EXAMPLE_INPUT)?;
        assert_eq!(Day03::part_one(&parsed)?, 4361);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> PuzzleResult<()> {
        let parsed = Schematic::from_input(EXAMPLE_INPUT)?;
        assert_eq!(Day03::part_two(&parsed)?, 467_835);
        Ok(())
    }

    #[test]
    fn number_at_end_of_line_is_kept() -> PuzzleResult<()> {
        let parsed = Schematic::from_input("..12\n*...\n")?;
        assert_eq!(parsed.numbers.len(), 1);
        assert_eq!(parsed.numbers[0].value, 12);
        Ok(())
    }
}
