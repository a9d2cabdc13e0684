use std::collections::HashSet;

use aoc_harness::registry::register_puzzle;
use aoc_harness::{FromInput, Puzzle, PuzzleResult};
use itertools::Itertools;
use nalgebra::Point2;
use thiserror::Error;

/*
Input is an image of the night sky: `#` galaxies on `.` space.

The universe has expanded since the image was taken: every row and column
with no galaxy is really `factor` rows or columns wide. The answer is the
sum of Manhattan distances between every galaxy pair, measured in the
expanded universe.

Part 1 uses factor 2; part 2 uses factor 1,000,000.
*/

/// Coordinates before expansion; images are around 140 cells square.
type Coord = i64;
type Point = Point2<Coord>;

#[derive(Error, Debug)]
enum Day11Error {
    #[error("unknown image symbol {symbol:?} at ({x}, {y})")]
    UnknownSymbol { symbol: char, x: usize, y: usize },

    #[error("image dimensions overflow the coordinate type")]
    DimensionOverflow,
}

struct Image {
    galaxies: Vec<Point>,
    occupied_rows: HashSet<Coord>,
    occupied_columns: HashSet<Coord>,
}

impl FromInput for Image {
    fn from_input(input: &str) -> PuzzleResult<Self> {
        let mut galaxies = Vec::new();

        for (y, line) in input.lines().enumerate() {
            for (x, symbol) in line.char_indices() {
                match symbol {
                    '.' => {}
                    '#' => {
                        let x = Coord::try_from(x).map_err(|_| Day11Error::DimensionOverflow)?;
                        let y = Coord::try_from(y).map_err(|_| Day11Error::DimensionOverflow)?;
                        galaxies.push(Point::new(x, y));
                    }
                    _ => return Err(Day11Error::UnknownSymbol { symbol, x, y }.into()),
                }
            }
        }

        let occupied_rows = galaxies.iter().map(|galaxy| galaxy.y).collect();
        let occupied_columns = galaxies.iter().map(|galaxy| galaxy.x).collect();

        Ok(Self {
            galaxies,
            occupied_rows,
            occupied_columns,
        })
    }
}

impl Image {
    /// The expanded distance along one axis: every empty line crossed
    /// counts `factor` instead of 1.
    fn axis_distance(occupied: &HashSet<Coord>, from: Coord, to: Coord, factor: u64) -> u64 {
        let (low, high) = if from <= to { (from, to) } else { (to, from) };
        let empty_between = (low + 1..high)
            .filter(|line| !occupied.contains(line))
            .count() as u64;

        let plain = high.abs_diff(low);
        plain + empty_between * (factor - 1)
    }

    /// Sum of pairwise Manhattan distances under the given expansion
    /// factor.
    fn distance_sum(&self, factor: u64) -> u64 {
        self.galaxies
            .iter()
            .tuple_combinations()
            .map(|(a, b)| {
                Self::axis_distance(&self.occupied_columns, a.x, b.x, factor)
                    + Self::axis_distance(&self.occupied_rows, a.y, b.y, factor)
            })
            .sum()
    }
}

#[register_puzzle(day = 11, title = "Day 11: Cosmic Expansion")]
struct Day11;

impl Puzzle for Day11 {
    type Parsed = Image;
    type Answer1 = u64;
    type Answer2 = u64;

    fn part_one(parsed: &Image) -> PuzzleResult<u64> {
        Ok(parsed.distance_sum(2))
    }

    fn part_two(parsed: &Image) -> PuzzleResult<u64> {
        Ok(parsed.distance_sum(1_000_000))
    }
}
