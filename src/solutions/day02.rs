use aoc_harness::parsing::{parse_field, parse_lines};
use aoc_harness::registry::register_puzzle;
use aoc_harness::{FromInput, Puzzle, PuzzleResult};
use thiserror::Error;

/*
Input lists games of drawing colored cubes from a bag, one per line:

    Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green

Each `;`-separated reveal shows some cubes that were pulled out and put
back.

Part 1 sums the IDs of games possible with a bag of 12 red, 13 green and 14
blue cubes.

Part 2 finds, per game, the minimal bag making the game possible, and sums
the power (red * green * blue) of those bags.
*/

#[derive(Error, Debug)]
enum Day02Error {
    #[error("line is missing the 'Game <id>:' prefix")]
    MissingGamePrefix,

    #[error("cube count is missing its color: {0:?}")]
    MissingColor(String),

    #[error("unknown cube color: {0:?}")]
    UnknownColor(String),
}

/// Cube counts by color; doubles as a bag and as one reveal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CubeSet {
    red: u32,
    green: u32,
    blue: u32,
}

impl CubeSet {
    /// Whether a reveal could have been drawn from the given bag.
    fn fits_in(&self, bag: &Self) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    /// The smallest bag covering both sets.
    fn max_per_color(&self, other: &Self) -> Self {
        Self {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(&self) -> u32 {
        self.red * self.green * self.blue
    }
}

#[derive(Debug)]
struct Game {
    id: u32,
    reveals: Vec<CubeSet>,
}

impl Game {
    fn parse(line: &str) -> PuzzleResult<Self> {
        let (prefix, reveals_text) = line.split_once(':').ok_or(Day02Error::MissingGamePrefix)?;
        let id = parse_field(
            prefix
                .strip_prefix("Game ")
                .ok_or(Day02Error::MissingGamePrefix)?,
        )?;

        let reveals = reveals_text
            .split(';')
            .map(parse_reveal)
            .collect::<PuzzleResult<_>>()?;

        Ok(Self { id, reveals })
    }

    /// The smallest bag this game could have been played from.
    fn minimal_bag(&self) -> CubeSet {
        self.reveals
            .iter()
            .fold(CubeSet::default(), |bag, reveal| bag.max_per_color(reveal))
    }
}

fn parse_reveal(text: &str) -> PuzzleResult<CubeSet> {
    let mut reveal = CubeSet::default();
    for cube_count in text.split(',') {
        let mut words = cube_count.split_whitespace();
        let count = parse_field(words.next().ok_or_else(|| {
            Day02Error::MissingColor(cube_count.to_owned())
        })?)?;
        let color = words
            .next()
            .ok_or_else(|| Day02Error::MissingColor(cube_count.to_owned()))?;

        match color {
            "red" => reveal.red = count,
            "green" => reveal.green = count,
            "blue" => reveal.blue = count,
            other => return Err(Day02Error::UnknownColor(other.to_owned()).into()),
        }
    }
    Ok(reveal)
}

struct Games(Vec<Game>);

impl FromInput for Games {
    fn from_input(input: &str) -> PuzzleResult<Self> {
        let games = parse_lines(input, Game::parse).collect::<Result<_, _>>()?;
        Ok(Self(games))
    }
}

/// The bag part 1 checks games against.
const PART_ONE_BAG: CubeSet = CubeSet {
    red: 12,
    green: 13,
    blue: 14,
};

#[register_puzzle(day = 2, title = "Day 2: Cube Conundrum")]
struct Day02;

impl Puzzle for Day02 {
    type Parsed = Games;
    type Answer1 = u32;
    type Answer2 = u32;

    fn part_one(parsed: &Games) -> PuzzleResult<u32> {
        Ok(parsed
            .0
            .iter()
            .filter(|game| {
                game.reveals
                    .iter()
                    .all(|reveal| reveal.fits_in(&PART_ONE_BAG))
            })
            .map(|game| game.id)
            .sum())
    }

    fn part_two(parsed: &Games) -> PuzzleResult<u32> {
        Ok(parsed.0.iter().map(|game| game.minimal_bag().power()).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn part_one_solves_example() -> PuzzleResult<()> {
        let parsed = Games::from_input(EXAMPLE_INPUT)?;
        assert_eq!(Day02::part_one(&parsed)?, 8);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> PuzzleResult<()> {
        let parsed = Games::from_input(EXAMPLE_INPUT)?;
        assert_eq!(Day02::part_two(&parsed)?, 2286);
        Ok(())
    }

    #[test]
    fn unknown_color_is_an_error() {
        let result = Games::from_input("Game 1: 3 purple\n");
        assert!(result.is_err());
    }
}
