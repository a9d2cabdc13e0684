use std::collections::HashSet;

use aoc_harness::parsing::{parse_field, parse_lines};
use aoc_harness::registry::register_puzzle;
use aoc_harness::{FromInput, Puzzle, PuzzleResult};
use thiserror::Error;

/*
Input is a pile of scratchcards, one per line:

    Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53

Left of the `|` are the winning numbers, right are the numbers you have.

Part 1 scores each card: 1 point for the first match, doubled for every
further match; sum the scores.

Part 2 drops scoring: a card with n matches instead wins copies of the next
n cards, copies win more copies, and the answer is the total card count.
*/

#[derive(Error, Debug)]
enum Day04Error {
    #[error("line is missing the 'Card <id>:' prefix")]
    MissingCardPrefix,

    #[error("line is missing the '|' separating winning and held numbers")]
    MissingSeparator,
}

#[derive(Debug)]
struct Card {
    winning: HashSet<u32>,
    held: HashSet<u32>,
}

impl Card {
    fn parse(line: &str) -> PuzzleResult<Self> {
        let (_, numbers) = line.split_once(':').ok_or(Day04Error::MissingCardPrefix)?;
        let (winning_text, held_text) = numbers
            .split_once('|')
            .ok_or(Day04Error::MissingSeparator)?;

        Ok(Self {
            winning: parse_number_set(winning_text)?,
            held: parse_number_set(held_text)?,
        })
    }

    /// How many held numbers are winning numbers.
    fn matches(&self) -> usize {
        self.held.intersection(&self.winning).count()
    }

    /// Part 1 scoring: doubling from 1 point is a power of two.
    fn score(&self) -> u32 {
        match self.matches() {
            0 => 0,
            matches => 1 << (matches - 1),
        }
    }
}

fn parse_number_set(text: &str) -> PuzzleResult<HashSet<u32>> {
    text.split_whitespace()
        .map(|field| Ok(parse_field(field)?))
        .collect()
}

struct Pile(Vec<Card>);

impl FromInput for Pile {
    fn from_input(input: &str) -> PuzzleResult<Self> {
        let cards = parse_lines(input, Card::parse).collect::<Result<_, _>>()?;
        Ok(Self(cards))
    }
}

#[register_puzzle(day = 4, title = "Day 4: Scratchcards")]
struct Day04;

impl Puzzle for Day04 {
    type Parsed = Pile;
    type Answer1 = u32;
    type Answer2 = u32;

    fn part_one(parsed: &Pile) -> PuzzleResult<u32> {
        Ok(parsed.0.iter().map(Card::score).sum())
    }

    fn part_two(parsed: &Pile) -> PuzzleResult<u32> {
        // every card starts as one original
        let mut copies = vec![1_u32; parsed.0.len()];

        for (index, card) in parsed.0.iter().enumerate() {
            for offset in 1..=card.matches() {
                let Some(won_index) = index.checked_add(offset).filter(|&i| i < copies.len())
                else {
                    // matches past the end of the pile win nothing
                    break;
                };
                copies[won_index] = copies[won_index]
                    .checked_add(copies[index])
                    .expect("card copies should fit the answer type");
            }
        }

        Ok(copies.iter().sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn scoring_doubles_per_match() -> PuzzleResult<()> {
        let parsed = Pile::from_input(EXAMPLE_INPUT)?;
        assert_eq!(parsed.0[0].matches(), 4);
        assert_eq!(parsed.0[0].score(), 8);
        assert_eq!(parsed.0[4].score(), 0);
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> PuzzleResult<()> {
        let parsed = Pile::from_input(EXAMPLE_INPUT)?;
        assert_eq!(Day04::part_one(&parsed)?, 13);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> PuzzleResult<()> {
        let parsed = Pile::from_input(EXAMPLE_INPUT)?;
        assert_eq!(Day04::part_two(&parsed)?, 30);
        Ok(())
    }
}
