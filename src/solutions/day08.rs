use std::collections::HashMap;

use aoc_harness::registry::register_puzzle;
use aoc_harness::{FromInput, Puzzle, PuzzleResult};
use num_integer::lcm;
use regex::Regex;
use thiserror::Error;

/*
Input is a cycle of left/right instructions and a network of nodes:

    LLR

    AAA = (BBB, BBB)
    BBB = (AAA, ZZZ)
    ZZZ = (ZZZ, ZZZ)

Part 1 walks from AAA, following the instruction cycle, and counts steps
until ZZZ.

Part 2 walks as a ghost: start on every `..A` node simultaneously and step
until all walkers stand on `..Z` nodes at once. Each walker's path settles
into a cycle, so the simultaneous arrival is the least common multiple of
the individual step counts.
*/

#[derive(Error, Debug)]
enum Day08Error {
    #[error("expected an instruction line of 'L' and 'R', found: {0:?}")]
    BadInstructions(String),

    #[error("expected 'XXX = (YYY, ZZZ)', found: {0:?}")]
    BadNodeLine(String),

    #[error("network has no node named {0:?}")]
    MissingNode(String),

    #[error("walk from {start:?} found no end node within {limit} steps")]
    NoPathToEnd { start: String, limit: u64 },
}

/// One step of the instruction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Left,
    Right,
}

struct Network {
    instructions: Vec<Instruction>,
    /// Node name to its (left, right) successors.
    nodes: HashMap<String, (String, String)>,
}

impl FromInput for Network {
    fn from_input(input: &str) -> PuzzleResult<Self> {
        let mut lines = input.lines();

        let instruction_line = lines.next().unwrap_or_default();
        let instructions = instruction_line
            .chars()
            .map(|symbol| match symbol {
                'L' => Ok(Instruction::Left),
                'R' => Ok(Instruction::Right),
                _ => Err(Day08Error::BadInstructions(instruction_line.to_owned())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if instructions.is_empty() {
            return Err(Day08Error::BadInstructions(instruction_line.to_owned()).into());
        }

        let node_re =
            Regex::new(r"^(\w{3}) = \((\w{3}), (\w{3})\)$").expect("node pattern is valid");

        let mut nodes = HashMap::new();
        for line in lines.filter(|line| !line.trim().is_empty()) {
            let captures = node_re
                .captures(line)
                .ok_or_else(|| Day08Error::BadNodeLine(line.to_owned()))?;
            nodes.insert(
                captures[1].to_owned(),
                (captures[2].to_owned(), captures[3].to_owned()),
            );
        }

        Ok(Self {
            instructions,
            nodes,
        })
    }
}

/// A guard against instruction cycles that never reach an end node.
const STEP_LIMIT: u64 = 100_000_000;

impl Network {
    /// Steps from a start node until the predicate accepts the current
    /// node.
    fn steps_until(&self, start: &str, is_end: impl Fn(&str) -> bool) -> PuzzleResult<u64> {
        let mut current = start;
        let mut steps_taken: u64 = 0;
        for instruction in self.instructions.iter().cycle() {
            let (left, right) = self
                .nodes
                .get(current)
                .ok_or_else(|| Day08Error::MissingNode(current.to_owned()))?;
            current = match instruction {
                Instruction::Left => left.as_str(),
                Instruction::Right => right.as_str(),
            };
            steps_taken += 1;

            if is_end(current) {
                return Ok(steps_taken);
            }
            if steps_taken >= STEP_LIMIT {
                break;
            }
        }

        Err(Day08Error::NoPathToEnd {
            start: start.to_owned(),
            limit: STEP_LIMIT,
        }
        .into())
    }
}

#[register_puzzle(day = 8, title = "Day 8: Haunted Wasteland")]
struct Day08;

impl Puzzle for Day08 {
    type Parsed = Network;
    type Answer1 = u64;
    type Answer2 = u64;

    fn part_one(parsed: &Network) -> PuzzleResult<u64> {
        if !parsed.nodes.contains_key("AAA") {
            return Err(Day08Error::MissingNode("AAA".to_owned()).into());
        }
        parsed.steps_until("AAA", |node| node == "ZZZ")
    }

    fn part_two(parsed: &Network) -> PuzzleResult<u64> {
        let starts: Vec<&str> = parsed
            .nodes
            .keys()
            .filter(|name| name.ends_with('A'))
            .map(String::as_str)
            .collect();

        let mut combined = 1_u64;
        for start in starts {
            let steps = parsed.steps_until(start, |node| node.ends_with('Z'))?;
            combined = lcm(combined, steps);
        }
        Ok(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_one_follows_the_instruction_cycle() -> PuzzleResult<()> {
        let input = "\
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";
        let parsed = Network::from_input(input)?;
        assert_eq!(Day08::part_one(&parsed)?, 6);
        Ok(())
    }

    #[test]
    fn part_one_solves_the_two_step_example() -> PuzzleResult<()> {
        let input = "\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";
        let parsed = Network::from_input(input)?;
        assert_eq!(Day08::part_one(&parsed)?, 2);
        Ok(())
    }

    #[test]
    fn part_two_combines_ghost_cycles() -> PuzzleResult<()> {
        let input = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";
        let parsed = Network::from_input(input)?;
        assert_eq!(Day08::part_two(&parsed)?, 6);
        Ok(())
    }

    #[test]
    fn missing_start_node_is_an_error() -> PuzzleResult<()> {
        let parsed = Network::from_input("L\n\nBBB = (BBB, BBB)\n")?;
        assert!(Day08::part_one(&parsed).is_err());
        Ok(())
    }
}
