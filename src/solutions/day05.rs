use aoc23::remap::{MapRange, Pipeline, RangeMap, SeedRange, Value};
use aoc_harness::parsing::{blocks, parse_field};
use aoc_harness::registry::register_puzzle;
use aoc_harness::{FromInput, Puzzle, PuzzleResult};
use thiserror::Error;

/*
Input is an almanac: a `seeds:` line, then blank-line-separated map blocks.
Each block opens with a `<source>-to-<destination> map:` header followed by
range lines of three numbers: destination start, source start, length. The
blocks chain in the order listed, seed through to location.

Part 1 pushes every listed seed through the chain and answers with the
smallest location.

Part 2 reinterprets the seed list as (start, length) range pairs; ranges
span far too many seeds to enumerate, so the minimum is found from boundary
candidates instead.
*/

#[derive(Error, Debug)]
enum Day05Error {
    #[error("expected a 'seeds: ' line as the first block")]
    MissingSeedsBlock,

    #[error("expected a map header line, found: {0:?}")]
    ExpectedMapHeader(String),

    #[error("expected three space-separated numbers as a map range, found: {0:?}")]
    ExpectedRangeFormat(String),

    #[error("almanac lists no seeds")]
    NoSeeds,

    #[error("part 2 needs seed range pairs, but {0} numbers were listed")]
    UnpairedSeedRange(usize),
}

struct Almanac {
    seeds: Vec<Value>,
    pipeline: Pipeline,
}

impl FromInput for Almanac {
    fn from_input(input: &str) -> PuzzleResult<Self> {
        let mut block_iter = blocks(input);

        let seeds_line = block_iter.next().ok_or(Day05Error::MissingSeedsBlock)?;
        let seeds = seeds_line
            .strip_prefix("seeds: ")
            .ok_or(Day05Error::MissingSeedsBlock)?
            .split_whitespace()
            .map(|field| Ok(parse_field(field)?))
            .collect::<PuzzleResult<Vec<Value>>>()?;

        let stages = block_iter
            .map(parse_stage)
            .collect::<PuzzleResult<Vec<RangeMap>>>()?;

        Ok(Self {
            seeds,
            pipeline: Pipeline::new(stages),
        })
    }
}

fn parse_stage(block: &str) -> PuzzleResult<RangeMap> {
    let mut lines = block.lines();

    let header = lines.next().unwrap_or_default();
    if !header.ends_with("map:") {
        return Err(Day05Error::ExpectedMapHeader(header.to_owned()).into());
    }

    // line positions restart per block, so errors carry the line text instead
    let ranges = lines
        .map(|line| {
            let fields: Vec<_> = line.split_whitespace().collect();
            let [destination_start, source_start, length] = fields[..] else {
                return Err(Day05Error::ExpectedRangeFormat(line.to_owned()).into());
            };
            Ok(MapRange::new(
                parse_field(destination_start)?,
                parse_field(source_start)?,
                parse_field(length)?,
            ))
        })
        .collect::<PuzzleResult<_>>()?;

    Ok(RangeMap::new(ranges))
}

impl Almanac {
    /// Part 2's reading of the seed list: consecutive (start, length) pairs.
    fn seed_ranges(&self) -> Result<Vec<SeedRange>, Day05Error> {
        if self.seeds.len() % 2 != 0 {
            return Err(Day05Error::UnpairedSeedRange(self.seeds.len()));
        }

        Ok(self
            .seeds
            .chunks_exact(2)
            .map(|pair| SeedRange::new(pair[0], pair[1]))
            .collect())
    }
}

#[register_puzzle(day = 5, title = "Day 5: If You Give A Seed A Fertilizer")]
struct Day05;

impl Puzzle for Day05 {
    type Parsed = Almanac;
    type Answer1 = Value;
    type Answer2 = Value;

    fn part_one(parsed: &Almanac) -> PuzzleResult<Value> {
        parsed
            .seeds
            .iter()
            .map(|&seed| parsed.pipeline.forward(seed))
            .min()
            .ok_or_else(|| Day05Error::NoSeeds.into())
    }

    fn part_two(parsed: &Almanac) -> PuzzleResult<Value> {
        let ranges = parsed.seed_ranges()?;
        Ok(parsed.pipeline.minimum_over(&ranges)?)
    }
}
