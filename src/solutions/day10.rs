use aoc23::pipes::{Grid, classify};
use aoc_harness::registry::register_puzzle;
use aoc_harness::{FromInput, Puzzle, PuzzleResult};

/*
Input is a grid of pipes with an animal hiding in the one closed loop; see
the `aoc23::pipes` module for the grid language.

Part 1 answers how many steps along the loop the farthest cell from the
start is.

Part 2 answers how many cells the loop encloses.
*/

struct Maze(Grid);

impl FromInput for Maze {
    fn from_input(input: &str) -> PuzzleResult<Self> {
        Ok(Self(input.parse()?))
    }
}

#[register_puzzle(day = 10, title = "Day 10: Pipe Maze")]
struct Day10;

impl Puzzle for Day10 {
    type Parsed = Maze;
    type Answer1 = usize;
    type Answer2 = usize;

    fn part_one(parsed: &Maze) -> PuzzleResult<usize> {
        Ok(parsed.0.trace().farthest_distance())
    }

    fn part_two(parsed: &Maze) -> PuzzleResult<usize> {
        let pipe_loop = parsed.0.trace();
        Ok(classify(&parsed.0, &pipe_loop).interior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT_ONE: &str = "\
7-F7-
.FJ|7
SJLL7
|F--J
LJ.LJ
";

    #[test]
    fn part_one_solves_example() -> PuzzleResult<()> {
        let parsed = Maze::from_input(EXAMPLE_INPUT_ONE)?;
        assert_eq!(Day10::part_one(&parsed)?, 8);
        Ok(())
    }

    const EXAMPLE_INPUT_TWO: &str = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";

    #[test]
    fn part_two_solves_example() -> PuzzleResult<()> {
        let parsed = Maze::from_input(EXAMPLE_INPUT_TWO)?;
        assert_eq!(Day10::part_two(&parsed)?, 8);
        Ok(())
    }

    #[test]
    fn malformed_grid_fails_to_parse() {
        assert!(Maze::from_input("S-.\n...\n").is_err());
    }
}
