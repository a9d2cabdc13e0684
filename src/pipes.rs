//! Tracing a closed pipe loop on a 2-D grid and classifying which cells it
//! encloses.
//!
//! A grid is drawn with the alphabet `| - L J 7 F . S`: straight pipes, 90
//! degree bends, ground, and a single start cell. The start's real pipe
//! shape is implied by the two neighbors that connect back to it and is
//! resolved while the grid is built, so a constructed [`Grid`] only ever
//! holds concrete tiles.
//!
//! [`Grid::trace`] walks the loop from the start cell; [`classify`] then
//! ray-casts every remaining cell against the loop to split the grid into
//! interior and exterior.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use nalgebra::{Point2, Vector2};
use thiserror::Error;

/// The coordinate scalar for grid points.
///
/// Inputs reach 140 cells per side; this leaves room for synthetic grids
/// well beyond that.
pub type Coord = i32;

/// A grid position, x right and y down.
pub type Point = Point2<Coord>;

/// A cardinal direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// All directions, in the order start-neighbor scanning checks them.
const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// The direction pointing back the other way.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// The unit offset a step in this direction applies to a point.
    #[must_use]
    pub fn offset(self) -> Vector2<Coord> {
        match self {
            Self::North => Vector2::new(0, -1),
            Self::East => Vector2::new(1, 0),
            Self::South => Vector2::new(0, 1),
            Self::West => Vector2::new(-1, 0),
        }
    }
}

/// One cell of the grid, after start resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Ground,
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `L`
    NorthEast,
    /// `J`
    NorthWest,
    /// `7`
    SouthWest,
    /// `F`
    SouthEast,
}

impl Tile {
    /// Whether this tile's pipe opens toward a direction.
    #[must_use]
    pub fn connects(self, direction: Direction) -> bool {
        match direction {
            Direction::North => {
                matches!(self, Self::Vertical | Self::NorthEast | Self::NorthWest)
            }
            Direction::East => {
                matches!(self, Self::Horizontal | Self::NorthEast | Self::SouthEast)
            }
            Direction::South => {
                matches!(self, Self::Vertical | Self::SouthWest | Self::SouthEast)
            }
            Direction::West => {
                matches!(self, Self::Horizontal | Self::NorthWest | Self::SouthWest)
            }
        }
    }

    /// The two directions a pipe tile opens toward; ground has none.
    #[must_use]
    pub fn connections(self) -> Option<[Direction; 2]> {
        match self {
            Self::Ground => None,
            Self::Vertical => Some([Direction::North, Direction::South]),
            Self::Horizontal => Some([Direction::East, Direction::West]),
            Self::NorthEast => Some([Direction::North, Direction::East]),
            Self::NorthWest => Some([Direction::North, Direction::West]),
            Self::SouthWest => Some([Direction::South, Direction::West]),
            Self::SouthEast => Some([Direction::South, Direction::East]),
        }
    }

    /// The junction tile opening toward exactly the two given directions,
    /// if the pair names one.
    fn from_connections(first: Direction, second: Direction) -> Option<Self> {
        use Direction::{East, North, South, West};
        match (first, second) {
            (North, South) | (South, North) => Some(Self::Vertical),
            (East, West) | (West, East) => Some(Self::Horizontal),
            (North, East) | (East, North) => Some(Self::NorthEast),
            (North, West) | (West, North) => Some(Self::NorthWest),
            (South, West) | (West, South) => Some(Self::SouthWest),
            (South, East) | (East, South) => Some(Self::SouthEast),
            _ => None,
        }
    }
}

/// An error constructing a [`Grid`] from text.
#[derive(Error, Debug)]
pub enum GridError {
    /// A character outside the known alphabet appeared in the input.
    #[error("unknown grid symbol {symbol:?} at ({x}, {y})")]
    UnknownSymbol { symbol: char, x: Coord, y: Coord },

    /// The neighbors connecting back to the start do not name one of the
    /// six junction shapes.
    #[error("start cell connects to {connected} neighbors, expected exactly 2")]
    MalformedStart { connected: usize },

    #[error("grid has no start cell")]
    MissingStart,

    #[error("detected a second start at {second} after first at {first}")]
    SecondStart { first: Point, second: Point },

    #[error("grid dimensions overflow the coordinate type")]
    DimensionOverflow,
}

/// An immutable pipe grid with its start already resolved to a concrete
/// junction tile.
#[derive(Debug, Clone)]
pub struct Grid {
    width: Coord,
    height: Coord,
    rows: Vec<Vec<Tile>>,
    start: Point,
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        let mut tracked_start = None;

        for (line_index, line) in input.lines().enumerate() {
            let y = Coord::try_from(line_index).map_err(|_| GridError::DimensionOverflow)?;

            let mut row = Vec::new();
            for (char_index, symbol) in line.char_indices() {
                let x = Coord::try_from(char_index).map_err(|_| GridError::DimensionOverflow)?;

                let tile = match symbol {
                    '.' => Tile::Ground,
                    '|' => Tile::Vertical,
                    '-' => Tile::Horizontal,
                    'L' => Tile::NorthEast,
                    'J' => Tile::NorthWest,
                    '7' => Tile::SouthWest,
                    'F' => Tile::SouthEast,
                    'S' => {
                        let here = Point::new(x, y);
                        if let Some(first) = tracked_start {
                            return Err(GridError::SecondStart {
                                first,
                                second: here,
                            });
                        }
                        tracked_start = Some(here);
                        // placeholder until the start shape is resolved below
                        Tile::Ground
                    }
                    other => {
                        return Err(GridError::UnknownSymbol {
                            symbol: other,
                            x,
                            y,
                        });
                    }
                };
                row.push(tile);
            }
            rows.push(row);
        }

        let start = tracked_start.ok_or(GridError::MissingStart)?;

        let height = Coord::try_from(rows.len()).map_err(|_| GridError::DimensionOverflow)?;
        let width = rows
            .iter()
            .map(|row| Coord::try_from(row.len()).map_err(|_| GridError::DimensionOverflow))
            .try_fold(0, |acc: Coord, len| Ok(acc.max(len?)))?;

        let mut grid = Self {
            width,
            height,
            rows,
            start,
        };

        // pure construction step: substitute the start's implied shape so the
        // finished grid never exposes a placeholder
        let start_tile = grid.resolve_start()?;
        grid.rows[usize::try_from(start.y).map_err(|_| GridError::DimensionOverflow)?]
            [usize::try_from(start.x).map_err(|_| GridError::DimensionOverflow)?] = start_tile;

        Ok(grid)
    }
}

impl Grid {
    #[must_use]
    pub fn width(&self) -> Coord {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> Coord {
        self.height
    }

    /// Where the start cell was marked.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The tile at a point, with anything off-grid reading as ground.
    #[must_use]
    pub fn tile(&self, point: Point) -> Tile {
        let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
            return Tile::Ground;
        };
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(Tile::Ground)
    }

    /// Whether a point lies on the outermost ring of the grid.
    #[must_use]
    pub fn on_boundary(&self, point: Point) -> bool {
        point.x == 0 || point.y == 0 || point.x == self.width - 1 || point.y == self.height - 1
    }

    /// Interpret the start's pipe shape from the neighbors that connect
    /// back to it.
    fn resolve_start(&self) -> Result<Tile, GridError> {
        let connecting: Vec<Direction> = ALL_DIRECTIONS
            .into_iter()
            .filter(|&direction| {
                let neighbor = self.tile(self.start + direction.offset());
                neighbor.connects(direction.opposite())
            })
            .collect();

        let [first, second] = connecting[..] else {
            return Err(GridError::MalformedStart {
                connected: connecting.len(),
            });
        };

        Tile::from_connections(first, second).ok_or(GridError::MalformedStart { connected: 2 })
    }

    /// Walk the pipe loop from the start cell.
    ///
    /// At each step the current tile's two connections are checked and the
    /// not-yet-visited one is taken; the walk ends when neither neighbor is
    /// unvisited, which closes the loop. The grid is expected to encode
    /// exactly one simple cycle through the start; against anything else the
    /// returned path is truncated where the walk dead-ends.
    #[must_use]
    pub fn trace(&self) -> LoopPath {
        let mut points = Vec::new();
        let mut members = HashSet::new();

        let mut current = self.start;
        loop {
            points.push(current);
            members.insert(current);

            let next = self
                .tile(current)
                .connections()
                .into_iter()
                .flatten()
                .map(|direction| current + direction.offset())
                .find(|neighbor| !members.contains(neighbor));

            match next {
                Some(neighbor) => current = neighbor,
                None => break,
            }
        }

        LoopPath { points, members }
    }
}

/// The ordered cells of a traced pipe loop, start first.
///
/// The closing step back onto the start is implied rather than stored, so
/// the length equals the cycle length.
#[derive(Debug, Clone)]
pub struct LoopPath {
    points: Vec<Point>,
    members: HashSet<Point>,
}

impl LoopPath {
    /// The number of cells in the loop.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The cells in walk order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether a point lies on the loop.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.members.contains(&point)
    }

    /// Steps along the loop to its cell farthest from the start; half the
    /// cycle length, since a closed loop has even length.
    #[must_use]
    pub fn farthest_distance(&self) -> usize {
        self.points.len() / 2
    }
}

/// Which side of the loop a cell falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Interior,
    Exterior,
}

impl Region {
    fn flipped(self) -> Self {
        match self {
            Self::Interior => Self::Exterior,
            Self::Exterior => Self::Interior,
        }
    }
}

/// Counts of cells on either side of the loop.
///
/// Together the two counts cover every cell not on the loop itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub interior: usize,
    pub exterior: usize,
}

/// Resolve a ray's endpoint classification against the crossing parity
/// accumulated along the ray.
fn parity_region(crossings: u32, reference: Region) -> Region {
    if crossings % 2 == 0 {
        reference
    } else {
        reference.flipped()
    }
}

/// Cast a ray from `from` toward the top of the grid, counting loop
/// crossings, and classify `from` by parity.
///
/// The ray stops early at any already-classified cell and resolves relative
/// to it; rows are classified top to bottom, so that makes the whole pass
/// linear in grid area.
fn cast_ray(
    grid: &Grid,
    pipe_loop: &LoopPath,
    known: &HashMap<Point, Region>,
    from: Point,
) -> Region {
    let mut crossings: u32 = 0;
    // a bend opening north that began a vertical pipe run the ray entered
    let mut open_corner: Option<Tile> = None;

    let mut ray = from;
    loop {
        ray.y -= 1;
        if ray.y < 0 {
            // off the grid with nothing memoized; raw parity decides
            return parity_region(crossings, Region::Exterior);
        }

        if pipe_loop.contains(ray) {
            match grid.tile(ray) {
                // a horizontal pipe lies square across the ray
                Tile::Horizontal => crossings += 1,
                // the bottom of a vertical run; remember which side its
                // horizontal arm points
                Tile::NorthEast | Tile::NorthWest => open_corner = Some(grid.tile(ray)),
                // the top of that run: a crossing only if the two arms point
                // opposite ways, otherwise the pipe doubled back
                Tile::SouthWest | Tile::SouthEast => {
                    if let Some(opened) = open_corner.take()
                        && opened.connects(Direction::East) != grid.tile(ray).connects(Direction::East)
                    {
                        crossings += 1;
                    }
                }
                // riding along a vertical pipe crosses nothing
                Tile::Vertical | Tile::Ground => {}
            }
            continue;
        }

        if let Some(&memoized) = known.get(&ray) {
            return parity_region(crossings, memoized);
        }
    }
}

/// Classify every non-loop cell of the grid as interior or exterior to the
/// loop.
///
/// Cells on the true grid boundary are always exterior: the loop cannot
/// enclose them. Everything else is resolved by an upward even-odd ray
/// cast, memoized per call so each cell's ray ends at the first
/// already-classified cell above it.
#[must_use]
pub fn classify(grid: &Grid, pipe_loop: &LoopPath) -> Classification {
    let mut known: HashMap<Point, Region> = HashMap::new();
    let mut tally = Classification {
        interior: 0,
        exterior: 0,
    };

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let point = Point::new(x, y);
            if pipe_loop.contains(point) {
                continue;
            }

            let region = if grid.on_boundary(point) {
                Region::Exterior
            } else {
                cast_ray(grid, pipe_loop, &known, point)
            };

            known.insert(point, region);
            match region {
                Region::Interior => tally.interior += 1,
                Region::Exterior => tally.exterior += 1,
            }
        }
    }

    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(input: &str) -> Grid {
        input.parse().expect("test grid should parse")
    }

    #[test]
    fn start_resolves_to_implied_junction() {
        let grid = grid("S7\nLJ");
        // south and east neighbors connect back, so the start reads as F
        assert_eq!(grid.tile(Point::new(0, 0)), Tile::SouthEast);
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = "S7\nLX".parse::<Grid>().unwrap_err();
        assert!(matches!(
            err,
            GridError::UnknownSymbol {
                symbol: 'X',
                x: 1,
                y: 1
            }
        ));
    }

    #[test]
    fn start_with_one_connection_is_malformed() {
        let err = "S-.\n...".parse::<Grid>().unwrap_err();
        assert!(matches!(err, GridError::MalformedStart { connected: 1 }));
    }

    #[test]
    fn missing_start_is_rejected() {
        let err = "F7\nLJ".parse::<Grid>().unwrap_err();
        assert!(matches!(err, GridError::MissingStart));
    }

    #[test]
    fn second_start_is_rejected() {
        let err = "SS\nLJ".parse::<Grid>().unwrap_err();
        assert!(matches!(err, GridError::SecondStart { .. }));
    }

    #[test]
    fn trace_returns_the_cycle_in_walk_order() {
        let grid = grid(
            ".....\n\
             .S-7.\n\
             .|.|.\n\
             .L-J.\n\
             .....",
        );
        let path = grid.trace();

        assert_eq!(path.len(), 8);
        assert_eq!(path.points()[0], grid.start());
        // consecutive cells (and the closing pair) are one step apart
        for pair in path.points().windows(2) {
            let diff = pair[1] - pair[0];
            assert_eq!(diff.x.abs() + diff.y.abs(), 1);
        }
        let closing = path.points()[path.len() - 1] - path.points()[0];
        assert_eq!(closing.x.abs() + closing.y.abs(), 1);
    }

    #[test]
    fn farthest_distance_is_half_the_loop() {
        let simple = grid(
            ".....\n\
             .S-7.\n\
             .|.|.\n\
             .L-J.\n\
             .....",
        );
        assert_eq!(simple.trace().farthest_distance(), 4);

        let tangled = grid(
            "7-F7-\n\
             .FJ|7\n\
             SJLL7\n\
             |F--J\n\
             LJ.LJ",
        );
        assert_eq!(tangled.trace().farthest_distance(), 8);
    }

    #[test]
    fn rectangle_encloses_its_middle() {
        let grid = grid(
            "S----7\n\
             |....|\n\
             L----J",
        );
        let path = grid.trace();
        assert_eq!(path.len(), 14);

        let counted = classify(&grid, &path);
        assert_eq!(
            counted,
            Classification {
                interior: 4,
                exterior: 0
            }
        );
    }

    #[test]
    fn classification_partitions_all_non_loop_cells() {
        let grid = grid(
            ".....\n\
             .S-7.\n\
             .|.|.\n\
             .L-J.\n\
             .....",
        );
        let path = grid.trace();
        let counted = classify(&grid, &path);

        assert_eq!(counted.interior, 1);
        assert_eq!(counted.exterior, 16);
        assert_eq!(
            counted.interior + counted.exterior + path.len(),
            usize::try_from(grid.width() * grid.height()).expect("area fits usize")
        );
    }

    #[test]
    fn wide_corridors_do_not_leak_interior() {
        let grid = grid(
            "...........\n\
             .S-------7.\n\
             .|F-----7|.\n\
             .||.....||.\n\
             .||.....||.\n\
             .|L-7.F-J|.\n\
             .|..|.|..|.\n\
             .L--J.L--J.\n\
             ...........",
        );
        let counted = classify(&grid, &grid.trace());
        assert_eq!(counted.interior, 4);
    }

    #[test]
    fn junk_pipe_off_the_loop_is_classified_like_ground() {
        let grid = grid(
            "FF7FSF7F7F7F7F7F---7\n\
             L|LJ||||||||||||F--J\n\
             FL-7LJLJ||||||LJL-77\n\
             F--JF--7||LJLJ7F7FJ-\n\
             L---JF-JLJ.||-FJLJJ7\n\
             |F|F-JF---7F7-L7L|7|\n\
             |FFJF7L7F-JF7|JL---7\n\
             7-L-JL7||F7|L7F-7F7|\n\
             L.L7LFJ|||||FJL7||LJ\n\
             L7JLJL-JLJLJL--JLJ.L",
        );
        let counted = classify(&grid, &grid.trace());
        assert_eq!(counted.interior, 10);
    }
}
