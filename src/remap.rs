//! Chained interval remapping: an ordered pipeline of range-translation
//! stages evaluated forward (seed to final value) or backward (final value
//! to originating seed).
//!
//! Each stage holds triples of `(destination start, source start, length)`
//! describing half-open intervals translated by a constant offset, with
//! identity for anything no triple covers. Stages live in an explicit
//! ordered sequence and are iterated by index, which keeps the forward and
//! backward evaluations symmetric over the same immutable data.
//!
//! [`Pipeline::minimum_over`] searches for the smallest forward image of
//! seed ranges without enumerating them: the composed function is piecewise
//! linear with slope 1, so only range starts and the backward images of each
//! stage's destination starts can begin a minimal piece.

use thiserror::Error;

/// The integer type flowing through pipelines.
///
/// Real inputs carry 10-digit values, and offsetting can push past `u32`.
pub type Value = u64;

/// One translation triple: a half-open source interval shifted by a
/// constant offset onto a destination interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapRange {
    destination_start: Value,
    source_start: Value,
    length: Value,
}

impl MapRange {
    #[must_use]
    pub const fn new(destination_start: Value, source_start: Value, length: Value) -> Self {
        Self {
            destination_start,
            source_start,
            length,
        }
    }

    /// The first value of the destination interval.
    #[must_use]
    pub fn destination_start(&self) -> Value {
        self.destination_start
    }

    /// Translate a value covered by the source interval; `None` outside it.
    fn forward(&self, value: Value) -> Option<Value> {
        let offset = value.checked_sub(self.source_start)?;
        (offset < self.length).then(|| {
            self.destination_start
                .checked_add(offset)
                .expect("destination interval should not overflow the value type")
        })
    }

    /// Translate a value covered by the destination interval back; `None`
    /// outside it.
    fn backward(&self, value: Value) -> Option<Value> {
        let offset = value.checked_sub(self.destination_start)?;
        (offset < self.length).then(|| {
            self.source_start
                .checked_add(offset)
                .expect("source interval should not overflow the value type")
        })
    }
}

/// One remapping stage: translation triples in their listed order, identity
/// outside all of them.
///
/// Triples are assumed not to overlap in source or destination space; that
/// is a caller contract, not checked. With overlapping input the first
/// listed match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMap {
    ranges: Vec<MapRange>,
}

impl RangeMap {
    #[must_use]
    pub fn new(ranges: Vec<MapRange>) -> Self {
        Self { ranges }
    }

    /// Translate a source value to its destination value. Total: values no
    /// triple covers map to themselves.
    #[must_use]
    pub fn forward(&self, value: Value) -> Value {
        self.ranges
            .iter()
            .find_map(|range| range.forward(value))
            .unwrap_or(value)
    }

    /// Translate a destination value back to its source value. Total, as
    /// for [`RangeMap::forward`].
    #[must_use]
    pub fn backward(&self, value: Value) -> Value {
        self.ranges
            .iter()
            .find_map(|range| range.backward(value))
            .unwrap_or(value)
    }

    /// The destination interval starts of every triple, in listed order.
    pub fn destination_starts(&self) -> impl Iterator<Item = Value> + '_ {
        self.ranges.iter().map(MapRange::destination_start)
    }
}

/// A half-open interval of candidate seed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedRange {
    start: Value,
    length: Value,
}

impl SeedRange {
    #[must_use]
    pub const fn new(start: Value, length: Value) -> Self {
        Self { start, length }
    }

    #[must_use]
    pub fn start(&self) -> Value {
        self.start
    }

    #[must_use]
    pub fn length(&self) -> Value {
        self.length
    }

    /// Whether a seed falls inside the interval.
    #[must_use]
    pub fn contains(&self, seed: Value) -> bool {
        seed.checked_sub(self.start)
            .is_some_and(|offset| offset < self.length)
    }
}

/// No candidate seed fell inside any of the given seed ranges.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("no candidate seed falls inside any seed range")]
pub struct EmptySeedSetError;

/// An ordered chain of remapping stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<RangeMap>,
}

impl Pipeline {
    #[must_use]
    pub fn new(stages: Vec<RangeMap>) -> Self {
        Self { stages }
    }

    #[must_use]
    pub fn stages(&self) -> &[RangeMap] {
        &self.stages
    }

    /// Evaluate the whole chain front to back on a seed value.
    #[must_use]
    pub fn forward(&self, seed: Value) -> Value {
        self.stages
            .iter()
            .fold(seed, |value, stage| stage.forward(value))
    }

    /// Evaluate the whole chain back to front on a final value, recovering
    /// the seed that produces it.
    #[must_use]
    pub fn backward(&self, value: Value) -> Value {
        self.stages
            .iter()
            .rev()
            .fold(value, |value, stage| stage.backward(value))
    }

    /// Pull a value sitting after stage `stage_index` back through that
    /// stage and everything before it.
    fn backward_through(&self, stage_index: usize, value: Value) -> Value {
        self.stages[..=stage_index]
            .iter()
            .rev()
            .fold(value, |value, stage| stage.backward(value))
    }

    /// The smallest forward image over every seed in the given ranges,
    /// found by evaluating boundary candidates instead of enumerating the
    /// ranges.
    ///
    /// Candidates are each range's own start plus, for every stage, the
    /// seeds whose image lands exactly on one of that stage's destination
    /// interval starts. Candidates outside all ranges are discarded.
    ///
    /// # Errors
    ///
    /// [`EmptySeedSetError`] when no candidate survives the range filter,
    /// which includes the degenerate case of no or empty ranges.
    pub fn minimum_over(&self, ranges: &[SeedRange]) -> Result<Value, EmptySeedSetError> {
        let mut candidates: Vec<Value> = ranges.iter().map(SeedRange::start).collect();

        for (stage_index, stage) in self.stages.iter().enumerate() {
            for destination_start in stage.destination_starts() {
                candidates.push(self.backward_through(stage_index, destination_start));
            }
        }

        candidates
            .into_iter()
            .filter(|&seed| ranges.iter().any(|range| range.contains(seed)))
            .map(|seed| self.forward(seed))
            .min()
            .ok_or(EmptySeedSetError)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// The almanac stage from the worked example: 98..100 -> 50, 50..98 -> 52.
    fn seed_to_soil() -> RangeMap {
        RangeMap::new(vec![MapRange::new(50, 98, 2), MapRange::new(52, 50, 48)])
    }

    #[test]
    fn single_stage_translates_and_falls_back() {
        let stage = seed_to_soil();

        assert_eq!(stage.forward(98), 50);
        assert_eq!(stage.forward(99), 51);
        assert_eq!(stage.forward(53), 55);
        // outside both intervals: identity
        assert_eq!(stage.forward(10), 10);
        assert_eq!(stage.forward(100), 100);
    }

    #[test]
    fn worked_example_seed_79_lands_on_81() {
        let pipeline = Pipeline::new(vec![
            RangeMap::new(vec![MapRange::new(50, 98, 2)]),
            RangeMap::new(vec![MapRange::new(52, 50, 48)]),
        ]);

        assert_eq!(pipeline.forward(79), 81);
    }

    #[test]
    fn backward_inverts_forward_on_the_example_stage() {
        let pipeline = Pipeline::new(vec![seed_to_soil()]);

        for seed in [0, 49, 50, 79, 97, 98, 99, 100, 1_000] {
            assert_eq!(pipeline.backward(pipeline.forward(seed)), seed);
        }
    }

    #[test]
    fn overlapping_triples_resolve_to_the_first_listed() {
        let stage = RangeMap::new(vec![MapRange::new(100, 10, 5), MapRange::new(200, 10, 5)]);
        assert_eq!(stage.forward(12), 102);
    }

    #[test]
    fn minimum_over_requires_a_surviving_candidate() {
        let pipeline = Pipeline::new(vec![seed_to_soil()]);

        assert_eq!(pipeline.minimum_over(&[]), Err(EmptySeedSetError));
        // zero-length range contains nothing
        assert_eq!(
            pipeline.minimum_over(&[SeedRange::new(5, 0)]),
            Err(EmptySeedSetError)
        );
    }

    #[test]
    fn minimum_over_finds_an_interior_boundary() {
        // 0..10 maps up and away; 10..20 maps down to 0..10; the minimum sits
        // at seed 10, the backward image of destination start 0
        let pipeline = Pipeline::new(vec![RangeMap::new(vec![
            MapRange::new(100, 0, 10),
            MapRange::new(0, 10, 10),
        ])]);

        assert_eq!(pipeline.minimum_over(&[SeedRange::new(3, 12)]), Ok(0));
    }

    /// Split `0..total` at the given boundaries and permute the pieces,
    /// producing a stage that is a bijection of `0..total` (and identity
    /// beyond it).
    fn permutation_stage(total: Value, mut cut_points: Vec<Value>, rotate_by: usize) -> RangeMap {
        cut_points.retain(|&cut| cut > 0 && cut < total);
        cut_points.sort_unstable();
        cut_points.dedup();

        let mut starts = vec![0];
        starts.extend(cut_points);
        let mut lengths = Vec::new();
        for (index, &start) in starts.iter().enumerate() {
            let end = starts.get(index + 1).copied().unwrap_or(total);
            lengths.push(end - start);
        }

        // reassign destinations by rotating the piece order
        let pieces: Vec<(Value, Value)> = starts.into_iter().zip(lengths).collect();
        let rotation = rotate_by % pieces.len();
        let mut destination_cursor = 0;
        let mut ranges = Vec::new();
        for index in 0..pieces.len() {
            let (source_start, length) = pieces[(index + rotation) % pieces.len()];
            ranges.push(MapRange::new(destination_cursor, source_start, length));
            destination_cursor += length;
        }
        RangeMap::new(ranges)
    }

    prop_compose! {
        fn arb_permutation_pipeline(total: Value)(
            stage_seeds in prop::collection::vec(
                (prop::collection::vec(1..1_000u64, 0..4), 0..8usize),
                1..5,
            ),
        ) -> Pipeline {
            let stages = stage_seeds
                .into_iter()
                .map(|(raw_cuts, rotate_by)| {
                    let cut_points = raw_cuts.into_iter().map(|cut| cut % total).collect();
                    permutation_stage(total, cut_points, rotate_by)
                })
                .collect();
            Pipeline::new(stages)
        }
    }

    proptest! {
        /// Stages built as interval permutations are bijections, so the
        /// backward evaluation must undo the forward one everywhere.
        #[test]
        fn backward_round_trips_forward(
            pipeline in arb_permutation_pipeline(1_000),
            seed in 0..2_000u64,
        ) {
            prop_assert_eq!(pipeline.backward(pipeline.forward(seed)), seed);
        }

        /// With stages whose intervals tile the domain, the boundary
        /// candidate search must agree with brute-force enumeration.
        #[test]
        fn candidate_search_matches_brute_force(
            pipeline in arb_permutation_pipeline(1_000),
            spans in prop::collection::vec((0..900u64, 1..100u64), 1..4),
        ) {
            let ranges: Vec<SeedRange> = spans
                .into_iter()
                .map(|(start, length)| SeedRange::new(start, length))
                .collect();

            let brute_force = ranges
                .iter()
                .flat_map(|range| range.start()..range.start() + range.length())
                .map(|seed| pipeline.forward(seed))
                .min()
                .expect("ranges are non-empty");

            prop_assert_eq!(pipeline.minimum_over(&ranges), Ok(brute_force));
        }
    }
}
