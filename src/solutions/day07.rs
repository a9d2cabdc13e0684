use std::collections::HashMap;

use aoc_harness::parsing::{parse_field, parse_lines};
use aoc_harness::registry::register_puzzle;
use aoc_harness::{FromInput, Puzzle, PuzzleResult};
use thiserror::Error;

/*
Input is a list of Camel Cards hands with bids:

    32T3K 765
    T55J5 684

Hands rank first by type (five of a kind down to high card), then by
comparing cards left to right. Every hand gets a rank by sorting, and the
answer is the sum of bid * rank over all hands.

Part 2 turns every J from jack into a joker: it mimics whichever card makes
the hand type strongest, but compares as the weakest individual card.
*/

#[derive(Error, Debug)]
enum Day07Error {
    #[error("expected '<cards> <bid>', found: {0:?}")]
    ExpectedHandFormat(String),

    #[error("a hand needs exactly 5 cards, found: {0:?}")]
    WrongCardCount(String),

    #[error("unknown card label: {0:?}")]
    UnknownCard(char),
}

const HAND_SIZE: usize = 5;

/// Hand types in ascending strength, so the derived order ranks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

/// A card's comparison strength; jokers sit below every other card.
type Strength = u8;

fn card_strength(label: char, jokers_wild: bool) -> Result<Strength, Day07Error> {
    Ok(match label {
        'A' => 14,
        'K' => 13,
        'Q' => 12,
        'J' => {
            if jokers_wild {
                1
            } else {
                11
            }
        }
        'T' => 10,
        '2'..='9' => {
            let digit = label.to_digit(10).expect("digit range already matched");
            Strength::try_from(digit).expect("digit strength fits u8")
        }
        other => return Err(Day07Error::UnknownCard(other)),
    })
}

/// Classify five card strengths, letting jokers (strength 1) mimic the most
/// frequent other card.
fn hand_type(strengths: [Strength; HAND_SIZE], jokers_wild: bool) -> HandType {
    let mut counts: HashMap<Strength, usize> = HashMap::new();
    let mut jokers = 0;
    for strength in strengths {
        if jokers_wild && strength == 1 {
            jokers += 1;
        } else {
            *counts.entry(strength).or_insert(0) += 1;
        }
    }

    let mut profile: Vec<usize> = counts.into_values().collect();
    profile.sort_unstable_by(|a, b| b.cmp(a));
    // joining the largest group is always at least as strong as any split
    match profile.first_mut() {
        Some(largest) => *largest += jokers,
        None => profile.push(jokers), // all five cards were jokers
    }

    match (profile[0], profile.get(1).copied().unwrap_or(0)) {
        (5, _) => HandType::FiveOfAKind,
        (4, _) => HandType::FourOfAKind,
        (3, 2) => HandType::FullHouse,
        (3, _) => HandType::ThreeOfAKind,
        (2, 2) => HandType::TwoPair,
        (2, _) => HandType::OnePair,
        _ => HandType::HighCard,
    }
}

#[derive(Debug)]
struct Hand {
    cards: [char; HAND_SIZE],
    bid: u64,
}

impl Hand {
    fn parse(line: &str) -> PuzzleResult<Self> {
        let (cards_text, bid_text) = line
            .split_once(' ')
            .ok_or_else(|| Day07Error::ExpectedHandFormat(line.to_owned()))?;

        let cards: Vec<char> = cards_text.chars().collect();
        let cards: [char; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| Day07Error::WrongCardCount(cards_text.to_owned()))?;

        Ok(Self {
            cards,
            bid: parse_field(bid_text)?,
        })
    }

    /// The sortable rating of this hand under either rule set.
    fn rating(&self, jokers_wild: bool) -> Result<(HandType, [Strength; HAND_SIZE]), Day07Error> {
        let mut strengths = [0; HAND_SIZE];
        for (slot, &label) in strengths.iter_mut().zip(&self.cards) {
            *slot = card_strength(label, jokers_wild)?;
        }
        Ok((hand_type(strengths, jokers_wild), strengths))
    }
}

struct Hands(Vec<Hand>);

impl FromInput for Hands {
    fn from_input(input: &str) -> PuzzleResult<Self> {
        let hands = parse_lines(input, Hand::parse).collect::<Result<_, _>>()?;
        Ok(Self(hands))
    }
}

/// Rank all hands and total the winnings, `bid * rank`.
fn total_winnings(hands: &[Hand], jokers_wild: bool) -> PuzzleResult<u64> {
    let mut rated: Vec<((HandType, [Strength; HAND_SIZE]), u64)> = hands
        .iter()
        .map(|hand| Ok((hand.rating(jokers_wild)?, hand.bid)))
        .collect::<PuzzleResult<_>>()?;
    rated.sort_unstable_by(|a, b| a.0.cmp(&b.0));

    Ok(rated
        .iter()
        .zip(1..)
        .map(|(&(_, bid), rank)| bid * rank)
        .sum())
}

#[register_puzzle(day = 7, title = "Day 7: Camel Cards")]
struct Day07;

impl Puzzle for Day07 {
    type Parsed = Hands;
    type Answer1 = u64;
    type Answer2 = u64;

    fn part_one(parsed: &Hands) -> PuzzleResult<u64> {
        total_winnings(&parsed.0, false)
    }

    fn part_two(parsed: &Hands) -> PuzzleResult<u64> {
        total_winnings(&parsed.0, true)
    }
}
