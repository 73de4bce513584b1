use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Hand categories, weakest first. The discriminant is the ordinal used by
/// scoring.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value of a five-card hand.
///
/// Field order matters: the derived `Ord` compares category, then primary,
/// then secondary, then kickers high to low, which is exactly the showdown
/// ordering.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandValue {
    pub category: Category,
    /// The grouped rank that decides the hand (quad, trip, pair, straight high).
    pub primary: u8,
    /// The second grouped rank (full-house pair, quad kicker, low pair).
    pub secondary: u8,
    /// Remaining tie-breakers, high to low.
    pub kickers: Vec<u8>,
}

/// Outcome of comparing two hands from the first hand's point of view.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Showdown {
    Hand1Wins,
    Hand2Wins,
    Tie,
}

impl From<Ordering> for Showdown {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Showdown::Hand1Wins,
            Ordering::Less => Showdown::Hand2Wins,
            Ordering::Equal => Showdown::Tie,
        }
    }
}

/// Evaluates exactly five cards.
///
/// # Examples
///
/// ```
/// use shoggoth_engine::cards::parse_cards;
/// use shoggoth_engine::hand::{evaluate_cards, Category};
///
/// let hand = parse_cards("As 2d 3c 4h 5s").unwrap();
/// let value = evaluate_cards(&hand).unwrap();
/// assert_eq!(value.category, Category::Straight);
/// assert_eq!(value.primary, 5);
/// ```
pub fn evaluate_hand(cards: &[Card; 5]) -> HandValue {
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    values.sort_unstable();

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_high(&values);

    // (count, rank) groups, largest group first, ties broken by higher rank
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &v in values.iter().rev() {
        match groups.iter_mut().find(|(_, r)| *r == v) {
            Some(group) => group.0 += 1,
            None => groups.push((1, v)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));
    let shape: Vec<u8> = groups.iter().map(|&(count, _)| count).collect();
    let singles = |skip: usize| -> Vec<u8> { groups[skip..].iter().map(|&(_, r)| r).collect() };
    let descending: Vec<u8> = values.iter().rev().copied().collect();

    // Repeated ranks rule out both flushes and straights, so these checks
    // cannot shadow quads or a full house.
    match (is_flush, straight_high) {
        (true, Some(14)) => return value(Category::RoyalFlush, 14, 0, vec![]),
        (true, Some(high)) => return value(Category::StraightFlush, high, 0, vec![]),
        (true, None) => return value(Category::Flush, 0, 0, descending),
        (false, Some(high)) => return value(Category::Straight, high, 0, vec![]),
        (false, None) => {}
    }

    match shape.as_slice() {
        [4, 1] => value(Category::FourOfAKind, groups[0].1, groups[1].1, vec![]),
        [3, 2] => value(Category::FullHouse, groups[0].1, groups[1].1, vec![]),
        [3, 1, 1] => value(Category::ThreeOfAKind, groups[0].1, 0, singles(1)),
        [2, 2, 1] => value(Category::TwoPair, groups[0].1, groups[1].1, singles(2)),
        [2, 1, 1, 1] => value(Category::OnePair, groups[0].1, 0, singles(1)),
        _ => value(Category::HighCard, 0, 0, descending),
    }
}

/// Slice entry point: anything but five cards is reported, not guessed at.
pub fn evaluate_cards(cards: &[Card]) -> Result<HandValue, GameError> {
    let five: &[Card; 5] = cards
        .try_into()
        .map_err(|_| GameError::MalformedHand { len: cards.len() })?;
    Ok(evaluate_hand(five))
}

pub fn compare_values(a: &HandValue, b: &HandValue) -> Showdown {
    a.cmp(b).into()
}

/// Evaluates and compares two hands.
pub fn compare_hands(hand1: &[Card], hand2: &[Card]) -> Result<Showdown, GameError> {
    let a = evaluate_cards(hand1)?;
    let b = evaluate_cards(hand2)?;
    Ok(compare_values(&a, &b))
}

fn value(category: Category, primary: u8, secondary: u8, kickers: Vec<u8>) -> HandValue {
    HandValue {
        category,
        primary,
        secondary,
        kickers,
    }
}

/// High card of a five-card straight in ascending `values`; the wheel counts as 5.
fn straight_high(values: &[u8]) -> Option<u8> {
    if values == [2, 3, 4, 5, 14] {
        return Some(5);
    }
    values
        .windows(2)
        .all(|w| w[1] == w[0] + 1)
        .then(|| values[values.len() - 1])
}
