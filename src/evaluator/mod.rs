pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{Hand, HandError};
use core::cmp::Ordering;
use core::fmt;
use serde::{Deserialize, Serialize};
use straight_info::RUN_LENGTH;

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue(u64);

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
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
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Score band `(floor, width)` on the 0..=100 scale.
    const fn band(self) -> (u8, u8) {
        match self {
            Category::HighCard => (0, 10),
            Category::Pair => (10, 15),
            Category::TwoPair => (25, 13),
            Category::ThreeOfAKind => (38, 12),
            Category::Straight => (50, 10),
            Category::Flush => (60, 10),
            Category::FullHouse => (70, 10),
            Category::FourOfAKind => (80, 10),
            Category::StraightFlush => (90, 10),
            Category::RoyalFlush => (100, 1),
        }
    }

    /// Lowest score a hand of this category can have.
    pub const fn score_floor(self) -> u8 {
        self.band().0
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
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

/// Every category a hand satisfies. Flags are not exclusive: a full house
/// also reports `pair` and `three_kind`, a straight flush also reports
/// `straight` and `flush`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandFlags {
    pub pair: bool,
    pub two_pair: bool,
    pub three_kind: bool,
    pub straight: bool,
    pub flush: bool,
    pub full_house: bool,
    pub four_kind: bool,
    pub straight_flush: bool,
    pub royal_flush: bool,
}

impl HandFlags {
    /// The highest category the flags describe.
    pub fn strongest(&self) -> Category {
        [
            (self.royal_flush, Category::RoyalFlush),
            (self.straight_flush, Category::StraightFlush),
            (self.four_kind, Category::FourOfAKind),
            (self.full_house, Category::FullHouse),
            (self.flush, Category::Flush),
            (self.straight, Category::Straight),
            (self.three_kind, Category::ThreeOfAKind),
            (self.two_pair, Category::TwoPair),
            (self.pair, Category::Pair),
        ]
        .into_iter()
        .find(|(set, _)| *set)
        .map_or(Category::HighCard, |(_, category)| category)
    }
}

/// Detailed evaluation result. `value` drives ordering.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub flags: HandFlags,
    /// Cards that make the hand, highest rank first (at most five).
    pub best: Vec<Card>,
    value: HandValue,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    /// Evaluation of a hand with no cards: lowest possible value.
    pub fn empty() -> Self {
        Self {
            category: Category::HighCard,
            flags: HandFlags::default(),
            best: Vec::new(),
            value: HandValue::default(),
        }
    }

    /// Packed comparable value for ordering and caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }

    /// Coarse strength on a 0..=100 scale.
    ///
    /// Every category owns a band above the one below it, and the primary
    /// rank (pair rank, top of a straight, ...) places the hand inside its
    /// band. Hands that tie on `value` always share a score; the converse
    /// does not hold, so use [`Evaluation::value`] to rank hands.
    pub fn score(&self) -> u8 {
        if self.best.is_empty() {
            return 0;
        }
        let (floor, width) = self.category.band();
        let primary = self.value.primary_rank().unwrap_or(2);
        floor + (primary - 2) * width / 13
    }
}

impl HandValue {
    const CAT_SHIFT: u32 = 48;
    const RANK_STRIDE: u32 = 6;

    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and up to five rank tiebreakers into a comparable value.
    /// Missing tiebreakers count as zero, below any real rank.
    pub fn from_parts(category: Category, ranks_desc: &[Rank]) -> Self {
        // [ category | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 18 zero bits ]
        let mut v: u64 = (category as u64) << Self::CAT_SHIFT;
        for (i, r) in ranks_desc.iter().take(RUN_LENGTH).enumerate() {
            let offset = Self::CAT_SHIFT - Self::RANK_STRIDE * (i as u32 + 1);
            v |= (r.value() as u64) << offset;
        }
        HandValue(v)
    }

    pub fn category_ordinal(self) -> u8 {
        (self.0 >> Self::CAT_SHIFT) as u8
    }

    fn primary_rank(self) -> Option<u8> {
        let r = ((self.0 >> (Self::CAT_SHIFT - Self::RANK_STRIDE)) & 0x3f) as u8;
        (r >= 2).then_some(r)
    }
}

/// Evaluate any number of cards.
///
/// Up to five cards are scored as they are; straights and flushes need
/// exactly five. Larger hands score their best five-card subset. Never
/// fails: an empty slice yields [`Evaluation::empty`].
///
/// ```
/// use draw_poker::cards::parse_cards;
/// use draw_poker::evaluator::{evaluate, Category};
///
/// let eval = evaluate(&parse_cards("Ah Ad Qc Jd 9h").unwrap());
/// assert_eq!(eval.category, Category::Pair);
/// assert!(eval.flags.pair);
///
/// let seven = evaluate(&parse_cards("2c 3c 4c 5c 6c Kd Kh").unwrap());
/// assert_eq!(seven.category, Category::StraightFlush);
/// ```
pub fn evaluate(cards: &[Card]) -> Evaluation {
    use combinations::Combinations;

    if cards.is_empty() {
        return Evaluation::empty();
    }
    if cards.len() <= RUN_LENGTH {
        return evaluate_small(cards);
    }

    let mut best: Option<Evaluation> = None;
    for indices in Combinations::new(cards.len(), RUN_LENGTH) {
        let subset: Vec<Card> = indices.iter().map(|&i| cards[i]).collect();
        let eval = evaluate_small(&subset);
        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }
    best.unwrap_or_else(Evaluation::empty)
}

/// Evaluate a dealt hand. Fails if a slot is still empty mid-exchange.
pub fn evaluate_hand(hand: &Hand) -> Result<Evaluation, HandError> {
    let cards = hand.cards()?;
    let eval = evaluate(&cards);
    tracing::debug!(hand = %hand, category = %eval.category, score = eval.score(), "evaluated hand");
    Ok(eval)
}

/// Compare two card sets by evaluated strength.
pub fn compare(a: &[Card], b: &[Card]) -> Ordering {
    evaluate(a).cmp(&evaluate(b))
}

fn evaluate_small(cards: &[Card]) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);
    DETECTORS
        .iter()
        .find(|d| d.detect(&analysis))
        .map(|d| d.build_evaluation(&analysis))
        .unwrap_or_else(Evaluation::empty)
}
