use crate::cards::{Card, CardCode, CardError};
use crate::deck::{Deck, DeckError};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Smallest and largest supported hand sizes.
pub const MIN_HAND_SIZE: usize = 1;
pub const MAX_HAND_SIZE: usize = 10;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("hand size must be between 1 and 10, got {0}")]
    Size(usize),
    #[error("slot {0} is empty")]
    EmptySlot(usize),
    #[error("card index {index} out of range for a {len}-card hand")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("duplicate cards in hand")]
    Duplicate,
    #[error("card parse error: {0}")]
    CardParse(#[from] CardError),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// A fixed-size, ordered hand of card codes.
///
/// A slot holds [`CardCode::EMPTY`] only between a discard and its
/// replacement; [`Hand::cards`] refuses to decode such a hand.
///
/// ```
/// use draw_poker::deck::Deck;
/// use draw_poker::hand::Hand;
///
/// let mut deck = Deck::seeded(11);
/// let hand = Hand::deal(&mut deck, 5).unwrap();
/// assert_eq!(hand.len(), 5);
/// assert!(hand.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    slots: Vec<CardCode>,
}

impl Hand {
    /// Draw a new hand of `size` cards from `deck`.
    pub fn deal(deck: &mut Deck, size: usize) -> Result<Self, HandError> {
        check_size(size)?;
        let slots = deck.draw_n(size)?;
        Ok(Self { slots })
    }

    /// Build a complete hand from known cards.
    pub fn from_cards(cards: &[Card]) -> Result<Self, HandError> {
        check_size(cards.len())?;
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::Duplicate);
        }
        Ok(Self { slots: cards.iter().map(|c| c.code()).collect() })
    }

    /// Build a hand from raw codes. Empty sentinels are allowed; duplicates are not.
    pub fn from_codes(codes: &[CardCode]) -> Result<Self, HandError> {
        check_size(codes.len())?;
        let mut seen = HashSet::new();
        for code in codes.iter().filter(|c| !c.is_empty()) {
            if !seen.insert(*code) {
                return Err(HandError::Duplicate);
            }
        }
        Ok(Self { slots: codes.to_vec() })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn codes(&self) -> &[CardCode] {
        &self.slots
    }

    /// True when no slot holds the empty sentinel.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|c| !c.is_empty())
    }

    /// Decode every slot; fails on the first empty one.
    pub fn cards(&self) -> Result<Vec<Card>, HandError> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, code)| code.card().ok_or(HandError::EmptySlot(i)))
            .collect()
    }

    /// Mark a slot as discarded. Returns the code that was there.
    pub fn discard(&mut self, index: usize) -> Result<CardCode, HandError> {
        let len = self.slots.len();
        let slot = self.slots.get_mut(index).ok_or(HandError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, CardCode::EMPTY))
    }

    /// Fill every empty slot from `deck`, returning how many cards were drawn.
    pub fn refill(&mut self, deck: &mut Deck) -> Result<usize, HandError> {
        let missing = self.slots.iter().filter(|c| c.is_empty()).count();
        if missing > deck.len() {
            return Err(DeckError::Empty.into());
        }
        for slot in self.slots.iter_mut().filter(|c| c.is_empty()) {
            *slot = deck.draw()?;
        }
        Ok(missing)
    }

    /// Long-form names of each card ("Ace of Spades"); empty slots render as "Empty".
    pub fn display_names(&self) -> Vec<String> {
        self.slots
            .iter()
            .map(|code| code.card().map(Card::name).unwrap_or_else(|| "Empty".to_string()))
            .collect()
    }

    /// Inverse of [`Hand::display_names`] for complete hands.
    pub fn from_display_names<S: AsRef<str>>(names: &[S]) -> Result<Self, HandError> {
        let cards = names
            .iter()
            .map(|n| Card::from_str(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(&cards)
    }
}

fn check_size(size: usize) -> Result<(), HandError> {
    if !(MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&size) {
        return Err(HandError::Size(size));
    }
    Ok(())
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.slots.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = crate::cards::parse_cards(s)?;
        Hand::from_cards(&cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn deal_respects_size_bounds() {
        let mut deck = Deck::seeded(5);
        assert!(matches!(Hand::deal(&mut deck, 0), Err(HandError::Size(0))));
        assert!(matches!(Hand::deal(&mut deck, 11), Err(HandError::Size(11))));
        let h = Hand::deal(&mut deck, 10).unwrap();
        assert_eq!(h.len(), 10);
        assert_eq!(deck.len(), 42);
    }

    #[test]
    fn discard_then_refill_draws_new_cards() {
        let mut deck = Deck::seeded(9);
        let mut hand = Hand::deal(&mut deck, 5).unwrap();
        let old = hand.discard(2).unwrap();
        assert!(!hand.is_complete());
        assert!(matches!(hand.cards(), Err(HandError::EmptySlot(2))));
        assert_eq!(hand.refill(&mut deck).unwrap(), 1);
        assert!(hand.is_complete());
        assert_ne!(hand.codes()[2], old);
    }

    #[test]
    fn discard_out_of_range() {
        let mut deck = Deck::seeded(9);
        let mut hand = Hand::deal(&mut deck, 3).unwrap();
        assert_eq!(hand.discard(3), Err(HandError::IndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn duplicates_are_rejected() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(Hand::from_cards(&[a, a]), Err(HandError::Duplicate));
        assert_eq!(Hand::from_codes(&[a.code(), a.code()]), Err(HandError::Duplicate));
        assert!(Hand::from_codes(&[CardCode::EMPTY, CardCode::EMPTY]).is_ok());
    }

    #[test]
    fn display_names_round_trip() {
        let hand: Hand = "As Kd 10c 2h 7s".parse().unwrap();
        let names = hand.display_names();
        assert_eq!(names[0], "Ace of Spades");
        assert_eq!(Hand::from_display_names(&names).unwrap(), hand);
    }
}
