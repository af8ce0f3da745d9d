use crate::cards::CardCode;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck is empty")]
    Empty,
}

/// A standard 52-card deck stored as fixed slots.
///
/// Drawing picks a uniformly random non-empty slot and leaves
/// [`CardCode::EMPTY`] behind, so a code is returned at most once per deck.
#[derive(Debug, Clone)]
pub struct Deck {
    slots: [CardCode; DECK_SIZE],
    remaining: usize,
    rng: ChaCha8Rng,
}

impl Deck {
    /// A freshly permuted deck seeded from the thread RNG.
    ///
    /// ```
    /// use draw_poker::deck::Deck;
    ///
    /// let deck = Deck::shuffled();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn shuffled() -> Self {
        let seed: u64 = rand::rng().random();
        Self::seeded(seed)
    }

    /// Shuffle and draw using a seeded RNG for reproducibility.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: ChaCha8Rng) -> Self {
        let mut slots = [CardCode::EMPTY; DECK_SIZE];
        for (slot, code) in slots.iter_mut().zip(CardCode::all()) {
            *slot = code;
        }
        slots.shuffle(&mut rng);
        Self { slots, remaining: DECK_SIZE, rng }
    }

    /// Number of cards still in the deck.
    pub fn len(&self) -> usize {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Slot contents, including empty sentinels for drawn cards.
    pub fn slots(&self) -> &[CardCode] {
        &self.slots
    }

    /// Remove and return one uniformly selected remaining card.
    pub fn draw(&mut self) -> Result<CardCode, DeckError> {
        if self.remaining == 0 {
            return Err(DeckError::Empty);
        }
        // Pick the k-th non-empty slot.
        let k = self.rng.random_range(0..self.remaining);
        let idx = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_empty())
            .nth(k)
            .map(|(i, _)| i)
            .ok_or(DeckError::Empty)?;
        let code = self.slots[idx];
        self.slots[idx] = CardCode::EMPTY;
        self.remaining -= 1;
        tracing::trace!(card = %code, remaining = self.remaining, "drew card");
        Ok(code)
    }

    /// Draw `n` cards; fails without partial side effects visible to the caller's hand.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<CardCode>, DeckError> {
        if n > self.remaining {
            return Err(DeckError::Empty);
        }
        (0..n).map(|_| self.draw()).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::shuffled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fresh_deck_is_a_permutation_of_all_codes() {
        let d = Deck::seeded(3);
        let set: HashSet<CardCode> = d.slots().iter().copied().collect();
        assert_eq!(d.len(), 52);
        assert_eq!(set.len(), 52);
        assert!(!set.contains(&CardCode::EMPTY));
    }

    #[test]
    fn seeded_decks_are_reproducible() {
        let mut d1 = Deck::seeded(42);
        let mut d2 = Deck::seeded(42);
        assert_eq!(d1.slots(), d2.slots());
        assert_eq!(d1.draw_n(10).unwrap(), d2.draw_n(10).unwrap());
    }

    #[test]
    fn draw_leaves_sentinel_and_shrinks() {
        let mut d = Deck::seeded(7);
        let c1 = d.draw().unwrap();
        let c2 = d.draw().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        assert_eq!(d.slots().iter().filter(|c| c.is_empty()).count(), 2);
        assert!(!d.slots().contains(&c1));
    }

    #[test]
    fn exhausting_the_deck_errors() {
        let mut d = Deck::seeded(1);
        let all = d.draw_n(52).unwrap();
        let set: HashSet<CardCode> = all.iter().copied().collect();
        assert_eq!(set.len(), 52);
        assert!(d.is_empty());
        assert_eq!(d.draw(), Err(DeckError::Empty));
    }

    #[test]
    fn draw_n_rejects_more_than_remaining() {
        let mut d = Deck::seeded(1);
        d.draw_n(50).unwrap();
        assert_eq!(d.draw_n(3), Err(DeckError::Empty));
        assert_eq!(d.len(), 2);
    }
}
