use crate::cards::CardCode;
use crate::deck::Deck;
use crate::evaluator::{evaluate_hand, Evaluation, HandValue};
use crate::hand::{Hand, HandError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerError {
    #[error("player {0:?} must start with a positive chip count")]
    InvalidSetup(String),
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Serializable view of a player between rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub chips: u64,
    pub human: bool,
    pub folded: bool,
    pub current_bet: u64,
    pub last_bet: u64,
    pub hand: Vec<CardCode>,
}

/// A seat at the table: chips, bet state, and an exclusively owned hand.
///
/// The cached evaluation is refreshed by [`Player::reevaluate`]; any hand
/// change marks it stale until then.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    chips: u64,
    hand: Hand,
    evaluation: Evaluation,
    stale: bool,
    folded: bool,
    current_bet: u64,
    last_bet: u64,
    human: bool,
    exchanged: bool,
}

impl Player {
    /// Seat a player and deal a fresh hand of `hand_size` cards.
    ///
    /// ```
    /// use draw_poker::deck::Deck;
    /// use draw_poker::player::Player;
    ///
    /// let mut deck = Deck::seeded(1);
    /// let p = Player::new("Alice", 1000, true, &mut deck, 5).unwrap();
    /// assert_eq!(p.hand().len(), 5);
    /// assert!(Player::new("Bob", 0, false, &mut deck, 5).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        chips: u64,
        human: bool,
        deck: &mut Deck,
        hand_size: usize,
    ) -> Result<Self, PlayerError> {
        let name = name.into();
        if chips == 0 {
            return Err(PlayerError::InvalidSetup(name));
        }
        let hand = Hand::deal(deck, hand_size)?;
        Self::seat(name, chips, human, hand)
    }

    /// Seat a player holding a known hand.
    pub fn with_hand(
        name: impl Into<String>,
        chips: u64,
        human: bool,
        hand: Hand,
    ) -> Result<Self, PlayerError> {
        let name = name.into();
        if chips == 0 {
            return Err(PlayerError::InvalidSetup(name));
        }
        Self::seat(name, chips, human, hand)
    }

    /// Rebuild a player from a snapshot. Busted players (zero chips) are allowed.
    pub fn from_snapshot(snapshot: &PlayerSnapshot) -> Result<Self, PlayerError> {
        let hand = Hand::from_codes(&snapshot.hand)?;
        let mut player = Self::seat(snapshot.name.clone(), snapshot.chips, snapshot.human, hand)?;
        player.folded = snapshot.folded;
        player.current_bet = snapshot.current_bet;
        player.last_bet = snapshot.last_bet;
        Ok(player)
    }

    fn seat(name: String, chips: u64, human: bool, hand: Hand) -> Result<Self, PlayerError> {
        let evaluation = evaluate_hand(&hand)?;
        Ok(Self {
            name,
            chips,
            hand,
            evaluation,
            stale: false,
            folded: false,
            current_bet: 0,
            last_bet: 0,
            human,
            exchanged: false,
        })
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            name: self.name.clone(),
            chips: self.chips,
            human: self.human,
            folded: self.folded,
            current_bet: self.current_bet,
            last_bet: self.last_bet,
            hand: self.hand.codes().to_vec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chips(&self) -> u64 {
        self.chips
    }

    pub fn is_human(&self) -> bool {
        self.human
    }

    pub fn is_folded(&self) -> bool {
        self.folded
    }

    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    pub fn last_bet(&self) -> u64 {
        self.last_bet
    }

    /// An independent copy of the hand.
    pub fn hand(&self) -> Hand {
        self.hand.clone()
    }

    /// Long-form card names for display.
    pub fn hand_display(&self) -> Vec<String> {
        self.hand.display_names()
    }

    /// Last computed evaluation. Only trustworthy when
    /// [`Player::needs_reevaluation`] is false.
    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn hand_value(&self) -> HandValue {
        self.evaluation.value()
    }

    pub fn score(&self) -> u8 {
        self.evaluation.score()
    }

    pub fn needs_reevaluation(&self) -> bool {
        self.stale
    }

    /// Wager up to `amount`; anything above the balance is clamped (implicit all-in).
    /// Returns the amount actually wagered.
    pub fn place_bet(&mut self, amount: u64) -> u64 {
        let wagered = amount.min(self.chips);
        self.chips -= wagered;
        self.current_bet += wagered;
        wagered
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    pub fn reset_fold(&mut self) {
        self.folded = false;
    }

    /// Whether the seat already used its exchange this round.
    pub fn has_exchanged(&self) -> bool {
        self.exchanged
    }

    pub fn mark_exchanged(&mut self) {
        self.exchanged = true;
    }

    pub fn reset_exchange(&mut self) {
        self.exchanged = false;
    }

    pub fn add_chips(&mut self, amount: u64) {
        self.chips += amount;
    }

    /// Remember the bet for this betting round as the last bet.
    pub fn record_last_bet(&mut self) {
        self.last_bet = self.current_bet;
    }

    pub fn reset_bet(&mut self) {
        self.current_bet = 0;
    }

    /// Replace the card at `index` with one drawn from `deck`.
    pub fn exchange_card_at(&mut self, index: usize, deck: &mut Deck) -> Result<(), PlayerError> {
        self.exchange_cards(&[index], deck).map(|_| ())
    }

    /// Replace every listed slot. Indices are validated before any card moves,
    /// duplicates count once. Returns how many cards were replaced.
    pub fn exchange_cards(
        &mut self,
        indices: &[usize],
        deck: &mut Deck,
    ) -> Result<usize, PlayerError> {
        let len = self.hand.len();
        let unique: BTreeSet<usize> = indices.iter().copied().collect();
        if let Some(&index) = unique.iter().find(|&&i| i >= len) {
            return Err(HandError::IndexOutOfRange { index, len }.into());
        }
        if unique.len() > deck.len() {
            return Err(HandError::Deck(crate::deck::DeckError::Empty).into());
        }
        for &index in &unique {
            self.hand.discard(index)?;
        }
        let drawn = self.hand.refill(deck)?;
        if drawn > 0 {
            self.stale = true;
        }
        Ok(drawn)
    }

    /// Recompute the cached evaluation from the current hand.
    pub fn reevaluate(&mut self) -> Result<&Evaluation, PlayerError> {
        self.evaluation = evaluate_hand(&self.hand)?;
        self.stale = false;
        Ok(&self.evaluation)
    }

    /// Throw the old hand away and deal a new one.
    pub fn deal_new_hand(&mut self, deck: &mut Deck, hand_size: usize) -> Result<(), PlayerError> {
        self.hand = Hand::deal(deck, hand_size)?;
        self.reevaluate()?;
        Ok(())
    }
}
