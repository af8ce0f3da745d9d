//! Agents: where betting and exchange decisions come from.
//!
//! The engine asks an [`InputSource`] for every human seat and the
//! deterministic [`BotPolicy`] for every AI seat. Front ends (TUI, tests,
//! scripts) implement or reuse an input source; the engine never blocks on
//! I/O itself.

use crate::hand::Hand;
use std::collections::{HashMap, VecDeque};

/// A betting decision for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BetDecision {
    /// Match the high bet (a check when nothing is owed).
    Call,
    /// Match the high bet and raise it by the given amount.
    Raise(u64),
    Fold,
}

/// What a seat sees when asked to bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetContext {
    pub seat: usize,
    /// Highest current bet among players still in the round.
    pub high_bet: u64,
    /// What this seat has already put in during this betting round.
    pub current_bet: u64,
    pub chips: u64,
    /// Hand strength on the 0..=100 scale.
    pub score: u8,
    pub pot: u64,
}

impl BetContext {
    pub fn to_call(&self) -> u64 {
        self.high_bet.saturating_sub(self.current_bet)
    }
}

/// Decision source for human seats.
pub trait InputSource {
    /// `None` when no decision is available yet; the engine pauses before
    /// this seat and asks again when resumed.
    fn decide_bet(&mut self, ctx: &BetContext) -> Option<BetDecision>;
    /// Slot indices to discard; empty keeps the whole hand.
    fn choose_discards(&mut self, seat: usize, hand: &Hand) -> Vec<usize>;
}

mod bots;

pub use bots::BotPolicy;

/// Input collected ahead of time, e.g. from key presses or a test script.
/// Seats with nothing queued call and keep their cards, unless built with
/// [`QueuedInput::waiting`].
#[derive(Debug, Default, Clone)]
pub struct QueuedInput {
    bets: HashMap<usize, VecDeque<BetDecision>>,
    discards: HashMap<usize, VecDeque<Vec<usize>>>,
    wait_when_empty: bool,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue that answers "not yet" instead of calling when a seat has no
    /// bet queued, so the engine stops and waits for the next one.
    pub fn waiting() -> Self {
        Self { wait_when_empty: true, ..Self::default() }
    }

    pub fn push_bet(&mut self, seat: usize, decision: BetDecision) -> &mut Self {
        self.bets.entry(seat).or_default().push_back(decision);
        self
    }

    pub fn push_discards(&mut self, seat: usize, indices: Vec<usize>) -> &mut Self {
        self.discards.entry(seat).or_default().push_back(indices);
        self
    }

    pub fn pending_bets(&self, seat: usize) -> usize {
        self.bets.get(&seat).map_or(0, VecDeque::len)
    }

    pub fn clear(&mut self) {
        self.bets.clear();
        self.discards.clear();
    }
}

impl InputSource for QueuedInput {
    fn decide_bet(&mut self, ctx: &BetContext) -> Option<BetDecision> {
        match self.bets.get_mut(&ctx.seat).and_then(VecDeque::pop_front) {
            Some(decision) => Some(decision),
            None if self.wait_when_empty => None,
            None => Some(BetDecision::Call),
        }
    }

    fn choose_discards(&mut self, seat: usize, _hand: &Hand) -> Vec<usize> {
        self.discards.get_mut(&seat).and_then(VecDeque::pop_front).unwrap_or_default()
    }
}
