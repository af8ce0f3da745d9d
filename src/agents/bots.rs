use crate::cards::Card;
use crate::evaluator::{evaluate, Category};
use crate::hand::Hand;
use std::collections::HashMap;

use super::{BetContext, BetDecision, InputSource};

/// Scores below this never put chips in voluntarily.
const BET_FLOOR: u8 = 18;
const MEDIUM_FLOOR: u8 = 39;
const STRONG_FLOOR: u8 = 71;

const SMALL_WAGER: u64 = 25;
const MEDIUM_WAGER: u64 = 50;
const LARGE_WAGER: u64 = 100;

/// Deterministic computer player. Decisions depend only on hand strength,
/// chips and the bet to match, so replays with the same deal are identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BotPolicy;

impl BotPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Total bet the bot wants to have in for this betting round.
    ///
    /// ```
    /// use draw_poker::agents::BotPolicy;
    ///
    /// assert_eq!(BotPolicy::target_wager(10, 1000), 0);
    /// assert_eq!(BotPolicy::target_wager(30, 1000), 25);
    /// assert_eq!(BotPolicy::target_wager(55, 1000), 50);
    /// assert_eq!(BotPolicy::target_wager(90, 1000), 100);
    /// assert_eq!(BotPolicy::target_wager(90, 60), 60);
    /// ```
    pub fn target_wager(score: u8, chips: u64) -> u64 {
        let wager = match score {
            s if s >= STRONG_FLOOR => LARGE_WAGER,
            s if s >= MEDIUM_FLOOR => MEDIUM_WAGER,
            s if s >= BET_FLOOR => SMALL_WAGER,
            _ => 0,
        };
        wager.min(chips)
    }

    pub fn decide_bet(&self, ctx: &BetContext) -> BetDecision {
        let target = Self::target_wager(ctx.score, ctx.chips + ctx.current_bet);
        if target > ctx.high_bet {
            return BetDecision::Raise(target - ctx.high_bet);
        }
        if ctx.score < BET_FLOOR && ctx.to_call() > ctx.chips / 4 {
            return BetDecision::Fold;
        }
        BetDecision::Call
    }

    /// Keep cards that make the hand, throw the rest.
    ///
    /// Straights and better keep their five cards. Otherwise every card whose
    /// rank is paired or better is kept; with nothing paired, only the highest
    /// card stays.
    pub fn choose_discards(&self, hand: &Hand) -> Vec<usize> {
        let Ok(cards) = hand.cards() else {
            return Vec::new();
        };
        let eval = evaluate(&cards);

        let keep: Vec<bool> = if eval.category >= Category::Straight {
            cards.iter().map(|c| eval.best.contains(c)).collect()
        } else {
            let mut counts: HashMap<_, usize> = HashMap::new();
            for c in &cards {
                *counts.entry(c.rank()).or_default() += 1;
            }
            let grouped: Vec<bool> = cards.iter().map(|c| counts[&c.rank()] >= 2).collect();
            if grouped.iter().any(|&k| k) {
                grouped
            } else {
                let high = highest(&cards);
                cards.iter().map(|c| Some(*c) == high).collect()
            }
        };

        keep.iter().enumerate().filter(|(_, k)| !**k).map(|(i, _)| i).collect()
    }
}

fn highest(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().max_by_key(|c| c.rank())
}

impl InputSource for BotPolicy {
    fn decide_bet(&mut self, ctx: &BetContext) -> Option<BetDecision> {
        Some(BotPolicy::decide_bet(self, ctx))
    }

    fn choose_discards(&mut self, _seat: usize, hand: &Hand) -> Vec<usize> {
        BotPolicy::choose_discards(self, hand)
    }
}
