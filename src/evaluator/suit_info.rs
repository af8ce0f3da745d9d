use super::straight_info::RUN_LENGTH;
use crate::cards::{Card, Suit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    /// A flush is exactly five cards sharing one suit.
    pub fn detect(cards: &[Card]) -> Self {
        match cards.first() {
            Some(first)
                if cards.len() == RUN_LENGTH && cards.iter().all(|c| c.suit() == first.suit()) =>
            {
                SuitInfo { is_flush: true, flush_suit: Some(first.suit()) }
            }
            _ => SuitInfo { is_flush: false, flush_suit: None },
        }
    }
}
