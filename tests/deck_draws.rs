use draw_poker::cards::CardCode;
use draw_poker::deck::{Deck, DeckError};
use draw_poker::hand::{Hand, HandError};
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn fifty_two_draws_then_empty() {
    let mut deck = Deck::shuffled();
    let mut seen = HashSet::new();
    for _ in 0..52 {
        let code = deck.draw().unwrap();
        assert!(!code.is_empty());
        assert!(seen.insert(code));
    }
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckError::Empty));
    assert!(deck.slots().iter().all(|c| c.is_empty()));
}

#[test]
fn seeded_decks_replay() {
    let a = Deck::seeded(42).draw_n(10).unwrap();
    let b = Deck::seeded(42).draw_n(10).unwrap();
    assert_eq!(a, b);
}

#[test]
fn dealing_past_the_deck_fails() {
    let mut deck = Deck::seeded(5);
    deck.draw_n(50).unwrap();
    assert!(matches!(Hand::deal(&mut deck, 5), Err(HandError::Deck(DeckError::Empty))));
}

#[test]
fn codes_cover_every_card_once() {
    let all: HashSet<CardCode> = CardCode::all().collect();
    assert_eq!(all.len(), 52);
    assert!(!all.contains(&CardCode::EMPTY));
}

proptest! {
    #[test]
    fn any_seed_draws_distinct_cards(seed in any::<u64>(), n in 0usize..=52) {
        let mut deck = Deck::seeded(seed);
        let drawn = deck.draw_n(n).unwrap();
        let unique: HashSet<_> = drawn.iter().collect();
        prop_assert_eq!(unique.len(), n);
        prop_assert_eq!(deck.len(), 52 - n);
        for code in &drawn {
            prop_assert!(!deck.slots().contains(code));
        }
    }
}
