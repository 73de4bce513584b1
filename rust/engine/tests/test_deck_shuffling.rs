use std::collections::HashSet;

use shoggoth_engine::deck::{session_rng, Deck};
use shoggoth_engine::errors::GameError;

#[test]
fn shuffled_deck_holds_each_card_once() {
    let deck = Deck::shuffled(&mut session_rng(Some(9)));
    let unique: HashSet<_> = deck.cards().iter().collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn dealing_consumes_from_the_front() {
    let mut deck = Deck::shuffled(&mut session_rng(Some(1)));
    let top: Vec<_> = deck.cards()[..5].to_vec();
    assert_eq!(deck.deal(5).unwrap(), top);
    assert_eq!(deck.remaining(), 47);
}

#[test]
fn overdraw_fails_without_consuming() {
    let mut deck = Deck::shuffled(&mut session_rng(Some(1)));
    deck.deal(50).unwrap();
    assert_eq!(deck.deal(3).unwrap_err(), GameError::DeckExhausted);
    assert_eq!(deck.remaining(), 2);
    assert_eq!(deck.deal(2).unwrap().len(), 2);
    assert_eq!(deck.deal(1).unwrap_err(), GameError::DeckExhausted);
}

#[test]
fn deck_serializes_as_plain_card_list() {
    let mut deck = Deck::shuffled(&mut session_rng(Some(4)));
    deck.deal(45).unwrap();
    let json = serde_json::to_string(&deck).unwrap();
    assert!(json.starts_with('['));
    let back: Deck = serde_json::from_str(&json).unwrap();
    assert_eq!(back, deck);
}
