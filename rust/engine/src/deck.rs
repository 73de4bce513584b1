use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// The cards not yet dealt this round, consumed from the front.
///
/// Only the remaining cards are stored so the deck round-trips through JSON
/// without any hidden cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A fresh 52-card deck in a uniformly random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Deck with a caller-chosen order; the first element is dealt first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// All cards except `exclusions`, in canonical order.
    pub fn without(exclusions: &[Card]) -> Self {
        let cards = full_deck()
            .into_iter()
            .filter(|c| !exclusions.contains(c))
            .collect();
        Self { cards }
    }

    /// Removes `count` cards from the front. Fails without consuming anything
    /// when fewer remain.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, GameError> {
        if self.cards.len() < count {
            return Err(GameError::DeckExhausted);
        }
        Ok(self.cards.drain(..count).collect())
    }

    /// Replaces `hand[i]` for each index, in the given order, with the next card.
    pub fn replace(&mut self, hand: &mut [Card], indices: &[usize]) -> Result<(), GameError> {
        if indices.len() > self.cards.len() {
            return Err(GameError::DeckExhausted);
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= hand.len()) {
            return Err(GameError::InvalidDiscardIndex { index });
        }
        for &i in indices {
            hand[i] = self.cards.remove(0);
        }
        Ok(())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

/// Session RNG: reproducible when a seed is given, OS-seeded otherwise.
pub fn session_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn replace_takes_from_front_in_index_order() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        let b = Card::new(Rank::King, Suit::Spades);
        let mut deck = Deck::from_cards(vec![a, b]);
        let mut hand = vec![Card::new(Rank::Two, Suit::Clubs); 5];
        deck.replace(&mut hand, &[3, 1]).unwrap();
        assert_eq!(hand[3], a);
        assert_eq!(hand[1], b);
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn replace_rejects_out_of_range_without_consuming() {
        let mut deck = Deck::from_cards(vec![Card::new(Rank::Ace, Suit::Spades)]);
        let mut hand = vec![Card::new(Rank::Two, Suit::Clubs); 5];
        let err = deck.replace(&mut hand, &[5]).unwrap_err();
        assert_eq!(err, GameError::InvalidDiscardIndex { index: 5 });
        assert_eq!(deck.remaining(), 1);
    }

    #[test]
    fn same_seed_same_order() {
        let a = Deck::shuffled(&mut session_rng(Some(42)));
        let b = Deck::shuffled(&mut session_rng(Some(42)));
        let c = Deck::shuffled(&mut session_rng(Some(43)));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.remaining(), 52);
    }

    #[test]
    fn without_excludes_held_cards() {
        let held = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Two, Suit::Hearts),
        ];
        let deck = Deck::without(&held);
        assert_eq!(deck.remaining(), 50);
        assert!(held.iter().all(|c| !deck.cards().contains(c)));
    }
}
