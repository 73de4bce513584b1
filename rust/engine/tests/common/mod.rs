#![allow(dead_code)]

use rand::RngCore;
use shoggoth_engine::cards::{parse_cards, Card};
use shoggoth_engine::deck::Deck;
use shoggoth_engine::opponent::{Opponent, TableView};
use shoggoth_engine::player::PlayerAction;

pub fn cards(text: &str) -> Vec<Card> {
    parse_cards(text).expect("valid cards")
}

/// Deck that deals `human` then `ai`, then `draws`, then everything else.
pub fn staged(human: &str, ai: &str, draws: &str) -> Deck {
    let mut order = cards(human);
    order.extend(cards(ai));
    order.extend(cards(draws));
    order.extend_from_slice(Deck::without(&order).cards());
    Deck::from_cards(order)
}

/// Opponent that always declares the same action and discards fixed positions.
pub struct Always {
    pub action: PlayerAction,
    pub discard: Vec<usize>,
}

impl Always {
    pub fn new(action: PlayerAction) -> Self {
        Self {
            action,
            discard: Vec::new(),
        }
    }
}

impl Opponent for Always {
    fn decide_action(&self, _: &[Card], _: &TableView, _: &mut dyn RngCore) -> PlayerAction {
        self.action
    }

    fn choose_discard(&self, _: &[Card], _: &mut dyn RngCore) -> Vec<usize> {
        self.discard.clone()
    }

    fn name(&self) -> &str {
        "always"
    }
}
