use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Default sanity each player starts a session with.
pub const STARTING_SANITY: u32 = 100;

/// One of the two seats at the table. The human always sits at index 0 and
/// opens every betting round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    #[serde(alias = "player")]
    Human,
    Opponent,
}

impl Seat {
    pub fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Opponent => 1,
        }
    }

    pub fn other(self) -> Seat {
        match self {
            Seat::Human => Seat::Opponent,
            Seat::Opponent => Seat::Human,
        }
    }
}

/// A betting action as declared by a player, before validation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "amount", rename_all = "snake_case")]
pub enum PlayerAction {
    Fold,
    Check,
    Call,
    /// Open the betting by the given amount
    Bet(u32),
    /// Add the given amount on top of what is owed
    Raise(u32),
}

impl PlayerAction {
    /// Builds an action from its wire verb and amount (`"bet"`, 20).
    pub fn from_parts(verb: &str, amount: u32) -> Option<Self> {
        match verb.trim().to_ascii_lowercase().as_str() {
            "fold" => Some(PlayerAction::Fold),
            "check" => Some(PlayerAction::Check),
            "call" => Some(PlayerAction::Call),
            "bet" => Some(PlayerAction::Bet(amount)),
            "raise" => Some(PlayerAction::Raise(amount)),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Fold => f.write_str("fold"),
            PlayerAction::Check => f.write_str("check"),
            PlayerAction::Call => f.write_str("call"),
            PlayerAction::Bet(n) => write!(f, "bet {}", n),
            PlayerAction::Raise(n) => write!(f, "raise {}", n),
        }
    }
}

/// Long-lived identity of a seat; sanity carries over between rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub is_ai: bool,
    pub sanity: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, is_ai: bool, sanity: u32) -> Self {
        Self {
            name: name.into(),
            is_ai,
            sanity,
        }
    }

    pub fn add_sanity(&mut self, amount: u32) {
        self.sanity = self.sanity.saturating_add(amount);
    }

    /// Removes `amount` if the player can cover it.
    pub fn pay(&mut self, amount: u32) -> Result<(), u32> {
        if amount > self.sanity {
            return Err(self.sanity);
        }
        self.sanity -= amount;
        Ok(())
    }
}

/// Per-round state of one seat, reset every round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub hand: Vec<Card>,
    /// Contribution during the current betting round.
    pub bet: u32,
    pub folded: bool,
    pub discarded: bool,
}

impl RoundState {
    pub fn reset(&mut self) {
        *self = RoundState::default();
    }
}
