use thiserror::Error;

use crate::game::Phase;

/// Rejections reported by the engine.
///
/// Every variant leaves the game state untouched; the `Display` text is the
/// human-readable reason handed back to the player.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("It is not your turn.")]
    NotYourTurn,
    #[error("The opponent is not the one to act.")]
    NotOpponentTurn,
    #[error("That is not possible during the {actual} phase (expected {expected}).")]
    WrongPhase { expected: &'static str, actual: Phase },
    #[error("Cannot check when there is a bet to call.")]
    MustCall { owed: u32 },
    #[error("Nothing to call, please Check.")]
    NothingToCall,
    #[error("Bet amount must be positive.")]
    NonPositiveAmount,
    #[error("Not enough sanity. You need {needed} but have {available}.")]
    InsufficientSanity { needed: u32, available: u32 },
    #[error("Ante must be positive.")]
    InvalidAnte,
    #[error("Invalid discard index {index}; choose positions 0-4.")]
    InvalidDiscardIndex { index: usize },
    #[error("Discard index {index} was given twice.")]
    DuplicateDiscardIndex { index: usize },
    #[error("A hand must have exactly 5 cards, got {len}.")]
    MalformedHand { len: usize },
    #[error("The deck ran out of cards.")]
    DeckExhausted,
    #[error("Invalid card '{0}'.")]
    InvalidCard(String),
    #[error("Unknown game phase: {0}")]
    UnknownPhase(String),
    #[error("The game is over.")]
    GameOver,
    #[error("The spirits are occupied. Complete your current hand first.")]
    EspUnavailable,
    #[error("Invalid card selection")]
    InvalidEspSelection,
}
