//! Card, hand, and action formatters for terminal display.
//!
//! Suits render as ♠ ♥ ♦ ♣ where the terminal supports Unicode and fall back
//! to the letters s h d c elsewhere.
//!
//! ```rust
//! use shoggoth_engine::cards::{Card, Rank, Suit};
//! use shoggoth_cli::formatters::{format_card, format_hand};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_hand(&[ace_spades]).starts_with("[0] A"));
//! ```

use shoggoth_engine::cards::{Card, Suit};
use shoggoth_engine::game::Winner;
use shoggoth_engine::player::Seat;
use shoggoth_engine::rules::ValidatedAction;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). Elsewhere Unicode is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        suit.letter().to_string()
    }
}

/// String like "10♥" (Unicode) or "10h" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.short(), format_suit(card.suit))
}

/// Cards prefixed with the position used by the discard prompt:
/// `[0] A♠  [1] K♥ ...`.
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| format!("[{}] {}", i, format_card(c)))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Cards only, space separated, for hands that are not being acted on.
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// An action as it was actually applied, including what it cost.
pub fn format_action(action: &ValidatedAction) -> String {
    match action {
        ValidatedAction::Fold => "fold".to_string(),
        ValidatedAction::Check => "check".to_string(),
        ValidatedAction::Call(n) => format!("call {}", n),
        ValidatedAction::Bet(n) => format!("bet {}", n),
        ValidatedAction::Raise { amount, cost } => format!("raise {} (pays {})", amount, cost),
    }
}

pub fn format_winner(winner: Winner, names: [&str; 2]) -> String {
    match winner {
        Winner::Human => format!("{} wins", names[Seat::Human.index()]),
        Winner::Opponent => format!("{} wins", names[Seat::Opponent.index()]),
        Winner::Tie => "Split pot".to_string(),
    }
}
