//! Input parsing and validation for the interactive session and the
//! card-taking commands.
//!
//! What a line means depends on the phase the table is in: `0 2` is a discard
//! during the exchange and a guess during ESP.

use std::collections::HashSet;

use shoggoth_engine::cards::{Card, parse_cards};
use shoggoth_engine::game::Phase;
use shoggoth_engine::player::PlayerAction;

/// Outcome of parsing one line of user input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Betting action for the human seat
    Action(PlayerAction),
    /// Positions to exchange; empty keeps the hand
    Discard(Vec<usize>),
    /// ESP guess: top row position, bottom row position
    Guess(usize, usize),
    StartEsp,
    ExitEsp,
    /// Continue with the next round
    Next,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parses `input` for a table in `phase`.
///
/// ```rust
/// # use shoggoth_cli::validation::{parse_command, ParseResult};
/// use shoggoth_engine::game::Phase;
/// use shoggoth_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_command("bet 20", Phase::PreDrawBetting),
///     ParseResult::Action(PlayerAction::Bet(20))
/// );
/// assert_eq!(parse_command("d 0 4", Phase::Discard), ParseResult::Discard(vec![0, 4]));
/// assert_eq!(parse_command("1 3", Phase::Esp), ParseResult::Guess(1, 3));
/// assert_eq!(parse_command("q", Phase::Complete), ParseResult::Quit);
/// ```
pub fn parse_command(input: &str, phase: Phase) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.first().is_some_and(|p| *p == "q" || *p == "quit") {
        return ParseResult::Quit;
    }

    match phase {
        Phase::PreDrawBetting | Phase::PostDrawBetting => parse_player_action(&parts),
        Phase::Discard => parse_discard(&parts),
        Phase::Esp => parse_esp(&parts),
        Phase::Ante | Phase::Complete | Phase::GameOver | Phase::Showdown => {
            match parts.as_slice() {
                [] | ["n"] | ["next"] => ParseResult::Next,
                ["esp"] | ["e"] => ParseResult::StartEsp,
                _ => ParseResult::Invalid(format!(
                    "Unrecognized command '{}'. Press Enter for the next round, 'esp' to test your mind, or q",
                    input
                )),
            }
        }
    }
}

fn parse_player_action(parts: &[&str]) -> ParseResult {
    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };
    match verb {
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "c" => ParseResult::Action(PlayerAction::Check),
        "call" => ParseResult::Action(PlayerAction::Call),
        "bet" | "raise" => {
            let Some(raw) = parts.get(1) else {
                return ParseResult::Invalid(format!(
                    "{} requires an amount (e.g., '{} 20')",
                    capitalize(verb),
                    verb
                ));
            };
            match raw.parse::<u32>() {
                Ok(0) => ParseResult::Invalid(format!("{} amount must be positive", capitalize(verb))),
                Ok(amount) => match PlayerAction::from_parts(verb, amount) {
                    Some(action) => ParseResult::Action(action),
                    None => ParseResult::Invalid(format!("Unrecognized action '{}'", verb)),
                },
                Err(_) => ParseResult::Invalid(format!("Invalid {} amount", verb)),
            }
        }
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, bet <amount>, raise <amount>, q",
            other
        )),
    }
}

fn parse_discard(parts: &[&str]) -> ParseResult {
    let rest = match parts {
        [] => return ParseResult::Invalid("Empty input".to_string()),
        ["fold"] | ["f"] => return ParseResult::Action(PlayerAction::Fold),
        ["keep"] | ["k"] => return ParseResult::Discard(Vec::new()),
        [first, rest @ ..] if *first == "d" || *first == "discard" => rest,
        all => all,
    };
    match parse_positions(rest) {
        Ok(indices) => ParseResult::Discard(indices),
        Err(msg) => ParseResult::Invalid(msg),
    }
}

fn parse_esp(parts: &[&str]) -> ParseResult {
    let rest = match parts {
        [] => return ParseResult::Invalid("Empty input".to_string()),
        ["x"] | ["exit"] => return ParseResult::ExitEsp,
        [first, rest @ ..] if *first == "g" || *first == "guess" => rest,
        all => all,
    };
    match parse_positions(rest).as_deref() {
        Ok([i, j]) => ParseResult::Guess(*i, *j),
        Ok(_) => ParseResult::Invalid(
            "A guess needs two positions: top row, then bottom row (e.g., 'g 0 3')".to_string(),
        ),
        Err(msg) => ParseResult::Invalid(msg.clone()),
    }
}

fn parse_positions(parts: &[&str]) -> Result<Vec<usize>, String> {
    parts
        .iter()
        .map(|p| {
            p.parse::<usize>()
                .map_err(|_| format!("Invalid card position '{}'", p))
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Parses command-line card arguments into exactly five distinct cards.
///
/// Arguments may hold one card each or several separated by spaces or commas.
pub fn parse_hand_args(args: &[String]) -> Result<Vec<Card>, String> {
    let cards = parse_cards(&args.join(" ")).map_err(|e| e.to_string())?;
    if cards.len() != 5 {
        return Err(format!("Expected 5 cards, got {}", cards.len()));
    }
    let mut seen = HashSet::new();
    for card in &cards {
        if !seen.insert(*card) {
            return Err(format!("Duplicate card: {}", card));
        }
    }
    Ok(cards)
}
