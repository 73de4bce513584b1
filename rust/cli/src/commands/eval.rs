//! Hand evaluation command.

use std::io::Write;

use shoggoth_ai::score::score;
use shoggoth_engine::hand::evaluate_cards;

use crate::error::CliError;
use crate::formatters::format_cards;
use crate::validation::parse_hand_args;

/// Prints the category and the flattened score of five cards.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let hand = parse_hand_args(cards).map_err(CliError::InvalidInput)?;
    let value = evaluate_cards(&hand)?;
    writeln!(out, "Hand: {}", format_cards(&hand))?;
    writeln!(out, "Category: {}", value.category)?;
    writeln!(out, "Score: {:.4}", score(&value))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn royal_flush_reports_top_category() {
        let mut out = Vec::new();
        handle_eval_command(&args("As Ks Qs Js 10s"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Category: Royal Flush"));
        assert!(text.contains("Score: 9140000.0000"));
    }

    #[test]
    fn four_cards_are_rejected() {
        let mut out = Vec::new();
        let result = handle_eval_command(&args("As Ks Qs Js"), &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
    }
}
