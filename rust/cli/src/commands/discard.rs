//! Shows the exchange the AI would make for a given hand.

use std::io::Write;

use shoggoth_ai::discard::choose_discard;
use shoggoth_engine::deck::session_rng;

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_cards, format_hand};
use crate::validation::parse_hand_args;

pub fn handle_discard_command(
    cards: &[String],
    seed: Option<u64>,
    simulations: Option<u32>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hand = parse_hand_args(cards).map_err(CliError::InvalidInput)?;
    let simulations = simulations.unwrap_or(config.simulations);
    if simulations == 0 {
        return Err(CliError::InvalidInput("simulations must be >= 1".to_string()));
    }
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let mut rng = session_rng(Some(seed));

    let indices = choose_discard(&hand, simulations, &mut rng);
    let kept: Vec<_> = hand
        .iter()
        .enumerate()
        .filter(|(i, _)| !indices.contains(i))
        .map(|(_, c)| *c)
        .collect();

    writeln!(out, "discard: seed={} simulations={}", seed, simulations)?;
    writeln!(out, "Hand: {}", format_hand(&hand))?;
    if indices.is_empty() {
        writeln!(out, "Discard: none")?;
    } else {
        let list: Vec<String> = indices.iter().map(usize::to_string).collect();
        writeln!(out, "Discard: {}", list.join(" "))?;
    }
    writeln!(out, "Keep: {}", format_cards(&kept))?;
    Ok(())
}
