//! Betting decisions from a category-based win estimate and pot odds.

use rand::Rng;
use shoggoth_engine::hand::{Category, HandValue};
use shoggoth_engine::opponent::TableView;
use shoggoth_engine::player::PlayerAction;

use crate::config::AiConfig;

const WIN_CAP: f64 = 0.99;
const VALUE_BET_THRESHOLD: f64 = 0.6;
const RAISE_THRESHOLD: f64 = 0.8;
const CALL_MARGIN: f64 = 0.1;
const BLUFF_BET_RATE: f64 = 0.1;
const RAISE_RATE: f64 = 0.7;
const BLUFF_CALL_RATE: f64 = 0.05;

/// Rough chance that `value` holds up at showdown, scaled by `courage` and
/// capped at 0.99.
pub fn win_probability(value: &HandValue, courage: f64) -> f64 {
    let base = match value.category {
        Category::HighCard => {
            if value.kickers.first().is_some_and(|&k| k > 10) {
                0.2
            } else {
                0.1
            }
        }
        Category::OnePair => {
            if value.primary > 10 {
                0.55
            } else {
                0.4
            }
        }
        Category::TwoPair => 0.7,
        Category::ThreeOfAKind => 0.85,
        _ => 0.95,
    };
    (base * courage).min(WIN_CAP)
}

/// Pot odds of a call: the share of the final pot the caller puts in.
pub fn pot_odds(to_call: u32, pot: u32) -> f64 {
    let to_call = f64::from(to_call);
    to_call / (f64::from(pot) + to_call)
}

/// Chooses a betting action.
///
/// With nothing owed: value bet above 0.6, otherwise bluff at `0.1 * courage`,
/// otherwise check. Facing a bet: continue when the estimate beats pot odds by
/// 0.1, raising above 0.8 with probability `0.7 * courage`; otherwise fold
/// unless a `0.05 * courage` bluff call fires. Each random draw is fresh.
pub fn decide<R: Rng + ?Sized>(
    value: &HandValue,
    table: &TableView,
    config: &AiConfig,
    rng: &mut R,
) -> PlayerAction {
    let win = win_probability(value, config.courage);
    let courage = config.courage;

    if table.to_call == 0 {
        if win > VALUE_BET_THRESHOLD {
            return PlayerAction::Bet(config.value_bet);
        }
        if rng.random::<f64>() < BLUFF_BET_RATE * courage {
            return PlayerAction::Bet(config.bluff_bet);
        }
        return PlayerAction::Check;
    }

    if win > pot_odds(table.to_call, table.pot) + CALL_MARGIN {
        if win > RAISE_THRESHOLD && rng.random::<f64>() < RAISE_RATE * courage {
            return PlayerAction::Raise(config.raise_amount);
        }
        return PlayerAction::Call;
    }

    if rng.random::<f64>() < BLUFF_CALL_RATE * courage {
        return PlayerAction::Call;
    }
    PlayerAction::Fold
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoggoth_engine::cards::parse_cards;
    use shoggoth_engine::hand::evaluate_cards;

    fn value(text: &str) -> HandValue {
        evaluate_cards(&parse_cards(text).unwrap()).unwrap()
    }

    #[test]
    fn estimates_follow_the_table() {
        assert_eq!(win_probability(&value("2s 4d 6c 8h 9s"), 1.0), 0.1);
        assert_eq!(win_probability(&value("2s 4d 6c 8h Qs"), 1.0), 0.2);
        assert_eq!(win_probability(&value("4s 4d 6c 8h Qs"), 1.0), 0.4);
        assert_eq!(win_probability(&value("Js Jd 6c 8h 2s"), 1.0), 0.55);
        assert_eq!(win_probability(&value("Js Jd 6c 6h 2s"), 1.0), 0.7);
        assert_eq!(win_probability(&value("Js Jd Jc 6h 2s"), 1.0), 0.85);
        assert_eq!(win_probability(&value("2h 4h 6h 8h Qh"), 1.0), 0.95);
    }

    #[test]
    fn courage_scales_and_caps() {
        let trips = value("Js Jd Jc 6h 2s");
        assert!((win_probability(&trips, 0.5) - 0.425).abs() < 1e-12);
        assert_eq!(win_probability(&trips, 1.2), 0.99);
        assert_eq!(win_probability(&trips, 0.0), 0.0);
    }

    #[test]
    fn pot_odds_is_share_of_final_pot() {
        assert!((pot_odds(20, 60) - 0.25).abs() < 1e-12);
    }
}
