//! Discard selection: try every keep/discard split of the hand and estimate
//! each one by drawing replacements from the cards the AI cannot see.

use rand::seq::SliceRandom;
use rand::Rng;
use shoggoth_engine::cards::Card;
use shoggoth_engine::deck::Deck;
use shoggoth_engine::hand::evaluate_hand;

use crate::score::score;

const HAND_SIZE: usize = 5;

/// Picks the positions to exchange.
///
/// All 32 subsets are enumerated by bitmask (bit set = discard). Keeping all
/// five is scored exactly; every other subset is averaged over `simulations`
/// random draws from the 47 unseen cards. The best average wins; ties keep the
/// lowest mask, so an already strong hand stays pat.
///
/// # Arguments
///
/// * `hand` - The five cards held
/// * `simulations` - Trials per subset (at least 1)
/// * `rng` - Source for the simulated draws
///
/// # Returns
///
/// Discard positions in ascending order, possibly empty. A hand that is not
/// five cards long is never exchanged.
pub fn choose_discard<R: Rng + ?Sized>(hand: &[Card], simulations: u32, rng: &mut R) -> Vec<usize> {
    let Ok(held) = <&[Card; HAND_SIZE]>::try_from(hand) else {
        tracing::warn!(len = hand.len(), "refusing to choose discards for malformed hand");
        return Vec::new();
    };
    let trials = simulations.max(1);
    let mut unknown = Deck::without(hand).cards().to_vec();

    let mut best_mask = 0u32;
    let mut best_score = score(&evaluate_hand(held));

    for mask in 1..(1u32 << HAND_SIZE) {
        let kept: Vec<Card> = (0..HAND_SIZE)
            .filter(|&i| mask & (1 << i) == 0)
            .map(|i| held[i])
            .collect();
        let needed = HAND_SIZE - kept.len();
        if needed > unknown.len() {
            continue;
        }

        let mut total = 0.0;
        let mut trial_hand = [held[0]; HAND_SIZE];
        trial_hand[..kept.len()].copy_from_slice(&kept);
        for _ in 0..trials {
            let (drawn, _) = unknown.partial_shuffle(rng, needed);
            trial_hand[kept.len()..].copy_from_slice(drawn);
            total += score(&evaluate_hand(&trial_hand));
        }
        let average = total / f64::from(trials);

        if average > best_score {
            best_score = average;
            best_mask = mask;
        }
    }

    let discards: Vec<usize> = (0..HAND_SIZE).filter(|&i| best_mask & (1 << i) != 0).collect();
    tracing::debug!(?discards, expected = best_score, "discard chosen");
    discards
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use shoggoth_engine::cards::parse_cards;

    #[test]
    fn malformed_hand_keeps_everything() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let four = parse_cards("As Ks Qs Js").unwrap();
        assert!(choose_discard(&four, 10, &mut rng).is_empty());
    }

    #[test]
    fn indices_are_sorted_and_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let hand = parse_cards("2s 7d 9c Jh 4s").unwrap();
        let picked = choose_discard(&hand, 20, &mut rng);
        assert!(picked.windows(2).all(|w| w[0] < w[1]));
        assert!(picked.iter().all(|&i| i < 5));
    }
}
