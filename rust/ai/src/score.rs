use shoggoth_engine::hand::HandValue;

/// Flattens a hand value into a number that can be averaged across
/// simulations.
///
/// `category * 1e6 + primary * 1e4 + secondary * 1e2 + Σ kicker_i / 15^(i+1)`.
/// Ranks top out at 14, so each kicker term is smaller than any change in the
/// term before it and the ordering agrees with hand comparison.
pub fn score(value: &HandValue) -> f64 {
    let mut total = f64::from(value.category.ordinal()) * 1_000_000.0
        + f64::from(value.primary) * 10_000.0
        + f64::from(value.secondary) * 100.0;
    let mut divisor = 1.0;
    for &kicker in &value.kickers {
        divisor *= 15.0;
        total += f64::from(kicker) / divisor;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoggoth_engine::cards::parse_cards;
    use shoggoth_engine::hand::{compare_values, evaluate_cards, Showdown};

    fn value(text: &str) -> HandValue {
        evaluate_cards(&parse_cards(text).unwrap()).unwrap()
    }

    #[test]
    fn ordering_matches_hand_comparison() {
        let hands = [
            "2s 3d 4c 5h 7s",
            "2s 3d 4c 5h 8s",
            "As Kd Qc Jh 9s",
            "2s 2d 4c 5h 7s",
            "2s 2d 4c 5h 8s",
            "As Ad Kc Qh Js",
            "3s 3d 2c 2h 4s",
            "Ks Kd Ac Ah 2s",
            "7s 7d 7c 2h 3s",
            "As 2d 3c 4h 5s",
            "10s Jd Qc Kh As",
            "2h 3h 4h 5h 7h",
            "3s 3h 3d 2c 2d",
            "2s 2h 2d 2c 3d",
            "9c 8c 7c 6c 5c",
            "Ah Kh Qh Jh 10h",
        ];
        for a in hands {
            for b in hands {
                let (va, vb) = (value(a), value(b));
                let by_score = score(&va).partial_cmp(&score(&vb)).unwrap();
                assert_eq!(Showdown::from(by_score), compare_values(&va, &vb), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn kickers_never_outweigh_the_pair() {
        assert!(score(&value("3s 3d 2c 4h 5s")) > score(&value("2s 2d Ac Kh Qs")));
    }
}
