use shoggoth_engine::cards::{parse_cards, Card};
use shoggoth_engine::deck::{session_rng, Deck};
use shoggoth_engine::errors::GameError;
use shoggoth_engine::hand::{compare_hands, evaluate_cards, evaluate_hand, Category, Showdown};

fn hand(text: &str) -> [Card; 5] {
    parse_cards(text)
        .expect("cards")
        .try_into()
        .expect("five cards")
}

fn cmp(a: &str, b: &str) -> Showdown {
    compare_hands(&hand(a), &hand(b)).expect("well-formed")
}

#[test]
fn every_category_is_detected() {
    let cases = [
        ("Ah Kh Qh Jh 10h", Category::RoyalFlush),
        ("9c 8c 7c 6c 5c", Category::StraightFlush),
        ("7s 7h 7d 7c Kd", Category::FourOfAKind),
        ("3s 3h 3d Kc Kd", Category::FullHouse),
        ("2d 9d Jd 4d Kd", Category::Flush),
        ("9s 10h Jd Qc Kd", Category::Straight),
        ("Qs Qh Qd 2c 9d", Category::ThreeOfAKind),
        ("4s 4h 9d 9c Ad", Category::TwoPair),
        ("Js Jh 2d 8c 5d", Category::OnePair),
        ("2s 7h 9d Jc Kd", Category::HighCard),
    ];
    for (text, category) in cases {
        assert_eq!(evaluate_hand(&hand(text)).category, category, "{}", text);
    }
}

#[test]
fn wheel_is_the_lowest_straight() {
    let wheel = evaluate_hand(&hand("As 2d 3c 4h 5s"));
    assert_eq!(wheel.category, Category::Straight);
    assert_eq!(wheel.primary, 5);
    assert_eq!(cmp("2s 3d 4c 5h 6s", "As 2d 3c 4h 5s"), Showdown::Hand1Wins);
}

#[test]
fn category_beats_any_rank() {
    // lowest two pair against the highest one pair
    assert_eq!(cmp("2s 2d 3c 3h 4s", "As Ad Kc Qh Js"), Showdown::Hand1Wins);
    assert_eq!(cmp("2h 3h 4h 5h 7h", "As Ad Ac Kh Ks"), Showdown::Hand2Wins);
}

#[test]
fn tie_breakers_follow_groups_then_kickers() {
    assert_eq!(cmp("Ks Kd Kc 2h 2s", "Qs Qd Qc Ah As"), Showdown::Hand1Wins);
    assert_eq!(cmp("9s 9d 5c 5h 2s", "9h 9c 5s 5d 3s"), Showdown::Hand2Wins);
    assert_eq!(cmp("Js Jd Ac 8h 3s", "Jh Jc Ad 8s 2s"), Showdown::Hand1Wins);
    assert_eq!(cmp("As Kd Qc Jh 9s", "Ad Kh Qs Jc 9d"), Showdown::Tie);
}

#[test]
fn suits_never_break_ties() {
    assert_eq!(cmp("2h 5h 8h Jh Kh", "2s 5s 8s Js Ks"), Showdown::Tie);
}

#[test]
fn evaluation_is_order_independent() {
    let a = evaluate_hand(&hand("Qs 4h Qd 4c 9s"));
    let b = evaluate_hand(&hand("9s 4c Qd 4h Qs"));
    assert_eq!(a, b);
}

/// One or two hands per category, weakest first.
const LADDER: [&str; 16] = [
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

#[test]
fn ladder_is_strictly_increasing() {
    for pair in LADDER.windows(2) {
        assert_eq!(cmp(pair[1], pair[0]), Showdown::Hand1Wins, "{} vs {}", pair[1], pair[0]);
    }
}

#[test]
fn comparison_is_antisymmetric_and_transitive() {
    let mut hands: Vec<[Card; 5]> = LADDER.iter().map(|text| hand(text)).collect();
    for seed in 0..4 {
        let mut deck = Deck::shuffled(&mut session_rng(Some(seed)));
        for _ in 0..10 {
            hands.push(deck.deal(5).unwrap().try_into().unwrap());
        }
    }
    for a in &hands {
        for b in &hands {
            let ab = compare_hands(a, b).unwrap();
            let ba = compare_hands(b, a).unwrap();
            let expected = match ab {
                Showdown::Hand1Wins => Showdown::Hand2Wins,
                Showdown::Hand2Wins => Showdown::Hand1Wins,
                Showdown::Tie => Showdown::Tie,
            };
            assert_eq!(ba, expected);
            for c in &hands {
                if ab == Showdown::Hand1Wins && compare_hands(b, c).unwrap() == Showdown::Hand1Wins {
                    assert_eq!(compare_hands(a, c).unwrap(), Showdown::Hand1Wins);
                }
            }
        }
    }
}

#[test]
fn wrong_sized_hands_are_rejected() {
    let six = parse_cards("As Ks Qs Js 10s 9s").unwrap();
    assert_eq!(
        evaluate_cards(&six).unwrap_err(),
        GameError::MalformedHand { len: 6 }
    );
    let five = parse_cards("As Ks Qs Js 10s").unwrap();
    assert!(compare_hands(&five, &six).is_err());
}
