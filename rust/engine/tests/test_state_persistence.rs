mod common;

use common::{staged, Always};
use shoggoth_engine::deck::session_rng;
use shoggoth_engine::game::{GameState, Phase};
use shoggoth_engine::player::{PlayerAction as A, Seat};

#[test]
fn mid_round_state_resumes_identically() {
    let mut rng = session_rng(Some(3));
    let ai = Always::new(A::Call);
    let mut game = GameState::new(&mut rng);
    game.collect_ante(10).unwrap();
    game.player_action(A::Bet(15)).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let mut resumed: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(resumed, game);

    let mut rng_a = session_rng(Some(9));
    let mut rng_b = session_rng(Some(9));
    game.opponent_turn(&ai, &mut rng_a).unwrap();
    resumed.opponent_turn(&ai, &mut rng_b).unwrap();
    game.perform_discard(&[0, 1], &ai, &mut rng_a).unwrap();
    resumed.perform_discard(&[0, 1], &ai, &mut rng_b).unwrap();
    assert_eq!(resumed, game);
    assert_eq!(game.phase(), Phase::PostDrawBetting);
}

#[test]
fn wire_format_uses_canonical_names() {
    let mut game = GameState::new(&mut session_rng(Some(3)));
    game.set_deck(staged("2s 3d 4c 5h 7s", "Ks Kd 4h 5c 7d", ""));
    game.collect_ante(10).unwrap();
    game.player_action(A::Bet(20)).unwrap();

    let value = serde_json::to_value(&game).unwrap();
    assert_eq!(value["phase"], "bet_pre");
    assert_eq!(value["turn"], "opponent");
    assert_eq!(value["pot"], 40);
    assert_eq!(value["current_bet"], 20);
    assert_eq!(value["players"][0]["name"], "You");
    assert_eq!(value["round_states"][0]["hand"][0]["rank"], "2");
    assert_eq!(value["round_states"][0]["hand"][0]["suit"], "spades");
    assert_eq!(value["history"]["actions"][0]["action"]["action"], "bet");
    assert!(value.get("esp").is_none());
}

#[test]
fn legacy_phase_and_seat_spellings_load() {
    let game = GameState::new(&mut session_rng(Some(3)));
    let mut value = serde_json::to_value(&game).unwrap();
    value["phase"] = "deal".into();
    value["turn"] = "player".into();
    let loaded: GameState = serde_json::from_value(value).unwrap();
    assert_eq!(loaded.phase(), Phase::Ante);
    assert_eq!(loaded.turn(), Seat::Human);

    let reserialized = serde_json::to_value(&loaded).unwrap();
    assert_eq!(reserialized["phase"], "ante");
    assert_eq!(reserialized["turn"], "human");
}

#[test]
fn unknown_phase_is_a_load_error() {
    let game = GameState::new(&mut session_rng(Some(3)));
    let mut value = serde_json::to_value(&game).unwrap();
    value["phase"] = "flop".into();
    let err = serde_json::from_value::<GameState>(value).unwrap_err();
    assert!(err.to_string().contains("Unknown game phase: flop"));
}

#[test]
fn optional_fields_default_when_missing() {
    let game = GameState::new(&mut session_rng(Some(3)));
    let mut value = serde_json::to_value(&game).unwrap();
    let object = value.as_object_mut().unwrap();
    object.remove("history");
    object.remove("starting_sanity");
    object.remove("reveal_on_fold");
    let loaded: GameState = serde_json::from_value(value).unwrap();
    assert_eq!(loaded.starting_sanity(), 100);
    assert!(loaded.reveal_on_fold());
}
