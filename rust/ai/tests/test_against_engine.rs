use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use shoggoth_ai::{create_ai, AiConfig, AiConfigError, ShoggothAi};
use shoggoth_engine::game::{AnteOutcome, GameState, Phase};
use shoggoth_engine::player::{PlayerAction, Seat};

#[test]
fn plays_full_rounds_through_the_engine() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let config = AiConfig {
        discard_simulations: 20,
        ..AiConfig::default()
    };
    let ai = ShoggothAi::new("The Ancient One", config).unwrap();
    let mut game = GameState::new(&mut rng);

    for _ in 0..10 {
        if game.phase() == Phase::GameOver {
            break;
        }
        if game.phase() != Phase::Ante {
            game.new_round(&mut rng).unwrap();
        }
        if game.collect_ante(10).unwrap() == AnteOutcome::GameOver {
            break;
        }
        assert_eq!(game.hand(Seat::Human).len(), 5);
        assert_eq!(game.hand(Seat::Opponent).len(), 5);
        assert_eq!(game.pot(), 20);

        let mut steps = 0;
        while !matches!(game.phase(), Phase::Complete | Phase::GameOver) {
            steps += 1;
            assert!(steps < 50, "round did not terminate");
            match game.phase() {
                Phase::Discard => game.perform_discard(&[], &ai, &mut rng).unwrap(),
                _ if game.turn() == Seat::Opponent => {
                    game.opponent_turn(&ai, &mut rng).unwrap();
                }
                _ => {
                    let owed = game.to_call(Seat::Human);
                    let action = if owed == 0 {
                        PlayerAction::Check
                    } else if owed <= game.player(Seat::Human).sanity {
                        PlayerAction::Call
                    } else {
                        PlayerAction::Fold
                    };
                    game.player_action(action).unwrap();
                }
            }
        }
        assert_eq!(game.pot(), 0);
        assert!(game.winner().is_some());
    }
}

#[test]
fn factory_applies_presets_and_rejects_unknown_kinds() {
    let base = AiConfig::default();
    assert!(create_ai("shoggoth", &base).is_ok());
    assert!(create_ai("normal", &base).is_ok());
    assert!(matches!(
        create_ai("hastur", &base),
        Err(AiConfigError::UnknownKind(_))
    ));
    let broken = AiConfig {
        discard_simulations: 0,
        ..base
    };
    assert!(matches!(
        create_ai("brave", &broken),
        Err(AiConfigError::NoSimulations)
    ));
}
