use shoggoth_cli::run_with_input;
use shoggoth_engine::game::{GameState, Phase, Winner};
use shoggoth_engine::logger::RoundRecord;
use std::io::Cursor;
use tempfile::tempdir;

fn play(args: &[&str], input: &str) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut argv = vec!["shoggoth", "play"];
    argv.extend_from_slice(args);
    let code = run_with_input(argv, &mut stdin, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

/// Input that gets a passive player through any betting round and the
/// exchange: whichever line does not fit the prompt is rejected and the next
/// one is tried.
fn passive_input(lines: usize) -> String {
    "check\ncall\nkeep\n".repeat(lines)
}

#[test]
fn passive_round_reaches_showdown() {
    let (code, out, err) = play(&["--seed", "7"], &passive_input(10));
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Betting complete. Choose cards to discard."));
    assert!(out.contains("The Ancient One exchanges"));
    assert!(out.contains("Result: "));
    assert!(out.contains("Rounds played: 1"));
    assert!(err.contains("Error: "), "mismatched lines are reported");
}

#[test]
fn history_file_gets_one_record_per_round() {
    let dir = tempdir().unwrap();
    let history = dir.path().join("logs").join("rounds.jsonl");
    let history_arg = history.to_string_lossy().into_owned();

    let (code, _, err) = play(
        &["--seed", "3", "--history", &history_arg],
        &passive_input(10),
    );
    assert_eq!(code, 0, "stderr: {}", err);

    let text = std::fs::read_to_string(&history).unwrap();
    assert!(!text.contains('\r'));
    let records: Vec<RoundRecord> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert!(record.round_id.ends_with("-000001"));
    assert!(record.ts.is_some());
    assert_eq!(record.ante, 10);
    assert_eq!(record.hands[0].len(), 5);
    assert_eq!(record.hands[1].len(), 5);
    assert!(record.showdown.is_some());
    assert!(record.pot >= 20);
}

#[test]
fn folded_rounds_are_logged_without_showdown() {
    let dir = tempdir().unwrap();
    let history = dir.path().join("rounds.jsonl");
    let history_arg = history.to_string_lossy().into_owned();

    let (code, _, _) = play(
        &["--rounds", "2", "--seed", "1", "--history", &history_arg],
        "fold\n\nfold\n",
    );
    assert_eq!(code, 0);
    let text = std::fs::read_to_string(&history).unwrap();
    let records: Vec<RoundRecord> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.winner == Winner::Opponent));
    assert!(records.iter().all(|r| r.showdown.is_none() && r.pot == 20));
    assert_ne!(records[0].round_id, records[1].round_id);
}

#[test]
fn state_file_resumes_sanity() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("game.json");
    let state_arg = state.to_string_lossy().into_owned();

    let (code, out, _) = play(&["--seed", "42", "--state", &state_arg], "fold\n");
    assert_eq!(code, 0);
    assert!(out.contains("State saved to"));

    let saved: GameState = serde_json::from_str(&std::fs::read_to_string(&state).unwrap()).unwrap();
    assert_eq!(saved.phase(), Phase::Complete);
    assert_eq!(saved.players()[0].sanity, 90);

    let (code, out, err) = play(&["--seed", "43", "--state", &state_arg], "\nfold\n");
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Resumed from"));
    assert!(out.contains("Sanity: You 80 | The Ancient One 120 | Pot: 0"));
}

#[test]
fn state_saved_mid_hand_can_be_finished() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("game.json");
    let state_arg = state.to_string_lossy().into_owned();

    let (code, _, _) = play(&["--seed", "8", "--state", &state_arg], "q\n");
    assert_eq!(code, 0);
    let saved: GameState = serde_json::from_str(&std::fs::read_to_string(&state).unwrap()).unwrap();
    assert_eq!(saved.phase(), Phase::PreDrawBetting);
    assert_eq!(saved.pot(), 20);

    let (code, out, _) = play(&["--state", &state_arg], "fold\n");
    assert_eq!(code, 0);
    assert!(out.contains("You folded."));
    assert!(out.contains("Rounds played: 1"));
}

#[test]
fn corrupt_state_file_is_an_error() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("game.json");
    std::fs::write(&state, "{ not json").unwrap();
    let state_arg = state.to_string_lossy().into_owned();

    let (code, _, err) = play(&["--state", &state_arg], "");
    assert_eq!(code, 2);
    assert!(err.contains("cannot load state"));
}

#[test]
fn esp_can_be_opened_and_left_between_rounds() {
    let (code, out, err) = play(&["--seed", "5"], "fold\nesp\nx\n\n");
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Find the matching cards!"));
    assert!(out.contains("Top:    [0]"));
    assert!(out.contains("Bottom: [0]"));
    assert!(out.contains("You close your third eye."));
}

#[test]
fn esp_guess_out_of_range_is_rejected() {
    let (code, out, err) = play(&["--seed", "5"], "fold\nesp\ng 7 0\nx\n");
    assert_eq!(code, 0);
    assert!(err.contains("Error: "));
    assert!(out.contains("You close your third eye."));
}

#[test]
fn unaffordable_ante_ends_the_game() {
    let (code, out, _) = play(&["--ante", "150"], "\n");
    assert_eq!(code, 0);
    assert!(out.contains("You has insufficient sanity for ante. Game Over."));
    assert!(out.contains("Rounds played: 0"));
}

#[test]
fn betting_more_than_sanity_is_rejected() {
    let (code, _, err) = play(&["--seed", "9"], "bet 500\nfold\n");
    assert_eq!(code, 0);
    assert!(err.contains("Error: "));
}
