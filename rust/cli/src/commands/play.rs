//! # Play Command
//!
//! Interactive five-card draw against the computer seat, one line of stdin per
//! decision. The table is driven phase by phase:
//!
//! - ante and the opponent's moves happen on their own
//! - the human bets, exchanges cards (`d 0 2 4` / `keep`), and between rounds
//!   may start the ESP minigame (`esp`, then `g i j` or `x`)
//! - `q` or end of input stops the session
//!
//! With `--state` the whole table is loaded from and saved to a JSON file, so a
//! session can stop mid-hand and pick up where it left off. With `--history`
//! each finished round is appended as one JSONL record.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use rand::RngCore;
use shoggoth_ai::create_ai;
use shoggoth_engine::deck::session_rng;
use shoggoth_engine::game::{AnteOutcome, GameState, Phase};
use shoggoth_engine::logger::RoundLogger;
use shoggoth_engine::opponent::Opponent;
use shoggoth_engine::player::Seat;

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_action, format_cards, format_hand, format_winner};
use crate::io_utils::{read_stdin_line, read_text, write_atomic};
use crate::ui;
use crate::validation::{ParseResult, parse_command};

/// Command-line choices for one session, already merged with configuration.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub rounds: u32,
    pub ante: u32,
    pub seed: Option<u64>,
    pub state: Option<PathBuf>,
    pub history: Option<PathBuf>,
    pub ai_type: String,
}

impl PlayOptions {
    /// Fills whatever the command line left open from `config`.
    pub fn resolve(
        rounds: u32,
        ante: Option<u32>,
        seed: Option<u64>,
        state: Option<PathBuf>,
        history: Option<PathBuf>,
        ai: Option<String>,
        config: &Config,
    ) -> Self {
        Self {
            rounds,
            ante: ante.unwrap_or(config.ante),
            seed: seed.or(config.seed),
            state,
            history,
            ai_type: ai.unwrap_or_else(|| config.ai_type.clone()),
        }
    }
}

/// Handle the play command.
///
/// # Errors
///
/// `InvalidInput` for zero rounds or ante, or an unreadable state file;
/// `Config` for an unknown AI type; `Io` when the state or history cannot be
/// written. Rejected moves are reported on `err` and re-prompted instead.
pub fn handle_play_command(
    opts: &PlayOptions,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if opts.rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    if opts.ante == 0 {
        return Err(CliError::InvalidInput("ante must be >= 1".to_string()));
    }

    let seed = opts.seed.unwrap_or_else(rand::random);
    let mut rng = session_rng(Some(seed));
    let ai = create_ai(&opts.ai_type, &config.ai_config())?;

    let mut game = match &opts.state {
        Some(path) if path.exists() => {
            let game = load_state(path)?;
            writeln!(out, "Resumed from {} ({})", path.display(), game.phase())?;
            if game.phase() == Phase::GameOver {
                ui::display_warning(
                    err,
                    "The saved game is over; only ESP can restore your sanity.",
                )?;
            }
            game
        }
        _ => GameState::with_config(&config.table_config(), &mut rng),
    };
    let mut logger = match &opts.history {
        Some(path) => Some(RoundLogger::append(path)?),
        None => None,
    };

    writeln!(
        out,
        "play: rounds={} ante={} seed={} ai={}",
        opts.rounds, opts.ante, seed, opts.ai_type
    )?;
    tracing::info!(seed, rounds = opts.rounds, ai = %opts.ai_type, "session started");

    let settled = !game.phase().is_live_hand();
    let mut session = Session {
        game: &mut game,
        ai: ai.as_ref(),
        rng: &mut rng,
        logger: logger.as_mut(),
        opts,
        played: 0,
        settled,
    };
    session.run(out, err, stdin)?;
    let played = session.played;

    if let Some(path) = &opts.state {
        save_state(path, &game)?;
        writeln!(out, "State saved to {}", path.display())?;
    }
    writeln!(out, "Rounds played: {}", played)?;
    ui::write_status(out, &game)?;
    Ok(())
}

fn load_state(path: &Path) -> Result<GameState, CliError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|e| {
        CliError::InvalidInput(format!("cannot load state {}: {}", path.display(), e))
    })
}

fn save_state(path: &Path, game: &GameState) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(game)?;
    write_atomic(path, &json)?;
    Ok(())
}

enum Step {
    Continue,
    Stop,
}

struct Session<'a> {
    game: &'a mut GameState,
    ai: &'a dyn Opponent,
    rng: &'a mut dyn RngCore,
    logger: Option<&'a mut RoundLogger>,
    opts: &'a PlayOptions,
    played: u32,
    /// The finished round on the table has already been reported.
    settled: bool,
}

impl Session<'_> {
    fn run(
        &mut self,
        out: &mut dyn Write,
        err: &mut dyn Write,
        stdin: &mut dyn BufRead,
    ) -> Result<(), CliError> {
        loop {
            let phase = self.game.phase();
            if matches!(phase, Phase::Complete | Phase::GameOver) && !self.settled {
                self.finish_round(out)?;
                continue;
            }
            let step = match phase {
                Phase::Ante => self.ante(out)?,
                Phase::PreDrawBetting | Phase::PostDrawBetting => {
                    if self.game.turn() == Seat::Opponent {
                        self.opponent_acts(out)?
                    } else {
                        self.prompt(out, err, stdin)?
                    }
                }
                Phase::Showdown => {
                    self.game.complete_showdown()?;
                    writeln!(out, "{}", self.game.last_action())?;
                    Step::Continue
                }
                Phase::Discard | Phase::Complete | Phase::GameOver | Phase::Esp => {
                    self.prompt(out, err, stdin)?
                }
            };
            if let Step::Stop = step {
                return Ok(());
            }
        }
    }

    fn ante(&mut self, out: &mut dyn Write) -> Result<Step, CliError> {
        if self.played >= self.opts.rounds {
            return Ok(Step::Stop);
        }
        writeln!(out, "\nRound {}", self.played + 1)?;
        let outcome = self.game.collect_ante(self.opts.ante)?;
        writeln!(out, "{}", self.game.last_action())?;
        if let AnteOutcome::Dealt { .. } = outcome {
            self.settled = false;
            writeln!(out, "Your hand: {}", format_hand(self.game.hand(Seat::Human)))?;
            ui::write_status(out, self.game)?;
        }
        Ok(Step::Continue)
    }

    fn opponent_acts(&mut self, out: &mut dyn Write) -> Result<Step, CliError> {
        let action = self.game.opponent_turn(self.ai, &mut *self.rng)?;
        let name = &self.game.player(Seat::Opponent).name;
        writeln!(out, "{}: {}", name, format_action(&action))?;
        writeln!(out, "{}", self.game.last_action())?;
        Ok(Step::Continue)
    }

    fn prompt(
        &mut self,
        out: &mut dyn Write,
        err: &mut dyn Write,
        stdin: &mut dyn BufRead,
    ) -> Result<Step, CliError> {
        let phase = self.game.phase();
        match phase {
            Phase::PreDrawBetting | Phase::PostDrawBetting => write!(
                out,
                "Your move [to call: {}] (check/call/bet N/raise N/fold/q): ",
                self.game.to_call(Seat::Human)
            )?,
            Phase::Discard => {
                writeln!(out, "Your hand: {}", format_hand(self.game.hand(Seat::Human)))?;
                write!(out, "Discard (e.g. 'd 0 2 4', 'keep', fold, q): ")?
            }
            Phase::Esp => {
                if let Some(esp) = self.game.esp() {
                    writeln!(out, "Top:    {}", format_hand(&esp.hand1))?;
                    writeln!(out, "Bottom: {}", format_hand(&esp.hand2))?;
                }
                write!(out, "Guess 'g top bottom' or 'x' to leave: ")?
            }
            Phase::GameOver => write!(out, "Game over. 'esp' to claw back your mind, q to quit: ")?,
            _ => write!(out, "Enter for the next round, 'esp' to test your mind, q to quit: ")?,
        }
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            return Ok(Step::Stop);
        };

        let result = match parse_command(&line, phase) {
            ParseResult::Quit => return Ok(Step::Stop),
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                return Ok(Step::Continue);
            }
            ParseResult::Action(action) => self.game.player_action(action),
            ParseResult::Discard(indices) => {
                self.game
                    .perform_discard(&indices, self.ai, &mut *self.rng)
            }
            ParseResult::Guess(i, j) => self.game.guess_esp(i, j).map(|_| ()),
            ParseResult::StartEsp => self.game.start_esp(&mut *self.rng),
            ParseResult::ExitEsp => self.game.exit_esp(),
            ParseResult::Next => {
                if phase == Phase::GameOver || self.played >= self.opts.rounds {
                    return Ok(Step::Stop);
                }
                self.game.new_round(&mut *self.rng)
            }
        };
        match result {
            Ok(()) => self.report_move(phase, out)?,
            Err(e) => ui::write_error(err, &e.to_string())?,
        }
        Ok(Step::Continue)
    }

    /// Echoes what an accepted command did to the table.
    fn report_move(&self, before: Phase, out: &mut dyn Write) -> Result<(), CliError> {
        let after = self.game.phase();
        if after == Phase::Ante {
            return Ok(());
        }
        if before == Phase::Discard && after != Phase::Complete {
            let exchanged = self.game.history().discards[Seat::Opponent.index()].len();
            let name = &self.game.player(Seat::Opponent).name;
            writeln!(out, "{} exchanges {} card(s).", name, exchanged)?;
            writeln!(out, "Your hand: {}", format_hand(self.game.hand(Seat::Human)))?;
        }
        writeln!(out, "{}", self.game.last_action())?;
        Ok(())
    }

    /// Reports a round that just ended and appends it to the history.
    fn finish_round(&mut self, out: &mut dyn Write) -> Result<(), CliError> {
        self.settled = true;
        let Some(winner) = self.game.winner() else {
            return Ok(());
        };
        self.played += 1;

        let human = self.game.player(Seat::Human).name.as_str();
        let opponent = self.game.player(Seat::Opponent).name.as_str();
        let showdown = self.game.history().showdown.is_some();
        if showdown || self.game.reveal_on_fold() {
            writeln!(out, "Your hand: {}", format_cards(self.game.hand(Seat::Human)))?;
            writeln!(
                out,
                "{} held: {}",
                opponent,
                format_cards(self.game.hand(Seat::Opponent))
            )?;
        }
        writeln!(out, "Result: {}", format_winner(winner, [human, opponent]))?;
        ui::write_status(out, self.game)?;

        if let Some(logger) = self.logger.as_deref_mut()
            && let Some(record) = self.game.round_record(logger.next_id())
        {
            logger.write(&record)?;
        }
        Ok(())
    }
}
