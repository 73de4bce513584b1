use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::esp::EspState;
use crate::hand::{compare_values, evaluate_cards, Category, Showdown};
use crate::logger::{ActionRecord, RoundLog, RoundRecord, ShowdownInfo};
use crate::opponent::{Opponent, TableView};
use crate::player::{Player, PlayerAction, RoundState, Seat, STARTING_SANITY};
use crate::rules::{
    betting_progress, resolve_opponent_action, validate_action, Progress, ValidatedAction,
    OPENING_SEAT,
};

/// Phases of a round. `GameOver` is reachable from anywhere a player runs out
/// of sanity; `Esp` is the side minigame played between rounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Phase {
    Ante,
    PreDrawBetting,
    Discard,
    PostDrawBetting,
    Showdown,
    Complete,
    GameOver,
    Esp,
}

/// Canonical wire spelling of every phase.
const WIRE_NAMES: [(Phase, &str); 8] = [
    (Phase::Ante, "ante"),
    (Phase::PreDrawBetting, "bet_pre"),
    (Phase::Discard, "discard"),
    (Phase::PostDrawBetting, "bet_post"),
    (Phase::Showdown, "showdown"),
    (Phase::Complete, "complete"),
    (Phase::GameOver, "game_over"),
    (Phase::Esp, "esp"),
];

/// Older spellings still accepted when reading saved state. Never written.
const LEGACY_ALIASES: [(&str, Phase); 3] = [
    ("deal", Phase::Ante),
    ("bet", Phase::PreDrawBetting),
    ("end", Phase::Complete),
];

impl Phase {
    pub fn as_str(self) -> &'static str {
        WIRE_NAMES
            .iter()
            .find(|(phase, _)| *phase == self)
            .map(|(_, name)| *name)
            .unwrap_or("unknown")
    }

    pub fn is_betting(self) -> bool {
        matches!(self, Phase::PreDrawBetting | Phase::PostDrawBetting)
    }

    /// Phases in which both seats hold cards and chips are at stake.
    pub fn is_live_hand(self) -> bool {
        matches!(
            self,
            Phase::PreDrawBetting | Phase::Discard | Phase::PostDrawBetting | Phase::Showdown
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WIRE_NAMES
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(phase, _)| *phase)
            .or_else(|| {
                LEGACY_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == s)
                    .map(|(_, phase)| *phase)
            })
            .ok_or_else(|| GameError::UnknownPhase(s.to_string()))
    }
}

impl From<Phase> for &'static str {
    fn from(phase: Phase) -> Self {
        phase.as_str()
    }
}

impl TryFrom<String> for Phase {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Who took the pot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Human,
    Opponent,
    Tie,
}

impl From<Seat> for Winner {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::Human => Winner::Human,
            Seat::Opponent => Winner::Opponent,
        }
    }
}

/// Table setup for a new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub starting_sanity: u32,
    pub human_name: String,
    pub opponent_name: String,
    /// Whether hosts should show the opponent's cards after a fold
    pub reveal_on_fold: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_sanity: STARTING_SANITY,
            human_name: "You".to_string(),
            opponent_name: "The Ancient One".to_string(),
            reveal_on_fold: true,
        }
    }
}

/// Result of a successful `collect_ante` call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AnteOutcome {
    /// Both seats paid and hold five cards
    Dealt { opponent_regenerated: bool },
    /// The human could not cover the ante
    GameOver,
}

fn default_starting_sanity() -> u32 {
    STARTING_SANITY
}

fn default_reveal_on_fold() -> bool {
    true
}

/// Authoritative state of one heads-up session.
///
/// Seat 0 is the human, seat 1 the computer. Every field is serialized, so a
/// host can persist the state as JSON and resume it in another process.
///
/// # Examples
///
/// ```
/// use shoggoth_engine::deck::session_rng;
/// use shoggoth_engine::game::{GameState, Phase};
/// use shoggoth_engine::player::PlayerAction;
///
/// let mut rng = session_rng(Some(7));
/// let mut game = GameState::new(&mut rng);
/// game.collect_ante(10).unwrap();
/// assert_eq!(game.pot(), 20);
/// assert_eq!(game.phase(), Phase::PreDrawBetting);
///
/// game.player_action(PlayerAction::Fold).unwrap();
/// assert_eq!(game.phase(), Phase::Complete);
/// assert_eq!(game.pot(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) deck: Deck,
    pub(crate) players: [Player; 2],
    pub(crate) round_states: [RoundState; 2],
    pub(crate) pot: u32,
    pub(crate) turn: Seat,
    pub(crate) phase: Phase,
    /// Total contribution the seat to act must match
    pub(crate) current_bet: u32,
    pub(crate) last_action: String,
    #[serde(default)]
    pub(crate) winner: Option<Winner>,
    #[serde(default = "default_reveal_on_fold")]
    pub(crate) reveal_on_fold: bool,
    #[serde(default = "default_starting_sanity")]
    pub(crate) starting_sanity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) esp: Option<EspState>,
    #[serde(default)]
    pub(crate) history: RoundLog,
}

impl GameState {
    /// Fresh session with both players at full sanity, waiting for the ante.
    pub fn new(rng: &mut dyn RngCore) -> Self {
        Self::with_config(&TableConfig::default(), rng)
    }

    pub fn with_config(config: &TableConfig, rng: &mut dyn RngCore) -> Self {
        Self {
            deck: Deck::shuffled(rng),
            players: [
                Player::new(config.human_name.clone(), false, config.starting_sanity),
                Player::new(config.opponent_name.clone(), true, config.starting_sanity),
            ],
            round_states: [RoundState::default(), RoundState::default()],
            pot: 0,
            turn: OPENING_SEAT,
            phase: Phase::Ante,
            current_bet: 0,
            last_action: "Game started. Ante up!".to_string(),
            winner: None,
            reveal_on_fold: config.reveal_on_fold,
            starting_sanity: config.starting_sanity,
            esp: None,
            history: RoundLog::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn turn(&self) -> Seat {
        self.turn
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn last_action(&self) -> &str {
        &self.last_action
    }
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }
    pub fn reveal_on_fold(&self) -> bool {
        self.reveal_on_fold
    }
    pub fn starting_sanity(&self) -> u32 {
        self.starting_sanity
    }
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }
    pub fn round_state(&self, seat: Seat) -> &RoundState {
        &self.round_states[seat.index()]
    }
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.round_states[seat.index()].hand
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn esp(&self) -> Option<&EspState> {
        self.esp.as_ref()
    }
    pub fn history(&self) -> &RoundLog {
        &self.history
    }

    /// Name of the winner, or `"tie"`.
    pub fn winner_name(&self) -> Option<&str> {
        self.winner.map(|w| match w {
            Winner::Human => self.players[0].name.as_str(),
            Winner::Opponent => self.players[1].name.as_str(),
            Winner::Tie => "tie",
        })
    }

    /// Replaces the undealt cards, e.g. to stage a known deal.
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Amount `seat` owes to match the current bet.
    pub fn to_call(&self, seat: Seat) -> u32 {
        self.current_bet
            .saturating_sub(self.round_states[seat.index()].bet)
    }

    /// Pot plus both stacks. Constant across every operation except the
    /// opponent's ante regeneration and the ESP minigame.
    pub fn total_sanity(&self) -> u64 {
        u64::from(self.pot) + self.players.iter().map(|p| u64::from(p.sanity)).sum::<u64>()
    }

    pub fn can_discard(&self) -> bool {
        self.phase == Phase::Discard
    }

    pub fn can_showdown(&self) -> bool {
        matches!(self.phase, Phase::Showdown | Phase::Complete)
    }

    /// Takes the ante from both seats and deals five cards each.
    ///
    /// A human who cannot cover the ante ends the game; a broke opponent
    /// regenerates to a full stack.
    pub fn collect_ante(&mut self, amount: u32) -> Result<AnteOutcome, GameError> {
        self.expect_phase(Phase::Ante, "ante")?;
        if amount == 0 {
            return Err(GameError::InvalidAnte);
        }
        if self.deck.remaining() < 10 {
            return Err(GameError::DeckExhausted);
        }

        if self.players[0].sanity < amount {
            self.phase = Phase::GameOver;
            self.last_action = format!(
                "{} has insufficient sanity for ante. Game Over.",
                self.players[0].name
            );
            tracing::info!(ante = amount, sanity = self.players[0].sanity, "game over at ante");
            return Ok(AnteOutcome::GameOver);
        }

        let opponent_regenerated = self.players[1].sanity < amount;
        if opponent_regenerated {
            self.players[1].sanity = self.starting_sanity.max(amount);
            tracing::debug!(sanity = self.players[1].sanity, "opponent regenerated");
        }

        let human_hand = self.deck.deal(5)?;
        let opponent_hand = self.deck.deal(5)?;
        for player in &mut self.players {
            player
                .pay(amount)
                .map_err(|available| GameError::InsufficientSanity {
                    needed: amount,
                    available,
                })?;
            self.pot += amount;
        }
        for (state, hand) in self.round_states.iter_mut().zip([human_hand, opponent_hand]) {
            state.reset();
            state.hand = hand;
        }

        self.phase = Phase::PreDrawBetting;
        self.current_bet = 0;
        self.turn = OPENING_SEAT;
        self.history.ante = amount;
        self.last_action = if opponent_regenerated {
            format!(
                "{} regenerates its form! Ante paid: {}",
                self.players[1].name, amount
            )
        } else {
            format!("Ante paid: {}", amount)
        };
        tracing::debug!(ante = amount, pot = self.pot, "ante collected");
        Ok(AnteOutcome::Dealt {
            opponent_regenerated,
        })
    }

    /// Applies the human's action.
    ///
    /// Folding is accepted at any point of a live hand; everything else needs
    /// a betting phase and the human's turn.
    pub fn player_action(&mut self, action: PlayerAction) -> Result<(), GameError> {
        if action == PlayerAction::Fold {
            if !self.phase.is_live_hand() {
                return Err(self.wrong_phase("a live hand"));
            }
            self.fold(Seat::Human);
            return Ok(());
        }
        if !self.phase.is_betting() {
            return Err(self.wrong_phase("betting"));
        }
        if self.turn != Seat::Human {
            return Err(GameError::NotYourTurn);
        }
        let validated = validate_action(
            self.to_call(Seat::Human),
            self.players[0].sanity,
            action,
        )
        .inspect_err(|e| tracing::debug!(error = %e, ?action, "action rejected"))?;
        self.apply(Seat::Human, validated)
    }

    /// Lets the computer seat act once it holds the turn.
    ///
    /// Returns the action actually taken after infeasible declarations were
    /// degraded.
    pub fn opponent_turn(
        &mut self,
        ai: &dyn Opponent,
        rng: &mut dyn RngCore,
    ) -> Result<ValidatedAction, GameError> {
        if !self.phase.is_betting() {
            return Err(self.wrong_phase("betting"));
        }
        if self.turn != Seat::Opponent {
            return Err(GameError::NotOpponentTurn);
        }
        let to_call = self.to_call(Seat::Opponent);
        let view = TableView {
            phase: self.phase,
            pot: self.pot,
            to_call,
            own_sanity: self.players[1].sanity,
            rival_sanity: self.players[0].sanity,
        };
        let declared = ai.decide_action(&self.round_states[1].hand, &view, rng);
        let resolved = resolve_opponent_action(to_call, self.players[1].sanity, declared);
        tracing::debug!(ai = ai.name(), ?declared, ?resolved, to_call, "opponent acted");
        if resolved == ValidatedAction::Fold {
            self.fold(Seat::Opponent);
        } else {
            self.apply(Seat::Opponent, resolved)?;
        }
        Ok(resolved)
    }

    /// Exchanges the human's cards at `indices`, lets the AI exchange its own,
    /// and opens the final betting round.
    pub fn perform_discard(
        &mut self,
        indices: &[usize],
        ai: &dyn Opponent,
        rng: &mut dyn RngCore,
    ) -> Result<(), GameError> {
        self.expect_phase(Phase::Discard, "discard")?;
        let hand_len = self.round_states[0].hand.len();
        for (pos, &index) in indices.iter().enumerate() {
            if index >= hand_len {
                return Err(GameError::InvalidDiscardIndex { index });
            }
            if indices[..pos].contains(&index) {
                return Err(GameError::DuplicateDiscardIndex { index });
            }
        }
        if self.deck.remaining() < indices.len() {
            return Err(GameError::DeckExhausted);
        }

        let human = &mut self.round_states[0];
        self.deck.replace(&mut human.hand, indices)?;
        human.discarded = true;

        let opponent_indices = sanitize_indices(
            ai.choose_discard(&self.round_states[1].hand, rng),
            self.round_states[1].hand.len(),
            self.deck.remaining(),
        );
        let opponent = &mut self.round_states[1];
        self.deck.replace(&mut opponent.hand, &opponent_indices)?;
        opponent.discarded = true;

        tracing::debug!(human = ?indices, opponent = ?opponent_indices, "cards exchanged");
        self.history.discards = [indices.to_vec(), opponent_indices];
        self.advance_phase()
    }

    /// Compares both hands and pays out the pot.
    ///
    /// A tied pot is split; an odd chip goes to the seat that opens betting.
    /// The human ending at zero sanity forces `GameOver`.
    pub fn complete_showdown(&mut self) -> Result<Winner, GameError> {
        self.expect_phase(Phase::Showdown, "showdown")?;
        let human_value = evaluate_cards(&self.round_states[0].hand)?;
        let opponent_value = evaluate_cards(&self.round_states[1].hand)?;
        let result = compare_values(&human_value, &opponent_value);
        let message = self.showdown_message(result, human_value.category, opponent_value.category);

        let pot = self.pot;
        let winner = match result {
            Showdown::Hand1Wins => {
                self.players[0].add_sanity(pot);
                Winner::Human
            }
            Showdown::Hand2Wins => {
                self.players[1].add_sanity(pot);
                Winner::Opponent
            }
            Showdown::Tie => {
                let half = pot / 2;
                let odd = pot % 2;
                let opener = OPENING_SEAT.index();
                self.players[opener].add_sanity(half + odd);
                self.players[1 - opener].add_sanity(half);
                Winner::Tie
            }
        };
        self.pot = 0;
        self.winner = Some(winner);
        self.phase = Phase::Complete;
        self.history.settled_pot = pot;
        self.history.showdown = Some(ShowdownInfo {
            categories: [human_value.category, opponent_value.category],
            notes: Some(message.clone()),
        });
        self.last_action = message;
        tracing::info!(?winner, pot, "showdown settled");

        if self.players[0].sanity == 0 {
            self.phase = Phase::GameOver;
            self.last_action = format!("{} You lost everything. Game Over.", self.last_action);
        }
        Ok(winner)
    }

    /// Starts the next round: new deck, empty pot, waiting for the ante.
    /// Sanity carries over. A game that is over stays over until the human
    /// holds sanity again.
    pub fn new_round(&mut self, rng: &mut dyn RngCore) -> Result<(), GameError> {
        if self.phase.is_live_hand() {
            return Err(self.wrong_phase("complete"));
        }
        if self.phase == Phase::GameOver && self.players[0].sanity == 0 {
            return Err(GameError::GameOver);
        }
        self.deck = Deck::shuffled(rng);
        for state in &mut self.round_states {
            state.reset();
        }
        self.pot = 0;
        self.turn = OPENING_SEAT;
        self.phase = Phase::Ante;
        self.current_bet = 0;
        self.winner = None;
        self.esp = None;
        self.history = RoundLog::default();
        self.last_action = "New round started. Ante up!".to_string();
        Ok(())
    }

    /// Adds sanity from outside the table. A finished game resumes with a new
    /// round once the human holds sanity again.
    pub fn replenish(
        &mut self,
        seat: Seat,
        amount: u32,
        rng: &mut dyn RngCore,
    ) -> Result<(), GameError> {
        self.players[seat.index()].add_sanity(amount);
        if self.phase == Phase::GameOver && self.players[0].sanity > 0 {
            self.new_round(rng)?;
        }
        Ok(())
    }

    /// History entry for a finished round; `None` while the round is running.
    pub fn round_record(&self, round_id: impl Into<String>) -> Option<RoundRecord> {
        let winner = self.winner?;
        Some(RoundRecord {
            round_id: round_id.into(),
            ts: None,
            players: [self.players[0].name.clone(), self.players[1].name.clone()],
            hands: [
                self.round_states[0].hand.clone(),
                self.round_states[1].hand.clone(),
            ],
            ante: self.history.ante,
            actions: self.history.actions.clone(),
            discards: self.history.discards.clone(),
            pot: self.history.settled_pot,
            winner,
            showdown: self.history.showdown.clone(),
        })
    }

    fn apply(&mut self, seat: Seat, action: ValidatedAction) -> Result<(), GameError> {
        let i = seat.index();
        let cost = action.cost();
        let mut bets = [self.round_states[0].bet, self.round_states[1].bet];
        bets[i] += cost;
        let progress = betting_progress(bets, seat, &action);
        // Closing the final round goes straight to showdown, so both hands
        // must evaluate before anything changes.
        if progress == Progress::CloseBetting && self.phase == Phase::PostDrawBetting {
            for state in &self.round_states {
                evaluate_cards(&state.hand)?;
            }
        }

        self.players[i]
            .pay(cost)
            .map_err(|available| GameError::InsufficientSanity {
                needed: cost,
                available,
            })?;
        self.pot += cost;
        self.round_states[i].bet = bets[i];
        if matches!(action, ValidatedAction::Bet(_) | ValidatedAction::Raise { .. }) {
            self.current_bet = bets[i];
        }
        self.last_action = self.describe(seat, &action);
        self.record(seat, &action);

        match progress {
            Progress::PassTurn => {
                self.turn = seat.other();
                Ok(())
            }
            Progress::CloseBetting => self.advance_phase(),
            Progress::EndRound => {
                self.fold(seat);
                Ok(())
            }
        }
    }

    fn fold(&mut self, seat: Seat) {
        let winner = seat.other();
        let pot = self.pot;
        self.round_states[seat.index()].folded = true;
        self.players[winner.index()].add_sanity(pot);
        self.pot = 0;
        self.winner = Some(winner.into());
        self.phase = Phase::Complete;
        self.history.settled_pot = pot;
        self.record(seat, &ValidatedAction::Fold);
        self.last_action = match seat {
            Seat::Human => format!("You folded. {} wins.", self.players[1].name),
            Seat::Opponent => format!("{} folds. You win!", self.players[1].name),
        };
        tracing::info!(?seat, pot, "round ended by fold");
    }

    fn advance_phase(&mut self) -> Result<(), GameError> {
        let from = self.phase;
        match from {
            Phase::PreDrawBetting => {
                self.phase = Phase::Discard;
                self.current_bet = 0;
                for state in &mut self.round_states {
                    state.bet = 0;
                }
                self.last_action = "Betting complete. Choose cards to discard.".to_string();
            }
            Phase::Discard => {
                self.phase = Phase::PostDrawBetting;
                self.last_action = "Cards exchanged. Final betting round.".to_string();
            }
            Phase::PostDrawBetting => {
                self.phase = Phase::Showdown;
            }
            _ => return Ok(()),
        }
        self.turn = OPENING_SEAT;
        tracing::debug!(%from, to = %self.phase, "phase advanced");
        if self.phase == Phase::Showdown {
            self.complete_showdown()?;
        }
        Ok(())
    }

    fn describe(&self, seat: Seat, action: &ValidatedAction) -> String {
        let name = &self.players[1].name;
        match (seat, action) {
            (Seat::Human, ValidatedAction::Check) => "You checked.".to_string(),
            (Seat::Human, ValidatedAction::Call(_)) => "You called.".to_string(),
            (Seat::Human, ValidatedAction::Bet(n)) => format!("You bet {}.", n),
            (Seat::Human, ValidatedAction::Raise { amount, .. }) => {
                format!("You raised by {}.", amount)
            }
            (Seat::Opponent, ValidatedAction::Check) => format!("{} checks.", name),
            (Seat::Opponent, ValidatedAction::Call(_)) => format!("{} calls.", name),
            (Seat::Opponent, ValidatedAction::Bet(n)) => format!("{} bets {}.", name, n),
            (Seat::Opponent, ValidatedAction::Raise { amount, .. }) => {
                format!("{} raises by {}.", name, amount)
            }
            (_, ValidatedAction::Fold) => String::new(),
        }
    }

    fn showdown_message(&self, result: Showdown, human: Category, opponent: Category) -> String {
        let name = &self.players[1].name;
        match result {
            Showdown::Hand1Wins => format!("You win with {}! {} had {}.", human, name, opponent),
            Showdown::Hand2Wins => format!("{} wins with {}! You had {}.", name, opponent, human),
            Showdown::Tie => format!("It's a tie! Both hands have {}.", human),
        }
    }

    fn record(&mut self, seat: Seat, action: &ValidatedAction) {
        let action = match *action {
            ValidatedAction::Fold => PlayerAction::Fold,
            ValidatedAction::Check => PlayerAction::Check,
            ValidatedAction::Call(_) => PlayerAction::Call,
            ValidatedAction::Bet(n) => PlayerAction::Bet(n),
            ValidatedAction::Raise { amount, .. } => PlayerAction::Raise(amount),
        };
        self.history.actions.push(ActionRecord {
            seat,
            phase: self.phase,
            action,
        });
    }

    pub(crate) fn expect_phase(&self, phase: Phase, expected: &'static str) -> Result<(), GameError> {
        if self.phase == phase {
            Ok(())
        } else if self.phase == Phase::GameOver {
            Err(GameError::GameOver)
        } else {
            Err(self.wrong_phase(expected))
        }
    }

    pub(crate) fn wrong_phase(&self, expected: &'static str) -> GameError {
        GameError::WrongPhase {
            expected,
            actual: self.phase,
        }
    }
}

/// Drops out-of-range and repeated positions from an AI discard and caps it at
/// what the deck can supply.
fn sanitize_indices(indices: Vec<usize>, hand_len: usize, available: usize) -> Vec<usize> {
    let mut clean: Vec<usize> = Vec::with_capacity(indices.len());
    for index in indices {
        if index < hand_len && !clean.contains(&index) && clean.len() < available {
            clean.push(index);
        }
    }
    clean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_wire_names_round_trip() {
        for (phase, name) in WIRE_NAMES {
            assert_eq!(phase.as_str(), name);
            assert_eq!(name.parse::<Phase>().unwrap(), phase);
            assert_eq!(serde_json::to_string(&phase).unwrap(), format!("\"{}\"", name));
        }
    }

    #[test]
    fn legacy_aliases_are_read_but_not_written() {
        let phase: Phase = serde_json::from_str("\"deal\"").unwrap();
        assert_eq!(phase, Phase::Ante);
        assert_eq!("bet".parse::<Phase>().unwrap(), Phase::PreDrawBetting);
        assert_eq!("end".parse::<Phase>().unwrap(), Phase::Complete);
        assert_eq!(serde_json::to_string(&Phase::Complete).unwrap(), "\"complete\"");
        assert!("river".parse::<Phase>().is_err());
    }

    #[test]
    fn sanitize_drops_junk_ai_indices() {
        assert_eq!(sanitize_indices(vec![4, 4, 9, 0], 5, 47), vec![4, 0]);
        assert_eq!(sanitize_indices(vec![0, 1, 2], 5, 2), vec![0, 1]);
    }
}
