//! The ESP minigame: find the card in the bottom row whose rank matches one in
//! the top row. Played between rounds for sanity.

use std::fmt;

use chrono::Utc;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::cards::{all_suits, Card, Rank};
use crate::errors::GameError;
use crate::game::{GameState, Phase};

pub const ESP_REWARD: u32 = 15;
pub const ESP_PENALTY: u32 = 5;
const ROW_LEN: usize = 5;

/// Rank subset the themed deck is built from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Primes,
    Faces,
    Odds,
    Evens,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Primes, Theme::Faces, Theme::Odds, Theme::Evens];

    pub fn ranks(self) -> &'static [Rank] {
        use Rank::*;
        match self {
            Theme::Primes => &[Two, Three, Five, Seven],
            Theme::Faces => &[Jack, Queen, King, Ace],
            Theme::Odds => &[Three, Five, Seven, Nine, Jack, King],
            Theme::Evens => &[Two, Four, Six, Eight, Ten, Queen],
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Theme::Primes => "The primes align... 2, 3, 5, 7...",
            Theme::Faces => "Royal visions emerge...",
            Theme::Odds => "Odd energies swirl...",
            Theme::Evens => "Even patterns crystallize...",
        }
    }

    fn deck(self) -> Vec<Card> {
        all_suits()
            .into_iter()
            .flat_map(|suit| self.ranks().iter().map(move |&rank| Card::new(rank, suit)))
            .collect()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Primes => "primes",
            Theme::Faces => "faces",
            Theme::Odds => "odds",
            Theme::Evens => "evens",
        };
        f.write_str(name)
    }
}

/// An ESP session in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EspState {
    /// Top row, on the opponent's side
    pub hand1: Vec<Card>,
    /// Bottom row, on the human's side
    pub hand2: Vec<Card>,
    /// A pair of positions guaranteed to share a rank
    pub match_index1: usize,
    pub match_index2: usize,
    pub attempts: u32,
    pub theme: Theme,
    /// Unix seconds
    pub start_time: i64,
}

impl EspState {
    /// Deals two themed rows with at least one guaranteed rank match.
    pub fn deal<R: Rng + ?Sized>(theme: Theme, rng: &mut R) -> Self {
        let mut deck = theme.deck();
        deck.shuffle(rng);
        let hand1: Vec<Card> = deck.drain(..ROW_LEN).collect();
        let mut hand2: Vec<Card> = deck.drain(..ROW_LEN).collect();

        let start = rng.random_range(0..ROW_LEN);
        let mut matched = None;
        for offset in 0..ROW_LEN {
            let i = (start + offset) % ROW_LEN;
            let rank = hand1[i].rank;
            if let Some(j) = hand2.iter().position(|c| c.rank == rank) {
                matched = Some((i, j));
                break;
            }
            if let Some(k) = deck.iter().position(|c| c.rank == rank) {
                let j = rng.random_range(0..ROW_LEN);
                hand2[j] = deck.remove(k);
                matched = Some((i, j));
                break;
            }
        }
        // Every rank has four suits and a row holds five cards, so some rank in
        // the top row always has a partner left in the bottom row or the deck.
        let (match_index1, match_index2) = matched.unwrap_or((0, 0));

        Self {
            hand1,
            hand2,
            match_index1,
            match_index2,
            attempts: 0,
            theme,
            start_time: Utc::now().timestamp(),
        }
    }

    pub fn is_match(&self, i: usize, j: usize) -> bool {
        match (self.hand1.get(i), self.hand2.get(j)) {
            (Some(a), Some(b)) => a.rank == b.rank,
            _ => false,
        }
    }
}

impl GameState {
    pub fn can_start_esp(&self) -> bool {
        matches!(self.phase, Phase::Complete | Phase::Ante | Phase::GameOver)
    }

    /// Starts an ESP session with a random theme.
    pub fn start_esp(&mut self, rng: &mut dyn RngCore) -> Result<(), GameError> {
        if !self.can_start_esp() {
            return Err(GameError::EspUnavailable);
        }
        let theme = *Theme::ALL.choose(rng).unwrap_or(&Theme::Primes);
        let esp = EspState::deal(theme, rng);
        tracing::debug!(%theme, "esp started");
        self.esp = Some(esp);
        self.phase = Phase::Esp;
        self.last_action = format!("{} Find the matching cards!", theme.message());
        Ok(())
    }

    /// Guesses that top card `i` and bottom card `j` share a rank.
    ///
    /// A hit pays out and closes the session. A miss costs sanity; running out
    /// ends the game.
    pub fn guess_esp(&mut self, i: usize, j: usize) -> Result<bool, GameError> {
        if self.phase != Phase::Esp {
            return Err(self.wrong_phase("esp"));
        }
        let esp = self.esp.as_mut().ok_or(GameError::EspUnavailable)?;
        if i >= esp.hand1.len() || j >= esp.hand2.len() {
            return Err(GameError::InvalidEspSelection);
        }
        esp.attempts += 1;

        if esp.is_match(i, j) {
            self.players[0].add_sanity(ESP_REWARD);
            self.last_action = format!("Your mind pierces the veil! +{} Sanity", ESP_REWARD);
            self.phase = Phase::Complete;
            self.esp = None;
            tracing::debug!(reward = ESP_REWARD, "esp guess hit");
            return Ok(true);
        }

        let human = &mut self.players[0];
        human.sanity = human.sanity.saturating_sub(ESP_PENALTY);
        tracing::debug!(penalty = ESP_PENALTY, sanity = human.sanity, "esp guess missed");
        if human.sanity == 0 {
            self.phase = Phase::GameOver;
            self.esp = None;
            self.last_action = "The visions consumed you. Game Over.".to_string();
        } else {
            self.last_action = format!("The cards blur... -{} Sanity. Try again.", ESP_PENALTY);
        }
        Ok(false)
    }

    pub fn exit_esp(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Esp {
            return Err(self.wrong_phase("esp"));
        }
        self.phase = Phase::Complete;
        self.esp = None;
        self.last_action = "You close your third eye.".to_string();
        Ok(())
    }
}
