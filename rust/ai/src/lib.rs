//! # shoggoth-ai: The Ancient One
//!
//! Computer opponent for the five-card draw engine. Discards are chosen by
//! brute-force search with Monte Carlo estimates; bets come from a
//! category-based win estimate weighed against pot odds.
//!
//! ## Core Components
//!
//! - [`ShoggothAi`] - The opponent, implementing the engine's [`Opponent`] seam
//! - [`config`] - [`AiConfig`] tunables and validation
//! - [`discard`] - Keep/discard subset search
//! - [`betting`] - Win estimate and action choice
//! - [`score`] - Scalar hand score used to average simulations
//! - [`create_ai`] - Factory for the named courage presets
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use shoggoth_ai::{create_ai, AiConfig};
//! use shoggoth_engine::cards::parse_cards;
//!
//! let ai = create_ai("shoggoth", &AiConfig::default()).unwrap();
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let full_house = parse_cards("Ks Kd Kh 4c 4d").unwrap();
//! assert!(ai.choose_discard(&full_house, &mut rng).is_empty());
//! ```

use rand::RngCore;
use shoggoth_engine::cards::Card;
use shoggoth_engine::hand::evaluate_cards;
use shoggoth_engine::opponent::{Opponent, TableView};
use shoggoth_engine::player::PlayerAction;

pub mod betting;
pub mod config;
pub mod discard;
pub mod score;

pub use config::{AiConfig, AiConfigError};

/// The default computer opponent.
#[derive(Debug, Clone)]
pub struct ShoggothAi {
    name: String,
    config: AiConfig,
}

impl ShoggothAi {
    /// Builds an opponent after checking `config`.
    pub fn new(name: impl Into<String>, config: AiConfig) -> Result<Self, AiConfigError> {
        config.validate()?;
        Ok(Self {
            name: name.into(),
            config,
        })
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }
}

impl Opponent for ShoggothAi {
    fn decide_action(&self, hand: &[Card], table: &TableView, rng: &mut dyn RngCore) -> PlayerAction {
        match evaluate_cards(hand) {
            Ok(value) => betting::decide(&value, table, &self.config, rng),
            Err(e) => {
                tracing::warn!(error = %e, "cannot bet on malformed hand");
                PlayerAction::Check
            }
        }
    }

    fn choose_discard(&self, hand: &[Card], rng: &mut dyn RngCore) -> Vec<usize> {
        discard::choose_discard(hand, self.config.discard_simulations, rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Factory for opponents by type string.
///
/// # Supported AI Types
///
/// - `"shoggoth"` - `config` as given
/// - `"brave"`, `"normal"`, `"timid"` - `config` with the matching courage preset
///
/// # Example
///
/// ```rust
/// use shoggoth_ai::{create_ai, AiConfig};
///
/// let ai = create_ai("timid", &AiConfig::default()).unwrap();
/// assert_eq!(ai.name(), "timid");
/// assert!(create_ai("cthulhu", &AiConfig::default()).is_err());
/// ```
pub fn create_ai(ai_type: &str, config: &AiConfig) -> Result<Box<dyn Opponent>, AiConfigError> {
    let base = config.clone();
    let tuned = match ai_type {
        "shoggoth" => base,
        "brave" => base.with_courage(config::COURAGE_BRAVE),
        "normal" => base.with_courage(config::COURAGE_NORMAL),
        "timid" => base.with_courage(config::COURAGE_TIMID),
        other => return Err(AiConfigError::UnknownKind(other.to_string())),
    };
    Ok(Box::new(ShoggothAi::new(ai_type, tuned)?))
}
