//! Tunables for the computer opponent.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Courage presets: above 1 plays brave, below 1 plays timid.
pub const COURAGE_NORMAL: f64 = 1.0;
pub const COURAGE_BRAVE: f64 = 1.2;
pub const COURAGE_TIMID: f64 = 0.8;

/// Configuration threaded into every AI decision.
///
/// There is no process-wide instance; hosts build one (usually from their own
/// config layer) and hand it to [`crate::ShoggothAi::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Monte Carlo trials per keep/discard subset
    pub discard_simulations: u32,
    /// Multiplier on the estimated win probability
    pub courage: f64,
    /// Opening bet with a strong hand
    pub value_bet: u32,
    /// Opening bet when bluffing
    pub bluff_bet: u32,
    /// Raise on top of a call with a very strong hand
    pub raise_amount: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            discard_simulations: 100,
            courage: COURAGE_BRAVE,
            value_bet: 20,
            bluff_bet: 10,
            raise_amount: 20,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AiConfigError {
    #[error("discard_simulations must be at least 1")]
    NoSimulations,
    #[error("courage must be a finite, positive number, got {0}")]
    InvalidCourage(f64),
    #[error("{field} must be positive")]
    ZeroAmount { field: &'static str },
    #[error("Unknown AI type: {0}")]
    UnknownKind(String),
}

impl AiConfig {
    pub fn with_courage(mut self, courage: f64) -> Self {
        self.courage = courage;
        self
    }

    pub fn validate(&self) -> Result<(), AiConfigError> {
        if self.discard_simulations == 0 {
            return Err(AiConfigError::NoSimulations);
        }
        if !self.courage.is_finite() || self.courage <= 0.0 {
            return Err(AiConfigError::InvalidCourage(self.courage));
        }
        for (field, value) in [
            ("value_bet", self.value_bet),
            ("bluff_bet", self.bluff_bet),
            ("raise_amount", self.raise_amount),
        ] {
            if value == 0 {
                return Err(AiConfigError::ZeroAmount { field });
            }
        }
        Ok(())
    }
}
