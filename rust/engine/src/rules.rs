use crate::errors::GameError;
use crate::player::{PlayerAction as A, Seat};

/// Seat that acts first in every betting round.
pub const OPENING_SEAT: Seat = Seat::Human;

/// An action that has been checked against the actor's position and stack,
/// carrying what it will cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Pays the amount owed
    Call(u32),
    /// Opens the betting round with this amount
    Bet(u32),
    /// Pays what is owed plus `amount`; `cost` is the total deducted
    Raise { amount: u32, cost: u32 },
}

impl ValidatedAction {
    /// Sanity this action moves into the pot.
    pub fn cost(&self) -> u32 {
        match *self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(n) | ValidatedAction::Bet(n) => n,
            ValidatedAction::Raise { cost, .. } => cost,
        }
    }
}

/// What the betting round does after an action has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The other seat acts next
    PassTurn,
    /// Both contributions are settled; advance the phase
    CloseBetting,
    /// The actor folded; the round is over
    EndRound,
}

/// Validates a human action against the amount owed and the stack.
///
/// `bet` and `raise` are interchangeable on input: facing a bet either one adds
/// `amount` on top of the call, otherwise either one opens for `amount`.
///
/// # Examples
///
/// ```
/// use shoggoth_engine::errors::GameError;
/// use shoggoth_engine::player::PlayerAction;
/// use shoggoth_engine::rules::{validate_action, ValidatedAction};
///
/// assert_eq!(
///     validate_action(10, 100, PlayerAction::Raise(20)),
///     Ok(ValidatedAction::Raise { amount: 20, cost: 30 })
/// );
/// assert_eq!(
///     validate_action(10, 100, PlayerAction::Check),
///     Err(GameError::MustCall { owed: 10 })
/// );
/// ```
pub fn validate_action(to_call: u32, sanity: u32, action: A) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::MustCall { owed: to_call })
            }
        }
        A::Call => {
            if to_call == 0 {
                Err(GameError::NothingToCall)
            } else if sanity < to_call {
                Err(GameError::InsufficientSanity {
                    needed: to_call,
                    available: sanity,
                })
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Bet(amount) | A::Raise(amount) => {
            if amount == 0 {
                return Err(GameError::NonPositiveAmount);
            }
            let cost = to_call.saturating_add(amount);
            if sanity < cost {
                return Err(GameError::InsufficientSanity {
                    needed: cost,
                    available: sanity,
                });
            }
            if to_call == 0 {
                Ok(ValidatedAction::Bet(amount))
            } else {
                Ok(ValidatedAction::Raise { amount, cost })
            }
        }
    }
}

/// Turns whatever the AI declared into something it can actually do.
///
/// An unaffordable raise degrades to a call, then to a check when nothing is
/// owed, then to a fold. A check facing a bet becomes a call when affordable.
/// A call with nothing owed is a check.
pub fn resolve_opponent_action(to_call: u32, sanity: u32, action: A) -> ValidatedAction {
    if let Ok(validated) = validate_action(to_call, sanity, action) {
        return validated;
    }
    if to_call == 0 {
        ValidatedAction::Check
    } else if sanity >= to_call {
        ValidatedAction::Call(to_call)
    } else {
        ValidatedAction::Fold
    }
}

/// Decides whether `actor`'s action closes the betting round.
///
/// `bets` are both seats' contributions after the action was applied. A check
/// closes only when it comes from the seat that did not open; a call closes once
/// contributions match.
pub fn betting_progress(bets: [u32; 2], actor: Seat, action: &ValidatedAction) -> Progress {
    match action {
        ValidatedAction::Fold => Progress::EndRound,
        ValidatedAction::Check if actor != OPENING_SEAT => Progress::CloseBetting,
        ValidatedAction::Check => Progress::PassTurn,
        ValidatedAction::Call(_) if bets[0] == bets[1] => Progress::CloseBetting,
        ValidatedAction::Call(_) => Progress::PassTurn,
        ValidatedAction::Bet(_) | ValidatedAction::Raise { .. } => Progress::PassTurn,
    }
}
