use rand::RngCore;

use crate::cards::Card;
use crate::game::Phase;
use crate::player::PlayerAction;

/// What the computer-controlled seat can see when it is asked to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView {
    pub phase: Phase,
    pub pot: u32,
    /// Amount the acting seat owes to stay in
    pub to_call: u32,
    pub own_sanity: u32,
    pub rival_sanity: u32,
}

/// Decision-making for the computer-controlled seat.
///
/// The game state calls into this during `opponent_turn` and `perform_discard`.
/// Randomness is passed per call so every decision draws independently.
pub trait Opponent: Send + Sync {
    /// Declare a betting action. Infeasible declarations are degraded by the
    /// engine rather than rejected.
    fn decide_action(&self, hand: &[Card], table: &TableView, rng: &mut dyn RngCore) -> PlayerAction;

    /// Positions (0-4) of the cards to exchange, possibly none.
    fn choose_discard(&self, hand: &[Card], rng: &mut dyn RngCore) -> Vec<usize>;

    fn name(&self) -> &str;
}
