//! Terminal output helpers shared by the commands.

use std::io::Write;

use shoggoth_engine::game::GameState;
use shoggoth_engine::player::Seat;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// One-line table summary: both sanity totals and the pot.
pub fn write_status(out: &mut dyn Write, game: &GameState) -> std::io::Result<()> {
    let human = game.player(Seat::Human);
    let opponent = game.player(Seat::Opponent);
    writeln!(
        out,
        "Sanity: {} {} | {} {} | Pot: {}",
        human.name,
        human.sanity,
        opponent.name,
        opponent.sanity,
        game.pot()
    )
}
