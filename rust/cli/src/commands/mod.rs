//! Command handlers for the Shoggoth CLI.
//!
//! Each subcommand lives in its own module and exposes one
//! `handle_COMMAND_command(...) -> Result<(), CliError>` taking its output
//! streams as `&mut dyn Write` so tests can run it in memory.

mod cfg;
mod discard;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use discard::handle_discard_command;
pub use eval::handle_eval_command;
pub use play::{PlayOptions, handle_play_command};
