//! Command-line definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shoggoth",
    version,
    about = "Five-card draw against The Ancient One"
)]
pub struct ShoggothCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play rounds interactively on stdin
    Play {
        /// Number of rounds to play in this session
        #[arg(long, default_value_t = 1)]
        rounds: u32,
        /// Ante per round (overrides configuration)
        #[arg(long)]
        ante: Option<u32>,
        /// RNG seed (overrides configuration)
        #[arg(long)]
        seed: Option<u64>,
        /// JSON file to resume from and save to
        #[arg(long)]
        state: Option<PathBuf>,
        /// JSONL file that finished rounds are appended to
        #[arg(long)]
        history: Option<PathBuf>,
        /// Opponent type: shoggoth, brave, normal, timid
        #[arg(long)]
        ai: Option<String>,
    },
    /// Evaluate a five-card hand
    Eval {
        /// Cards in short notation, e.g. `As Kd 10h 4c 4s`
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show which cards the AI would exchange
    Discard {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        #[arg(long)]
        seed: Option<u64>,
        /// Monte Carlo trials per subset (overrides configuration)
        #[arg(long)]
        simulations: Option<u32>,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
