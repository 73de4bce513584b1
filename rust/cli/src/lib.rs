//! # Shoggoth CLI Library
//!
//! Command-line host for the five-card draw engine: play against the AI on
//! stdin, evaluate hands, inspect the AI's exchange choice, and show the
//! resolved configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and dispatches to a subcommand; [`run_with_input`]
//! does the same with an explicit input stream for the interactive session.
//!
//! ```
//! use std::io;
//! let args = vec!["shoggoth", "eval", "As", "Ks", "Qs", "Js", "10s"];
//! let code = shoggoth_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds against The Ancient One
//! - `eval`: Evaluate a five-card hand
//! - `discard`: Show which cards the AI would exchange
//! - `cfg`: Display current configuration settings

use std::io::{BufRead, Write};

use clap::Parser;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, ShoggothCli};
use commands::{
    PlayOptions, handle_cfg_command, handle_discard_command, handle_eval_command,
    handle_play_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "eval", "discard", "cfg"];

/// Main entry point for the CLI application. Interactive input comes from
/// stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Like [`run`], reading interactive input from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ShoggothCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write_usage(err, &e);
                    exit_code::ERROR
                }
            };
        }
    };

    match dispatch(cli.cmd, input, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn write_usage(err: &mut dyn Write, e: &clap::Error) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "Shoggoth Poker CLI")?;
    writeln!(err, "Usage: shoggoth <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: shoggoth --help")
}

fn dispatch(
    cmd: Commands,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    match cmd {
        Commands::Cfg => handle_cfg_command(&resolved, out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Discard {
            cards,
            seed,
            simulations,
        } => handle_discard_command(&cards, seed, simulations, &resolved.config, out),
        Commands::Play {
            rounds,
            ante,
            seed,
            state,
            history,
            ai,
        } => {
            let opts =
                PlayOptions::resolve(rounds, ante, seed, state, history, ai, &resolved.config);
            handle_play_command(&opts, &resolved.config, out, err, input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_with_input(
            ["shoggoth", "--help"],
            &mut std::io::empty(),
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::SUCCESS);
        assert!(String::from_utf8(out).unwrap().contains("Usage"));
    }

    #[test]
    fn test_unknown_command_prints_usage() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_with_input(
            ["shoggoth", "summon"],
            &mut std::io::empty(),
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::ERROR);
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("Commands:"));
        assert!(err.contains("discard"));
    }

    #[test]
    fn test_cli_parses_play_flags() {
        let cli = ShoggothCli::try_parse_from([
            "shoggoth", "play", "--rounds", "3", "--ante", "5", "--seed", "9", "--ai", "timid",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Play {
                rounds,
                ante,
                seed,
                ai,
                ..
            } => {
                assert_eq!(rounds, 3);
                assert_eq!(ante, Some(5));
                assert_eq!(seed, Some(9));
                assert_eq!(ai.as_deref(), Some("timid"));
            }
            other => panic!("expected play, got {:?}", other),
        }
    }
}
