//! # Uno CLI Library
//!
//! Command-line front end for the `uno-engine` rules engine: interactive
//! play against computer opponents, batch simulation with JSONL game
//! records, and summaries over those records.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments, dispatches to a subcommand and returns the
//! process exit code.
//!
//! ```
//! use std::io;
//! let args = vec!["uno", "deal", "--players", "3", "--seed", "42"];
//! let code = uno_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play against computer opponents on stdin/stdout
//! - `sim`: Run computer-only games and record them
//! - `deal`: Deal a game for inspection
//! - `stats`: Aggregate recorded games
//! - `cfg`: Show the resolved configuration

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

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

use cli::{COMMANDS, Commands, UnoCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
    handle_stats_command,
};
pub use commands::{SimGame, run_game};
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Available Commands
///
/// - `play [--players N] [--seed S] [--ai KIND]`
/// - `sim --games N [--players N] [--seed S] [--ai KIND] [--max-turns T] [--output FILE]`
/// - `deal [--players N] [--seed S]`
/// - `stats --input PATH`
/// - `cfg`
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match UnoCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Uno CLI");
                    write_or_exit!(err, "Usage: uno <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: uno --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Play { players, seed, ai } => {
            let Some(cfg) = resolved_config(err) else {
                return exit_code::ERROR;
            };
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(
                players.unwrap_or(cfg.players),
                seed.or(cfg.seed),
                ai.as_deref().unwrap_or(&cfg.ai),
                out,
                err,
                &mut stdin_lock,
            )
        }
        Commands::Sim {
            games,
            players,
            seed,
            ai,
            max_turns,
            output,
        } => {
            let Some(cfg) = resolved_config(err) else {
                return exit_code::ERROR;
            };
            handle_sim_command(
                games,
                players.unwrap_or(cfg.players),
                seed.or(cfg.seed),
                ai.as_deref().unwrap_or(&cfg.ai),
                max_turns.unwrap_or(cfg.max_turns),
                output,
                out,
                err,
            )
        }
        Commands::Deal { players, seed } => {
            let Some(cfg) = resolved_config(err) else {
                return exit_code::ERROR;
            };
            handle_deal_command(players.unwrap_or(cfg.players), seed.or(cfg.seed), out)
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

/// Loads file and environment configuration; flags are layered on top by
/// the caller and the handlers validate the merged values.
fn resolved_config(err: &mut dyn Write) -> Option<config::Config> {
    match config::load_layers() {
        Ok(resolved) => Some(resolved.config),
        Err(e) => {
            let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
            None
        }
    }
}
