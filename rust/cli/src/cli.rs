//! Command-line argument definitions.
//!
//! Flags left unset fall back to the resolved configuration (see
//! [`crate::config`]), so the precedence is flag, then environment, then
//! config file, then default.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "uno", version, about = "Uno rules engine command-line interface")]
pub struct UnoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play against computer opponents from the terminal (you are seat 0)
    Play {
        /// Number of seats, including yours
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Opponent kind: baseline or advisor
        #[arg(long)]
        ai: Option<String>,
    },
    /// Run computer-only games and optionally record them as JSONL
    Sim {
        #[arg(long)]
        games: u64,
        #[arg(long)]
        players: Option<usize>,
        /// Base seed; game i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        ai: Option<String>,
        /// Stop a game after this many accepted actions
        #[arg(long)]
        max_turns: Option<u32>,
        #[arg(long)]
        output: Option<String>,
    },
    /// Deal a game and show the hands, top card and active color
    Deal {
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Summarize recorded games (JSONL, .jsonl.zst, or a directory of them)
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

pub const COMMANDS: &[&str] = &["play", "sim", "deal", "stats", "cfg"];
