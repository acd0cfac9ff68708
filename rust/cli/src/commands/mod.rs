//! Command handler modules for the `uno` CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, so tests can capture them
//! - Errors propagated as `CliError`; [`crate::run`] turns them into exit codes

mod cfg;
mod deal;
mod play;
mod sim;
mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::{handle_sim_command, run_game, SimGame};
pub use stats::handle_stats_command;

use crate::config::{validate_ai, validate_players};
use crate::error::CliError;

/// Seat the human takes in `play`.
pub const HUMAN_SEAT: usize = 0;

/// Display names for `n` seats. With a human at the table seat 0 is "You".
pub fn seat_names(n: usize, with_human: bool) -> Vec<String> {
    (0..n)
        .map(|i| {
            if with_human && i == HUMAN_SEAT {
                "You".to_string()
            } else {
                format!("Bot {}", i + 1)
            }
        })
        .collect()
}

fn check_table(players: usize, ai: Option<&str>) -> Result<(), CliError> {
    validate_players(players).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    if let Some(kind) = ai {
        validate_ai(kind).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    }
    Ok(())
}
