//! Deal command: set up a game and show it without playing.

use crate::commands::{check_table, seat_names};
use crate::error::CliError;
use crate::formatters::{format_card, format_hand};
use std::io::Write;
use uno_engine::engine::initialize_game_with_seed;

/// Deals a game for `players` seats and prints each hand, the top card, the
/// active color and who acts first. The same seed always prints the same deal.
pub fn handle_deal_command(
    players: usize,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    check_table(players, None)?;
    let seed = seed.unwrap_or_else(rand::random);
    let state = initialize_game_with_seed(&seat_names(players, false), seed)?;

    writeln!(out, "Seed: {}", seed)?;
    for p in &state.players {
        writeln!(out, "{} ({}): {}", p.name, p.hand_size(), format_hand(&p.hand))?;
    }
    if let Some(top) = state.top_card() {
        writeln!(out, "Top: {}", format_card(top))?;
    }
    writeln!(out, "Color: {}", state.current_color)?;
    writeln!(
        out,
        "Next: {} ({})",
        state.current_player().name,
        state.action_required
    )?;
    writeln!(out, "Deck: {}", state.deck.len())?;
    Ok(())
}
