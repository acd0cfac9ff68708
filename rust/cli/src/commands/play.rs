//! # Play Command
//!
//! Interactive Uno against computer opponents. The human sits at seat 0 and
//! types commands on stdin; every other seat is driven by an [`AIOpponent`].
//!
//! The table enforces one house rule on top of the engine: a human may only
//! draw while holding no playable card. The engine itself allows drawing at
//! any time, and opponents never draw with a playable card anyway.

use crate::commands::{HUMAN_SEAT, check_table, seat_names};
use crate::error::CliError;
use crate::formatters::{format_action, format_card, format_hand, format_table};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use std::io::{BufRead, Write};
use uno_ai::advisor::AdvisorAI;
use uno_ai::{AIOpponent, create_ai};
use uno_engine::engine::{apply_action, initialize_game_with_seed};
use uno_engine::game::{ActionRequired, GameState};
use uno_engine::player::PlayerAction;
use uno_engine::rules::playable_indices;

/// Handle the play command: one interactive game.
///
/// Quitting (`q` or end of input) abandons the game and still returns `Ok`.
///
/// # Errors
///
/// `CliError::InvalidInput` for an unsupported table size or opponent kind,
/// `CliError::Engine` if the game cannot be set up, `CliError::Io` on
/// stream failures.
pub fn handle_play_command(
    players: usize,
    seed: Option<u64>,
    ai_kind: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if let Err(e) = check_table(players, Some(ai_kind)) {
        ui::write_error(err, &e.to_string())?;
        return Err(e);
    }
    let ai = create_ai(ai_kind).map_err(CliError::InvalidInput)?;
    let seed = seed.unwrap_or_else(rand::random);

    writeln!(out, "play: players={} ai={} seed={}", players, ai_kind, seed)?;
    let names = seat_names(players, true);
    let mut state = match initialize_game_with_seed(&names, seed) {
        Ok(s) => s,
        Err(e) => {
            ui::write_error(err, &format!("Failed to start game: {}", e))?;
            return Err(e.into());
        }
    };
    writeln!(out, "Starting card: {}", top_label(&state))?;

    let advisor = AdvisorAI::new();
    let mut turns = 0u32;

    while !state.is_over() {
        let me = state.current_player_index;
        if me != HUMAN_SEAT {
            state = opponent_turn(ai.as_ref(), &state, me, out)?;
            turns += 1;
            continue;
        }

        writeln!(out, "{}", format_table(&state, HUMAN_SEAT))?;
        writeln!(out, "Your hand: {}", format_hand(&state.players[HUMAN_SEAT].hand))?;
        match state.action_required {
            ActionRequired::ChooseColor => write!(out, "Choose a color (color red/green/blue/yellow, q): ")?,
            _ => write!(out, "Your move (play <n>, draw, hint, q): ")?,
        }
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            writeln!(out, "Game abandoned after {} turns.", turns)?;
            return Ok(());
        };
        match parse_player_action(&line) {
            ParseResult::Action(action) => {
                if let Some(reason) = refuse_draw(&state, action) {
                    ui::write_error(err, reason)?;
                    continue;
                }
                match apply_action(&state, HUMAN_SEAT, action) {
                    Ok(next) => {
                        writeln!(out, "You: {}", describe(&state, &next, HUMAN_SEAT, action))?;
                        state = next;
                        turns += 1;
                    }
                    Err(e) => ui::write_error(err, &format!("Invalid action: {}", e))?,
                }
            }
            ParseResult::Hint => match advisor.advise(&state, HUMAN_SEAT) {
                Some(s) => match s.hand_index {
                    Some(i) => writeln!(out, "Hint: play {} ({})", i, s.reason)?,
                    None => writeln!(out, "Hint: draw ({})", s.reason)?,
                },
                None => writeln!(out, "Hint: nothing to suggest")?,
            },
            ParseResult::Quit => {
                writeln!(out, "Game abandoned after {} turns.", turns)?;
                return Ok(());
            }
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    if let Some(w) = state.winner() {
        if w == HUMAN_SEAT {
            writeln!(out, "You win after {} turns!", turns)?;
        } else {
            writeln!(out, "{} wins after {} turns.", state.players[w].name, turns)?;
        }
    }
    Ok(())
}

fn opponent_turn(
    ai: &dyn AIOpponent,
    state: &GameState,
    seat: usize,
    out: &mut dyn Write,
) -> Result<GameState, CliError> {
    let action = ai.get_action(state, seat);
    let next = apply_action(state, seat, action)?;
    writeln!(
        out,
        "{}: {}",
        state.players[seat].name,
        describe(state, &next, seat, action)
    )?;
    if next.players[seat].has_uno() && !next.is_over() {
        writeln!(out, "{}: UNO!", state.players[seat].name)?;
    }
    Ok(next)
}

/// House rule for the human seat: no drawing while a card can be played.
fn refuse_draw(state: &GameState, action: PlayerAction) -> Option<&'static str> {
    if action != PlayerAction::Draw || state.action_required != ActionRequired::Play {
        return None;
    }
    let top = state.top_card()?;
    let playable = playable_indices(&state.players[HUMAN_SEAT].hand, top, state.current_color);
    if playable.is_empty() {
        None
    } else {
        Some("You have a playable card; play it instead of drawing (try 'hint')")
    }
}

/// What an accepted action did, for the transcript.
fn describe(before: &GameState, after: &GameState, seat: usize, action: PlayerAction) -> String {
    match action {
        PlayerAction::Play { hand_index } => match before.players[seat].hand.get(hand_index) {
            Some(card) => format!("plays {}", format_card(card)),
            None => format_action(&action),
        },
        PlayerAction::Draw => {
            let drew = after.players[seat].hand.len() > before.players[seat].hand.len();
            match (drew, after.players[seat].hand.last()) {
                (true, Some(card)) if seat == HUMAN_SEAT => format!("draws {}", format_card(card)),
                (true, _) => "draws a card".to_string(),
                (false, _) => "cannot draw, passes".to_string(),
            }
        }
        PlayerAction::ChooseColor(color) => format!("chooses {}", color),
    }
}

fn top_label(state: &GameState) -> String {
    state
        .top_card()
        .map(format_card)
        .unwrap_or_else(|| "-".to_string())
}
