//! Simulation command: computer-only games, optionally recorded as JSONL.
//!
//! Game `i` is dealt with seed `base + i`, so a run is reproducible from its
//! base seed. Each game stops after `max_turns` accepted actions; a stopped
//! game is recorded without a winner.
//!
//! # Environment Variables
//!
//! - `UNO_SIM_BREAK_AFTER`: stop after N games and exit as interrupted (for testing)

use crate::commands::{check_table, seat_names};
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use std::io::Write;
use uno_ai::{AIOpponent, create_ai};
use uno_engine::engine::{apply_action, initialize_game_with_seed};
use uno_engine::errors::GameError;
use uno_engine::game::GameState;
use uno_engine::logger::{ActionRecord, GameLogger, GameRecord};
use uno_engine::player::PlayerAction;

/// Outcome of one simulated game.
#[derive(Debug, Clone)]
pub struct SimGame {
    pub seed: u64,
    pub final_state: GameState,
    pub actions: Vec<ActionRecord>,
}

impl SimGame {
    pub fn turns(&self) -> u32 {
        self.actions.len() as u32
    }

    pub fn winner(&self) -> Option<usize> {
        self.final_state.winner()
    }
}

/// Plays one game with `ai` in every seat.
///
/// # Errors
///
/// Setup failures, or an opponent submitting an action the engine rejects.
pub fn run_game(
    ai: &dyn AIOpponent,
    names: &[String],
    seed: u64,
    max_turns: u32,
) -> Result<SimGame, GameError> {
    let mut state = initialize_game_with_seed(names, seed)?;
    let mut actions = Vec::new();

    while !state.is_over() && actions.len() < max_turns as usize {
        let seat = state.current_player_index;
        let action = ai.get_action(&state, seat);
        let next = apply_action(&state, seat, action)?;
        let card = match action {
            PlayerAction::Play { hand_index } => state.players[seat].hand.get(hand_index).copied(),
            PlayerAction::Draw if next.players[seat].hand.len() > state.players[seat].hand.len() => {
                next.players[seat].hand.last().copied()
            }
            _ => None,
        };
        actions.push(ActionRecord {
            player_index: seat,
            action,
            card,
        });
        state = next;
    }

    Ok(SimGame {
        seed,
        final_state: state,
        actions,
    })
}

/// Handle the sim command.
///
/// Prints a summary (games, wins per seat, unfinished games, average turns).
/// With `output`, appends one [`GameRecord`] per game to that file.
#[allow(clippy::too_many_arguments)]
pub fn handle_sim_command(
    games: u64,
    players: usize,
    seed: Option<u64>,
    ai_kind: &str,
    max_turns: u32,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    if max_turns == 0 {
        ui::write_error(err, "max_turns must be >= 1")?;
        return Err(CliError::InvalidInput("max_turns must be >= 1".to_string()));
    }
    if let Err(e) = check_table(players, Some(ai_kind)) {
        ui::write_error(err, &e.to_string())?;
        return Err(e);
    }
    let ai = create_ai(ai_kind).map_err(CliError::InvalidInput)?;

    let mut logger = match output.as_deref() {
        Some(p) => {
            let path = std::path::Path::new(p);
            if let Err(e) = ensure_parent_dir(path) {
                ui::write_error(err, &e)?;
                return Err(CliError::Io(std::io::Error::other(e)));
            }
            match GameLogger::create(path) {
                Ok(l) => Some(l),
                Err(e) => {
                    ui::write_error(err, &format!("Failed to open {}: {}", p, e))?;
                    return Err(CliError::Io(e));
                }
            }
        }
        None => None,
    };

    let break_after = std::env::var("UNO_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u64>().ok());

    let base_seed = seed.unwrap_or_else(rand::random);
    let names = seat_names(players, false);
    let mut wins = vec![0u64; players];
    let mut unfinished = 0u64;
    let mut total_turns = 0u64;
    let mut completed = 0u64;

    for i in 0..games {
        let game_seed = base_seed.wrapping_add(i);
        let game = run_game(ai.as_ref(), &names, game_seed, max_turns)?;
        total_turns += u64::from(game.turns());
        let result = match game.winner() {
            Some(w) => {
                wins[w] += 1;
                format!("{} wins", names[w])
            }
            None => {
                unfinished += 1;
                format!("stopped after {} turns", game.turns())
            }
        };

        if let Some(l) = logger.as_mut() {
            let record = GameRecord {
                game_id: l.next_id(),
                seed: Some(game.seed),
                players: names.clone(),
                winner: game.winner(),
                turns: game.turns(),
                actions: game.actions,
                result: Some(result),
                ts: None,
                meta: Some(serde_json::json!({ "ai": ai_kind, "max_turns": max_turns })),
            };
            l.write(&record)?;
        }

        completed += 1;
        if let Some(b) = break_after
            && completed == b
            && completed < games
        {
            writeln!(out, "Interrupted: saved {}/{}", completed, games)?;
            return Err(CliError::Interrupted(format!(
                "Interrupted: saved {}/{}",
                completed, games
            )));
        }
    }

    writeln!(out, "Simulated: {} games (base seed {})", completed, base_seed)?;
    for (seat, w) in wins.iter().enumerate() {
        writeln!(out, "  {}: {} wins", names[seat], w)?;
    }
    if unfinished > 0 {
        writeln!(out, "  unfinished: {}", unfinished)?;
    }
    writeln!(
        out,
        "Average turns: {:.1}",
        total_turns as f64 / completed as f64
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(games: u64, seed: u64, output: Option<String>) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let r = handle_sim_command(games, 3, Some(seed), "baseline", 1_000, output, &mut out, &mut err);
        (r, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_sim_command_basic_execution() {
        let (result, out, _) = sim(2, 42, None);
        assert!(result.is_ok());
        assert!(out.contains("Simulated: 2 games (base seed 42)"));
        assert!(out.contains("Bot 1: "));
        assert!(out.contains("Average turns: "));
    }

    #[test]
    fn test_sim_command_is_deterministic() {
        let (_, a, _) = sim(3, 9, None);
        let (_, b, _) = sim(3, 9, None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sim_command_zero_games() {
        let (result, _, err) = sim(0, 42, None);
        assert!(result.is_err());
        assert!(err.contains("games must be >= 1"));
    }

    #[test]
    fn test_sim_writes_one_record_per_game() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("games.jsonl");
        let (result, _, _) = sim(4, 1, Some(path.to_string_lossy().into_owned()));
        assert!(result.is_ok());

        let content = std::fs::read_to_string(&path).unwrap();
        let records: Vec<GameRecord> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 4);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.seed, Some(1 + i as u64));
            assert_eq!(r.turns as usize, r.actions.len());
            assert_eq!(r.players.len(), 3);
            assert!(r.ts.is_some());
            assert!(r.game_id.ends_with(&format!("-{:06}", i + 1)));
        }
    }

    #[test]
    fn test_turn_cap_leaves_games_unfinished() {
        let ai = create_ai("baseline").unwrap();
        let names = seat_names(4, false);
        let game = run_game(ai.as_ref(), &names, 3, 1).unwrap();
        assert_eq!(game.turns(), 1);
        assert_eq!(game.winner(), None);
        game.final_state.check_integrity().unwrap();
    }

    #[test]
    fn test_recorded_actions_replay_to_the_same_state() {
        let ai = create_ai("advisor").unwrap();
        let names = seat_names(3, false);
        let game = run_game(ai.as_ref(), &names, 17, 500).unwrap();

        let mut state = initialize_game_with_seed(&names, 17).unwrap();
        for rec in &game.actions {
            state = apply_action(&state, rec.player_index, rec.action).unwrap();
        }
        assert_eq!(state, game.final_state);
    }
}
