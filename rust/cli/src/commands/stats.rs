//! Statistics over recorded games.
//!
//! Reads JSONL game records (plain or `.jsonl.zst`, a single file or a
//! directory tree of them) and reports how many games finished, wins per
//! seat and the average number of turns.

use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::ui;
use std::io::Write;
use std::path::{Path, PathBuf};
use uno_engine::logger::GameRecord;

#[derive(Default)]
struct StatsState {
    games: u64,
    finished: u64,
    turns: u64,
    wins_by_seat: Vec<u64>,
    skipped: u64,
    corrupted: u64,
    stats_ok: bool,
}

impl StatsState {
    fn consume(&mut self, content: &str, err: &mut dyn Write) -> Result<(), CliError> {
        let has_trailing_nl = content.ends_with('\n');
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        for (i, line) in lines.iter().enumerate() {
            let rec: GameRecord = match serde_json::from_str(line) {
                Ok(v) => v,
                Err(_) => {
                    if i == lines.len() - 1 && !has_trailing_nl {
                        self.skipped += 1;
                    } else {
                        self.corrupted += 1;
                    }
                    continue;
                }
            };

            if let Some(w) = rec.winner
                && w >= rec.players.len()
            {
                self.stats_ok = false;
                ui::write_error(
                    err,
                    &format!("Winner seat {} out of range at game {}", w, rec.game_id),
                )?;
                continue;
            }

            self.games += 1;
            self.turns += u64::from(rec.turns);
            if self.wins_by_seat.len() < rec.players.len() {
                self.wins_by_seat.resize(rec.players.len(), 0);
            }
            if let Some(w) = rec.winner {
                self.finished += 1;
                self.wins_by_seat[w] += 1;
            }
        }
        Ok(())
    }
}

/// Depth-first, in path order: a subdirectory is read where it sorts among
/// its siblings. Unreadable directories are skipped.
fn collect_record_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };
    let mut entries: Vec<PathBuf> = rd.filter_map(Result::ok).map(|e| e.path()).collect();
    entries.sort();
    for p in entries {
        if p.is_dir() {
            collect_record_files(&p, files);
        } else if let Some(fname) = p.file_name().and_then(|f| f.to_str())
            && (fname.ends_with(".jsonl") || fname.ends_with(".jsonl.zst"))
        {
            files.push(p);
        }
    }
}

/// Aggregates statistics from JSONL game records.
///
/// # Errors
///
/// Fails when the input cannot be read, when a single file holds nothing
/// but broken records, or when a record names an impossible winner.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(&input);
    let mut state = StatsState {
        stats_ok: true,
        ..StatsState::default()
    };

    if path.is_dir() {
        let mut files = Vec::new();
        collect_record_files(path, &mut files);
        for p in files {
            match read_text_auto(&p.to_string_lossy()) {
                Ok(content) => state.consume(&content, err)?,
                Err(_) => state.corrupted += 1,
            }
        }
    } else {
        match read_text_auto(&input) {
            Ok(s) => state.consume(&s, err)?,
            Err(e) => {
                ui::write_error(err, &format!("Failed to read {}: {}", input, e))?;
                return Err(CliError::InvalidInput(format!(
                    "Failed to read {}: {}",
                    input, e
                )));
            }
        }
    }

    if state.corrupted > 0 {
        ui::write_error(
            err,
            &format!("Skipped {} corrupted record(s)", state.corrupted),
        )?;
    }
    if state.skipped > 0 {
        ui::display_warning(
            err,
            &format!("Discarded {} incomplete final line(s)", state.skipped),
        )?;
    }
    if !path.is_dir() && state.games == 0 && (state.corrupted > 0 || state.skipped > 0) {
        ui::write_error(err, "Invalid record")?;
        return Err(CliError::InvalidInput("Invalid record".to_string()));
    }

    let average_turns = if state.games == 0 {
        0.0
    } else {
        state.turns as f64 / state.games as f64
    };
    let summary = serde_json::json!({
        "games": state.games,
        "finished": state.finished,
        "unfinished": state.games - state.finished,
        "wins_by_seat": state.wins_by_seat,
        "average_turns": average_turns,
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    if state.stats_ok {
        Ok(())
    } else {
        Err(CliError::InvalidInput(
            "Statistics validation failed".to_string(),
        ))
    }
}
